//! Whole-pipeline fixtures for the concrete scenarios and universal
//! invariants of spec.md §8.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use indexmap::IndexSet;
use tempfile::TempDir;

use typodict::boundary::Boundary;
use typodict::config::BuildArgs;
use typodict::correction::Correction;
use typodict::dictionary::Dictionary;
use typodict::pipeline;
use typodict::platform::espanso::EspansoPlatform;
use typodict::platform::qmk::QmkPlatform;
use typodict::platform::Platform;
use typodict::state::DictionaryState;

fn write_lines(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn scenario_1_minimal_transposition_end_to_end() {
    let dir = TempDir::new().unwrap();
    let freq = write_lines(&dir, "freq.txt", &["the -> 100"]);
    let validation = write_lines(&dir, "validation.txt", &["the"]);
    let output = dir.path().join("dist");
    let reports = dir.path().join("reports");

    let config = BuildArgs {
        top_n: Some(10),
        word_freq: Some(freq),
        validation: Some(validation),
        output: output.clone(),
        debug_report: Some(reports.clone()),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let cancel = AtomicBool::new(false);
    let summary = pipeline::run(&config, &cancel).unwrap();
    assert_eq!(summary.patterns, 0);

    let corrections = read(&reports, "corrections.txt");
    assert!(corrections.contains("hte -> the"));
    assert!(corrections.contains("teh -> the"));
}

#[test]
fn scenario_2_false_trigger_escalation_end_to_end() {
    let dir = TempDir::new().unwrap();
    let freq = write_lines(&dir, "freq.txt", &["train -> 100"]);
    let validation = write_lines(&dir, "validation.txt", &["maintain", "containing", "train"]);
    let output = dir.path().join("dist");
    let reports = dir.path().join("reports");

    let config = BuildArgs {
        top_n: Some(10),
        word_freq: Some(freq),
        validation: Some(validation),
        min_word_length: 3,
        output: output.clone(),
        debug_report: Some(reports.clone()),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let cancel = AtomicBool::new(false);
    pipeline::run(&config, &cancel).unwrap();

    let corrections = read(&reports, "corrections.txt");
    assert!(corrections.contains("tain -> train"));

    let graveyard = read(&reports, "graveyard.txt");
    assert!(graveyard.contains("FALSE_TRIGGER"));
}

#[test]
fn scenario_5_platform_rtl_conflict_end_to_end() {
    let mut state = DictionaryState::default();
    state.promote_correction(Correction::new("abot", "about", Boundary::Left));
    state.promote_correction(Correction::new("abotu", "about", Boundary::Both));

    let platform = QmkPlatform::new(None);
    typodict::solver::platform_conflict::run(&mut state, &platform);
    typodict::solver::conflict_removal::run(&mut state, platform.match_direction());

    assert!(state
        .active_corrections
        .contains(&Correction::new("abot", "about", Boundary::Left)));
    assert!(state.is_graveyarded(&Correction::new("abotu", "about", Boundary::Both)));
}

#[test]
fn universal_invariant_no_duplicate_typo_word_pairs_across_boundaries() {
    let mut dictionary = Dictionary::default();
    for w in ["action", "actoin", "sectoin", "rejectoin", "section", "rejection", "about", "abotu"] {
        dictionary.source_words.insert(w.to_string());
        dictionary.validation_set.insert(w.to_string());
        dictionary.filtered_validation_set.insert(w.to_string());
    }
    let mut word_freq = HashMap::new();
    for w in ["action", "section", "rejection", "about"] {
        word_freq.insert(w.to_string(), 10.0);
    }
    dictionary.word_freq = word_freq;

    let mut raw_typo_map: HashMap<String, IndexSet<String>> = HashMap::new();
    raw_typo_map.insert("actoin".to_string(), IndexSet::from(["action".to_string()]));
    raw_typo_map.insert("sectoin".to_string(), IndexSet::from(["section".to_string()]));
    raw_typo_map.insert(
        "rejectoin".to_string(),
        IndexSet::from(["rejection".to_string()]),
    );

    let state = DictionaryState::new(raw_typo_map);
    let config = BuildArgs {
        top_n: Some(10),
        word_freq: Some(PathBuf::from("freq.txt")),
        min_typo_length: 4,
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let platform = EspansoPlatform::new(config.max_corrections, config.max_entries_per_file);
    let cancel = AtomicBool::new(false);
    let state = typodict::solver::run(state, &dictionary, &platform, &config, &cancel).unwrap();

    let mut seen_pairs = std::collections::HashSet::new();
    for correction in state.active_corrections.iter().chain(state.active_patterns.iter()) {
        assert!(
            seen_pairs.insert((correction.typo.clone(), correction.word.clone())),
            "duplicate (typo, word) pair across boundaries: {correction}"
        );
        assert!(!state.is_graveyarded(correction));
    }
    for pattern in &state.active_patterns {
        let occurrences = &state.pattern_replacements[pattern];
        assert!(!occurrences.is_empty());
        for occurrence in occurrences {
            assert!(!state.active_corrections.contains(occurrence));
        }
    }
}

#[test]
fn round_trip_idempotence_is_a_fixed_point() {
    let mut dictionary = Dictionary::default();
    for w in ["the", "name", "train"] {
        dictionary.source_words.insert(w.to_string());
        dictionary.validation_set.insert(w.to_string());
        dictionary.filtered_validation_set.insert(w.to_string());
    }

    let mut raw_typo_map: HashMap<String, IndexSet<String>> = HashMap::new();
    raw_typo_map.insert("hte".to_string(), IndexSet::from(["the".to_string()]));
    raw_typo_map.insert("teh".to_string(), IndexSet::from(["the".to_string()]));
    raw_typo_map.insert("nmae".to_string(), IndexSet::from(["name".to_string()]));

    let state = DictionaryState::new(raw_typo_map);
    let config = BuildArgs {
        top_n: Some(10),
        word_freq: Some(PathBuf::from("freq.txt")),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let platform = EspansoPlatform::new(config.max_corrections, config.max_entries_per_file);
    let cancel = AtomicBool::new(false);
    let converged = typodict::solver::run(state, &dictionary, &platform, &config, &cancel).unwrap();
    let fingerprint = converged.progress_fingerprint();

    let converged_again =
        typodict::solver::run(converged, &dictionary, &platform, &config, &cancel).unwrap();
    assert_eq!(converged_again.progress_fingerprint(), fingerprint);
}
