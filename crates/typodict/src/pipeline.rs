//! End-to-end orchestration of the seven stages of spec.md §2, the
//! analog of a linter's `check`/`fix` entry points: load, generate,
//! solve, rank, emit.

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::platform::espanso::EspansoPlatform;
use crate::platform::qmk::QmkPlatform;
use crate::platform::{Platform, PlatformKind};
use crate::report;
use crate::state::DictionaryState;
use crate::typos;

/// Counts surfaced back to the CLI once a build finishes, for the
/// "Found N corrections" style summary spec.md §6 asks of a successful
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub corrections: usize,
    pub patterns: usize,
    pub graveyard: usize,
    pub emitted: usize,
}

fn build_platform(config: &Config) -> Box<dyn Platform> {
    match config.platform {
        PlatformKind::Espanso => Box::new(EspansoPlatform::new(config.max_corrections, config.max_entries_per_file)),
        PlatformKind::Qmk => Box::new(QmkPlatform::new(config.max_corrections)),
    }
}

/// Runs dictionary loading through emission. `cancel` is forwarded to
/// `solver::run`; a flag raised mid-solve yields a result built from
/// whatever the solver had converged to at its last iteration boundary
/// rather than an error.
pub fn run(config: &Config, cancel: &AtomicBool) -> Result<Summary> {
    let dictionary = Dictionary::load(config)?;

    let raw_typo_map = typos::build_raw_typo_map(&dictionary.source_words, Some(&dictionary.adjacency_map));
    let state = DictionaryState::new(raw_typo_map);

    let platform = build_platform(config);
    let state = crate::solver::run(state, &dictionary, platform.as_ref(), config, cancel)?;

    let active: Vec<_> = state.active_corrections.iter().cloned().collect();
    let patterns: Vec<_> = state.active_patterns.iter().cloned().collect();
    let user_words: HashSet<String> = dictionary.user_words.iter().cloned().collect();

    let ranked = platform.rank(
        &active,
        &patterns,
        &state.pattern_replacements,
        &dictionary.word_freq,
        &user_words,
    );

    platform.emit(&ranked, &config.output)?;

    if let Some(dir) = &config.debug_report {
        report::write(&state, dir)?;
    }

    tracing::info!(
        corrections = state.active_corrections.len(),
        patterns = state.active_patterns.len(),
        graveyard = state.graveyard.len(),
        emitted = ranked.len(),
        "build finished"
    );

    Ok(Summary {
        corrections: state.active_corrections.len(),
        patterns: state.active_patterns.len(),
        graveyard: state.graveyard.len(),
        emitted: ranked.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildArgs;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::atomic::Ordering;
    use tempfile::TempDir;

    fn write_lines(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs_create(&path);
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        path
    }

    fn fs_create(path: &std::path::Path) -> std::fs::File {
        std::fs::File::create(path).unwrap()
    }

    #[test]
    fn builds_an_espanso_dictionary_end_to_end() {
        let dir = TempDir::new().unwrap();
        let freq_path = write_lines(&dir, "freq.txt", &["the -> 100", "name -> 50"]);
        let validation_path = write_lines(&dir, "validation.txt", &["the", "name"]);
        let output = dir.path().join("dist");

        let config = BuildArgs {
            top_n: Some(10),
            word_freq: Some(freq_path),
            validation: Some(validation_path),
            output: output.clone(),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        let cancel = AtomicBool::new(false);
        let summary = run(&config, &cancel).unwrap();

        assert!(summary.corrections > 0);
        assert!(output.join("typos_h.yml").exists() || output.join("typos_t.yml").exists());
    }

    #[test]
    fn an_already_raised_cancel_flag_still_produces_output() {
        let dir = TempDir::new().unwrap();
        let freq_path = write_lines(&dir, "freq.txt", &["the -> 100"]);
        let output = dir.path().join("dist");

        let config = BuildArgs {
            top_n: Some(10),
            word_freq: Some(freq_path),
            output: output.clone(),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        let cancel = AtomicBool::new(true);
        cancel.store(true, Ordering::Relaxed);
        let summary = run(&config, &cancel).unwrap();

        assert_eq!(summary.corrections, 0);
    }
}
