//! Pass §4.2: candidate selection.

use crate::boundary::Boundary;
use crate::config::Config;
use crate::correction::{Correction, RejectionReason};
use crate::dictionary::Dictionary;
use crate::index::BoundaryIndex;
use crate::state::DictionaryState;

const PREFIX_ORDER: [Boundary; 3] = [Boundary::None, Boundary::Left, Boundary::Both];
const SUFFIX_ORDER: [Boundary; 3] = [Boundary::None, Boundary::Right, Boundary::Both];
const MIDDLE_ORDER: [Boundary; 2] = [Boundary::None, Boundary::Both];
const OTHER_ORDER: [Boundary; 4] = [Boundary::None, Boundary::Left, Boundary::Right, Boundary::Both];

fn boundary_order(typo: &str, word: &str) -> &'static [Boundary] {
    let contains = word != typo && word.contains(typo);
    let is_prefix = contains && word.starts_with(typo);
    let is_suffix = contains && word.ends_with(typo);
    if is_prefix {
        &PREFIX_ORDER
    } else if is_suffix {
        &SUFFIX_ORDER
    } else if contains {
        &MIDDLE_ORDER
    } else {
        &OTHER_ORDER
    }
}

/// `Some(blocker)` if `(typo, boundary)` would rewrite some other
/// validation/source word, or the target word itself, incorrectly.
fn false_trigger_blocker(
    typo: &str,
    word: &str,
    boundary: Boundary,
    corpus_index: &BoundaryIndex,
) -> Option<String> {
    let self_prefix = word != typo && word.starts_with(typo);
    let self_suffix = word != typo && word.ends_with(typo);
    match boundary {
        Boundary::None => {
            if corpus_index.is_substring_of_other(typo) {
                Some(format!("substring of another corpus word (typo={typo})"))
            } else if self_prefix || self_suffix {
                Some(word.to_string())
            } else {
                None
            }
        }
        Boundary::Left => {
            if corpus_index.is_prefix_of_other(typo) || self_prefix {
                Some(format!("prefix conflict (typo={typo})"))
            } else {
                None
            }
        }
        Boundary::Right => {
            if corpus_index.is_suffix_of_other(typo) || self_suffix {
                Some(format!("suffix conflict (typo={typo})"))
            } else {
                None
            }
        }
        Boundary::Both => None,
    }
}

fn freq_of(dictionary: &Dictionary, word: &str) -> f64 {
    dictionary.word_freq.get(word).copied().unwrap_or(0.0)
}

/// Runs one full candidate-selection sweep over `state.raw_typo_map`.
/// `corpus_index` must be built over `filtered_validation_set ∪
/// source_words` (spec.md §4.2's "validation or source word").
pub fn run(
    state: &mut DictionaryState,
    dictionary: &Dictionary,
    corpus_index: &BoundaryIndex,
    config: &Config,
) {
    let active_typos: std::collections::HashSet<String> = state
        .active_corrections
        .iter()
        .map(|c| c.typo.clone())
        .collect();

    let typos: Vec<String> = state.raw_typo_map.keys().cloned().collect();

    for typo in typos {
        if active_typos.contains(&typo) {
            continue;
        }

        if config.typo_freq_threshold > 0.0 {
            if let Some(&freq) = dictionary.word_freq.get(&typo) {
                if freq > config.typo_freq_threshold {
                    continue;
                }
            }
        }

        let words = state.raw_typo_map[&typo].clone();
        if words.is_empty() {
            continue;
        }

        let mut ranked: Vec<String> = words.into_iter().collect();
        ranked.sort_by(|a, b| {
            freq_of(dictionary, b)
                .partial_cmp(&freq_of(dictionary, a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let chosen_word = ranked[0].clone();

        if ranked.len() > 1 {
            let f1 = freq_of(dictionary, &chosen_word);
            let f2 = freq_of(dictionary, &ranked[1]);
            let accepted_collision = f2 == 0.0 || f1 / f2 > config.freq_ratio;
            if !accepted_collision {
                let triple = Correction::new(typo.clone(), chosen_word.clone(), Boundary::None);
                if !state.is_graveyarded(&triple) {
                    state.bury(triple, RejectionReason::CollisionAmbiguous, ranked[1].clone());
                }
                continue;
            }
        }

        if typo.len() < config.min_typo_length && chosen_word.len() > config.min_word_length {
            let triple = Correction::new(typo.clone(), chosen_word.clone(), Boundary::None);
            if !state.is_graveyarded(&triple) {
                state.bury(triple, RejectionReason::TooShort, chosen_word.clone());
            }
            continue;
        }

        let order = boundary_order(&typo, &chosen_word);
        let mut accepted: Option<Boundary> = None;
        for &boundary in order {
            let triple = Correction::new(typo.clone(), chosen_word.clone(), boundary);
            if state.is_graveyarded(&triple) {
                continue;
            }
            if dictionary
                .exclusion_matcher
                .should_exclude(&typo, &chosen_word, boundary)
            {
                state.bury(triple, RejectionReason::ExcludedByPattern, chosen_word.clone());
                continue;
            }
            if let Some(blocker) = false_trigger_blocker(&typo, &chosen_word, boundary, corpus_index) {
                state.bury(triple, RejectionReason::FalseTrigger, blocker);
                continue;
            }
            accepted = Some(boundary);
            break;
        }

        if let Some(mut boundary) = accepted {
            let elevated = chosen_word.chars().count() == 2 && dictionary.user_words.contains(&chosen_word);
            if elevated {
                boundary = Boundary::Both;
            }
            let correction = Correction::new(typo, chosen_word, boundary);
            state.promote_correction(correction.clone());
            if elevated {
                state.mark_elevated(correction);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildArgs;
    use indexmap::IndexSet;
    use std::path::PathBuf;

    fn test_config() -> Config {
        BuildArgs {
            top_n: Some(1),
            word_freq: Some(PathBuf::from("freq.txt")),
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    #[test]
    fn minimal_transposition_scenario_1() {
        let mut state = DictionaryState::default();
        state
            .raw_typo_map
            .insert("hte".to_string(), IndexSet::from(["the".to_string()]));
        state
            .raw_typo_map
            .insert("teh".to_string(), IndexSet::from(["the".to_string()]));

        let mut dictionary = Dictionary::default();
        dictionary.validation_set.insert("the".to_string());
        dictionary.filtered_validation_set.insert("the".to_string());

        let corpus = BoundaryIndex::build(vec!["the"]);
        let config = test_config();

        run(&mut state, &dictionary, &corpus, &config);

        assert!(state
            .active_corrections
            .contains(&Correction::new("hte", "the", Boundary::None)));
        assert!(state
            .active_corrections
            .contains(&Correction::new("teh", "the", Boundary::None)));
    }

    #[test]
    fn false_trigger_escalation_scenario_2() {
        let mut state = DictionaryState::default();
        state
            .raw_typo_map
            .insert("tain".to_string(), IndexSet::from(["train".to_string()]));

        let mut dictionary = Dictionary::default();
        for w in ["maintain", "containing", "train"] {
            dictionary.validation_set.insert(w.to_string());
            dictionary.filtered_validation_set.insert(w.to_string());
        }

        let corpus = BoundaryIndex::build(vec!["maintain", "containing", "train"]);
        let config = test_config();

        run(&mut state, &dictionary, &corpus, &config);

        assert!(state
            .active_corrections
            .contains(&Correction::new("tain", "train", Boundary::Left)));
        assert!(state.is_graveyarded(&Correction::new("tain", "train", Boundary::None)));
    }

    #[test]
    fn two_letter_user_word_elevates_to_both() {
        let mut state = DictionaryState::default();
        state
            .raw_typo_map
            .insert("od".to_string(), IndexSet::from(["of".to_string()]));

        let mut dictionary = Dictionary::default();
        dictionary.user_words.insert("of".to_string());

        let corpus = BoundaryIndex::build(vec!["of"]);
        let config = test_config();

        run(&mut state, &dictionary, &corpus, &config);

        let correction = Correction::new("od", "of", Boundary::Both);
        assert!(state.active_corrections.contains(&correction));
        assert!(state.elevated_user_corrections.contains(&correction));
    }
}
