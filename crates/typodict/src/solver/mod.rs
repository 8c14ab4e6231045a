//! The iterative fixed-point solver (spec.md §4.6).

pub mod candidate_selection;
pub mod conflict_removal;
pub mod pattern_generalization;
pub mod platform_conflict;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::{Result, TypodictError};
use crate::index::BoundaryIndex;
use crate::platform::Platform;
use crate::state::DictionaryState;

fn build_corpus_words(dictionary: &Dictionary) -> Vec<String> {
    dictionary
        .filtered_validation_set
        .iter()
        .chain(dictionary.source_words.iter())
        .cloned()
        .collect()
}

/// Runs passes §4.2 → §4.3 → §4.4 → §4.5 in order, once per iteration,
/// until convergence or `config.max_iterations`. Returns the converged
/// state, or `ConvergenceFailure` if the cap is hit first.
///
/// `cancel` is polled at each iteration boundary, never mid-pass; if set,
/// `run` returns the snapshot it began the interrupted iteration from.
pub fn run(
    mut state: DictionaryState,
    dictionary: &Dictionary,
    platform: &dyn Platform,
    config: &Config,
    cancel: &AtomicBool,
) -> Result<DictionaryState> {
    let corpus_words = build_corpus_words(dictionary);
    let corpus_index = BoundaryIndex::build(corpus_words.iter().map(String::as_str).collect::<Vec<_>>());

    let validation_words = dictionary.filtered_validation_set.clone();
    let validation_index = BoundaryIndex::build(
        dictionary
            .filtered_validation_set
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>(),
    );
    let source_index = BoundaryIndex::build(
        dictionary
            .source_words
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>(),
    );

    let mut previous_fingerprint = state.progress_fingerprint();

    for iteration in 1..=config.max_iterations {
        if cancel.load(Ordering::Relaxed) {
            return Ok(state);
        }

        state.current_iteration = iteration;
        state.clear_dirty();

        candidate_selection::run(&mut state, dictionary, &corpus_index, config);
        state.check_invariants();

        pattern_generalization::run(
            &mut state,
            &validation_words,
            &validation_index,
            &source_index,
            config.min_typo_length,
        );
        state.check_invariants();

        conflict_removal::run(&mut state, platform.match_direction());
        state.check_invariants();

        platform_conflict::run(&mut state, platform);
        state.check_invariants();

        let fingerprint = state.progress_fingerprint();
        if fingerprint == previous_fingerprint {
            return Ok(state);
        }
        previous_fingerprint = fingerprint;
    }

    Err(TypodictError::ConvergenceFailure {
        iterations: config.max_iterations,
    })
}
