//! Pass §4.3: pattern generalization.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::boundary::{Boundary, PatternBoundary, PatternKind};
use crate::correction::{Correction, RejectionReason};
use crate::index::BoundaryIndex;
use crate::state::DictionaryState;

struct Candidate {
    typo_pattern: String,
    word_pattern: String,
    kind: PatternKind,
    occurrences: Vec<Correction>,
}

fn suffix_n(s: &str, n: usize) -> Option<String> {
    if s.len() <= n {
        return None;
    }
    Some(s[s.len() - n..].to_string())
}

fn prefix_n(s: &str, n: usize) -> Option<String> {
    if s.len() <= n {
        return None;
    }
    Some(s[..n].to_string())
}

fn rewrite(typo: &str, typo_pattern: &str, word_pattern: &str, kind: PatternKind) -> Option<String> {
    match kind {
        PatternKind::Suffix => {
            let cut = typo.len().checked_sub(typo_pattern.len())?;
            if &typo[cut..] != typo_pattern {
                return None;
            }
            Some(format!("{}{}", &typo[..cut], word_pattern))
        }
        PatternKind::Prefix => {
            if !typo.starts_with(typo_pattern) {
                return None;
            }
            Some(format!("{}{}", word_pattern, &typo[typo_pattern.len()..]))
        }
        PatternKind::Middle => None,
    }
}

fn push_candidate(
    candidates: &mut Vec<Candidate>,
    typo_pattern: String,
    word_pattern: String,
    kind: PatternKind,
    occurrences: Vec<Correction>,
) {
    let dedup: IndexSet<Correction> = occurrences.into_iter().collect();
    if dedup.len() >= 2 {
        candidates.push(Candidate {
            typo_pattern,
            word_pattern,
            kind,
            occurrences: dedup.into_iter().collect(),
        });
    }
}

/// Extraction (spec.md §4.3): group eligible active corrections by
/// shared `k`-length suffix/prefix fragments, for `k` in `2..=
/// min_typo_length`. Corrections elevated by the 2-letter user-word
/// override are excluded (SPEC_FULL §4.3's resolved open question).
fn extract(state: &DictionaryState, min_typo_length: usize) -> Vec<Candidate> {
    let mut suffix_groups: HashMap<(String, String), Vec<Correction>> = HashMap::new();
    let mut prefix_groups: HashMap<(String, String), Vec<Correction>> = HashMap::new();

    for k in 2..=min_typo_length.max(2) {
        for c in &state.active_corrections {
            if state.elevated_user_corrections.contains(c) {
                continue;
            }
            if matches!(c.boundary, Boundary::Right | Boundary::Both | Boundary::None) {
                if let (Some(ts), Some(ws)) = (suffix_n(&c.typo, k), suffix_n(&c.word, k)) {
                    suffix_groups.entry((ts, ws)).or_default().push(c.clone());
                }
            }
            if matches!(c.boundary, Boundary::Left | Boundary::Both | Boundary::None) {
                if let (Some(tp), Some(wp)) = (prefix_n(&c.typo, k), prefix_n(&c.word, k)) {
                    prefix_groups.entry((tp, wp)).or_default().push(c.clone());
                }
            }
        }
    }

    let mut candidates = Vec::new();
    for ((typo_pattern, word_pattern), occurrences) in suffix_groups {
        push_candidate(&mut candidates, typo_pattern, word_pattern, PatternKind::Suffix, occurrences);
    }
    for ((typo_pattern, word_pattern), occurrences) in prefix_groups {
        push_candidate(&mut candidates, typo_pattern, word_pattern, PatternKind::Prefix, occurrences);
    }
    candidates.sort_by_key(|c| c.typo_pattern.len());
    candidates
}

fn all_occurrences_reproduce(typo_pattern: &str, word_pattern: &str, kind: PatternKind, occurrences: &[Correction]) -> bool {
    occurrences
        .iter()
        .all(|occ| rewrite(&occ.typo, typo_pattern, word_pattern, kind).as_deref() == Some(occ.word.as_str()))
}

fn corrupts_source_word(typo_pattern: &str, kind: PatternKind, source_index: &BoundaryIndex) -> bool {
    match kind {
        PatternKind::Suffix => source_index.is_suffix_of_other(typo_pattern),
        PatternKind::Prefix => source_index.is_prefix_of_other(typo_pattern),
        PatternKind::Middle => false,
    }
}

fn conflicts_with_other_active(
    typo_pattern: &str,
    word_pattern: &str,
    kind: PatternKind,
    occurrences: &[Correction],
    active_corrections: &IndexSet<Correction>,
) -> Option<Correction> {
    let occurrence_set: std::collections::HashSet<&Correction> = occurrences.iter().collect();
    for c in active_corrections {
        if occurrence_set.contains(c) {
            continue;
        }
        if let Some(rewritten) = rewrite(&c.typo, typo_pattern, word_pattern, kind) {
            if rewritten != c.word {
                return Some(c.clone());
            }
        }
    }
    None
}

fn validation_conflict(
    typo_pattern: &str,
    boundary: PatternBoundary,
    validation_index: &BoundaryIndex,
) -> Option<String> {
    match Boundary::from(boundary) {
        Boundary::None => {
            if validation_index.is_substring_of_other(typo_pattern) {
                Some(format!("pattern {typo_pattern} is a substring of a validation word"))
            } else {
                None
            }
        }
        Boundary::Left => {
            if validation_index.is_prefix_of_other(typo_pattern) {
                Some(format!("pattern {typo_pattern} is a prefix of a validation word"))
            } else {
                None
            }
        }
        Boundary::Right => {
            if validation_index.is_suffix_of_other(typo_pattern) {
                Some(format!("pattern {typo_pattern} is a suffix of a validation word"))
            } else {
                None
            }
        }
        Boundary::Both => None,
    }
}

fn validate(
    candidate: &Candidate,
    min_typo_length: usize,
    validation_index: &BoundaryIndex,
    source_index: &BoundaryIndex,
    is_validation_word: bool,
    active_corrections: &IndexSet<Correction>,
) -> Result<PatternBoundary, (RejectionReason, String)> {
    if candidate.typo_pattern.len() < min_typo_length {
        return Err((
            RejectionReason::PatternValidationFailed,
            format!("pattern {} shorter than min_typo_length", candidate.typo_pattern),
        ));
    }
    if !all_occurrences_reproduce(&candidate.typo_pattern, &candidate.word_pattern, candidate.kind, &candidate.occurrences) {
        return Err((
            RejectionReason::PatternValidationFailed,
            "rewrite does not reproduce all occurrences".to_string(),
        ));
    }
    if corrupts_source_word(&candidate.typo_pattern, candidate.kind, source_index) {
        return Err((
            RejectionReason::PatternValidationFailed,
            format!("pattern {} would corrupt a source word", candidate.typo_pattern),
        ));
    }
    if let Some(other) = conflicts_with_other_active(
        &candidate.typo_pattern,
        &candidate.word_pattern,
        candidate.kind,
        &candidate.occurrences,
        active_corrections,
    ) {
        return Err((
            RejectionReason::PatternValidationFailed,
            format!("conflicts with active correction {other}"),
        ));
    }
    if is_validation_word {
        return Err((
            RejectionReason::PatternValidationFailed,
            format!("pattern {} is itself a validation word", candidate.typo_pattern),
        ));
    }

    let mut last_blocker = String::new();
    for &boundary in candidate.kind.escalation_order() {
        match validation_conflict(&candidate.typo_pattern, boundary, validation_index) {
            Some(blocker) => last_blocker = blocker,
            None => return Ok(boundary),
        }
    }
    Err((RejectionReason::PatternValidationFailed, last_blocker))
}

/// Runs one full pattern-generalization sweep. `validation_index` is
/// built over `filtered_validation_set` (plus anything already covered
/// by `corpus_index` in the caller is not required here — spec.md §4.3
/// step 4 only names validation words); `source_index` over
/// `source_words` alone (step 3).
pub fn run(
    state: &mut DictionaryState,
    validation_words: &IndexSet<String>,
    validation_index: &BoundaryIndex,
    source_index: &BoundaryIndex,
    min_typo_length: usize,
) {
    let candidates = extract(state, min_typo_length);
    let mut validated: Vec<(Candidate, PatternBoundary)> = Vec::new();

    for candidate in candidates {
        let is_validation_word = validation_words.contains(&candidate.typo_pattern);
        match validate(
            &candidate,
            min_typo_length,
            validation_index,
            source_index,
            is_validation_word,
            &state.active_corrections,
        ) {
            Ok(boundary) => validated.push((candidate, boundary)),
            Err((reason, blocker)) => {
                let pattern = Correction::new(candidate.typo_pattern.clone(), candidate.word_pattern.clone(), Boundary::None);
                if !state.is_graveyarded(&pattern) {
                    state.bury(pattern, reason, blocker);
                }
            }
        }
    }

    validated.sort_by_key(|(c, _)| c.typo_pattern.len());

    let mut committed: Vec<String> = state.active_patterns.iter().map(|p| p.typo.clone()).collect();

    for (candidate, boundary) in validated {
        let pattern_boundary: Boundary = boundary.into();
        let pattern = Correction::new(candidate.typo_pattern.clone(), candidate.word_pattern.clone(), pattern_boundary);

        let duplicates_direct_correction = state.active_corrections.iter().any(|c| c.same_pair(&pattern));
        if duplicates_direct_correction {
            continue;
        }

        let redundant = committed.iter().any(|existing_typo| {
            existing_typo != &candidate.typo_pattern
                && match candidate.kind {
                    PatternKind::Suffix => candidate.typo_pattern.ends_with(existing_typo.as_str()),
                    PatternKind::Prefix => candidate.typo_pattern.starts_with(existing_typo.as_str()),
                    PatternKind::Middle => false,
                }
        });
        if redundant {
            if !state.is_graveyarded(&pattern) {
                state.bury(
                    pattern,
                    RejectionReason::PatternValidationFailed,
                    "redundant with a shorter accepted pattern".to_string(),
                );
            }
            continue;
        }

        committed.push(candidate.typo_pattern.clone());
        state.commit_pattern(pattern, candidate.occurrences);
    }
}
