//! Pass §4.4: intra-group substring conflict removal.
//!
//! Scoped to `active_corrections` (direct corrections): pattern-vs-pattern
//! redundancy is already handled by the commit-order redundancy check in
//! `pattern_generalization` (spec.md §4.3).

use rayon::prelude::*;

use crate::boundary::Boundary;
use crate::correction::{Correction, RejectionReason};
use crate::platform::MatchDirection;
use crate::state::DictionaryState;

fn replace_once(haystack: &str, pat: &str, replacement: &str, direction: MatchDirection) -> Option<String> {
    let pos = match direction {
        MatchDirection::Ltr => haystack.find(pat),
        MatchDirection::Rtl => haystack.rfind(pat),
    }?;
    Some(format!("{}{}{}", &haystack[..pos], replacement, &haystack[pos + pat.len()..]))
}

enum Verdict {
    RemoveLonger { long: Correction, short: Correction },
    RemoveShorter { long: Correction, short: Correction },
}

fn verdict_key(v: &Verdict) -> (&str, &str) {
    match v {
        Verdict::RemoveLonger { long, short } => (long.typo.as_str(), short.typo.as_str()),
        Verdict::RemoveShorter { long, short } => (long.typo.as_str(), short.typo.as_str()),
    }
}

fn detect_group_conflicts(group: &[Correction], direction: MatchDirection) -> Vec<Verdict> {
    let mut verdicts = Vec::new();
    for short in group {
        for long in group {
            if short.typo == long.typo || !long.typo.contains(short.typo.as_str()) {
                continue;
            }
            let expected = replace_once(&long.typo, &short.typo, &short.word, direction);
            match expected {
                Some(e) if e == long.word => verdicts.push(Verdict::RemoveLonger {
                    long: long.clone(),
                    short: short.clone(),
                }),
                _ => verdicts.push(Verdict::RemoveShorter {
                    long: long.clone(),
                    short: short.clone(),
                }),
            }
        }
    }
    verdicts
}

/// Runs one sweep: within each boundary group, drop corrections made
/// redundant (or hazardous) by a shorter one. Detection fans out over
/// the four boundary groups via `rayon`; resolution is replayed
/// sequentially in `(long.typo, short.typo)` order.
pub fn run(state: &mut DictionaryState, match_direction: MatchDirection) {
    let groups: Vec<Vec<Correction>> = [Boundary::None, Boundary::Left, Boundary::Right, Boundary::Both]
        .into_iter()
        .map(|b| {
            state
                .active_corrections
                .iter()
                .filter(|c| c.boundary == b)
                .cloned()
                .collect()
        })
        .collect();

    let mut all_verdicts: Vec<Verdict> = groups
        .par_iter()
        .flat_map(|entries| detect_group_conflicts(entries, match_direction))
        .collect();

    all_verdicts.sort_by(|a, b| {
        let (la, sa) = verdict_key(a);
        let (lb, sb) = verdict_key(b);
        la.cmp(lb).then_with(|| sa.cmp(sb))
    });

    for verdict in all_verdicts {
        match verdict {
            Verdict::RemoveLonger { long, short } => {
                if state.active_corrections.contains(&long) {
                    state.remove_active_correction(&long);
                    state.bury(
                        long,
                        RejectionReason::BlockedByConflict,
                        format!("{} -> {}", short.typo, short.word),
                    );
                }
            }
            Verdict::RemoveShorter { long, short } => {
                if state.active_corrections.contains(&short) {
                    state.remove_active_correction(&short);
                    state.bury(
                        short,
                        RejectionReason::BlockedByConflict,
                        format!("would corrupt {} -> {}", long.typo, long.word),
                    );
                }
            }
        }
    }
}
