//! Pass §4.5: platform-formatted substring conflict removal.
//!
//! Runs after boundary markers are baked into the trigger text via
//! `Platform::format_trigger`. For the LTR (espanso) backend that baking
//! is a no-op, so this pass transparently degrades to comparing raw typo
//! strings, matching the "applied to the raw typo strings" clause of
//! spec.md §4.5 step 5.
//!
//! Candidate detection fans out over the sorted entry list via `rayon`
//! (mirroring `conflict_removal`'s detect-in-parallel/replay-sequential
//! split); resolution is replayed sequentially, since which entries are
//! still around to "win" a conflict depends on earlier verdicts.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::boundary::{less_restrictive, Boundary};
use crate::correction::{Correction, RejectionReason};
use crate::platform::Platform;
use crate::state::DictionaryState;

struct Entry {
    boundary: Boundary,
    formatted: String,
}

/// All structurally-possible shorter-entry matches for `entries[j]`, in
/// the same left-to-right, bucket-insertion-order a sequential scan
/// would visit them in. Only `idx < j` candidates qualify, since the
/// caller sorts by ascending length and only an earlier (shorter or
/// equal) entry can bury a later one. A pure function of the static,
/// pre-sorted entry list and its bucket index, so every `j` can be
/// scanned independently in parallel; which candidate actually survives
/// to bury `j` is resolved afterwards, sequentially.
fn scan_candidates(j: usize, entries: &[Entry], by_first_char: &HashMap<char, Vec<usize>>) -> Vec<usize> {
    let haystack = &entries[j].formatted;
    let mut found = Vec::new();
    for (offset, c) in haystack.char_indices() {
        let Some(bucket) = by_first_char.get(&c) else {
            continue;
        };
        for &idx in bucket {
            if idx >= j {
                continue;
            }
            let candidate = &entries[idx];
            let end = offset + candidate.formatted.len();
            if end <= haystack.len() && &haystack[offset..end] == candidate.formatted.as_str() {
                found.push(idx);
            }
        }
    }
    found
}

fn bury_all_with_formatted(state: &mut DictionaryState, platform: &dyn Platform, losing_formatted: &str, winner: &str) {
    let losing_corrections: Vec<Correction> = state
        .active_corrections
        .iter()
        .filter(|c| platform.format_trigger(&c.typo, c.boundary) == losing_formatted)
        .cloned()
        .collect();
    for c in losing_corrections {
        state.remove_active_correction(&c);
        state.bury(c, RejectionReason::PlatformConstraint, winner.to_string());
    }

    let losing_patterns: Vec<Correction> = state
        .active_patterns
        .iter()
        .filter(|p| platform.format_trigger(&p.typo, p.boundary) == losing_formatted)
        .cloned()
        .collect();
    for p in losing_patterns {
        if let Some(occurrences) = state.remove_active_pattern(&p) {
            // A pattern's occurrences are concrete corrections; if the
            // pattern itself loses, they rejoin active_corrections
            // rather than disappear (mirrors the "occurrences remain
            // active" outcome of a rejected pattern in §4.3).
            for occurrence in occurrences {
                state.promote_correction(occurrence);
            }
        }
        state.bury(p, RejectionReason::PlatformConstraint, winner.to_string());
    }
}

/// Runs one sweep over the union of `active_corrections` and
/// `active_patterns`, formatted through `platform`.
pub fn run(state: &mut DictionaryState, platform: &dyn Platform) {
    let mut entries: Vec<Entry> = Vec::new();
    for c in &state.active_corrections {
        entries.push(Entry {
            boundary: c.boundary,
            formatted: platform.format_trigger(&c.typo, c.boundary),
        });
    }
    for p in &state.active_patterns {
        entries.push(Entry {
            boundary: p.boundary,
            formatted: platform.format_trigger(&p.typo, p.boundary),
        });
    }
    entries.sort_by_key(|e| e.formatted.len());

    let mut by_first_char: HashMap<char, Vec<usize>> = HashMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        if let Some(first) = entry.formatted.chars().next() {
            by_first_char.entry(first).or_default().push(idx);
        }
    }

    let candidates: Vec<Vec<usize>> = entries
        .par_iter()
        .enumerate()
        .map(|(j, _)| scan_candidates(j, &entries, &by_first_char))
        .collect();

    let mut removed: HashSet<String> = HashSet::new();

    for (j, entry) in entries.iter().enumerate() {
        if removed.contains(&entry.formatted) {
            continue;
        }

        let Some(&i) = candidates[j]
            .iter()
            .find(|&&i| !removed.contains(&entries[i].formatted))
        else {
            continue;
        };
        let shorter = &entries[i];

        if shorter.formatted != entry.formatted {
            let keep_shorter = less_restrictive(shorter.boundary, entry.boundary) == shorter.boundary;
            let (losing, winning) = if keep_shorter {
                (entry.formatted.clone(), shorter.formatted.clone())
            } else {
                (shorter.formatted.clone(), entry.formatted.clone())
            };
            removed.insert(losing.clone());
            bury_all_with_formatted(state, platform, &losing, &winning);
        } else {
            // Identical formatted trigger from two distinct triples:
            // keep the first-seen one, drop this one.
            removed.insert(entry.formatted.clone());
            bury_all_with_formatted(state, platform, &entry.formatted, &shorter.formatted);
        }
    }
}
