//! `DictionaryState`: the solver's owned, single-threaded mutable state
//! (spec.md §3).

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use crate::correction::{Correction, GraveyardEntry, RejectionReason};

#[derive(Debug, Default, Clone)]
pub struct DictionaryState {
    /// `typo -> [candidate words]`, produced by stage 2. Read-only once
    /// the solver starts.
    pub raw_typo_map: HashMap<String, IndexSet<String>>,
    pub active_corrections: IndexSet<Correction>,
    pub active_patterns: IndexSet<Correction>,
    pub graveyard: IndexMap<Correction, GraveyardEntry>,
    pub pattern_replacements: IndexMap<Correction, Vec<Correction>>,
    pub dirty_corrections: IndexSet<Correction>,
    pub current_iteration: u32,
    /// Corrections whose boundary was forcibly elevated to `Both` by the
    /// 2-letter user-word override (spec.md §4.2). Exempted from pattern
    /// replacement (SPEC_FULL §4.3's resolution of the open question on
    /// whether a pattern may subsume them).
    pub elevated_user_corrections: IndexSet<Correction>,
}

impl DictionaryState {
    pub fn new(raw_typo_map: HashMap<String, IndexSet<String>>) -> Self {
        Self {
            raw_typo_map,
            ..Default::default()
        }
    }

    /// A fingerprint of solver progress, used by the convergence check
    /// of spec.md §4.6: a full iteration with no net change to any of
    /// these three counts is a fixed point.
    pub fn progress_fingerprint(&self) -> (usize, usize, usize) {
        (
            self.active_corrections.len(),
            self.active_patterns.len(),
            self.graveyard.len(),
        )
    }

    pub fn bury(&mut self, correction: Correction, reason: RejectionReason, blocker: impl Into<String>) {
        let entry = GraveyardEntry::new(reason, blocker, self.current_iteration);
        self.graveyard.insert(correction.clone(), entry);
        self.dirty_corrections.insert(correction);
    }

    pub fn is_graveyarded(&self, correction: &Correction) -> bool {
        self.graveyard.contains_key(correction)
    }

    pub fn promote_correction(&mut self, correction: Correction) {
        self.dirty_corrections.insert(correction.clone());
        self.active_corrections.insert(correction);
    }

    pub fn mark_elevated(&mut self, correction: Correction) {
        self.elevated_user_corrections.insert(correction);
    }

    pub fn commit_pattern(&mut self, pattern: Correction, occurrences: Vec<Correction>) {
        for occurrence in &occurrences {
            self.active_corrections.shift_remove(occurrence);
        }
        self.dirty_corrections.insert(pattern.clone());
        self.active_patterns.insert(pattern.clone());
        self.pattern_replacements.insert(pattern, occurrences);
    }

    pub fn remove_active_correction(&mut self, correction: &Correction) -> bool {
        self.dirty_corrections.insert(correction.clone());
        self.active_corrections.shift_remove(correction)
    }

    pub fn remove_active_pattern(&mut self, pattern: &Correction) -> Option<Vec<Correction>> {
        self.dirty_corrections.insert(pattern.clone());
        self.active_patterns.shift_remove(pattern);
        self.pattern_replacements.shift_remove(pattern)
    }

    pub fn clear_dirty(&mut self) {
        self.dirty_corrections.clear();
    }

    /// Debug-build invariant checks (spec.md §3). Compiled out in
    /// release; re-enabled in the `dev`/`test` profiles, where a
    /// violation is meant to be a hard assertion failure.
    #[cfg(debug_assertions)]
    pub fn check_invariants(&self) {
        for correction in &self.active_corrections {
            debug_assert!(
                !self.active_patterns.contains(correction),
                "{correction} is both an active correction and an active pattern"
            );
            debug_assert!(
                !self.graveyard.contains_key(correction),
                "{correction} is both active and graveyarded"
            );
        }
        for pattern in &self.active_patterns {
            debug_assert!(
                !self.graveyard.contains_key(pattern),
                "pattern {pattern} is both active and graveyarded"
            );
            let occurrences = self
                .pattern_replacements
                .get(pattern)
                .unwrap_or_else(|| panic!("active pattern {pattern} has no pattern_replacements entry"));
            debug_assert!(
                !occurrences.is_empty(),
                "pattern {pattern} has empty pattern_replacements"
            );
            for occurrence in occurrences {
                debug_assert!(
                    !self.active_corrections.contains(occurrence),
                    "pattern {pattern} occurrence {occurrence} is still active"
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn check_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;

    #[test]
    fn promote_then_bury_is_mutually_exclusive() {
        let mut state = DictionaryState::default();
        let c = Correction::new("teh", "the", Boundary::None);
        state.promote_correction(c.clone());
        state.check_invariants();
        state.remove_active_correction(&c);
        state.bury(c.clone(), RejectionReason::TooShort, "the");
        assert!(state.is_graveyarded(&c));
        assert!(!state.active_corrections.contains(&c));
    }

    #[test]
    fn commit_pattern_moves_occurrences_out_of_active() {
        let mut state = DictionaryState::default();
        let occ1 = Correction::new("actoin", "action", Boundary::Right);
        let occ2 = Correction::new("sectoin", "section", Boundary::Right);
        state.promote_correction(occ1.clone());
        state.promote_correction(occ2.clone());
        let pattern = Correction::new("toin", "tion", Boundary::Right);
        state.commit_pattern(pattern.clone(), vec![occ1.clone(), occ2.clone()]);
        assert!(!state.active_corrections.contains(&occ1));
        assert!(!state.active_corrections.contains(&occ2));
        assert!(state.active_patterns.contains(&pattern));
        assert_eq!(state.pattern_replacements[&pattern].len(), 2);
        state.check_invariants();
    }
}
