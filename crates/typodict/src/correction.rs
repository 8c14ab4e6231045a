//! The `Correction` triple and its rejection bookkeeping.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

use crate::boundary::Boundary;

/// A single candidate rewrite: `typo` should be rewritten to `word`,
/// subject to `boundary`. Immutable once constructed; corrections move
/// between `active_corrections`, `active_patterns` and the graveyard by
/// set membership, never by mutation (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Correction {
    pub typo: String,
    pub word: String,
    pub boundary: Boundary,
}

impl Correction {
    pub fn new(typo: impl Into<String>, word: impl Into<String>, boundary: Boundary) -> Self {
        Self {
            typo: typo.into(),
            word: word.into(),
            boundary,
        }
    }

    /// Corrections with the same `(typo, word)` pair but a different
    /// boundary, used by cross-boundary dedup (spec.md §4.3) and the
    /// "no two active triples share a (t, w) pair" invariant (spec.md
    /// §8).
    pub fn same_pair(&self, other: &Self) -> bool {
        self.typo == other.typo && self.word == other.word
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {}, {})", self.typo, self.word, self.boundary)
    }
}

/// Why a triple was rejected. Carried in the graveyard, never as an
/// `Err` — rejection is a domain outcome, not an error (spec.md §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum RejectionReason {
    CollisionAmbiguous,
    TooShort,
    BlockedByConflict,
    PlatformConstraint,
    PatternValidationFailed,
    ExcludedByPattern,
    FalseTrigger,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CollisionAmbiguous => "COLLISION_AMBIGUOUS",
            Self::TooShort => "TOO_SHORT",
            Self::BlockedByConflict => "BLOCKED_BY_CONFLICT",
            Self::PlatformConstraint => "PLATFORM_CONSTRAINT",
            Self::PatternValidationFailed => "PATTERN_VALIDATION_FAILED",
            Self::ExcludedByPattern => "EXCLUDED_BY_PATTERN",
            Self::FalseTrigger => "FALSE_TRIGGER",
        };
        write!(f, "{s}")
    }
}

/// A graveyard record: why a triple was rejected, an example offending
/// word (the "blocker"), and which solver iteration produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraveyardEntry {
    pub reason: RejectionReason,
    pub blocker: String,
    pub iteration: u32,
}

impl GraveyardEntry {
    pub fn new(reason: RejectionReason, blocker: impl Into<String>, iteration: u32) -> Self {
        Self {
            reason,
            blocker: blocker.into(),
            iteration,
        }
    }
}
