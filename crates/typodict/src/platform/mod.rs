//! The `Platform` back-end trait (spec.md §4.7) and its two
//! implementations.

pub mod espanso;
pub mod qmk;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::correction::Correction;
use crate::error::Result;
use crate::ranking::RankedEntry;

/// Scan direction a platform's trigger matcher uses. Affects pattern
/// rewrite direction (spec.md §4.3.2) and conflict `expected` computation
/// (spec.md §4.4): LTR replaces the leftmost occurrence, RTL the
/// rightmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchDirection {
    Ltr,
    Rtl,
}

/// Which concrete platform backend to target, selected by the `platform`
/// config key (spec.md §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    Espanso,
    Qmk,
}

impl std::str::FromStr for PlatformKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "espanso" => Ok(Self::Espanso),
            "qmk" => Ok(Self::Qmk),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Character-set restriction a platform places on accepted triggers.
#[derive(Debug, Clone)]
pub enum AllowedChars {
    Any,
    Set(std::collections::HashSet<char>),
}

impl AllowedChars {
    pub fn allows(&self, s: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Set(set) => s.chars().all(|c| set.contains(&c)),
        }
    }
}

/// The collaborator surface a solved dictionary is rendered through.
pub trait Platform {
    fn match_direction(&self) -> MatchDirection;
    fn allowed_chars(&self) -> &AllowedChars;
    fn max_corrections(&self) -> Option<usize>;

    /// Bake the boundary into the trigger string (e.g. `Left` becomes
    /// `:typo` for the colon-notation platform).
    fn format_trigger(&self, typo: &str, boundary: Boundary) -> String;

    /// Rank + truncate to `max_corrections` (spec.md §4.7); default
    /// implementation delegates to the shared [`crate::ranking::rank`].
    fn rank(
        &self,
        active: &[Correction],
        patterns: &[Correction],
        pattern_replacements: &std::collections::HashMap<Correction, Vec<Correction>>,
        word_freq: &std::collections::HashMap<String, f64>,
        user_words: &std::collections::HashSet<String>,
    ) -> Vec<RankedEntry> {
        let mut ranked = crate::ranking::rank(active, patterns, pattern_replacements, word_freq, user_words);
        if let Some(max) = self.max_corrections() {
            ranked.truncate(max);
        }
        ranked
    }

    /// Write the ranked output to `output_path`.
    fn emit(&self, ranked: &[RankedEntry], output_path: &Path) -> Result<()>;
}
