//! Exclusion pattern parsing and matching (spec.md §4.2, §6).
//!
//! Three textual forms, one per line of the exclusion file:
//!   - an exact typo: `quater`
//!   - a `typo -> word` rule, either side may carry a single `*`
//!     wildcard for prefix/suffix/middle matching: `qu* -> qu*`
//!   - a boundary-qualified typo via leading/trailing `:` markers:
//!     `:teh`, `teh:`, `:teh:` restrict the rule to LEFT/RIGHT/BOTH.

use crate::boundary::Boundary;
use crate::correction::Correction;

#[derive(Debug, Clone, PartialEq, Eq)]
enum SidePattern {
    Exact(String),
    /// `prefix*`
    Prefix(String),
    /// `*suffix`
    Suffix(String),
    /// `pre*post`
    Middle(String, String),
}

impl SidePattern {
    fn parse(raw: &str) -> Self {
        let stars = raw.matches('*').count();
        if stars == 0 {
            return Self::Exact(raw.to_string());
        }
        // Only a single wildcard is supported (spec.md §4.2).
        if let Some(idx) = raw.find('*') {
            let (before, after) = (&raw[..idx], &raw[idx + 1..]);
            return if before.is_empty() {
                Self::Suffix(after.to_string())
            } else if after.is_empty() {
                Self::Prefix(before.to_string())
            } else {
                Self::Middle(before.to_string(), after.to_string())
            };
        }
        Self::Exact(raw.to_string())
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::Exact(exact) => s == exact,
            Self::Prefix(prefix) => s.starts_with(prefix.as_str()),
            Self::Suffix(suffix) => s.ends_with(suffix.as_str()),
            Self::Middle(prefix, suffix) => {
                s.starts_with(prefix.as_str())
                    && s.ends_with(suffix.as_str())
                    && s.len() >= prefix.len() + suffix.len()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExclusionRule {
    typo: SidePattern,
    /// `None` means the rule applies regardless of the target word
    /// (i.e. it was written as a bare typo, not a `typo -> word` rule).
    word: Option<SidePattern>,
    /// `None` means the rule applies to any boundary.
    boundary: Option<Boundary>,
}

impl ExclusionRule {
    fn matches(&self, correction: &(&str, &str, Boundary)) -> bool {
        let (typo, word, boundary) = *correction;
        if let Some(want) = self.boundary {
            if want != boundary {
                return false;
            }
        }
        if !self.typo.matches(typo) {
            return false;
        }
        if let Some(word_pattern) = &self.word {
            if !word_pattern.matches(word) {
                return false;
            }
        }
        true
    }
}

/// Parses and evaluates exclusion rules.
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher {
    rules: Vec<ExclusionRule>,
}

fn strip_boundary_markers(raw: &str) -> (&str, Option<Boundary>) {
    let left = raw.starts_with(':');
    let right = raw.ends_with(':') && raw.len() > 1;
    let trimmed = raw.trim_start_matches(':').trim_end_matches(':');
    match (left, right) {
        (true, true) => (trimmed, Some(Boundary::Both)),
        (true, false) => (trimmed, Some(Boundary::Left)),
        (false, true) => (trimmed, Some(Boundary::Right)),
        (false, false) => (raw, None),
    }
}

impl ExclusionMatcher {
    pub fn from_lines(lines: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut rules = Vec::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((typo_part, word_part)) = line.split_once(" -> ") {
                let (typo_raw, boundary) = strip_boundary_markers(typo_part.trim());
                rules.push(ExclusionRule {
                    typo: SidePattern::parse(typo_raw),
                    word: Some(SidePattern::parse(word_part.trim())),
                    boundary,
                });
            } else {
                let (typo_raw, boundary) = strip_boundary_markers(line);
                rules.push(ExclusionRule {
                    typo: SidePattern::parse(typo_raw),
                    word: None,
                    boundary,
                });
            }
        }
        Self { rules }
    }

    pub fn should_exclude(&self, typo: &str, word: &str, boundary: Boundary) -> bool {
        self.rules.iter().any(|rule| rule.matches(&(typo, word, boundary)))
    }

    pub fn should_exclude_correction(&self, correction: &Correction) -> bool {
        self.should_exclude(&correction.typo, &correction.word, correction.boundary)
    }
}
