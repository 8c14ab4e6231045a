//! QMK backend: RTL matching, flat colon-notation text, `[a-z']` charset.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::boundary::Boundary;
use crate::error::{Result, TypodictError};
use crate::ranking::RankedEntry;

use super::{AllowedChars, MatchDirection, Platform};

pub struct QmkPlatform {
    pub max_corrections: Option<usize>,
    allowed_chars: AllowedChars,
}

impl QmkPlatform {
    pub fn new(max_corrections: Option<usize>) -> Self {
        let mut set: HashSet<char> = ('a'..='z').collect();
        set.insert('\'');
        Self {
            max_corrections,
            allowed_chars: AllowedChars::Set(set),
        }
    }
}

impl Platform for QmkPlatform {
    fn match_direction(&self) -> MatchDirection {
        MatchDirection::Rtl
    }

    fn allowed_chars(&self) -> &AllowedChars {
        &self.allowed_chars
    }

    fn max_corrections(&self) -> Option<usize> {
        self.max_corrections
    }

    /// Colon notation: `:typo` (LEFT), `typo:` (RIGHT), `:typo:` (BOTH),
    /// `typo` (NONE).
    fn format_trigger(&self, typo: &str, boundary: Boundary) -> String {
        match boundary {
            Boundary::None => typo.to_string(),
            Boundary::Left => format!(":{typo}"),
            Boundary::Right => format!("{typo}:"),
            Boundary::Both => format!(":{typo}:"),
        }
    }

    fn emit(&self, ranked: &[RankedEntry], output_path: &Path) -> Result<()> {
        let lines = ranked
            .iter()
            .filter(|entry| {
                self.allowed_chars.allows(&entry.correction.typo)
                    && self.allowed_chars.allows(&entry.correction.word)
            })
            .sorted_by(|a, b| a.correction.word.cmp(&b.correction.word))
            .map(|entry| {
                let formatted = self.format_trigger(&entry.correction.typo, entry.correction.boundary);
                format!("{formatted} -> {}", entry.correction.word)
            })
            .join("\n");

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| TypodictError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        fs::write(output_path, lines).map_err(|source| TypodictError::Io {
            path: output_path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::Correction;

    #[test]
    fn formats_colon_notation() {
        let platform = QmkPlatform::new(None);
        assert_eq!(platform.format_trigger("abot", Boundary::Left), ":abot");
        assert_eq!(platform.format_trigger("abot", Boundary::Right), "abot:");
        assert_eq!(platform.format_trigger("abot", Boundary::Both), ":abot:");
        assert_eq!(platform.format_trigger("abot", Boundary::None), "abot");
    }

    #[test]
    fn emits_sorted_by_word() {
        let platform = QmkPlatform::new(None);
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("typos.txt");
        let ranked = vec![
            RankedEntry {
                correction: Correction::new("teh", "the", Boundary::None),
                tier: 2,
                score: 1.0,
                is_pattern: false,
            },
            RankedEntry {
                correction: Correction::new("adn", "and", Boundary::None),
                tier: 2,
                score: 1.0,
                is_pattern: false,
            },
        ];
        platform.emit(&ranked, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["adn -> and", "teh -> the"]);
    }

    #[test]
    fn rejects_non_az_chars_via_allowed_chars() {
        let platform = QmkPlatform::new(None);
        assert!(platform.allowed_chars().allows("don't"));
        assert!(!platform.allowed_chars().allows("café"));
    }

    #[test]
    fn emit_filters_entries_with_invalid_word_chars() {
        let platform = QmkPlatform::new(None);
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("typos.txt");
        let ranked = vec![
            RankedEntry {
                correction: Correction::new("teh", "the", Boundary::None),
                tier: 2,
                score: 1.0,
                is_pattern: false,
            },
            RankedEntry {
                correction: Correction::new("cafe", "café", Boundary::None),
                tier: 2,
                score: 1.0,
                is_pattern: false,
            },
        ];
        platform.emit(&ranked, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "teh -> the");
    }
}
