//! espanso backend: LTR matching, YAML shards, unlimited charset.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::boundary::Boundary;
use crate::error::{Result, TypodictError};
use crate::ranking::RankedEntry;

use super::{AllowedChars, MatchDirection, Platform};

/// Rough per-entry resident-memory overhead (bytes) espanso's matcher
/// holds on top of the trigger/replacement strings themselves, used for
/// the informational RAM estimate (SPEC_FULL §0.1).
const PER_ENTRY_OVERHEAD_BYTES: usize = 96;

pub struct EspansoPlatform {
    pub max_corrections: Option<usize>,
    pub max_entries_per_file: usize,
}

impl EspansoPlatform {
    pub fn new(max_corrections: Option<usize>, max_entries_per_file: usize) -> Self {
        Self {
            max_corrections,
            max_entries_per_file,
        }
    }

    /// Group a trigger string's first letter into a shard key, matching
    /// `typos_<letter>.yml` / `typos_symbols.yml` (spec.md §6). A shard
    /// that overflows `max_entries_per_file` is chunked and each chunk
    /// named `typos_<first_word>_to_<last_word>.yml` instead, per the
    /// documented CLI convention.
    fn shard_key(trigger: &str) -> String {
        trigger
            .chars()
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase().to_string())
            .unwrap_or_else(|| "symbols".to_string())
    }

    fn estimate_ram_bytes(ranked: &[RankedEntry]) -> usize {
        ranked
            .iter()
            .map(|entry| {
                entry.correction.typo.len() + entry.correction.word.len() + PER_ENTRY_OVERHEAD_BYTES
            })
            .sum()
    }
}

#[derive(Serialize)]
struct Match {
    trigger: String,
    replace: String,
    propagate_case: bool,
    #[serde(skip_serializing_if = "is_false")]
    word: bool,
    #[serde(skip_serializing_if = "is_false")]
    left_word: bool,
    #[serde(skip_serializing_if = "is_false")]
    right_word: bool,
}

const fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Serialize)]
struct ShardFile {
    matches: Vec<Match>,
}

impl Platform for EspansoPlatform {
    fn match_direction(&self) -> MatchDirection {
        MatchDirection::Ltr
    }

    fn allowed_chars(&self) -> &AllowedChars {
        // Shared by all instances; `Any` carries no data to borrow, so a
        // thread-local static keeps the signature borrow-friendly.
        static ANY: AllowedChars = AllowedChars::Any;
        &ANY
    }

    fn max_corrections(&self) -> Option<usize> {
        self.max_corrections
    }

    fn format_trigger(&self, typo: &str, _boundary: Boundary) -> String {
        // espanso encodes the boundary as separate YAML fields, not in
        // the trigger text itself.
        typo.to_string()
    }

    fn emit(&self, ranked: &[RankedEntry], output_path: &Path) -> Result<()> {
        fs::create_dir_all(output_path).map_err(|source| TypodictError::Io {
            path: output_path.display().to_string(),
            source,
        })?;

        let mut shards: BTreeMap<String, Vec<Match>> = BTreeMap::new();
        let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

        for entry in ranked {
            let key = (entry.correction.typo.clone(), entry.correction.word.clone());
            if !seen_pairs.insert(key) {
                continue;
            }
            let shard = Self::shard_key(&entry.correction.typo);
            let m = Match {
                trigger: entry.correction.typo.clone(),
                replace: entry.correction.word.clone(),
                propagate_case: true,
                word: entry.correction.boundary == Boundary::Both,
                left_word: entry.correction.boundary == Boundary::Left,
                right_word: entry.correction.boundary == Boundary::Right,
            };
            shards.entry(shard).or_default().push(m);
        }

        for (letter, mut matches) in shards {
            matches.sort_by(|a, b| a.replace.cmp(&b.replace));
            for chunk in matches.chunks(self.max_entries_per_file) {
                let filename = if matches.len() <= self.max_entries_per_file {
                    format!("typos_{letter}.yml")
                } else {
                    let first = &chunk.first().expect("non-empty chunk").replace;
                    let last = &chunk.last().expect("non-empty chunk").replace;
                    format!("typos_{first}_to_{last}.yml")
                };
                let file = ShardFile {
                    matches: chunk.to_vec(),
                };
                let yaml = serde_yaml_ng::to_string(&file).map_err(|source| {
                    TypodictError::Config(format!("failed to serialize YAML shard: {source}"))
                })?;
                fs::write(output_path.join(&filename), yaml).map_err(|source| {
                    TypodictError::Io {
                        path: filename,
                        source,
                    }
                })?;
            }
        }

        let estimated_bytes = Self::estimate_ram_bytes(ranked);
        tracing::info!(
            entries = ranked.len(),
            estimated_ram_kb = estimated_bytes / 1024,
            "espanso shards written"
        );

        Ok(())
    }
}

impl Clone for Match {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger.clone(),
            replace: self.replace.clone(),
            propagate_case: self.propagate_case,
            word: self.word,
            left_word: self.left_word,
            right_word: self.right_word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::Correction;
    use tempfile::TempDir;

    #[test]
    fn shard_key_groups_by_first_letter() {
        assert_eq!(EspansoPlatform::shard_key("hte"), "h");
        assert_eq!(EspansoPlatform::shard_key("_weird"), "symbols");
    }

    #[test]
    fn emits_expected_fields_per_boundary() {
        let dir = TempDir::new().unwrap();
        let platform = EspansoPlatform::new(None, 500);
        let ranked = vec![
            RankedEntry {
                correction: Correction::new("hte", "the", Boundary::None),
                tier: 2,
                score: 1.0,
                is_pattern: false,
            },
            RankedEntry {
                correction: Correction::new("tain", "train", Boundary::Left),
                tier: 2,
                score: 1.0,
                is_pattern: false,
            },
        ];
        platform.emit(&ranked, dir.path()).unwrap();
        let contents = fs::read_to_string(dir.path().join("typos_h.yml")).unwrap();
        assert!(contents.contains("trigger: hte"));
        assert!(!contents.contains("word:"));

        let contents_t = fs::read_to_string(dir.path().join("typos_t.yml")).unwrap();
        assert!(contents_t.contains("left_word: true"));
    }

    #[test]
    fn overflowing_shard_is_named_by_word_range() {
        let dir = TempDir::new().unwrap();
        let platform = EspansoPlatform::new(None, 1);
        let ranked = vec![
            RankedEntry {
                correction: Correction::new("hte", "the", Boundary::None),
                tier: 2,
                score: 1.0,
                is_pattern: false,
            },
            RankedEntry {
                correction: Correction::new("hwere", "where", Boundary::None),
                tier: 2,
                score: 1.0,
                is_pattern: false,
            },
        ];
        platform.emit(&ranked, dir.path()).unwrap();
        assert!(!dir.path().join("typos_h.yml").exists());
        assert!(dir.path().join("typos_the_to_the.yml").exists());
        assert!(dir.path().join("typos_where_to_where.yml").exists());
    }
}
