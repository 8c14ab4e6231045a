//! Stage 1: dictionary loading (spec.md §2.1).
//!
//! Builds `validation_set`, `filtered_validation_set` (validation minus
//! exclusions), `source_words`, `user_words`, `adjacency_map`,
//! `exclusion_matcher`, and the supplemented `word_freq` table
//! (SPEC_FULL §0.1).

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexSet;

use crate::config::Config;
use crate::exclusion::ExclusionMatcher;
use crate::error::Result;

pub type Adjacency = HashMap<char, Vec<char>>;

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub validation_set: IndexSet<String>,
    pub filtered_validation_set: IndexSet<String>,
    pub source_words: IndexSet<String>,
    pub user_words: IndexSet<String>,
    pub adjacency_map: Adjacency,
    pub word_freq: HashMap<String, f64>,
    pub exclusion_matcher: ExclusionMatcher,
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| crate::error::TypodictError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn load_word_list(path: &Path) -> Result<IndexSet<String>> {
    Ok(read_lines(path)?.into_iter().collect())
}

fn load_adjacency(path: &Path) -> Result<Adjacency> {
    let mut map = Adjacency::new();
    for line in read_lines(path)? {
        if let Some((key, chars)) = line.split_once(" -> ") {
            if let Some(c) = key.trim().chars().next() {
                map.insert(c, chars.trim().chars().collect());
            }
        }
    }
    Ok(map)
}

fn load_word_freq(path: &Path) -> Result<HashMap<String, f64>> {
    let mut map = HashMap::new();
    for line in read_lines(path)? {
        let (word, freq) = if let Some(pair) = line.split_once(" -> ") {
            pair
        } else if let Some(pair) = line.split_once('\t') {
            pair
        } else {
            continue;
        };
        if let Ok(freq) = freq.trim().parse::<f64>() {
            map.insert(word.trim().to_string(), freq);
        }
    }
    Ok(map)
}

impl Dictionary {
    pub fn load(config: &Config) -> Result<Self> {
        let validation_set = match &config.validation {
            Some(path) => load_word_list(path)?,
            None => IndexSet::new(),
        };

        let user_words = match &config.include {
            Some(path) => load_word_list(path)?,
            None => IndexSet::new(),
        };

        let adjacency_map = match &config.adjacent_letters {
            Some(path) => load_adjacency(path)?,
            None => Adjacency::new(),
        };

        let word_freq = match &config.word_freq {
            Some(path) => load_word_freq(path)?,
            None => HashMap::new(),
        };

        let exclusion_matcher = match &config.exclude {
            Some(path) => ExclusionMatcher::from_lines(read_lines(path)?),
            None => ExclusionMatcher::default(),
        };

        let filtered_validation_set: IndexSet<String> = validation_set
            .iter()
            .filter(|word| !exclusion_matcher.should_exclude(word, word, crate::boundary::Boundary::Both))
            .cloned()
            .collect();

        let mut source_words: IndexSet<String> = IndexSet::new();
        if let Some(top_n) = config.top_n {
            let mut ranked: Vec<(&String, f64)> = word_freq.iter().map(|(w, f)| (w, *f)).collect();
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            for (word, _) in ranked.into_iter().take(top_n) {
                if word.len() >= config.min_word_length && word.len() <= config.max_word_length {
                    source_words.insert(word.clone());
                }
            }
        }
        for word in &user_words {
            if word.len() >= config.min_word_length && word.len() <= config.max_word_length {
                source_words.insert(word.clone());
            }
        }

        Ok(Self {
            validation_set,
            filtered_validation_set,
            source_words,
            user_words,
            adjacency_map,
            word_freq,
            exclusion_matcher,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_parses_arrow_separated_lines() {
        let adjacency = load_adjacency_from_lines(["a -> sqzw", "s -> awedxz"]);
        assert_eq!(adjacency[&'a'], vec!['s', 'q', 'z', 'w']);
    }

    fn load_adjacency_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Adjacency {
        let mut map = Adjacency::new();
        for line in lines {
            if let Some((key, chars)) = line.split_once(" -> ") {
                if let Some(c) = key.trim().chars().next() {
                    map.insert(c, chars.trim().chars().collect());
                }
            }
        }
        map
    }
}
