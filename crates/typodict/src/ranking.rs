//! Shared 3-tier ranking (spec.md §4.7).
//!
//! Tier 0: user-word corrections (any active correction or pattern whose
//! `word` is in `user_words`). Tier 1: patterns, scored by the summed
//! word-frequency of the concrete corrections they replace. Tier 2:
//! direct corrections, scored by the frequency of their word. Descending
//! within tier; ties keep the stable (insertion) order of the input
//! slices, which is itself deterministic since callers hand us
//! `IndexSet`-backed collections.

use std::collections::{HashMap, HashSet};

use crate::correction::Correction;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub correction: Correction,
    pub tier: u8,
    pub score: f64,
    pub is_pattern: bool,
}

fn word_score(word: &str, word_freq: &HashMap<String, f64>) -> f64 {
    word_freq.get(word).copied().unwrap_or(0.0)
}

pub fn rank(
    active: &[Correction],
    patterns: &[Correction],
    pattern_replacements: &HashMap<Correction, Vec<Correction>>,
    word_freq: &HashMap<String, f64>,
    user_words: &HashSet<String>,
) -> Vec<RankedEntry> {
    let mut entries = Vec::with_capacity(active.len() + patterns.len());

    for pattern in patterns {
        let is_user = user_words.contains(&pattern.word);
        let replacement_score: f64 = pattern_replacements
            .get(pattern)
            .map(|occurrences| {
                occurrences
                    .iter()
                    .map(|c| word_score(&c.word, word_freq))
                    .sum()
            })
            .unwrap_or(0.0);
        entries.push(RankedEntry {
            correction: pattern.clone(),
            tier: if is_user { 0 } else { 1 },
            score: replacement_score,
            is_pattern: true,
        });
    }

    for correction in active {
        let is_user = user_words.contains(&correction.word);
        entries.push(RankedEntry {
            correction: correction.clone(),
            tier: if is_user { 0 } else { 2 },
            score: word_score(&correction.word, word_freq),
            is_pattern: false,
        });
    }

    entries.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then(b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal))
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;

    #[test]
    fn user_words_rank_first() {
        let active = vec![
            Correction::new("teh", "the", Boundary::None),
            Correction::new("nmae", "name", Boundary::None),
        ];
        let mut user_words = HashSet::new();
        user_words.insert("name".to_string());
        let mut freq = HashMap::new();
        freq.insert("the".to_string(), 100.0);
        freq.insert("name".to_string(), 1.0);

        let ranked = rank(&active, &[], &HashMap::new(), &freq, &user_words);
        assert_eq!(ranked[0].correction.word, "name");
        assert_eq!(ranked[0].tier, 0);
        assert_eq!(ranked[1].correction.word, "the");
    }

    #[test]
    fn capacity_and_tier_ordering_scenario_6() {
        // Five user-word corrections, 300 patterns (summed 4000
        // occurrences worth of frequency mass), 2000 direct corrections.
        let mut user_words = HashSet::new();
        let mut active = Vec::new();
        let mut freq = HashMap::new();

        for i in 0..5 {
            let word = format!("user{i}");
            user_words.insert(word.clone());
            freq.insert(word.clone(), 1.0);
            active.push(Correction::new(format!("typo{i}"), word, Boundary::None));
        }

        let mut patterns = Vec::new();
        let mut pattern_replacements = HashMap::new();
        for i in 0..300 {
            let pattern = Correction::new(format!("pat{i}"), format!("ptn{i}"), Boundary::None);
            let occurrences: Vec<_> = (0..13)
                .map(|j| {
                    let w = format!("occ{i}_{j}");
                    freq.insert(w.clone(), 10.0);
                    Correction::new(format!("t{i}_{j}"), w, Boundary::None)
                })
                .collect();
            pattern_replacements.insert(pattern.clone(), occurrences);
            patterns.push(pattern);
        }

        for i in 0..2000 {
            let word = format!("direct{i}");
            freq.insert(word.clone(), (2000 - i) as f64);
            active.push(Correction::new(format!("dtypo{i}"), word, Boundary::None));
        }

        let ranked = rank(&active, &patterns, &pattern_replacements, &freq, &user_words);
        let truncated = &ranked[..1000.min(ranked.len())];

        assert!(truncated[..5].iter().all(|r| r.tier == 0));
        assert!(truncated[5..305].iter().all(|r| r.tier == 1));
        assert!(truncated[305..].iter().all(|r| r.tier == 2));
        assert_eq!(truncated.len(), 1000);
    }
}
