//! Stage 2: typo generation (spec.md §4.1).

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::dictionary::Adjacency;

/// Enumerate candidate typos for `word` (lowercase). Applied
/// independently at each position: transposition, deletion (only when
/// `|word| >= 4`), and — when `adjacency` has an entry for that
/// position's character — insertion before/after and substitution.
/// A typo equal to `word` is discarded.
pub fn generate(word: &str, adjacency: Option<&Adjacency>) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut typos = Vec::new();

    // Transposition: swap chars[i], chars[i+1] for i < n-1.
    for i in 0..n.saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        push_if_distinct(&mut typos, word, swapped.into_iter().collect());
    }

    // Deletion: remove chars[i], only when n >= 4.
    if n >= 4 {
        for i in 0..n {
            let deleted: String = chars
                .iter()
                .enumerate()
                .filter_map(|(j, c)| if j == i { None } else { Some(*c) })
                .collect();
            push_if_distinct(&mut typos, word, deleted);
        }
    }

    if let Some(adjacency) = adjacency {
        for i in 0..n {
            let Some(neighbors) = adjacency.get(&chars[i]) else {
                continue;
            };
            for &c in neighbors {
                // Insertion after position i.
                let mut after = chars.clone();
                after.insert(i + 1, c);
                push_if_distinct(&mut typos, word, after.into_iter().collect());

                // Insertion before position i.
                let mut before = chars.clone();
                before.insert(i, c);
                push_if_distinct(&mut typos, word, before.into_iter().collect());

                // Substitution at position i.
                let mut substituted = chars.clone();
                substituted[i] = c;
                push_if_distinct(&mut typos, word, substituted.into_iter().collect());
            }
        }
    }

    typos
}

fn push_if_distinct(typos: &mut Vec<String>, word: &str, candidate: String) {
    if candidate != word {
        typos.push(candidate);
    }
}

/// `typo -> [candidate correct words]`, built by generating typos for
/// every source word. `words` are deduplicated per typo but kept in
/// first-seen order (`IndexSet`) so downstream passes are deterministic.
pub fn build_raw_typo_map(
    source_words: &IndexSet<String>,
    adjacency: Option<&Adjacency>,
) -> HashMap<String, IndexSet<String>> {
    let mut map: HashMap<String, IndexSet<String>> = HashMap::new();
    for word in source_words {
        for typo in generate(word, adjacency) {
            map.entry(typo).or_default().insert(word.clone());
        }
    }
    map
}
