//! Human-readable debug reports (SPEC_FULL §0.1), written under
//! `--debug-report <dir>`. Strictly additive: nothing here feeds back
//! into the solver.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use strum::IntoEnumIterator;

use crate::correction::RejectionReason;
use crate::error::{Result, TypodictError};
use crate::state::DictionaryState;

fn write_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, content).map_err(|source| TypodictError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn corrections_report(state: &DictionaryState) -> String {
    let mut by_boundary: HashMap<String, Vec<String>> = HashMap::new();
    for correction in &state.active_corrections {
        by_boundary
            .entry(correction.boundary.to_string())
            .or_default()
            .push(format!("{} -> {}", correction.typo, correction.word));
    }

    let mut out = format!("active corrections: {}\n\n", state.active_corrections.len());
    for boundary in ["NONE", "LEFT", "RIGHT", "BOTH"] {
        let Some(lines) = by_boundary.get(boundary) else {
            continue;
        };
        out.push_str(&format!("[{boundary}] ({})\n", lines.len()));
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn patterns_report(state: &DictionaryState) -> String {
    let mut out = format!("active patterns: {}\n\n", state.active_patterns.len());
    for pattern in &state.active_patterns {
        out.push_str(&format!(
            "{} -> {} [{}]\n",
            pattern.typo, pattern.word, pattern.boundary
        ));
        if let Some(occurrences) = state.pattern_replacements.get(pattern) {
            for occurrence in occurrences {
                out.push_str(&format!("  <- {} -> {}\n", occurrence.typo, occurrence.word));
            }
        }
    }
    out
}

fn graveyard_report(state: &DictionaryState) -> String {
    let mut out = format!("graveyard: {}\n\n", state.graveyard.len());
    for reason in RejectionReason::iter() {
        let entries: Vec<_> = state
            .graveyard
            .iter()
            .filter(|(_, entry)| entry.reason == reason)
            .collect();
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("[{reason}] ({})\n", entries.len()));
        for (correction, entry) in entries {
            out.push_str(&format!(
                "  {} -> {} [{}] iter={} blocker={}\n",
                correction.typo, correction.word, correction.boundary, entry.iteration, entry.blocker
            ));
        }
        out.push('\n');
    }
    out
}

/// Writes `corrections.txt`, `patterns.txt` and `graveyard.txt` under
/// `dir`, reflecting the solver's final converged state.
pub fn write(state: &DictionaryState, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| TypodictError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    write_file(dir, "corrections.txt", &corrections_report(state))?;
    write_file(dir, "patterns.txt", &patterns_report(state))?;
    write_file(dir, "graveyard.txt", &graveyard_report(state))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::correction::Correction;
    use tempfile::TempDir;

    #[test]
    fn writes_three_files_grouped_by_reason_and_boundary() {
        let mut state = DictionaryState::default();
        state.promote_correction(Correction::new("teh", "the", Boundary::None));
        state.bury(
            Correction::new("quater", "quarter", Boundary::None),
            RejectionReason::TooShort,
            "quarter",
        );

        let dir = TempDir::new().unwrap();
        write(&state, dir.path()).unwrap();

        let corrections = fs::read_to_string(dir.path().join("corrections.txt")).unwrap();
        assert!(corrections.contains("teh -> the"));

        let graveyard = fs::read_to_string(dir.path().join("graveyard.txt")).unwrap();
        assert!(graveyard.contains("TOO_SHORT"));
        assert!(graveyard.contains("quater -> quarter"));
    }
}
