//! CLI surface and configuration merging (spec.md §6, SPEC_FULL §0).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use figment::providers::{Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypodictError};
use crate::platform::PlatformKind;

#[derive(Debug, Parser)]
#[command(
    name = "typodict",
    about = "Generates typo-correction dictionaries for text-expander and keyboard-firmware autocorrect engines.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a typo-correction dictionary.
    Build(BuildArgs),

    /// Generate shell completions.
    GenerateCompletions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Parser, Serialize, Deserialize)]
pub struct BuildArgs {
    /// Load additional settings from a JSON config file; CLI flags win
    /// on conflicting keys.
    #[arg(long)]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Pull the top N words by corpus frequency as source words.
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Path to a validation word list (one word per line).
    #[arg(long)]
    pub validation: Option<PathBuf>,

    /// Path to a user word list (one per line, `#` comments).
    #[arg(long)]
    pub include: Option<PathBuf>,

    /// Path to an exclusion pattern list.
    #[arg(long)]
    pub exclude: Option<PathBuf>,

    /// Path to a keyboard adjacency map (`key -> chars` per line).
    #[arg(long)]
    pub adjacent_letters: Option<PathBuf>,

    /// Path to a `word -> frequency` table (SPEC_FULL §0.1).
    #[arg(long)]
    pub word_freq: Option<PathBuf>,

    #[arg(long, default_value_t = 3)]
    pub min_word_length: usize,

    #[arg(long, default_value_t = 10)]
    pub max_word_length: usize,

    #[arg(long, default_value_t = 4)]
    pub min_typo_length: usize,

    #[arg(long, default_value_t = 10.0)]
    pub freq_ratio: f64,

    #[arg(long, default_value_t = 0.0)]
    pub typo_freq_threshold: f64,

    #[arg(long, default_value_t = 500)]
    pub max_entries_per_file: usize,

    #[arg(long)]
    pub max_corrections: Option<usize>,

    #[arg(long, default_value = "espanso")]
    pub platform: String,

    #[arg(long)]
    pub jobs: Option<usize>,

    #[arg(long, default_value_t = 10)]
    pub max_iterations: u32,

    /// Output directory (espanso) or file (qmk).
    #[arg(long, default_value = "dist")]
    pub output: PathBuf,

    /// Directory to write human-readable per-pass debug reports into.
    #[arg(long)]
    pub debug_report: Option<PathBuf>,
}

impl Default for BuildArgs {
    /// Mirrors the `#[arg(default_value...)]` attributes above — kept in
    /// sync manually since `clap::Parser` only applies those when
    /// parsing actual CLI input, not via `Default::default()`.
    fn default() -> Self {
        Self {
            config: None,
            top_n: None,
            validation: None,
            include: None,
            exclude: None,
            adjacent_letters: None,
            word_freq: None,
            min_word_length: 3,
            max_word_length: 10,
            min_typo_length: 4,
            freq_ratio: 10.0,
            typo_freq_threshold: 0.0,
            max_entries_per_file: 500,
            max_corrections: None,
            platform: "espanso".to_string(),
            jobs: None,
            max_iterations: 10,
            output: PathBuf::from("dist"),
            debug_report: None,
        }
    }
}

/// Fully resolved, validated configuration. Distinct from `BuildArgs` so
/// that validation (a configuration error per spec.md §7) happens once,
/// before any solving begins.
#[derive(Debug, Clone)]
pub struct Config {
    pub top_n: Option<usize>,
    pub validation: Option<PathBuf>,
    pub include: Option<PathBuf>,
    pub exclude: Option<PathBuf>,
    pub adjacent_letters: Option<PathBuf>,
    pub word_freq: Option<PathBuf>,
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub min_typo_length: usize,
    pub freq_ratio: f64,
    pub typo_freq_threshold: f64,
    pub max_entries_per_file: usize,
    pub max_corrections: Option<usize>,
    pub platform: PlatformKind,
    pub jobs: usize,
    pub max_iterations: u32,
    pub output: PathBuf,
    pub debug_report: Option<PathBuf>,
}

impl BuildArgs {
    /// Merge `--config <path>` (if given) under the CLI-supplied flags,
    /// CLI wins on conflicts, then validate.
    pub fn resolve(self) -> Result<Config> {
        let merged: BuildArgs = if let Some(path) = &self.config {
            let mut figment = Figment::new().merge(Json::file(path));
            figment = figment.merge(Serialized::defaults(&self));
            figment.extract().map_err(|source| TypodictError::ConfigParse {
                path: path.display().to_string(),
                source,
            })?
        } else {
            self
        };

        if merged.top_n.is_none() && merged.include.is_none() {
            return Err(TypodictError::Config(
                "at least one of `top_n` or `include` must be set".to_string(),
            ));
        }

        if merged.top_n.is_some() && merged.word_freq.is_none() {
            return Err(TypodictError::Config(
                "top_n requires word_freq (a word -> frequency table to rank by)".to_string(),
            ));
        }

        if merged.min_word_length == 0 || merged.min_word_length > merged.max_word_length {
            return Err(TypodictError::Config(format!(
                "invalid word length range: min {} max {}",
                merged.min_word_length, merged.max_word_length
            )));
        }

        if merged.min_typo_length == 0 {
            return Err(TypodictError::Config(
                "min_typo_length must be at least 1".to_string(),
            ));
        }

        if merged.freq_ratio <= 0.0 {
            return Err(TypodictError::Config(
                "freq_ratio must be positive".to_string(),
            ));
        }

        let platform: PlatformKind = merged
            .platform
            .parse()
            .map_err(TypodictError::Config)?;

        let jobs = merged.jobs.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(1)
        });

        Ok(Config {
            top_n: merged.top_n,
            validation: merged.validation,
            include: merged.include,
            exclude: merged.exclude,
            adjacent_letters: merged.adjacent_letters,
            word_freq: merged.word_freq,
            min_word_length: merged.min_word_length,
            max_word_length: merged.max_word_length,
            min_typo_length: merged.min_typo_length,
            freq_ratio: merged.freq_ratio,
            typo_freq_threshold: merged.typo_freq_threshold,
            max_entries_per_file: merged.max_entries_per_file,
            max_corrections: merged.max_corrections,
            platform,
            jobs,
            max_iterations: merged.max_iterations,
            output: merged.output,
            debug_report: merged.debug_report,
        })
    }
}
