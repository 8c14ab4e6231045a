//! Error taxonomy (spec.md §7).
//!
//! Configuration errors and I/O failures propagate directly to the user.
//! Domain rejections are not errors — see [`crate::correction::RejectionReason`].
//! Invariant violations and worker crashes are fatal and halt the driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypodictError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: figment::Error,
    },

    #[error("pass invariant violated at iteration {iteration} in pass {pass}: {triple}")]
    InvariantViolation {
        iteration: u32,
        pass: &'static str,
        triple: String,
    },

    #[error("solver did not converge after {iterations} iterations")]
    ConvergenceFailure { iterations: u32 },

    #[error("worker task panicked: {0}")]
    WorkerCrash(String),
}

pub type Result<T> = std::result::Result<T, TypodictError>;
