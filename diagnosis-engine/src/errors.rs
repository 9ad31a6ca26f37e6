use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a rule set.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RulesError {
    /// Rule file could not be read.
    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid JSON or does not match the rule set shape.
    #[error("failed to parse rule set: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rule set parsed but breaks a structural constraint.
    #[error("invalid rule set: {0}")]
    Invalid(String),
}
