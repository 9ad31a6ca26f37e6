use diagnosis_engine::RuleSet;
use tracing::info;

use crate::{core::config::DiagnoseConfig, error_handler::AppError};

/// Shared state for all HTTP handlers. Immutable after construction.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: DiagnoseConfig,
    /// Ordered classification rules.
    pub rules: RuleSet,
}

impl AppState {
    pub fn new(config: DiagnoseConfig, rules: RuleSet) -> Self {
        Self { config, rules }
    }

    /// Build state from config, loading the rule file if one is configured.
    pub fn from_config(config: DiagnoseConfig) -> Result<Self, AppError> {
        let rules = match &config.rules_path {
            Some(path) => {
                let rules = RuleSet::from_path(path)?;
                info!(path = %path.display(), rules = rules.rules.len(), "loaded rule file");
                rules
            }
            None => {
                info!("using built-in rule set");
                RuleSet::builtin()
            }
        };
        Ok(Self::new(config, rules))
    }
}
