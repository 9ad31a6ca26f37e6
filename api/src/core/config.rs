//! Service configuration read from environment variables.
//!
//! # Environment variables
//! - `API_ADDRESS`          = bind address (default `0.0.0.0:8080`)
//! - `REQUIRE_AUTH`         = enforce `Authorization: Bearer ...` (default `false`)
//! - `DIAGNOSIS_RULES_PATH` = optional JSON rule file replacing the built-in rules

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A boolean flag held something other than true/false/1/0/yes/no.
    #[error("invalid boolean in {var}: `{value}`")]
    InvalidBool { var: &'static str, value: String },
}

/// Runtime configuration for the diagnose endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnoseConfig {
    /// Address the HTTP listener binds to.
    pub bind_address: String,
    /// Reject requests without a bearer token with 401.
    pub require_auth: bool,
    /// Rule file to load instead of the built-in rule set.
    pub rules_path: Option<PathBuf>,
}

impl Default for DiagnoseConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            require_auth: false,
            rules_path: None,
        }
    }
}

impl DiagnoseConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let require_auth = match get("REQUIRE_AUTH") {
            Some(raw) => parse_bool("REQUIRE_AUTH", &raw)?,
            None => defaults.require_auth,
        };

        Ok(Self {
            bind_address: get("API_ADDRESS")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.bind_address),
            require_auth,
            rules_path: get("DIAGNOSIS_RULES_PATH").map(|v| PathBuf::from(v.trim())),
        })
    }

    pub fn with_require_auth(mut self, require_auth: bool) -> Self {
        self.require_auth = require_auth;
        self
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = DiagnoseConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, DiagnoseConfig::default());
        assert!(!cfg.require_auth);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = DiagnoseConfig::from_lookup(lookup(&[
            ("API_ADDRESS", "127.0.0.1:9000"),
            ("REQUIRE_AUTH", "TRUE"),
            ("DIAGNOSIS_RULES_PATH", "/etc/diagnose/rules.json"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_address, "127.0.0.1:9000");
        assert!(cfg.require_auth);
        assert_eq!(cfg.rules_path, Some(PathBuf::from("/etc/diagnose/rules.json")));
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg =
            DiagnoseConfig::from_lookup(lookup(&[("API_ADDRESS", "  "), ("REQUIRE_AUTH", "")]))
                .unwrap();
        assert_eq!(cfg.bind_address, DEFAULT_BIND_ADDRESS);
        assert!(!cfg.require_auth);
    }

    #[test]
    fn invalid_bool_is_rejected() {
        let err = DiagnoseConfig::from_lookup(lookup(&[("REQUIRE_AUTH", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { var: "REQUIRE_AUTH", .. }));
    }
}
