//! Keyword-driven triage of free-text equipment failure reports.
//!
//! A [`RuleSet`] is an ordered list of keyword rules plus two fixed outcomes:
//! one for an empty report and one used when no rule matches. Classification
//! is a pure function of the trimmed, lower-cased description, so identical
//! input always yields the identical [`Diagnosis`].
//!
//! ```
//! use diagnosis_engine::{Branch, RuleSet};
//!
//! let rules = RuleSet::builtin();
//! let hit = rules.classify("La lavadora NO ENCIENDE");
//! assert_eq!(hit.branch, Branch::Rule("power"));
//! ```

pub mod builtin;
pub mod diagnosis;
pub mod errors;
pub mod rules;

pub use diagnosis::{DEFAULT_CONFIDENCE, Diagnosis, EMPTY_INPUT_CONFIDENCE};
pub use errors::RulesError;
pub use rules::{Branch, Classification, Rule, RuleSet, is_trim_whitespace};
