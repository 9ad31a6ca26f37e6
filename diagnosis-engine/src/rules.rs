//! Ordered keyword rules with first-match semantics.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{diagnosis::Diagnosis, errors::RulesError};

/// A single keyword rule.
///
/// Matches when the lower-cased description contains any of `keywords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier used in logs (e.g. `power`, `leak`).
    pub id: String,
    /// Lower-case substrings, any of which triggers the rule.
    pub keywords: Vec<String>,
    pub diagnosis: Diagnosis,
}

impl Rule {
    pub fn new<I, K>(id: impl Into<String>, keywords: I, diagnosis: Diagnosis) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self {
            id: id.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            diagnosis,
        }
    }

    /// `lowered` must already be lower-cased.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && lowered.contains(k.as_str()))
    }
}

/// Which branch produced a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch<'a> {
    /// Description was empty after trimming.
    Empty,
    /// A keyword rule matched; carries the rule id.
    Rule(&'a str),
    /// Nothing matched.
    Fallback,
}

impl Branch<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Branch::Empty => "empty",
            Branch::Rule(id) => *id,
            Branch::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification<'a> {
    pub branch: Branch<'a>,
    pub diagnosis: &'a Diagnosis,
}

/// Priority-ordered rules plus the empty-input and fallback outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub empty: Diagnosis,
    #[serde(default)]
    pub rules: Vec<Rule>,
    pub fallback: Diagnosis,
}

impl RuleSet {
    /// Classify a raw description.
    ///
    /// Leading/trailing whitespace (see [`is_trim_whitespace`]) is ignored.
    /// Rules are tested top to bottom and the first match wins.
    pub fn classify(&self, description: &str) -> Classification<'_> {
        let trimmed = description.trim_matches(is_trim_whitespace);
        if trimmed.is_empty() {
            return Classification {
                branch: Branch::Empty,
                diagnosis: &self.empty,
            };
        }

        let lowered = trimmed.to_lowercase();
        match self.rules.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => Classification {
                branch: Branch::Rule(&rule.id),
                diagnosis: &rule.diagnosis,
            },
            None => Classification {
                branch: Branch::Fallback,
                diagnosis: &self.fallback,
            },
        }
    }

    /// Parse a rule set from JSON, lower-case its keywords and validate it.
    pub fn from_json_str(raw: &str) -> Result<Self, RulesError> {
        let mut set: RuleSet = serde_json::from_str(raw)?;
        for rule in &mut set.rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.trim().to_lowercase();
            }
        }
        set.validate()?;
        debug!(rules = set.rules.len(), "rule set parsed");
        Ok(set)
    }

    /// Read and parse a JSON rule file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Check structural constraints.
    ///
    /// # Errors
    /// [`RulesError::Invalid`] when a confidence is outside `[0, 1]`, a summary
    /// is blank, a rule has no usable keyword, or two rules share an id.
    pub fn validate(&self) -> Result<(), RulesError> {
        check_diagnosis("empty", &self.empty)?;
        check_diagnosis("fallback", &self.fallback)?;

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.id.trim().is_empty() {
                return Err(RulesError::Invalid("rule id must not be blank".into()));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(RulesError::Invalid(format!("duplicate rule id `{}`", rule.id)));
            }
            if rule.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(RulesError::Invalid(format!(
                    "rule `{}` has no keywords",
                    rule.id
                )));
            }
            check_diagnosis(&rule.id, &rule.diagnosis)?;
        }
        Ok(())
    }
}

/// Whitespace stripped around a description: the ECMAScript `WhiteSpace` and
/// `LineTerminator` sets. Unlike [`char::is_whitespace`] this includes the BOM
/// (U+FEFF) and excludes NEL (U+0085) and U+001C..U+001F.
pub fn is_trim_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn check_diagnosis(owner: &str, d: &Diagnosis) -> Result<(), RulesError> {
    if !(0.0..=1.0).contains(&d.confidence) {
        return Err(RulesError::Invalid(format!(
            "`{owner}` confidence {} is outside [0, 1]",
            d.confidence
        )));
    }
    if d.summary.trim().is_empty() {
        return Err(RulesError::Invalid(format!("`{owner}` summary is blank")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> RuleSet {
        RuleSet {
            empty: Diagnosis::new("empty", 0.1, ["a"]),
            rules: vec![
                Rule::new("first", ["Alpha"], Diagnosis::new("first", 0.5, ["x"])),
                Rule::new("second", ["alpha", "beta"], Diagnosis::new("second", 0.5, ["y"])),
            ],
            fallback: Diagnosis::new("fallback", 0.2, ["z"]),
        }
    }

    #[test]
    fn first_match_wins() {
        let set = tiny();
        assert_eq!(set.classify("alpha and beta").branch, Branch::Rule("first"));
        assert_eq!(set.classify("only BETA").branch, Branch::Rule("second"));
    }

    #[test]
    fn blank_input_is_empty_branch() {
        let set = tiny();
        let c = set.classify(" \t\n ");
        assert_eq!(c.branch, Branch::Empty);
        assert_eq!(c.diagnosis.summary, "empty");
    }

    #[test]
    fn bom_is_trimmed_but_nel_is_not() {
        let set = tiny();
        assert_eq!(set.classify("\u{FEFF}").branch, Branch::Empty);
        assert_eq!(set.classify("\u{3000}\u{2028} \u{A0}").branch, Branch::Empty);
        assert_eq!(set.classify("\u{0085}").branch, Branch::Fallback);
        assert_eq!(set.classify("\u{001F}").branch, Branch::Fallback);
    }

    #[test]
    fn unmatched_input_falls_back() {
        let set = tiny();
        let c = set.classify("gamma");
        assert_eq!(c.branch, Branch::Fallback);
        assert_eq!(c.diagnosis.confidence, 0.2);
    }

    #[test]
    fn keywords_are_lowercased_on_load() {
        let raw = r#"{
            "empty": {"summary": "e", "confidence": 0.4, "actions": []},
            "rules": [{"id": "hot", "keywords": ["  CALIENTA "], "diagnosis": {"summary": "h", "confidence": 0.9, "actions": ["a"]}}],
            "fallback": {"summary": "f", "confidence": 0.65, "actions": []}
        }"#;
        let set = RuleSet::from_json_str(raw).unwrap();
        assert_eq!(set.rules[0].keywords, vec!["calienta".to_string()]);
        assert_eq!(set.classify("Se Calienta mucho").branch, Branch::Rule("hot"));
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        let mut set = tiny();
        set.rules[1].diagnosis.confidence = 1.5;
        assert!(matches!(set.validate(), Err(RulesError::Invalid(_))));

        let mut set = tiny();
        set.fallback.confidence = f64::NAN;
        assert!(set.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_ids_and_blank_keywords() {
        let mut set = tiny();
        set.rules[1].id = "first".into();
        assert!(set.validate().is_err());

        let mut set = tiny();
        set.rules[0].keywords = vec!["  ".into()];
        assert!(set.validate().is_err());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            RuleSet::from_json_str("{ nope"),
            Err(RulesError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RuleSet::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
    }
}
