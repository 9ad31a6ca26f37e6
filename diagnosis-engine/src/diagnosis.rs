use serde::{Deserialize, Serialize};

/// Confidence reported by every keyword rule and by the generic fallback.
pub const DEFAULT_CONFIDENCE: f64 = 0.65;

/// Confidence reported when the description is empty after trimming.
pub const EMPTY_INPUT_CONFIDENCE: f64 = 0.4;

/// Canned outcome of a classification branch.
///
/// `summary`, `confidence` and `actions` always travel together: a branch
/// owns exactly one `Diagnosis` and they are never mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// One-paragraph explanation of the likely cause.
    pub summary: String,
    /// Fixed score in `[0, 1]`. Not derived from the input text.
    pub confidence: f64,
    /// Ordered list of recommended next steps.
    pub actions: Vec<String>,
}

impl Diagnosis {
    pub fn new<S, A>(summary: S, confidence: f64, actions: A) -> Self
    where
        S: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            summary: summary.into(),
            confidence,
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }
}
