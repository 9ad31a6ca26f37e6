use diagnosis_engine::Diagnosis;
use serde::Serialize;

/// Response payload for the diagnose endpoint (wrapped in `ApiResponse`).
#[derive(Debug, Serialize)]
pub struct DiagnoseResponse<'a> {
    /// Whether an `Authorization: Bearer ...` header was sent.
    pub auth_present: bool,
    pub summary: &'a str,
    pub confidence: f64,
    pub actions: &'a [String],
}

impl<'a> DiagnoseResponse<'a> {
    pub fn new(auth_present: bool, diagnosis: &'a Diagnosis) -> Self {
        Self {
            auth_present,
            summary: &diagnosis.summary,
            confidence: diagnosis.confidence,
            actions: &diagnosis.actions,
        }
    }
}
