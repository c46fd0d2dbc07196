//! Summary export artifact.

use serde::{Deserialize, Serialize};

use crate::types::Analysis;

/// User-triggered snapshot of an analysis, suitable for download.
///
/// Not persisted anywhere by this crate; the caller decides where the
/// JSON goes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryExport {
    pub contract_type: String,
    pub language: String,
    pub risk_score: u32,
}

impl SummaryExport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            contract_type: analysis.contract_type.to_string(),
            language: analysis.language.clone(),
            risk_score: analysis.composite_score,
        }
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
