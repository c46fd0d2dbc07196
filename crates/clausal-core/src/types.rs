//! Core types for contract risk analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// At most this many clauses contribute to the composite score.
///
/// Clauses past the tenth are still counted in [`Analysis::clause_count`]
/// but receive no assessment.
pub const MAX_SCORED_CLAUSES: usize = 10;

/// Composite score ceiling: `MAX_SCORED_CLAUSES` clauses at High risk.
pub const SCORE_CEILING: u32 = 30;

/// Risk bucket for a single clause.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a raw trigger score.
    ///
    /// score >= 6 is High, score >= 3 is Medium, anything below is Low.
    pub fn from_score(score: u32) -> Self {
        if score >= 6 {
            RiskLevel::High
        } else if score >= 3 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Contribution of this bucket to the composite score.
    pub fn weight(self) -> u32 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Detected contract category.
///
/// Declaration order is load-bearing: classification returns the first
/// category whose trigger word appears in the text, so reordering these
/// variants changes tie-break behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContractType {
    Employment,
    Service,
    Vendor,
    Lease,
    Partnership,
    Unknown,
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractType::Employment => write!(f, "Employment"),
            ContractType::Service => write!(f, "Service"),
            ContractType::Vendor => write!(f, "Vendor"),
            ContractType::Lease => write!(f, "Lease"),
            ContractType::Partnership => write!(f, "Partnership"),
            ContractType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A trigger phrase found in a clause, with its weight.
///
/// Hits are the evidence behind a clause's score: every point in
/// [`RiskAssessment::score`] traces back to exactly one hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriggerHit {
    /// The trigger phrase that matched (lowercase, as configured)
    pub phrase: String,

    /// Weight this phrase contributed to the score
    pub weight: u32,
}

/// Per-clause analysis output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// 1-based position of the clause in the split sequence
    pub index: usize,

    /// The clause text as split from the document
    pub clause: String,

    /// Sum of matched trigger weights
    pub score: u32,

    /// Bucketed risk level
    pub level: RiskLevel,

    /// Triggers that produced the score, in table order
    pub triggers: Vec<TriggerHit>,

    /// Truncated restatement of the clause
    pub explanation: String,
}

impl RiskAssessment {
    /// Whether this clause warrants a renegotiation warning.
    pub fn is_unfavorable(&self) -> bool {
        self.level == RiskLevel::High
    }
}

/// Full analysis result for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Best-guess language code, or "unknown"
    pub language: String,

    /// Detected contract category
    pub contract_type: ContractType,

    /// Total number of clauses the document split into
    pub clause_count: usize,

    /// Assessments for the first [`MAX_SCORED_CLAUSES`] clauses
    pub assessments: Vec<RiskAssessment>,

    /// Sum of per-clause bucket weights over the assessed clauses
    pub composite_score: u32,
}

impl Analysis {
    /// Composite score normalized against [`SCORE_CEILING`], clamped to [0, 1].
    ///
    /// This is the value behind the progress indicator; the raw
    /// `composite_score` is displayed unclamped.
    pub fn progress(&self) -> f64 {
        (f64::from(self.composite_score) / f64::from(SCORE_CEILING)).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_buckets() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(14), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_weights() {
        assert_eq!(RiskLevel::Low.weight(), 1);
        assert_eq!(RiskLevel::Medium.weight(), 2);
        assert_eq!(RiskLevel::High.weight(), 3);
    }

    #[test]
    fn test_contract_type_display() {
        assert_eq!(ContractType::Employment.to_string(), "Employment");
        assert_eq!(ContractType::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_progress_clamps_to_one() {
        let analysis = Analysis {
            language: "eng".to_string(),
            contract_type: ContractType::Unknown,
            clause_count: 0,
            assessments: vec![],
            composite_score: SCORE_CEILING + 5,
        };
        assert_eq!(analysis.progress(), 1.0);
    }

    #[test]
    fn test_progress_is_ratio_below_ceiling() {
        let analysis = Analysis {
            language: "eng".to_string(),
            contract_type: ContractType::Unknown,
            clause_count: 0,
            assessments: vec![],
            composite_score: 15,
        };
        assert!((analysis.progress() - 0.5).abs() < f64::EPSILON);
    }
}
