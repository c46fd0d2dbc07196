//! Per-clause risk scoring.
//!
//! A clause's risk is the sum of fixed weights for each trigger phrase
//! found in it: additive across distinct triggers, each trigger counted
//! at most once, no normalization by clause length. The raw score is
//! bucketed into Low, Medium or High by [`RiskLevel::from_score`].

use crate::explain::simple_explanation;
use crate::types::{RiskAssessment, RiskLevel, TriggerHit};

/// Trigger phrases and their weights, in table order.
pub const RISK_TRIGGERS: &[(&str, u32)] = &[
    ("penalty", 3),
    ("indemnity", 4),
    ("terminate at any time", 4),
    ("exclusive", 2),
    ("non-compete", 3),
    ("jurisdiction", 2),
];

/// Score one clause against the trigger table.
///
/// Case-insensitive substring search; returns the raw score together
/// with the hits that produced it.
pub fn score_clause(clause: &str) -> (u32, Vec<TriggerHit>) {
    let lowered = clause.to_lowercase();
    let mut score = 0;
    let mut hits = Vec::new();

    for (phrase, weight) in RISK_TRIGGERS {
        if lowered.contains(phrase) {
            score += weight;
            hits.push(TriggerHit {
                phrase: (*phrase).to_string(),
                weight: *weight,
            });
        }
    }

    (score, hits)
}

/// Build the full assessment for a clause at a 1-based position.
pub fn assess_clause(index: usize, clause: &str) -> RiskAssessment {
    let (score, triggers) = score_clause(clause);

    RiskAssessment {
        index,
        clause: clause.to_string(),
        score,
        level: RiskLevel::from_score(score),
        triggers,
        explanation: simple_explanation(clause),
    }
}
