//! # clausal-core
//!
//! Deterministic contract risk analysis engine.
//!
//! This crate takes a contract document and answers:
//! - What kind of contract is this?
//! - Which clauses carry risk, and why?
//! - How risky is the document overall?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Rule-based**: Fixed keyword tables, no model calls
//! 3. **Traceable**: Every point of risk cites the trigger phrase behind it
//! 4. **One-way pipeline**: extract → detect → classify → split → score → log
//!
//! ## Example
//!
//! ```rust,ignore
//! use clausal_core::{analyze_and_log, FileAuditSink, MediaType};
//!
//! let bytes = std::fs::read("contract.txt")?;
//! let mut sink = FileAuditSink::new("audit_log.json");
//! let analysis = analyze_and_log(&bytes, MediaType::PlainText, &mut sink)?;
//!
//! println!("Type: {}", analysis.contract_type);
//! for assessment in &analysis.assessments {
//!     println!("Clause {} - Risk: {}", assessment.index, assessment.level);
//! }
//! println!("Composite Risk Score: {} / 30", analysis.composite_score);
//! ```

pub mod audit;
pub mod classify;
pub mod clauses;
pub mod explain;
pub mod export;
pub mod extract;
pub mod language;
pub mod risk;
pub mod types;

// Re-export main types at crate root
pub use audit::{AuditError, AuditRecord, AuditSink, FileAuditSink, MemoryAuditSink};
pub use export::SummaryExport;
pub use extract::{ExtractError, MediaType, PARSING_PLACEHOLDER};
pub use types::{
    Analysis, ContractType, RiskAssessment, RiskLevel, TriggerHit, MAX_SCORED_CLAUSES,
    SCORE_CEILING,
};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur during document analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),
}

/// Analyze contract text through the full pipeline.
///
/// Detects the language, classifies the contract, splits it into
/// clauses, and scores the first [`MAX_SCORED_CLAUSES`] of them. Later
/// clauses are counted but not assessed. Pure: no IO, no side effects.
pub fn analyze(text: &str) -> Analysis {
    let language = language::detect_language(text);
    let contract_type = classify::classify(text);
    let all_clauses = clauses::split_clauses(text);
    debug!(
        %contract_type,
        language = %language,
        clause_count = all_clauses.len(),
        "document segmented"
    );

    let assessments: Vec<RiskAssessment> = all_clauses
        .iter()
        .take(MAX_SCORED_CLAUSES)
        .enumerate()
        .map(|(i, clause)| risk::assess_clause(i + 1, clause))
        .collect();

    let composite_score = assessments.iter().map(|a| a.level.weight()).sum();
    debug!(composite_score, "analysis complete");

    Analysis {
        language,
        contract_type,
        clause_count: all_clauses.len(),
        assessments,
        composite_score,
    }
}

/// Analyze an uploaded document from its raw bytes.
///
/// Extraction failures (invalid UTF-8 in plain text) are fatal for the
/// document and propagate to the caller.
pub fn analyze_bytes(bytes: &[u8], media_type: MediaType) -> Result<Analysis, AnalysisError> {
    let text = extract::extract_text(bytes, media_type)?;
    Ok(analyze(&text))
}

/// Analyze an uploaded document and append one audit record to `sink`.
pub fn analyze_and_log(
    bytes: &[u8],
    media_type: MediaType,
    sink: &mut dyn AuditSink,
) -> Result<Analysis, AnalysisError> {
    let analysis = analyze_bytes(bytes, media_type)?;
    sink.append(&AuditRecord::from_analysis(&analysis))?;
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPLOYMENT_CONTRACT: &str =
        "1. Employee salary shall be paid monthly.\n2. Either party may terminate at any time with penalty.";

    #[test]
    fn test_end_to_end_employment_contract() {
        let analysis = analyze(EMPLOYMENT_CONTRACT);

        assert_eq!(analysis.contract_type, ContractType::Employment);
        assert_eq!(analysis.clause_count, 2);
        assert_eq!(analysis.assessments.len(), 2);

        let first = &analysis.assessments[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.level, RiskLevel::Low);

        let second = &analysis.assessments[1];
        assert_eq!(second.score, 7);
        assert_eq!(second.level, RiskLevel::High);
        assert!(second.is_unfavorable());

        // Low (1) + High (3)
        assert_eq!(analysis.composite_score, 4);
    }

    #[test]
    fn test_only_first_ten_clauses_are_assessed() {
        let text: String = (1..=14)
            .map(|i| format!("{}. Clause with indemnity and penalty terms.", i))
            .collect::<Vec<_>>()
            .join("\n");

        let analysis = analyze(&text);
        assert_eq!(analysis.clause_count, 14);
        assert_eq!(analysis.assessments.len(), MAX_SCORED_CLAUSES);
        // 10 High-risk clauses, weight 3 each
        assert_eq!(analysis.composite_score, SCORE_CEILING);
        assert_eq!(analysis.progress(), 1.0);
    }

    #[test]
    fn test_empty_document_is_one_low_clause() {
        let analysis = analyze("");
        assert_eq!(analysis.clause_count, 1);
        assert_eq!(analysis.language, language::UNKNOWN_LANGUAGE);
        assert_eq!(analysis.contract_type, ContractType::Unknown);
        assert_eq!(analysis.composite_score, 1);
    }

    #[test]
    fn test_analyze_bytes_propagates_bad_utf8() {
        let result = analyze_bytes(&[0xf0, 0x28, 0x8c, 0x28], MediaType::PlainText);
        assert!(matches!(
            result,
            Err(AnalysisError::Extract(ExtractError::InvalidUtf8(_)))
        ));
    }

    #[test]
    fn test_pdf_bytes_analyze_as_placeholder() {
        let analysis = analyze_bytes(b"%PDF-1.7", MediaType::Pdf).unwrap();
        assert_eq!(analysis.clause_count, 1);
        assert_eq!(analysis.assessments[0].clause, PARSING_PLACEHOLDER);
    }

    #[test]
    fn test_analyze_and_log_appends_one_record() {
        let mut sink = MemoryAuditSink::new();
        let analysis =
            analyze_and_log(EMPLOYMENT_CONTRACT.as_bytes(), MediaType::PlainText, &mut sink)
                .unwrap();

        assert_eq!(sink.records().len(), 1);
        let record = &sink.records()[0];
        assert_eq!(record.contract_type, "Employment");
        assert_eq!(record.risk_score, analysis.composite_score);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn composite_score_stays_within_ceiling(text in "(\\PC|\n){0,400}") {
                let analysis = analyze(&text);
                prop_assert!(analysis.composite_score >= 1);
                prop_assert!(analysis.composite_score <= SCORE_CEILING);
            }

            #[test]
            fn progress_is_clamped(text in "(\\PC|\n){0,400}") {
                let analysis = analyze(&text);
                let progress = analysis.progress();
                prop_assert!((0.0..=1.0).contains(&progress));
            }

            #[test]
            fn splitter_output_is_never_empty(text in "(\\PC|\n){0,400}") {
                prop_assert!(!clauses::split_clauses(&text).is_empty());
            }

            #[test]
            fn assessments_never_exceed_cap(text in "(\\PC|\n){0,400}") {
                let analysis = analyze(&text);
                prop_assert!(analysis.assessments.len() <= MAX_SCORED_CLAUSES);
                prop_assert!(analysis.assessments.len() <= analysis.clause_count);
            }
        }
    }
}
