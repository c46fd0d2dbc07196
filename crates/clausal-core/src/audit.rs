//! Append-only audit logging.
//!
//! Every analyzed document leaves one line-delimited JSON record behind.
//! The sink is injected so callers (and tests) can substitute an
//! in-memory collector for the real log file. Records are never read
//! back, rotated or deleted by this crate.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::Analysis;

/// Errors that can occur while appending an audit record.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to write audit log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode audit record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome metadata of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditRecord {
    /// RFC 3339 UTC timestamp of the run
    pub timestamp: String,

    /// Detected contract category
    pub contract_type: String,

    /// Composite risk score of the document
    pub risk_score: u32,
}

impl AuditRecord {
    /// Snapshot an analysis result, stamped with the current time.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            contract_type: analysis.contract_type.to_string(),
            risk_score: analysis.composite_score,
        }
    }
}

/// An append-only destination for audit records.
pub trait AuditSink {
    /// Append one record. Must never mutate previously written records.
    fn append(&mut self, record: &AuditRecord) -> Result<(), AuditError>;
}

/// Audit sink backed by a line-delimited JSON file.
///
/// The file is opened in append mode on every write, so concurrent
/// sessions can share it; partial-line interleaving under truly
/// concurrent writers is accepted.
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AuditSink for FileAuditSink {
    fn append(&mut self, record: &AuditRecord) -> Result<(), AuditError> {
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

/// In-memory audit sink for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Vec<AuditRecord>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records appended so far, oldest first.
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&mut self, record: &AuditRecord) -> Result<(), AuditError> {
        self.records.push(record.clone());
        Ok(())
    }
}
