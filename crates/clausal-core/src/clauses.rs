//! Clause segmentation.
//!
//! Contracts are split at numbered-list boundaries: a newline, optional
//! whitespace, then an integer followed by a period ("\n1.", "\n  2.").
//! The numbered marker stays with the clause it opens; the boundary
//! whitespace is dropped.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The capture group marks where the next clause begins. The regex
    // crate has no lookahead, so the boundary is cut at the group start
    // instead of splitting on "\n\s*(?=\d+\.)".
    static ref CLAUSE_BOUNDARY: Regex = Regex::new(r"\n\s*(\d+\.)").unwrap();
}

/// Split a contract text into an ordered sequence of clauses.
///
/// Pure function: no markers means the whole text is a single clause,
/// and empty input yields one empty clause. Never returns an empty
/// sequence.
pub fn split_clauses(text: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut start = 0;

    for caps in CLAUSE_BOUNDARY.captures_iter(text) {
        let boundary = caps.get(0).expect("match has a full group");
        let marker = caps.get(1).expect("pattern has a capture group");
        clauses.push(text[start..boundary.start()].to_string());
        start = marker.start();
    }

    clauses.push(text[start..].to_string());
    clauses
}
