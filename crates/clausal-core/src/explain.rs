//! Clause explanations.

/// Longest clause prefix an explanation restates.
const EXPLANATION_CHARS: usize = 120;

/// Restate a clause as a fixed-format "explanation".
///
/// This is a truncation, not a simplification: the first 120 characters
/// of the clause, possibly cut mid-word, with an ellipsis marker. The
/// cut is char-based so multi-byte text is never split inside a code
/// point.
pub fn simple_explanation(clause: &str) -> String {
    let head: String = clause.chars().take(EXPLANATION_CHARS).collect();
    format!("This clause means: {}...", head)
}
