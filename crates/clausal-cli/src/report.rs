//! Human-readable report rendering.

use std::fmt::Write;

use clausal_core::{Analysis, SCORE_CEILING};

/// Render the full analysis as a text report.
///
/// With `quiet`, the per-clause section is omitted and only the
/// overview and the overall assessment are kept.
pub fn render(analysis: &Analysis, quiet: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Contract Overview");
    let _ = writeln!(out, "  Detected Language: {}", analysis.language);
    let _ = writeln!(out, "  Contract Type:     {}", analysis.contract_type);
    let _ = writeln!(out, "  Clauses:           {}", analysis.clause_count);

    if !quiet {
        let _ = writeln!(out);
        let _ = writeln!(out, "Clause-by-Clause Analysis");
        for assessment in &analysis.assessments {
            let _ = writeln!(out);
            let _ = writeln!(out, "Clause {} - Risk: {}", assessment.index, assessment.level);
            let _ = writeln!(out, "  Original Clause:");
            indent(&mut out, &assessment.clause, "    ");
            let _ = writeln!(out, "  Simple Explanation:");
            indent(&mut out, &assessment.explanation, "    ");
            if !assessment.triggers.is_empty() {
                let phrases: Vec<&str> = assessment
                    .triggers
                    .iter()
                    .map(|t| t.phrase.as_str())
                    .collect();
                let _ = writeln!(out, "  Triggers: {}", phrases.join(", "));
            }
            if assessment.is_unfavorable() {
                let _ = writeln!(
                    out,
                    "  Warning: Unfavorable clause detected. Consider renegotiation."
                );
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Overall Risk Assessment");
    let _ = writeln!(
        out,
        "  Composite Risk Score: {} / {}",
        analysis.composite_score, SCORE_CEILING
    );
    let _ = writeln!(out, "  Risk Level: {:.0}%", analysis.progress() * 100.0);

    out
}

/// Append a possibly multi-line value with a fixed indent prefix.
fn indent(out: &mut String, text: &str, prefix: &str) {
    if text.is_empty() {
        let _ = writeln!(out, "{}(empty)", prefix);
        return;
    }
    for line in text.lines() {
        let _ = writeln!(out, "{}{}", prefix, line);
    }
}
