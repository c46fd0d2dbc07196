//! Best-effort language identification.

/// Sentinel returned when detection fails.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Identify the language of a text.
///
/// Returns an ISO 639-3 code (e.g. "eng") on success. Detection failure
/// (empty, too short, or ambiguous text) is recovered locally and yields
/// [`UNKNOWN_LANGUAGE`]; this function never errors.
pub fn detect_language(text: &str) -> String {
    match whatlang::detect(text) {
        Some(info) => info.lang().code().to_string(),
        None => UNKNOWN_LANGUAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let text = "This agreement is made between the employer and the employee \
                    and governs the terms of employment, salary and termination.";
        assert_eq!(detect_language(text), "eng");
    }

    #[test]
    fn test_empty_text_is_unknown() {
        assert_eq!(detect_language(""), UNKNOWN_LANGUAGE);
    }
}
