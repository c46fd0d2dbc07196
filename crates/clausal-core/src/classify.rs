//! Contract type classification.
//!
//! Classification is a first-match scan over a fixed, ordered keyword
//! table. Both the category order and the word order within a category
//! are significant: the first category whose first present word is found
//! wins any tie, so the table is an ordered slice, never a hash map.

use crate::types::ContractType;

/// Category trigger words, in tie-break order.
pub const CATEGORY_KEYWORDS: &[(ContractType, &[&str])] = &[
    (ContractType::Employment, &["employee", "salary", "termination"]),
    (ContractType::Service, &["services", "deliverables", "payment"]),
    (ContractType::Vendor, &["vendor", "purchase", "supply"]),
    (ContractType::Lease, &["lease", "rent", "premises"]),
    (ContractType::Partnership, &["partner", "profit", "loss"]),
];

/// Classify a contract by its full text.
///
/// Case-insensitive substring search; returns the first category in
/// [`CATEGORY_KEYWORDS`] with any trigger word present, or
/// [`ContractType::Unknown`] when nothing matches.
pub fn classify(text: &str) -> ContractType {
    let lowered = text.to_lowercase();

    for (category, words) in CATEGORY_KEYWORDS {
        for word in *words {
            if lowered.contains(word) {
                return *category;
            }
        }
    }

    ContractType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_employment() {
        let text = "The employee shall receive a monthly salary.";
        assert_eq!(classify(text), ContractType::Employment);
    }

    #[test]
    fn test_classifies_lease() {
        let text = "Tenant agrees to rent the premises for two years.";
        assert_eq!(classify(text), ContractType::Lease);
    }

    #[test]
    fn test_first_category_wins_ties() {
        // Both Employment ("employee") and Vendor ("vendor") triggers are
        // present; Employment is declared first, so it wins.
        let text = "The vendor shall assign one employee to the project.";
        assert_eq!(classify(text), ContractType::Employment);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(classify("SALARY REVIEW ANNUALLY"), ContractType::Employment);
    }

    #[test]
    fn test_substring_match() {
        // "supply" matches inside "supplying"
        assert_eq!(
            classify("Responsible for supplying raw materials."),
            ContractType::Vendor
        );
    }

    #[test]
    fn test_no_match_is_unknown() {
        assert_eq!(classify("Lorem ipsum dolor sit amet."), ContractType::Unknown);
        assert_eq!(classify(""), ContractType::Unknown);
    }
}
