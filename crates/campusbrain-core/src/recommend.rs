//! Next-topic suggestions keyed off the matched document's label.
//!
//! An ordered keyword table, scanned in declaration order; the first keyword
//! found as a case-insensitive substring of the source label wins.

/// Keyword table, first match wins. Order is part of the contract.
const RULES: &[(&str, &str)] = &[
    ("dbms", "Explore SQL basics next."),
    ("sorting", "Learn recursion and searching algorithms."),
    ("os", "Study process scheduling concepts."),
];

const FALLBACK: &str = "Continue exploring related fundamentals.";

/// Suggest a next topic for a matched source label. Pure and total: any
/// input, including the empty string, produces a non-empty suggestion.
pub fn recommend(source: &str) -> &'static str {
    let name = source.to_lowercase();
    for (keyword, suggestion) in RULES {
        if name.contains(keyword) {
            return suggestion;
        }
    }
    FALLBACK
}
