use campusbrain_core::config::{expand_path, Config};
use campusbrain_core::recommend::recommend;
use std::path::Path;

#[test]
fn recommend_matches_table_in_order() {
    assert_eq!(recommend("Dbms"), "Explore SQL basics next.");
    assert_eq!(recommend("Sorting"), "Learn recursion and searching algorithms.");
    assert_eq!(recommend("Os"), "Study process scheduling concepts.");
}

#[test]
fn recommend_is_case_insensitive_substring() {
    assert_eq!(recommend("intro_to_DBMS_notes"), "Explore SQL basics next.");
    assert_eq!(recommend("OS Fundamentals"), "Study process scheduling concepts.");
}

#[test]
fn recommend_falls_back_and_never_returns_empty() {
    for input in ["Networking", "", "   ", "linear algebra"] {
        let suggestion = recommend(input);
        assert!(!suggestion.is_empty(), "suggestion for {input:?} is non-empty");
    }
    assert_eq!(recommend("Networking"), "Continue exploring related fundamentals.");
}

#[test]
fn config_defaults_apply_without_files() {
    let config = Config::load().expect("config");
    assert_eq!(config.preview_chars(), 800);
    assert_eq!(config.metric(), "cosine");
    assert_eq!(config.corpus_dir(), Path::new("knowledge").to_path_buf());
}

#[test]
fn expand_path_handles_plain_strings() {
    assert_eq!(expand_path("knowledge"), Path::new("knowledge").to_path_buf());
}
