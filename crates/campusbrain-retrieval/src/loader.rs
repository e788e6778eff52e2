//! Corpus loader.
//!
//! Reads every recognized plain-text file in the corpus directory into a
//! `Document`. Only the top level of the directory is read; subdirectories
//! are ignored. A missing or empty directory is bootstrapped with a small
//! fixed sample set so the system runs with zero configuration. Listing is
//! sorted by path, which fixes index positions deterministically across
//! platforms and repeated loads.
//!
//! Partial-failure policy: an unreadable file is skipped with a warning and
//! loading continues; only the directory itself being unreadable or
//! uncreatable is `Error::CorpusLoad`.

use std::fs;
use std::path::{Path, PathBuf};

use campusbrain_core::error::Error;
use campusbrain_core::types::Document;

pub const RECOGNIZED_EXTENSIONS: &[&str] = &["txt", "md"];

/// Bootstrap content written when the directory holds no recognized files.
/// Seeding never overwrites an existing file.
const SAMPLE_DOCUMENTS: &[(&str, &str)] = &[
    ("dbms.txt", "DBMS organizes data efficiently using tables and schemas."),
    ("os.txt", "Operating systems manage memory, processes, and hardware."),
    (
        "sorting.txt",
        "Sorting algorithms arrange data in ascending or descending order.",
    ),
];

pub fn load_corpus(dir: &Path) -> Result<Vec<Document>, Error> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            Error::CorpusLoad(format!("cannot create {}: {}", dir.display(), e))
        })?;
    }

    let mut files = list_recognized_files(dir)?;
    if files.is_empty() {
        seed_sample_documents(dir)?;
        files = list_recognized_files(dir)?;
    }

    let mut documents = Vec::new();
    for path in files {
        match read_file_content(&path) {
            Some(content) => documents.push(document_from(&path, content)),
            None => continue,
        }
    }
    Ok(documents)
}

fn list_recognized_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            // The root being unreadable is fatal; anything below it is not.
            Err(e) if e.path() == Some(dir) => {
                return Err(Error::CorpusLoad(format!(
                    "cannot read {}: {}",
                    dir.display(),
                    e
                )))
            }
            Err(e) => {
                eprintln!("⚠️  Skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let recognized = entry
            .path()
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| RECOGNIZED_EXTENSIONS.contains(&ext));
        if recognized {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn seed_sample_documents(dir: &Path) -> Result<(), Error> {
    for (name, content) in SAMPLE_DOCUMENTS {
        let path = dir.join(name);
        if path.exists() {
            continue;
        }
        fs::write(&path, content).map_err(|e| {
            Error::CorpusLoad(format!("cannot seed {}: {}", path.display(), e))
        })?;
    }
    println!("📚 Seeded sample corpus in {}", dir.display());
    Ok(())
}

/// Read a file, tolerating invalid UTF-8 via a lossy fallback. Returns
/// `None` (after warning) when the file cannot be read at all.
fn read_file_content(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(_) => match fs::read(path) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).to_string()),
            Err(e) => {
                eprintln!("⚠️  Skipping unreadable file {}: {}", path.display(), e);
                None
            }
        },
    }
}

fn document_from(path: &Path, content: String) -> Document {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    Document {
        display_name: display_name_from_stem(&stem),
        id: stem,
        content,
    }
}

/// `intro_to-dbms` becomes `Intro To Dbms`.
fn display_name_from_stem(stem: &str) -> String {
    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::display_name_from_stem;

    #[test]
    fn display_names_replace_separators_and_title_case() {
        assert_eq!(display_name_from_stem("dbms"), "Dbms");
        assert_eq!(display_name_from_stem("intro_to-dbms_basics"), "Intro To Dbms Basics");
        assert_eq!(display_name_from_stem("OS_NOTES"), "Os Notes");
        assert_eq!(display_name_from_stem(""), "");
    }
}
