//! Startup loaders for the title corpus and the policy word lists.
//!
//! Plain files hold one entry per line; blank lines and lines starting with `#` are
//! skipped. Files with a `.json` extension are read as a JSON array of strings.

pub mod error;


pub use error::WordListError;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

/// Loads a word list as a lowercased, deduplicated set.
pub fn load_word_list(path: &Path) -> Result<HashSet<String>, WordListError> {
    let words: HashSet<String> = read_entries(path)?
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect();

    debug!(path = %path.display(), words = words.len(), "Loaded word list");
    Ok(words)
}

/// Loads corpus titles in file order, raw text preserved.
pub fn load_titles(path: &Path) -> Result<Vec<String>, WordListError> {
    let titles = read_entries(path)?;
    debug!(path = %path.display(), titles = titles.len(), "Loaded title corpus");
    Ok(titles)
}

fn read_entries(path: &Path) -> Result<Vec<String>, WordListError> {
    let contents = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_json(path) {
        let entries: Vec<String> =
            serde_json::from_str(&contents).map_err(|source| WordListError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(entries
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect());
    }

    Ok(parse_lines(&contents))
}

fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
