//! Typeahead suggestions over the vocabulary

use super::selection::SelectionSet;
use super::vocabulary::Vocabulary;

/// Maximum number of suggestions offered for one query
pub const MAX_SUGGESTIONS: usize = 8;

/// Suggest vocabulary entries containing `text` that are not yet selected.
///
/// Matching is a case-insensitive substring test against the trimmed text,
/// in vocabulary order, capped at [`MAX_SUGGESTIONS`]. Blank text yields no
/// suggestions, which callers treat as "close the overlay".
pub fn suggest(text: &str, selection: &SelectionSet, vocabulary: &Vocabulary) -> Vec<String> {
    let query = text.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    vocabulary
        .iter_folded()
        .filter(|(entry, folded)| folded.contains(&query) && !selection.contains(entry))
        .take(MAX_SUGGESTIONS)
        .map(|(entry, _)| entry.to_string())
        .collect()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
