//! Exact-match commit of comma-delimited free text

use super::selection::SelectionSet;
use super::vocabulary::Vocabulary;

/// Outcome of reconciling free text against the vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Canonical entries to add, in the order they appeared in the text
    pub added: Vec<String>,
}

impl Reconciliation {
    /// True when at least one segment matched a new symptom
    pub fn ok(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Match each comma-separated segment of `text` exactly (ignoring case)
/// against the vocabulary.
///
/// Segments that match nothing, or match a symptom already in `selection`,
/// are skipped. The same symptom named twice is only added once. Nothing is
/// mutated; callers apply `added` to their selection.
pub fn reconcile(text: &str, selection: &SelectionSet, vocabulary: &Vocabulary) -> Reconciliation {
    let mut added: Vec<String> = Vec::new();

    for segment in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let Some(canonical) = vocabulary.find_exact(segment) else {
            continue;
        };
        if selection.contains(canonical) || added.iter().any(|a| a == canonical) {
            continue;
        }
        added.push(canonical.to_string());
    }

    Reconciliation { added }
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod reconciler_tests;
