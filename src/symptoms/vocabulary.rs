//! Fixed, ordered set of canonical symptom labels

use std::collections::HashSet;

/// Built-in symptom labels, in display order
pub const BUILTIN_SYMPTOMS: [&str; 18] = [
    "headache",
    "fever",
    "cough",
    "sore throat",
    "runny nose",
    "nausea",
    "vomiting",
    "diarrhea",
    "fatigue",
    "dizziness",
    "chills",
    "shortness of breath",
    "abdominal pain",
    "back pain",
    "chest pain",
    "muscle pain",
    "joint pain",
    "rash",
];

/// Immutable ordered vocabulary, compared case-insensitively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
    /// Lower-cased copies of `entries`, same order
    folded: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(BUILTIN_SYMPTOMS)
    }
}

impl Vocabulary {
    /// Build a vocabulary from canonical labels.
    ///
    /// Blank labels and later case-insensitive duplicates are dropped.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut folded = Vec::new();

        for label in labels {
            let label: String = label.into();
            let label = label.trim().to_string();
            if label.is_empty() {
                continue;
            }
            let key = label.to_lowercase();
            if !seen.insert(key.clone()) {
                log::debug!("Dropping duplicate vocabulary entry {:?}", label);
                continue;
            }
            entries.push(label);
            folded.push(key);
        }

        Self { entries, folded }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical labels in vocabulary order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate `(canonical, lower_cased)` pairs in vocabulary order
    pub fn iter_folded(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .zip(self.folded.iter())
            .map(|(entry, folded)| (entry.as_str(), folded.as_str()))
    }

    /// Find the canonical entry equal to `text`, ignoring case and
    /// surrounding whitespace.
    pub fn find_exact(&self, text: &str) -> Option<&str> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.iter_folded()
            .find(|(_, folded)| *folded == needle)
            .map(|(entry, _)| entry)
    }

    /// Whether `text` is a canonical symptom
    pub fn contains(&self, text: &str) -> bool {
        self.find_exact(text).is_some()
    }
}

#[cfg(test)]
#[path = "vocabulary_tests.rs"]
mod vocabulary_tests;
