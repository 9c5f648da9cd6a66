//! Ordered, deduplicated set of chosen symptoms

/// Chosen canonical symptoms in the order they were added
///
/// Membership is case-insensitive; the stored spelling is whatever was
/// added first, which callers keep canonical by adding vocabulary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `symptom` unless it is already present.
    ///
    /// Returns true if the set changed.
    pub fn add(&mut self, symptom: &str) -> bool {
        if self.contains(symptom) {
            return false;
        }
        self.items.push(symptom.to_string());
        true
    }

    /// Remove the symptom at `index`, keeping the order of the rest.
    ///
    /// An out-of-range index is a caller bug; it leaves the set untouched.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            log::debug!(
                "Ignoring remove({}) on selection of {} symptoms",
                index,
                self.items.len()
            );
            return None;
        }
        Some(self.items.remove(index))
    }

    pub fn contains(&self, symptom: &str) -> bool {
        let needle = symptom.to_lowercase();
        self.items.iter().any(|item| item.to_lowercase() == needle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
