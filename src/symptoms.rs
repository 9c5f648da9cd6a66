//! Symptom vocabulary, typeahead matching and the chosen-symptom set
//!
//! Suggestions use case-insensitive substring containment while committing
//! free text requires case-insensitive equality with a vocabulary entry.
//! A label that is both an exact entry and a substring of another entry
//! (e.g. "pain" is not an entry, but "back pain" contains "pain") can be
//! suggested without being committable, and vice versa an exact entry can be
//! committed without ever having been highlighted.

mod engine;
mod reconciler;
mod selection;
mod vocabulary;

pub use engine::{MAX_SUGGESTIONS, suggest};
pub use reconciler::{Reconciliation, reconcile};
pub use selection::SelectionSet;
pub use vocabulary::{BUILTIN_SYMPTOMS, Vocabulary};
