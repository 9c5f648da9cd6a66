//! Terminal symptom-intake wizard
//!
//! Collects symptoms against a fixed vocabulary with typeahead, optional
//! demographics, and hands the selection to a remote analysis service.

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod overlay;
pub mod results;
pub mod symptoms;
pub mod widgets;
pub mod wizard;
