//! Four-step symptom intake wizard
//!
//! Collecting → Demographics → Review → Results, with restart available from
//! every step.

mod demographics;
mod machine;
mod state;

pub use demographics::Gender;
pub use machine::{NO_RESULTS, PICK_FROM_AVAILABLE, Wizard};
pub use state::{Step, WizardState};
