//! Wizard state value

use super::demographics::Gender;
use crate::analysis::AnalysisResult;
use crate::overlay::SuggestionOverlay;
use crate::symptoms::SelectionSet;

/// Wizard step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Collecting,
    Demographics,
    Review,
    Results,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Collecting,
        Step::Demographics,
        Step::Review,
        Step::Results,
    ];

    /// One-based position shown in the step indicator
    pub fn number(self) -> usize {
        match self {
            Step::Collecting => 1,
            Step::Demographics => 2,
            Step::Review => 3,
            Step::Results => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Collecting => "Symptoms",
            Step::Demographics => "About you",
            Step::Review => "Review",
            Step::Results => "Results",
        }
    }
}

/// Everything the wizard shows, as one value
///
/// `Default` is the freshly mounted state; restart returns to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    /// Pending free text in the symptom input
    pub input: String,
    pub selection: SelectionSet,
    pub overlay: SuggestionOverlay,
    pub age: Option<u32>,
    pub gender: Gender,
    pub result: Option<AnalysisResult>,
    /// Message shown under the current step
    pub error: Option<String>,
    /// A submission is outstanding
    pub loading: bool,
}
