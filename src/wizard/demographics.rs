//! Optional demographic fields

use serde::{Deserialize, Serialize};

/// Self-reported gender; a closed set, unknown values fail to deserialize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Unspecified,
        Gender::Male,
        Gender::Female,
        Gender::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Unspecified => "Prefer not to say",
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Next choice in [`Gender::ALL`], wrapping
    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous choice in [`Gender::ALL`], wrapping
    pub fn previous(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Value sent to the analysis service; unspecified is omitted
    pub fn for_request(self) -> Option<Gender> {
        match self {
            Gender::Unspecified => None,
            other => Some(other),
        }
    }

    fn index(self) -> usize {
        match self {
            Gender::Unspecified => 0,
            Gender::Male => 1,
            Gender::Female => 2,
            Gender::Other => 3,
        }
    }
}
