//! Advisory text for an analysis result

use crate::analysis::AnalysisResult;

pub const HIGH_SEVERITY_TIPS: &str =
    "Your symptoms may need urgent attention. Seek emergency care or contact a doctor right away.";

pub const MEDIUM_SEVERITY_TIPS: &str =
    "Rest, stay hydrated and consider over-the-counter remedies. Consult a healthcare provider if symptoms persist or get worse.";

pub const GENERAL_TIPS: &str =
    "Drink plenty of fluids, get some rest and keep an eye on how you feel. Seek care if anything changes.";

/// Coarse severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    High,
    Medium,
    /// Low, unknown or missing severity
    General,
}

impl SeverityTier {
    /// Classify a free-form severity label, ignoring case and padding
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => SeverityTier::High,
            "medium" => SeverityTier::Medium,
            _ => SeverityTier::General,
        }
    }

    pub fn tips(self) -> &'static str {
        match self {
            SeverityTier::High => HIGH_SEVERITY_TIPS,
            SeverityTier::Medium => MEDIUM_SEVERITY_TIPS,
            SeverityTier::General => GENERAL_TIPS,
        }
    }
}

/// Guidance to show alongside `result`
pub fn tips(result: &AnalysisResult) -> &'static str {
    SeverityTier::from_label(&result.severity).tips()
}
