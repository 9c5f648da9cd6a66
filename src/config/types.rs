// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::overlay::DEFAULT_BLUR_CLOSE_DELAY;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Analysis service section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            endpoint: default_endpoint(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Suggestion overlay section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_blur_close_ms")]
    pub blur_close_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            blur_close_ms: default_blur_close_ms(),
        }
    }
}

impl OverlayConfig {
    pub fn blur_close_delay(&self) -> Duration {
        Duration::from_millis(self.blur_close_ms)
    }
}

fn default_blur_close_ms() -> u64 {
    DEFAULT_BLUR_CLOSE_DELAY.as_millis() as u64
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}
