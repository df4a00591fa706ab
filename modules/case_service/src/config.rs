//! Configuration for the case service module

use serde::{Deserialize, Serialize};

/// Case service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Mount this service in the current process
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Prefix of generated case numbers (`CASE-2026-1A2B3C4D`)
    #[serde(default = "default_case_number_prefix")]
    pub case_number_prefix: String,

    /// Attempts before giving up on a colliding case number
    #[serde(default = "default_case_number_max_attempts")]
    pub case_number_max_attempts: u32,

    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,

    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,

    /// Horizon of the upcoming-hearings listing
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            case_number_prefix: default_case_number_prefix(),
            case_number_max_attempts: default_case_number_max_attempts(),
            max_title_length: default_max_title_length(),
            max_description_length: default_max_description_length(),
            upcoming_window_days: default_upcoming_window_days(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_case_number_prefix() -> String {
    "CASE".to_string()
}

fn default_case_number_max_attempts() -> u32 {
    5
}

fn default_max_title_length() -> usize {
    200
}

fn default_max_description_length() -> usize {
    5000
}

fn default_upcoming_window_days() -> u32 {
    30
}
