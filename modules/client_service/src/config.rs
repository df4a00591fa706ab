//! Configuration for the client service module

use serde::{Deserialize, Serialize};
use svckit::UpstreamConfig;

/// Client service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Mount this service in the current process
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Where the case service is reached; always over HTTP, even when both
    /// services share a process
    #[serde(default)]
    pub case_service: UpstreamConfig,

    /// Upper bound for name and surname
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            case_service: UpstreamConfig::default(),
            max_name_length: default_max_name_length(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_name_length() -> usize {
    100
}
