//! Configuration for the user service module

use serde::{Deserialize, Serialize};

/// User service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Mount this service in the current process
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_max_username_length")]
    pub max_username_length: usize,

    /// Role names a user may hold, upper-case
    #[serde(default = "default_allowed_roles")]
    pub allowed_roles: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            max_username_length: default_max_username_length(),
            allowed_roles: default_allowed_roles(),
        }
    }
}

impl Config {
    /// Whether `role` (already normalized) is on the allow-list
    pub fn allows_role(&self, role: &str) -> bool {
        self.allowed_roles
            .iter()
            .any(|allowed| svckit::auth::normalize_role(allowed) == role)
    }
}

fn default_true() -> bool {
    true
}

fn default_max_username_length() -> usize {
    50
}

fn default_allowed_roles() -> Vec<String> {
    ["ADMIN", "LAWYER", "ASSISTANT", "CLIENT"]
        .into_iter()
        .map(String::from)
        .collect()
}
