//! Layered process configuration
//!
//! Defaults, then the YAML file, then `LEGALCASE__*` environment variables
//! (`__` separates nesting levels), then CLI overrides.

use anyhow::Context;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use svckit::{AuthConfig, DbConfig, LoggingConfig};

/// Environment variable prefix, e.g. `LEGALCASE__SERVER__PORT=9090`
pub const ENV_PREFIX: &str = "LEGALCASE__";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Whole-process configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DbConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub cases: case_service::Config,

    #[serde(default)]
    pub clients: client_service::Config,

    #[serde(default)]
    pub users: user_service::Config,
}

impl AppConfig {
    /// Load defaults, the optional YAML file and the environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    /// `--port` wins over every other source; `--mock` swaps the database
    /// for in-memory SQLite
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, mock: bool) {
        if let Some(port) = port {
            self.server.port = port;
        }
        if mock {
            self.database = DbConfig::in_memory();
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that need no database: auth keys and upstream URLs
    pub fn validate(&self) -> anyhow::Result<()> {
        svckit::AuthState::from_config(&self.auth).context("invalid auth section")?;
        if self.clients.enabled {
            url::Url::parse(&self.clients.case_service.base_url)
                .context("invalid clients.case_service.base_url")?;
        }
        if !(self.cases.enabled || self.clients.enabled || self.users.enabled) {
            anyhow::bail!("no service is enabled");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_enable_every_service() {
        let config = AppConfig::default();
        assert!(config.cases.enabled && config.clients.enabled && config.users.enabled);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.database.dsn, "sqlite::memory:");
    }

    #[test]
    fn yaml_then_env_then_cli() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "legalcase.yaml",
                r#"
server:
  port: 9000
cases:
  case_number_prefix: LAW
clients:
  case_service:
    base_url: http://cases:8080
    request_timeout: 750ms
"#,
            )?;
            jail.set_env("LEGALCASE__SERVER__HOST", "127.0.0.1");
            jail.set_env("LEGALCASE__USERS__ENABLED", "false");

            let mut config = AppConfig::load(Some(Path::new("legalcase.yaml")))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config.bind_addr(), "127.0.0.1:9000");
            assert_eq!(config.cases.case_number_prefix, "LAW");
            assert_eq!(config.clients.case_service.base_url, "http://cases:8080");
            assert_eq!(
                config.clients.case_service.request_timeout,
                std::time::Duration::from_millis(750)
            );
            assert!(!config.users.enabled);

            config.apply_cli_overrides(Some(7000), true);
            assert_eq!(config.server.port, 7000);
            assert_eq!(config.database.dsn, "sqlite::memory:");
            Ok(())
        });
    }

    #[test]
    fn shipped_sample_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/legalcase.yaml");
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.auth.policy, svckit::PolicyTable::default_rules());
        config.validate().unwrap();
    }

    #[test]
    fn unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.yaml", "cases:\n  colour: blue\n")?;
            assert!(AppConfig::load(Some(Path::new("bad.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn validate_requires_a_signing_key() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_err());

        config.auth.jwt_secret = Some("secret".to_string());
        config.validate().unwrap();

        config.auth.enabled = false;
        config.auth.jwt_secret = None;
        config.validate().unwrap();
    }
}
