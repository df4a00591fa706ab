//! Database connection settings

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Database configuration shared by all service modules in a process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DbConfig {
    /// Connection string, e.g. `postgres://app@localhost/legal` or `sqlite::memory:`
    #[serde(default = "default_dsn")]
    pub dsn: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dsn: default_dsn(),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl DbConfig {
    pub fn in_memory() -> Self {
        Self {
            dsn: default_dsn(),
            ..Self::default()
        }
    }

    fn is_in_memory(&self) -> bool {
        self.dsn.starts_with("sqlite") && self.dsn.contains(":memory:")
    }
}

fn default_dsn() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

/// Open a connection pool.
///
/// In-memory SQLite is pinned to a single connection: every pooled
/// connection would otherwise see its own empty database.
pub async fn connect(cfg: &DbConfig) -> anyhow::Result<DatabaseConnection> {
    let max_connections = if cfg.is_in_memory() {
        1
    } else {
        cfg.max_connections
    };

    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(cfg.connect_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to database ({})", redact(&cfg.dsn)))?;

    tracing::info!(dsn = %redact(&cfg.dsn), max_connections, "database connected");
    Ok(db)
}

/// Strip credentials from a DSN before logging it
fn redact(dsn: &str) -> String {
    match (dsn.find("://"), dsn.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &dsn[..scheme_end], &dsn[at..])
        }
        _ => dsn.to_string(),
    }
}
