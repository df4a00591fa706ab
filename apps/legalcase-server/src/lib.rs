//! Legal case management host: configuration loading and router assembly.
//! The binary in `main.rs` adds the CLI, logging and the listener.

pub mod config;
pub mod server;

pub use config::AppConfig;
