//! Client Service Module
//!
//! Clients and their contact and identity data. Cases belong to the case
//! service and are read from it over HTTP.

// Public exports
pub mod contract;
pub use contract::{CaseSummary, Client, ClientError, ClientPatch, NewClient};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::ClientServiceModule;

pub mod api;
pub mod domain;
pub mod infra;
