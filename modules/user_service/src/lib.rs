//! User Service Module
//!
//! Application users and their roles. Authentication itself happens in the
//! identity provider; this service keeps the local profile and role set.

// Public exports
pub mod contract;
pub use contract::{NewUser, User, UserError, UserPatch};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::UserServiceModule;

pub mod api;
pub mod domain;
pub mod infra;
