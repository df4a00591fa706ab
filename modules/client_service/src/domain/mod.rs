//! Domain layer - business logic and rules

pub mod ports;
pub mod repository;
pub mod rules;
pub mod service;
pub mod validation;

pub use ports::CaseDirectory;
pub use service::Service;
