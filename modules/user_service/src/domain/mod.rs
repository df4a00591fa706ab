//! Domain layer - business logic and rules

pub mod repository;
pub mod rules;
pub mod service;
pub mod validation;

pub use service::Service;
