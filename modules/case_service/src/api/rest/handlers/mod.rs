//! HTTP request handlers - thin layer that delegates to the domain service

pub mod cases;
pub mod documents;
pub mod hearings;
