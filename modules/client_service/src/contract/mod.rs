//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::ClientError;
pub use model::{CaseSummary, Client, ClientPatch, NewClient, UniqueField};
