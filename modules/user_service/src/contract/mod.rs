//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::UserError;
pub use model::{NewUser, User, UserPatch};
