//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::User;
use async_trait::async_trait;
use svckit::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores the user and its roles; `user.id` is ignored
    async fn insert(&self, user: &User) -> StoreResult<User>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn list_all(&self) -> StoreResult<Vec<User>>;

    /// Whether a user other than `exclude_id` has this username
    async fn exists_by_username(&self, username: &str, exclude_id: Option<i64>)
        -> StoreResult<bool>;

    /// Whether a user other than `exclude_id` has this e-mail
    async fn exists_by_email(&self, email: &str, exclude_id: Option<i64>) -> StoreResult<bool>;

    /// Overwrites the row and replaces the stored role set
    async fn update(&self, user: &User) -> StoreResult<User>;

    /// Removes the user and its roles; false when it did not exist
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}
