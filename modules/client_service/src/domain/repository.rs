//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Client, UniqueField};
use async_trait::async_trait;
use svckit::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// `client.id` is ignored, the store assigns one
    async fn insert(&self, client: &Client) -> StoreResult<Client>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Client>>;

    /// Exact, case-insensitive match
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Client>>;

    async fn list_all(&self) -> StoreResult<Vec<Client>>;

    async fn list_active(&self) -> StoreResult<Vec<Client>>;

    /// Case-insensitive substring match on name OR surname
    async fn search(&self, term: &str) -> StoreResult<Vec<Client>>;

    /// Whether another client (not `exclude_id`) already holds `value`
    async fn exists_by_unique_field(
        &self,
        field: UniqueField,
        value: &str,
        exclude_id: Option<i64>,
    ) -> StoreResult<bool>;

    async fn update(&self, client: &Client) -> StoreResult<Client>;

    /// Returns false when the client does not exist
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}
