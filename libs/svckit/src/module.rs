//! Lifecycle contract between the host and a service module

use async_trait::async_trait;
use axum::Router;
use sea_orm::DatabaseConnection;

/// A service mounted by the host process.
///
/// The host runs [`ServiceModule::migrate`] for every enabled module before
/// serving, then nests each module's routes under the API prefix.
#[async_trait]
pub trait ServiceModule: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Apply this module's schema migrations
    async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()>;

    /// Add this module's routes to `router`
    fn register_rest(&self, router: Router) -> anyhow::Result<Router>;

    /// Component schemas for the merged API document
    fn openapi(&self) -> utoipa::openapi::OpenApi;
}
