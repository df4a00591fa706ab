//! Module declaration and lifecycle implementation

use crate::api::rest::{openapi::UserApiDoc, routes};
use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::{migrations::Migrator, SeaOrmUserRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use svckit::ServiceModule;
use utoipa::OpenApi;

/// User service module
pub struct UserServiceModule {
    service: Arc<Service>,
}

impl UserServiceModule {
    pub fn init(db: Arc<DatabaseConnection>, config: Config) -> Self {
        let users = Arc::new(SeaOrmUserRepository::new(db));
        tracing::info!(roles = ?config.allowed_roles, "User service initialized");
        Self {
            service: Arc::new(Service::new(users, config)),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }
}

#[async_trait]
impl ServiceModule for UserServiceModule {
    fn name(&self) -> &'static str {
        "user_service"
    }

    async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("User service migrations completed");
        Ok(())
    }

    fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering user service REST routes");
        Ok(routes::register_routes(router, self.service.clone()))
    }

    fn openapi(&self) -> utoipa::openapi::OpenApi {
        UserApiDoc::openapi()
    }
}
