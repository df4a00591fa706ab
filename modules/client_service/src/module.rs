//! Module declaration and lifecycle implementation

use crate::api::rest::{openapi::ClientApiDoc, routes};
use crate::config::Config;
use crate::domain::{CaseDirectory, Service};
use crate::infra::case_client::HttpCaseDirectory;
use crate::infra::storage::{migrations::Migrator, SeaOrmClientRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use svckit::ServiceModule;
use utoipa::OpenApi;

/// Client service module
pub struct ClientServiceModule {
    service: Arc<Service>,
}

impl ClientServiceModule {
    /// Wire the repository over `db` and the case service client from
    /// `config.case_service`
    pub fn init(db: Arc<DatabaseConnection>, config: Config) -> Result<Self> {
        let cases = Arc::new(HttpCaseDirectory::new(&config.case_service)?);
        tracing::info!(case_service = %config.case_service.base_url, "Client service initialized");
        Ok(Self::with_directory(db, cases, config))
    }

    /// Same as [`init`](Self::init) with a caller-supplied case directory
    pub fn with_directory(
        db: Arc<DatabaseConnection>,
        cases: Arc<dyn CaseDirectory>,
        config: Config,
    ) -> Self {
        let clients = Arc::new(SeaOrmClientRepository::new(db));
        Self {
            service: Arc::new(Service::new(clients, cases, config)),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }
}

#[async_trait]
impl ServiceModule for ClientServiceModule {
    fn name(&self) -> &'static str {
        "client_service"
    }

    async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Client service migrations completed");
        Ok(())
    }

    fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering client service REST routes");
        Ok(routes::register_routes(router, self.service.clone()))
    }

    fn openapi(&self) -> utoipa::openapi::OpenApi {
        ClientApiDoc::openapi()
    }
}
