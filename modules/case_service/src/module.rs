//! Module declaration and lifecycle implementation

use crate::api::rest::{openapi::CaseApiDoc, routes};
use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::{
    migrations::Migrator, SeaOrmCaseRepository, SeaOrmDocumentRepository, SeaOrmHearingRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use svckit::ServiceModule;
use utoipa::OpenApi;

/// Case service module: cases, hearings and documents
pub struct CaseServiceModule {
    service: Arc<Service>,
}

impl CaseServiceModule {
    /// Wire repositories over `db` and build the domain service
    pub fn init(db: Arc<DatabaseConnection>, config: Config) -> Self {
        let cases = Arc::new(SeaOrmCaseRepository::new(db.clone()));
        let hearings = Arc::new(SeaOrmHearingRepository::new(db.clone()));
        let documents = Arc::new(SeaOrmDocumentRepository::new(db));

        let service = Arc::new(Service::new(cases, hearings, documents, config));
        tracing::info!("Case service initialized");
        Self { service }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }
}

#[async_trait]
impl ServiceModule for CaseServiceModule {
    fn name(&self) -> &'static str {
        "case_service"
    }

    async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Case service migrations completed");
        Ok(())
    }

    fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering case service REST routes");
        Ok(routes::register_routes(router, self.service.clone()))
    }

    fn openapi(&self) -> utoipa::openapi::OpenApi {
        CaseApiDoc::openapi()
    }
}
