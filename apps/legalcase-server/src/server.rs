//! Router assembly: service modules, health, OpenAPI and the auth layer

use crate::config::AppConfig;
use anyhow::Context;
use axum::{middleware, routing::get, Extension, Json, Router};
use case_service::CaseServiceModule;
use client_service::ClientServiceModule;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use svckit::api::ok;
use svckit::auth::{authorize, API_PREFIX};
use svckit::{ApiResult, AuthState, ServiceModule};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use user_service::UserServiceModule;
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};

/// Instantiate every service enabled in `config`
pub fn enabled_modules(
    config: &AppConfig,
    db: &Arc<DatabaseConnection>,
) -> anyhow::Result<Vec<Box<dyn ServiceModule>>> {
    let mut modules: Vec<Box<dyn ServiceModule>> = Vec::new();
    if config.cases.enabled {
        modules.push(Box::new(CaseServiceModule::init(
            db.clone(),
            config.cases.clone(),
        )));
    }
    if config.clients.enabled {
        modules.push(Box::new(
            ClientServiceModule::init(db.clone(), config.clients.clone())
                .context("failed to initialize client service")?,
        ));
    }
    if config.users.enabled {
        modules.push(Box::new(UserServiceModule::init(
            db.clone(),
            config.users.clone(),
        )));
    }
    if modules.is_empty() {
        warn!("No service enabled; only /health will answer");
    }
    Ok(modules)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    pub status: &'static str,
    pub services: Vec<&'static str>,
}

#[derive(Clone)]
struct Mounted(Arc<Vec<&'static str>>);

async fn health(Extension(Mounted(services)): Extension<Mounted>) -> ApiResult<HealthDto> {
    ok(
        "Service is healthy",
        HealthDto {
            status: "UP",
            services: services.as_ref().clone(),
        },
    )
}

async fn openapi_json(Extension(doc): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}

fn base_openapi() -> OpenApi {
    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("Legal Case Management API")
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )
        .build()
}

/// Run migrations of every enabled module and mount its routes under the
/// API prefix, behind the authorization middleware
pub async fn build_router(
    config: &AppConfig,
    db: Arc<DatabaseConnection>,
) -> anyhow::Result<Router> {
    let auth = AuthState::from_config(&config.auth).context("invalid auth configuration")?;

    let mut api = Router::new();
    let mut openapi = base_openapi();
    let mut names = Vec::new();
    for module in enabled_modules(config, &db)? {
        module
            .migrate(&db)
            .await
            .with_context(|| format!("migrations failed for {}", module.name()))?;
        api = module
            .register_rest(api)
            .with_context(|| format!("route registration failed for {}", module.name()))?;
        openapi.merge(module.openapi());
        names.push(module.name());
        info!(module = module.name(), "Module mounted");
    }

    let prefix = API_PREFIX.trim_end_matches('/');
    Ok(Router::new()
        .nest(prefix, api)
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(Extension(Mounted(Arc::new(names))))
        .layer(Extension(Arc::new(openapi)))
        .layer(middleware::from_fn_with_state(auth, authorize))
        .layer(TraceLayer::new_for_http()))
}
