//! HTTP request handlers - thin layer that delegates to the domain service

use super::dto::*;
use crate::contract::Client;
use crate::domain::Service;
use axum::{http::StatusCode, Extension};
use std::sync::Arc;
use svckit::api::{created, ok};
use svckit::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResult, BearerToken};

fn client_dtos(clients: Vec<Client>) -> Vec<ClientDto> {
    clients.into_iter().map(ClientDto::from).collect()
}

pub async fn list_clients(
    Extension(service): Extension<Arc<Service>>,
) -> ApiResult<Vec<ClientDto>> {
    let clients = service.list_clients().await?;
    ok("Clients retrieved successfully", client_dtos(clients))
}

pub async fn list_active_clients(
    Extension(service): Extension<Arc<Service>>,
) -> ApiResult<Vec<ClientDto>> {
    let clients = service.list_active_clients().await?;
    ok("Active clients retrieved successfully", client_dtos(clients))
}

pub async fn search_clients(
    Extension(service): Extension<Arc<Service>>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<Vec<ClientDto>> {
    let clients = service
        .search_clients(query.term.as_deref().unwrap_or_default())
        .await?;
    ok("Clients retrieved successfully", client_dtos(clients))
}

pub async fn get_client(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ClientDto> {
    let client = service.get_client(id).await?;
    ok("Client retrieved successfully", client.into())
}

pub async fn get_client_by_email(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(email): ApiPath<String>,
) -> ApiResult<ClientDto> {
    let client = service.get_client_by_email(&email).await?;
    ok("Client retrieved successfully", client.into())
}

pub async fn create_client(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<CreateClientRequest>,
) -> ApiResult<ClientDto> {
    let client = service.create_client(req.into()).await?;
    created("Client created successfully", client.into())
}

pub async fn update_client(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateClientRequest>,
) -> ApiResult<ClientDto> {
    let client = service.update_client(id, req.into()).await?;
    ok("Client updated successfully", client.into())
}

pub async fn delete_client(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The caller's bearer token is forwarded to the case service
pub async fn list_client_cases(
    Extension(service): Extension<Arc<Service>>,
    BearerToken(token): BearerToken,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Vec<CaseSummaryDto>> {
    let cases = service.list_client_cases(id, token.as_deref()).await?;
    ok(
        "Client cases retrieved successfully",
        cases.into_iter().map(CaseSummaryDto::from).collect(),
    )
}

pub async fn get_client_case(
    Extension(service): Extension<Arc<Service>>,
    BearerToken(token): BearerToken,
    ApiPath((id, case_id)): ApiPath<(i64, i64)>,
) -> ApiResult<CaseSummaryDto> {
    let case = service
        .get_client_case(id, case_id, token.as_deref())
        .await?;
    ok("Client case retrieved successfully", case.into())
}
