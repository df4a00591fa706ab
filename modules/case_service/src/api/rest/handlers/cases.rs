use super::super::{dto::*, mapper::parse_enum};
use crate::contract::{CaseError, CasePatch, CaseStatus, NewCase};
use crate::domain::Service;
use axum::{http::StatusCode, Extension};
use std::sync::Arc;
use svckit::api::{created, ok};
use svckit::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResult};

fn case_dtos(cases: Vec<crate::contract::Case>) -> Vec<CaseDto> {
    cases.into_iter().map(CaseDto::from).collect()
}

pub async fn list_cases(Extension(service): Extension<Arc<Service>>) -> ApiResult<Vec<CaseDto>> {
    let cases = service.list_cases().await?;
    ok("Cases retrieved successfully", case_dtos(cases))
}

pub async fn get_case(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<CaseDto> {
    let case = service.get_case(id).await?;
    ok("Case retrieved successfully", case.into())
}

pub async fn get_case_by_number(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(case_number): ApiPath<String>,
) -> ApiResult<CaseDto> {
    let case = service.get_case_by_number(&case_number).await?;
    ok("Case retrieved successfully", case.into())
}

pub async fn create_case(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<CreateCaseRequest>,
) -> ApiResult<CaseDto> {
    let case = service.create_case(NewCase::try_from(req)?).await?;
    created("Case created successfully", case.into())
}

pub async fn update_case(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateCaseRequest>,
) -> ApiResult<CaseDto> {
    let case = service.update_case(id, CasePatch::try_from(req)?).await?;
    ok("Case updated successfully", case.into())
}

pub async fn update_case_status(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateCaseStatusRequest>,
) -> ApiResult<CaseDto> {
    let status = req
        .status
        .ok_or_else(|| CaseError::invalid_field("status", "is required"))?;
    let status: CaseStatus = parse_enum("status", &status)?;
    let case = service
        .update_case_status(id, status, req.close_date)
        .await?;
    ok("Case status updated successfully", case.into())
}

pub async fn delete_case(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_case(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_cases_by_client(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(client_id): ApiPath<i64>,
) -> ApiResult<Vec<CaseDto>> {
    let cases = service.list_cases_by_client(client_id).await?;
    ok("Cases retrieved successfully", case_dtos(cases))
}

pub async fn list_cases_by_status(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(status): ApiPath<String>,
) -> ApiResult<Vec<CaseDto>> {
    let status: CaseStatus = parse_enum("status", &status)?;
    let cases = service.list_cases_by_status(status).await?;
    ok("Cases retrieved successfully", case_dtos(cases))
}

pub async fn list_cases_by_assigned_user(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(user_id): ApiPath<i64>,
) -> ApiResult<Vec<CaseDto>> {
    let cases = service.list_cases_by_assigned_user(user_id).await?;
    ok("Cases retrieved successfully", case_dtos(cases))
}

pub async fn search_cases(
    Extension(service): Extension<Arc<Service>>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<Vec<CaseDto>> {
    let cases = service
        .search_cases(query.term.as_deref().unwrap_or_default())
        .await?;
    ok("Cases retrieved successfully", case_dtos(cases))
}

pub async fn link_client(
    Extension(service): Extension<Arc<Service>>,
    ApiPath((id, client_id)): ApiPath<(i64, i64)>,
) -> ApiResult<CaseDto> {
    let case = service.link_client(id, client_id).await?;
    ok("Client linked to case successfully", case.into())
}

pub async fn unlink_client(
    Extension(service): Extension<Arc<Service>>,
    ApiPath((id, client_id)): ApiPath<(i64, i64)>,
) -> ApiResult<CaseDto> {
    let case = service.unlink_client(id, client_id).await?;
    ok("Client unlinked from case successfully", case.into())
}

pub async fn list_case_hearings(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Vec<HearingDto>> {
    let hearings = service.list_case_hearings(id).await?;
    ok(
        "Hearings retrieved successfully",
        hearings.into_iter().map(HearingDto::from).collect(),
    )
}

pub async fn list_case_documents(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Vec<DocumentDto>> {
    let documents = service.list_case_documents(id).await?;
    ok(
        "Documents retrieved successfully",
        documents.into_iter().map(DocumentDto::from).collect(),
    )
}
