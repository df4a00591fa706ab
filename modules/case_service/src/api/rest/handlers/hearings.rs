use super::super::{dto::*, mapper::parse_enum};
use crate::contract::{CaseError, Hearing, HearingPatch, HearingStatus, NewHearing};
use crate::domain::Service;
use axum::{http::StatusCode, Extension};
use std::sync::Arc;
use svckit::api::{created, ok};
use svckit::{ApiError, ApiJson, ApiPath, ApiResult};

fn hearing_dtos(hearings: Vec<Hearing>) -> Vec<HearingDto> {
    hearings.into_iter().map(HearingDto::from).collect()
}

pub async fn list_hearings(
    Extension(service): Extension<Arc<Service>>,
) -> ApiResult<Vec<HearingDto>> {
    let hearings = service.list_hearings().await?;
    ok("Hearings retrieved successfully", hearing_dtos(hearings))
}

pub async fn get_hearing(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<HearingDto> {
    let hearing = service.get_hearing(id).await?;
    ok("Hearing retrieved successfully", hearing.into())
}

pub async fn create_hearing(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<CreateHearingRequest>,
) -> ApiResult<HearingDto> {
    let hearing = service.create_hearing(NewHearing::from(req)).await?;
    created("Hearing created successfully", hearing.into())
}

pub async fn update_hearing(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateHearingRequest>,
) -> ApiResult<HearingDto> {
    let hearing = service
        .update_hearing(id, HearingPatch::try_from(req)?)
        .await?;
    ok("Hearing updated successfully", hearing.into())
}

pub async fn update_hearing_status(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateHearingStatusRequest>,
) -> ApiResult<HearingDto> {
    let status = req
        .status
        .ok_or_else(|| CaseError::invalid_field("status", "is required"))?;
    let status: HearingStatus = parse_enum("status", &status)?;
    let hearing = service.update_hearing_status(id, status).await?;
    ok("Hearing status updated successfully", hearing.into())
}

pub async fn reschedule_hearing(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<RescheduleHearingRequest>,
) -> ApiResult<HearingDto> {
    let scheduled_date = req
        .scheduled_date
        .ok_or_else(|| CaseError::invalid_field("scheduledDate", "is required"))?;
    let hearing = service.reschedule_hearing(id, scheduled_date).await?;
    ok("Hearing rescheduled successfully", hearing.into())
}

pub async fn delete_hearing(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_hearing(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_hearings_by_case(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(case_id): ApiPath<i64>,
) -> ApiResult<Vec<HearingDto>> {
    let hearings = service.list_case_hearings(case_id).await?;
    ok("Hearings retrieved successfully", hearing_dtos(hearings))
}

pub async fn list_hearings_by_status(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(status): ApiPath<String>,
) -> ApiResult<Vec<HearingDto>> {
    let status: HearingStatus = parse_enum("status", &status)?;
    let hearings = service.list_hearings_by_status(status).await?;
    ok("Hearings retrieved successfully", hearing_dtos(hearings))
}

pub async fn list_upcoming_hearings(
    Extension(service): Extension<Arc<Service>>,
) -> ApiResult<Vec<HearingDto>> {
    let hearings = service.list_upcoming_hearings().await?;
    ok("Upcoming hearings retrieved successfully", hearing_dtos(hearings))
}
