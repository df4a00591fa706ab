//! OpenAPI component schemas for the case service

use super::dto::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        CaseDto,
        CreateCaseRequest,
        UpdateCaseRequest,
        UpdateCaseStatusRequest,
        HearingDto,
        CreateHearingRequest,
        UpdateHearingRequest,
        UpdateHearingStatusRequest,
        RescheduleHearingRequest,
        DocumentDto,
        CreateDocumentRequest,
        UpdateDocumentRequest,
    )),
    tags((name = "cases", description = "Cases, hearings and documents"))
)]
pub struct CaseApiDoc;
