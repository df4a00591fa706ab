use super::super::{dto::*, mapper::parse_enum};
use crate::contract::{Document, DocumentPatch, DocumentType, NewDocument};
use crate::domain::Service;
use axum::{http::StatusCode, Extension};
use std::sync::Arc;
use svckit::api::{created, ok};
use svckit::{ApiError, ApiJson, ApiPath, ApiResult};

fn document_dtos(documents: Vec<Document>) -> Vec<DocumentDto> {
    documents.into_iter().map(DocumentDto::from).collect()
}

pub async fn list_documents(
    Extension(service): Extension<Arc<Service>>,
) -> ApiResult<Vec<DocumentDto>> {
    let documents = service.list_documents().await?;
    ok("Documents retrieved successfully", document_dtos(documents))
}

pub async fn get_document(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<DocumentDto> {
    let document = service.get_document(id).await?;
    ok("Document retrieved successfully", document.into())
}

pub async fn create_document(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<CreateDocumentRequest>,
) -> ApiResult<DocumentDto> {
    let document = service
        .create_document(NewDocument::try_from(req)?)
        .await?;
    created("Document created successfully", document.into())
}

pub async fn update_document(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateDocumentRequest>,
) -> ApiResult<DocumentDto> {
    let document = service
        .update_document(id, DocumentPatch::try_from(req)?)
        .await?;
    ok("Document updated successfully", document.into())
}

pub async fn delete_document(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_document(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_documents_by_case(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(case_id): ApiPath<i64>,
) -> ApiResult<Vec<DocumentDto>> {
    let documents = service.list_case_documents(case_id).await?;
    ok("Documents retrieved successfully", document_dtos(documents))
}

pub async fn list_documents_by_type(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(document_type): ApiPath<String>,
) -> ApiResult<Vec<DocumentDto>> {
    let document_type: DocumentType = parse_enum("documentType", &document_type)?;
    let documents = service.list_documents_by_type(document_type).await?;
    ok("Documents retrieved successfully", document_dtos(documents))
}
