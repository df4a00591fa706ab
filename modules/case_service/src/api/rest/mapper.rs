//! Mapper implementations for converting between DTOs and contract models
//!
//! Request conversions are fallible: unknown enum names become field
//! validation errors keyed by the wire field name.

use super::dto::*;
use crate::contract::{
    self, CaseError, CasePatch, DocumentPatch, HearingPatch, NewCase, NewDocument, NewHearing,
};
use std::str::FromStr;

/// Parse an enum literal, reporting failures against `field`
pub fn parse_enum<T>(field: &str, value: &str) -> Result<T, CaseError>
where
    T: FromStr<Err = contract::UnknownVariant>,
{
    value
        .parse()
        .map_err(|e: contract::UnknownVariant| CaseError::invalid_field(field, e.to_string()))
}

fn parse_opt<T>(field: &str, value: Option<String>) -> Result<Option<T>, CaseError>
where
    T: FromStr<Err = contract::UnknownVariant>,
{
    value.map(|v| parse_enum(field, &v)).transpose()
}

// ===== Case conversions =====

impl From<contract::Case> for CaseDto {
    fn from(case: contract::Case) -> Self {
        Self {
            id: case.id,
            case_number: case.case_number,
            title: case.title,
            description: case.description,
            status: case.status.to_string(),
            open_date: case.open_date,
            close_date: case.close_date,
            client_ids: case.client_ids,
            assigned_user_id: case.assigned_user_id,
            created_at: case.created_at,
            updated_at: case.updated_at,
        }
    }
}

impl TryFrom<CreateCaseRequest> for NewCase {
    type Error = CaseError;

    fn try_from(req: CreateCaseRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_opt("status", req.status)?,
            title: req.title.unwrap_or_default(),
            description: req.description,
            open_date: req.open_date,
            client_ids: req.client_ids,
            assigned_user_id: req.assigned_user_id,
        })
    }
}

impl TryFrom<UpdateCaseRequest> for CasePatch {
    type Error = CaseError;

    fn try_from(req: UpdateCaseRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_opt("status", req.status)?,
            title: req.title,
            description: req.description,
            open_date: req.open_date,
            close_date: req.close_date,
            client_ids: req.client_ids,
            assigned_user_id: req.assigned_user_id,
        })
    }
}

// ===== Hearing conversions =====

impl From<contract::Hearing> for HearingDto {
    fn from(hearing: contract::Hearing) -> Self {
        Self {
            id: hearing.id,
            case_id: hearing.case_id,
            title: hearing.title,
            judge_name: hearing.judge_name,
            scheduled_date: hearing.scheduled_date,
            actual_start_time: hearing.actual_start_time,
            actual_end_time: hearing.actual_end_time,
            location: hearing.location,
            status: hearing.status.to_string(),
            notes: hearing.notes,
            created_at: hearing.created_at,
            updated_at: hearing.updated_at,
        }
    }
}

impl From<CreateHearingRequest> for NewHearing {
    fn from(req: CreateHearingRequest) -> Self {
        Self {
            case_id: req.case_id,
            title: req.title,
            judge_name: req.judge_name,
            scheduled_date: req.scheduled_date,
            location: req.location.unwrap_or_default(),
            notes: req.notes,
        }
    }
}

impl TryFrom<UpdateHearingRequest> for HearingPatch {
    type Error = CaseError;

    fn try_from(req: UpdateHearingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_opt("status", req.status)?,
            title: req.title,
            judge_name: req.judge_name,
            scheduled_date: req.scheduled_date,
            location: req.location,
            notes: req.notes,
        })
    }
}

// ===== Document conversions =====

impl From<contract::Document> for DocumentDto {
    fn from(document: contract::Document) -> Self {
        Self {
            id: document.id,
            case_id: document.case_id,
            title: document.title,
            document_type: document.document_type.to_string(),
            content: document.content,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

impl TryFrom<CreateDocumentRequest> for NewDocument {
    type Error = CaseError;

    fn try_from(req: CreateDocumentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            document_type: parse_opt("documentType", req.document_type)?,
            case_id: req.case_id,
            title: req.title.unwrap_or_default(),
            content: req.content,
        })
    }
}

impl TryFrom<UpdateDocumentRequest> for DocumentPatch {
    type Error = CaseError;

    fn try_from(req: UpdateDocumentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            document_type: parse_opt("documentType", req.document_type)?,
            title: req.title,
            content: req.content,
        })
    }
}
