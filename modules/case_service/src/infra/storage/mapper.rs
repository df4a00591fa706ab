//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Stored enum
//! names that no longer parse are reported as errors rather than guessed.

use super::entity::{case, document, hearing};
use crate::contract::{Case, Document, Hearing};
use anyhow::Context;
use sea_orm::ActiveValue::{NotSet, Set};
use svckit::search::fold;

// ===== Case Conversions =====

/// A case row together with its linked client ids
pub struct CaseRow(pub case::Model, pub Vec<i64>);

impl TryFrom<CaseRow> for Case {
    type Error = anyhow::Error;

    fn try_from(CaseRow(row, mut client_ids): CaseRow) -> Result<Self, Self::Error> {
        client_ids.sort_unstable();
        client_ids.dedup();
        Ok(Self {
            id: row.id,
            status: row
                .status
                .parse()
                .with_context(|| format!("case {} has invalid status", row.id))?,
            case_number: row.case_number,
            title: row.title,
            description: row.description,
            open_date: row.open_date,
            close_date: row.close_date,
            client_ids,
            assigned_user_id: row.assigned_user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl From<&Case> for case::ActiveModel {
    /// The id is left unset for zero so the store assigns one on insert
    fn from(model: &Case) -> Self {
        Self {
            id: if model.id == 0 { NotSet } else { Set(model.id) },
            case_number: Set(model.case_number.clone()),
            title: Set(model.title.clone()),
            case_number_folded: Set(fold(&model.case_number)),
            title_folded: Set(fold(&model.title)),
            description: Set(model.description.clone()),
            status: Set(model.status.as_str().to_string()),
            open_date: Set(model.open_date),
            close_date: Set(model.close_date),
            assigned_user_id: Set(model.assigned_user_id),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Hearing Conversions =====

impl TryFrom<hearing::Model> for Hearing {
    type Error = anyhow::Error;

    fn try_from(row: hearing::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            status: row
                .status
                .parse()
                .with_context(|| format!("hearing {} has invalid status", row.id))?,
            case_id: row.case_id,
            title: row.title,
            judge_name: row.judge_name,
            scheduled_date: row.scheduled_date,
            actual_start_time: row.actual_start_time,
            actual_end_time: row.actual_end_time,
            location: row.location,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl From<&Hearing> for hearing::ActiveModel {
    fn from(model: &Hearing) -> Self {
        Self {
            id: if model.id == 0 { NotSet } else { Set(model.id) },
            case_id: Set(model.case_id),
            title: Set(model.title.clone()),
            judge_name: Set(model.judge_name.clone()),
            scheduled_date: Set(model.scheduled_date),
            actual_start_time: Set(model.actual_start_time),
            actual_end_time: Set(model.actual_end_time),
            location: Set(model.location.clone()),
            status: Set(model.status.as_str().to_string()),
            notes: Set(model.notes.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Document Conversions =====

impl TryFrom<document::Model> for Document {
    type Error = anyhow::Error;

    fn try_from(row: document::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            document_type: row
                .document_type
                .parse()
                .with_context(|| format!("document {} has invalid type", row.id))?,
            case_id: row.case_id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl From<&Document> for document::ActiveModel {
    fn from(model: &Document) -> Self {
        Self {
            id: if model.id == 0 { NotSet } else { Set(model.id) },
            case_id: Set(model.case_id),
            title: Set(model.title.clone()),
            document_type: Set(model.document_type.as_str().to_string()),
            content: Set(model.content.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}
