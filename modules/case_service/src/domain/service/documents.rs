use super::{store_error, write_error, Service};
use crate::contract::{CaseError, Document, DocumentPatch, DocumentType, NewDocument};
use crate::domain::{rules, validation};
use chrono::Utc;
use tracing::{debug, info};

impl Service {
    pub async fn create_document(&self, input: NewDocument) -> Result<Document, CaseError> {
        validation::validate_new_document(&input, &self.config)?;
        let Some(case_id) = input.case_id else {
            return Err(CaseError::Internal);
        };
        self.ensure_case_exists(case_id).await?;

        let now = Utc::now();
        let document = Document {
            id: 0,
            case_id,
            title: input.title,
            document_type: input.document_type.unwrap_or(DocumentType::Other),
            content: input.content,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .documents
            .insert(&document)
            .await
            .map_err(|e| store_error("insert document", e))?;
        info!(document_id = created.id, case_id, "Created document");
        Ok(created)
    }

    pub async fn get_document(&self, id: i64) -> Result<Document, CaseError> {
        debug!(document_id = id, "Getting document");
        self.documents
            .find_by_id(id)
            .await
            .map_err(|e| store_error("find document", e))?
            .ok_or_else(|| CaseError::document_not_found(id))
    }

    pub async fn list_documents(&self) -> Result<Vec<Document>, CaseError> {
        self.documents
            .list_all()
            .await
            .map_err(|e| store_error("list documents", e))
    }

    pub async fn list_documents_by_type(
        &self,
        document_type: DocumentType,
    ) -> Result<Vec<Document>, CaseError> {
        self.documents
            .list_by_type(document_type)
            .await
            .map_err(|e| store_error("list documents by type", e))
    }

    pub async fn update_document(
        &self,
        id: i64,
        patch: DocumentPatch,
    ) -> Result<Document, CaseError> {
        validation::validate_document_patch(&patch, &self.config)?;
        let mut document = self.get_document(id).await?;

        rules::apply_document_patch(&mut document, patch);
        document.updated_at = Utc::now();

        let updated = self
            .documents
            .update(&document)
            .await
            .map_err(|e| {
                write_error("update document", e, CaseError::document_not_found(id))
            })?;
        info!(document_id = id, "Updated document");
        Ok(updated)
    }

    pub async fn delete_document(&self, id: i64) -> Result<(), CaseError> {
        let removed = self
            .documents
            .delete(id)
            .await
            .map_err(|e| store_error("delete document", e))?;
        if !removed {
            return Err(CaseError::document_not_found(id));
        }
        info!(document_id = id, "Deleted document");
        Ok(())
    }
}
