//! Domain service - business logic orchestration

use super::ports::CaseDirectory;
use super::repository::ClientRepository;
use super::{rules, validation};
use crate::config::Config;
use crate::contract::{CaseSummary, Client, ClientError, ClientPatch, NewClient, UniqueField};
use chrono::Utc;
use std::sync::Arc;
use svckit::StoreError;
use tracing::{debug, info};

/// Domain service for clients
pub struct Service {
    clients: Arc<dyn ClientRepository>,
    cases: Arc<dyn CaseDirectory>,
    config: Config,
}

impl Service {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        cases: Arc<dyn CaseDirectory>,
        config: Config,
    ) -> Self {
        Self {
            clients,
            cases,
            config,
        }
    }

    pub async fn create_client(&self, input: NewClient) -> Result<Client, ClientError> {
        validation::validate_new_client(&input, &self.config)?;

        let now = Utc::now();
        let client = Client {
            id: 0,
            name: input.name.trim().to_string(),
            surname: input.surname.trim().to_string(),
            email: normalize_email(input.email),
            phone: rules::normalize(input.phone),
            address: rules::normalize(input.address),
            tax_id: rules::normalize(input.tax_id),
            identity_number: rules::normalize(input.identity_number),
            notes: rules::normalize(input.notes),
            active: input.active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        self.ensure_unique(&client, None).await?;

        let created = self
            .clients
            .insert(&client)
            .await
            .map_err(|e| store_error("insert client", e))?;
        info!(client_id = created.id, "Created client");
        Ok(created)
    }

    pub async fn get_client(&self, id: i64) -> Result<Client, ClientError> {
        debug!(client_id = id, "Getting client");
        self.clients
            .find_by_id(id)
            .await
            .map_err(|e| store_error("find client", e))?
            .ok_or_else(|| ClientError::client_not_found(id))
    }

    pub async fn get_client_by_email(&self, email: &str) -> Result<Client, ClientError> {
        let email = email.trim().to_lowercase();
        self.clients
            .find_by_email(&email)
            .await
            .map_err(|e| store_error("find client by email", e))?
            .ok_or_else(|| ClientError::client_not_found(&email))
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        self.clients
            .list_all()
            .await
            .map_err(|e| store_error("list clients", e))
    }

    pub async fn list_active_clients(&self) -> Result<Vec<Client>, ClientError> {
        self.clients
            .list_active()
            .await
            .map_err(|e| store_error("list active clients", e))
    }

    /// Case-insensitive substring search over name and surname
    pub async fn search_clients(&self, term: &str) -> Result<Vec<Client>, ClientError> {
        validation::validate_search_term(term)?;
        self.clients
            .search(term.trim())
            .await
            .map_err(|e| store_error("search clients", e))
    }

    pub async fn update_client(&self, id: i64, patch: ClientPatch) -> Result<Client, ClientError> {
        validation::validate_client_patch(&patch, &self.config)?;
        let mut client = self.get_client(id).await?;

        let patch = ClientPatch {
            email: normalize_email(patch.email),
            ..patch
        };
        rules::apply_client_patch(&mut client, patch);
        self.ensure_unique(&client, Some(id)).await?;
        client.updated_at = Utc::now();

        let updated = self
            .clients
            .update(&client)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => ClientError::client_not_found(id),
                other => store_error("update client", other),
            })?;
        info!(client_id = id, "Updated client");
        Ok(updated)
    }

    pub async fn delete_client(&self, id: i64) -> Result<(), ClientError> {
        let removed = self
            .clients
            .delete(id)
            .await
            .map_err(|e| store_error("delete client", e))?;
        if !removed {
            return Err(ClientError::client_not_found(id));
        }
        info!(client_id = id, "Deleted client");
        Ok(())
    }

    /// Cases linked to an existing client. An unreachable case service
    /// yields an empty list rather than an error.
    pub async fn list_client_cases(
        &self,
        client_id: i64,
        bearer: Option<&str>,
    ) -> Result<Vec<CaseSummary>, ClientError> {
        self.get_client(client_id).await?;
        Ok(self.cases.cases_for_client(client_id, bearer).await)
    }

    /// One case of a client. Unlike the listing, case service failures are
    /// reported to the caller.
    pub async fn get_client_case(
        &self,
        client_id: i64,
        case_id: i64,
        bearer: Option<&str>,
    ) -> Result<CaseSummary, ClientError> {
        self.get_client(client_id).await?;
        match self.cases.get_case(case_id, bearer).await? {
            Some(case) if case.client_ids.contains(&client_id) => Ok(case),
            _ => Err(ClientError::case_not_found(case_id)),
        }
    }

    /// Early, friendly duplicate detection. The store's unique indexes stay
    /// authoritative for concurrent writers.
    async fn ensure_unique(&self, client: &Client, exclude_id: Option<i64>) -> Result<(), ClientError> {
        for field in UniqueField::ALL {
            let Some(value) = field.value_of(client) else {
                continue;
            };
            let taken = self
                .clients
                .exists_by_unique_field(field, value, exclude_id)
                .await
                .map_err(|e| store_error("check uniqueness", e))?;
            if taken {
                return Err(ClientError::duplicate(field.as_str(), value));
            }
        }
        Ok(())
    }
}

fn normalize_email(email: Option<String>) -> Option<String> {
    rules::normalize(email).map(|e| e.to_lowercase())
}

/// Map a storage failure to the contract error. A unique-index violation
/// names the offending column in its constraint text.
fn store_error(operation: &str, err: StoreError) -> ClientError {
    match err {
        StoreError::UniqueViolation(constraint) => {
            let field = UniqueField::ALL
                .into_iter()
                .find(|f| constraint.contains(column_of(*f)))
                .map_or("value", UniqueField::as_str);
            debug!(operation, %constraint, "unique constraint violated");
            let mut fields = std::collections::BTreeMap::new();
            fields.insert(field.to_string(), "is already in use".to_string());
            ClientError::Conflict {
                reason: format!("A client with this {field} already exists"),
                fields,
            }
        }
        other => {
            tracing::error!(operation, error = ?other, "storage failure");
            ClientError::Internal
        }
    }
}

fn column_of(field: UniqueField) -> &'static str {
    match field {
        UniqueField::Email => "email",
        UniqueField::TaxId => "tax_id",
        UniqueField::IdentityNumber => "identity_number",
    }
}
