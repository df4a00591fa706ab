//! Shared test fixtures: in-memory client store and a scripted case directory

#![allow(dead_code)]

use async_trait::async_trait;
use client_service::contract::*;
use client_service::domain::repository::{ClientRepository, StoreResult};
use client_service::domain::{CaseDirectory, Service};
use client_service::Config;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use svckit::StoreError;

#[derive(Default)]
struct State {
    next_id: i64,
    clients: BTreeMap<i64, Client>,
    /// Remove the row right before the next update reaches it
    delete_before_update: bool,
}

#[derive(Clone, Default)]
pub struct MemoryClients {
    state: Arc<RwLock<State>>,
}

impl MemoryClients {
    pub fn count(&self) -> usize {
        self.state.read().clients.len()
    }

    /// Simulate a concurrent delete racing the next update
    pub fn delete_before_next_update(&self) {
        self.state.write().delete_before_update = true;
    }
}

fn index_name(field: UniqueField) -> &'static str {
    match field {
        UniqueField::Email => "ux_clients_email",
        UniqueField::TaxId => "ux_clients_tax_id",
        UniqueField::IdentityNumber => "ux_clients_identity_number",
    }
}

fn holds(client: &Client, field: UniqueField, value: &str) -> bool {
    field.value_of(client) == Some(value)
}

#[async_trait]
impl ClientRepository for MemoryClients {
    async fn insert(&self, client: &Client) -> StoreResult<Client> {
        let mut state = self.state.write();
        for field in UniqueField::ALL {
            if let Some(value) = field.value_of(client) {
                if state.clients.values().any(|c| holds(c, field, value)) {
                    return Err(StoreError::UniqueViolation(index_name(field).into()));
                }
            }
        }
        state.next_id += 1;
        let mut created = client.clone();
        created.id = state.next_id;
        state.clients.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Client>> {
        Ok(self.state.read().clients.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Client>> {
        let email = email.to_lowercase();
        Ok(self
            .state
            .read()
            .clients
            .values()
            .find(|c| c.email.as_deref() == Some(email.as_str()))
            .cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Client>> {
        Ok(self.state.read().clients.values().cloned().collect())
    }

    async fn list_active(&self) -> StoreResult<Vec<Client>> {
        Ok(self
            .state
            .read()
            .clients
            .values()
            .filter(|c| c.active)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> StoreResult<Vec<Client>> {
        let term = term.to_lowercase();
        Ok(self
            .state
            .read()
            .clients
            .values()
            .filter(|c| {
                c.name.to_lowercase().contains(&term) || c.surname.to_lowercase().contains(&term)
            })
            .cloned()
            .collect())
    }

    async fn exists_by_unique_field(
        &self,
        field: UniqueField,
        value: &str,
        exclude_id: Option<i64>,
    ) -> StoreResult<bool> {
        Ok(self
            .state
            .read()
            .clients
            .values()
            .any(|c| Some(c.id) != exclude_id && holds(c, field, value)))
    }

    async fn update(&self, client: &Client) -> StoreResult<Client> {
        let mut state = self.state.write();
        if std::mem::take(&mut state.delete_before_update) {
            state.clients.remove(&client.id);
        }
        match state.clients.get_mut(&client.id) {
            Some(stored) => {
                *stored = client.clone();
                Ok(client.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.state.write().clients.remove(&id).is_some())
    }
}

/// Case directory answering from a fixed list, or failing like an
/// unreachable case service
#[derive(Default)]
pub struct StubDirectory {
    pub cases: Vec<CaseSummary>,
    pub unreachable: bool,
    /// Bearer tokens seen, in call order
    pub seen_tokens: RwLock<Vec<Option<String>>>,
}

#[async_trait]
impl CaseDirectory for StubDirectory {
    async fn cases_for_client(&self, client_id: i64, bearer: Option<&str>) -> Vec<CaseSummary> {
        self.seen_tokens.write().push(bearer.map(str::to_string));
        if self.unreachable {
            return Vec::new();
        }
        self.cases
            .iter()
            .filter(|c| c.client_ids.contains(&client_id))
            .cloned()
            .collect()
    }

    async fn get_case(
        &self,
        case_id: i64,
        bearer: Option<&str>,
    ) -> Result<Option<CaseSummary>, ClientError> {
        self.seen_tokens.write().push(bearer.map(str::to_string));
        if self.unreachable {
            return Err(ClientError::case_service_unavailable("connection refused"));
        }
        Ok(self.cases.iter().find(|c| c.id == case_id).cloned())
    }
}

pub fn case_summary(id: i64, client_ids: Vec<i64>) -> CaseSummary {
    CaseSummary {
        id,
        case_number: format!("CASE-2026-{id:08X}"),
        title: format!("Case {id}"),
        status: "OPEN".to_string(),
        open_date: None,
        close_date: None,
        client_ids,
        assigned_user_id: None,
    }
}

pub fn service_with(directory: StubDirectory) -> (Arc<Service>, MemoryClients, Arc<StubDirectory>) {
    let store = MemoryClients::default();
    let directory = Arc::new(directory);
    let service = Service::new(
        Arc::new(store.clone()),
        directory.clone(),
        Config::default(),
    );
    (Arc::new(service), store, directory)
}

pub fn service() -> (Arc<Service>, MemoryClients, Arc<StubDirectory>) {
    service_with(StubDirectory::default())
}

pub fn new_client(name: &str, surname: &str) -> NewClient {
    NewClient {
        name: name.to_string(),
        surname: surname.to_string(),
        ..NewClient::default()
    }
}
