//! Shared test fixtures: an in-memory store backing all three repositories

#![allow(dead_code)]

use async_trait::async_trait;
use case_service::contract::*;
use case_service::domain::repository::{
    CaseRepository, DocumentRepository, HearingRepository, StoreResult,
};
use case_service::domain::Service;
use case_service::Config;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use svckit::StoreError;

#[derive(Default)]
struct State {
    next_id: i64,
    cases: BTreeMap<i64, Case>,
    hearings: BTreeMap<i64, Hearing>,
    documents: BTreeMap<i64, Document>,
    /// Pending simulated case-number collisions
    colliding_inserts: u32,
    /// Remove the target row right before the next update reaches it
    delete_before_update: bool,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory double for the case, hearing and document repositories.
/// Clones share state, so one store can back all three traits.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` case inserts fail with a case-number collision
    pub fn collide_next_case_inserts(&self, n: u32) {
        self.state.write().colliding_inserts = n;
    }

    /// Simulate a concurrent delete racing the next update
    pub fn delete_before_next_update(&self) {
        self.state.write().delete_before_update = true;
    }

    pub fn case_count(&self) -> usize {
        self.state.read().cases.len()
    }

    pub fn hearing_count(&self) -> usize {
        self.state.read().hearings.len()
    }

    pub fn document_count(&self) -> usize {
        self.state.read().documents.len()
    }
}

fn matches_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl CaseRepository for MemoryStore {
    async fn insert(&self, case: &Case) -> StoreResult<Case> {
        let mut state = self.state.write();
        if state.colliding_inserts > 0 {
            state.colliding_inserts -= 1;
            return Err(StoreError::UniqueViolation("ux_cases_case_number".into()));
        }
        if state
            .cases
            .values()
            .any(|c| c.case_number == case.case_number)
        {
            return Err(StoreError::UniqueViolation("ux_cases_case_number".into()));
        }
        let mut created = case.clone();
        created.id = state.next_id();
        state.cases.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Case>> {
        Ok(self.state.read().cases.get(&id).cloned())
    }

    async fn find_by_number(&self, case_number: &str) -> StoreResult<Option<Case>> {
        Ok(self
            .state
            .read()
            .cases
            .values()
            .find(|c| c.case_number == case_number)
            .cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Case>> {
        Ok(self.state.read().cases.values().cloned().collect())
    }

    async fn list_by_client(&self, client_id: i64) -> StoreResult<Vec<Case>> {
        Ok(self
            .state
            .read()
            .cases
            .values()
            .filter(|c| c.client_ids.contains(&client_id))
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: CaseStatus) -> StoreResult<Vec<Case>> {
        Ok(self
            .state
            .read()
            .cases
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_assigned_user(&self, user_id: i64) -> StoreResult<Vec<Case>> {
        Ok(self
            .state
            .read()
            .cases
            .values()
            .filter(|c| c.assigned_user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> StoreResult<Vec<Case>> {
        Ok(self
            .state
            .read()
            .cases
            .values()
            .filter(|c| matches_ci(&c.title, term) || matches_ci(&c.case_number, term))
            .cloned()
            .collect())
    }

    async fn update(&self, case: &Case) -> StoreResult<Case> {
        let mut state = self.state.write();
        if std::mem::take(&mut state.delete_before_update) {
            state.cases.remove(&case.id);
        }
        match state.cases.get_mut(&case.id) {
            Some(stored) => {
                *stored = case.clone();
                Ok(case.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn link_client(&self, case_id: i64, client_id: i64) -> StoreResult<bool> {
        let mut state = self.state.write();
        if std::mem::take(&mut state.delete_before_update) {
            state.cases.remove(&case_id);
        }
        let case = state.cases.get_mut(&case_id).ok_or(StoreError::NotFound)?;
        if case.client_ids.contains(&client_id) {
            return Ok(false);
        }
        case.client_ids.push(client_id);
        case.client_ids.sort_unstable();
        Ok(true)
    }

    async fn unlink_client(&self, case_id: i64, client_id: i64) -> StoreResult<bool> {
        let mut state = self.state.write();
        let Some(case) = state.cases.get_mut(&case_id) else {
            return Ok(false);
        };
        let before = case.client_ids.len();
        case.client_ids.retain(|&id| id != client_id);
        Ok(case.client_ids.len() != before)
    }

    async fn delete_cascade(&self, id: i64) -> StoreResult<bool> {
        let mut state = self.state.write();
        if state.cases.remove(&id).is_none() {
            return Ok(false);
        }
        state.hearings.retain(|_, h| h.case_id != id);
        state.documents.retain(|_, d| d.case_id != id);
        Ok(true)
    }

    async fn exists(&self, id: i64) -> StoreResult<bool> {
        Ok(self.state.read().cases.contains_key(&id))
    }
}

#[async_trait]
impl HearingRepository for MemoryStore {
    async fn insert(&self, hearing: &Hearing) -> StoreResult<Hearing> {
        let mut state = self.state.write();
        let mut created = hearing.clone();
        created.id = state.next_id();
        state.hearings.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Hearing>> {
        Ok(self.state.read().hearings.get(&id).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Hearing>> {
        Ok(self.state.read().hearings.values().cloned().collect())
    }

    async fn list_by_case(&self, case_id: i64) -> StoreResult<Vec<Hearing>> {
        Ok(self
            .state
            .read()
            .hearings
            .values()
            .filter(|h| h.case_id == case_id)
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: HearingStatus) -> StoreResult<Vec<Hearing>> {
        Ok(self
            .state
            .read()
            .hearings
            .values()
            .filter(|h| h.status == status)
            .cloned()
            .collect())
    }

    async fn list_scheduled_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Vec<Hearing>> {
        let mut hearings: Vec<Hearing> = self
            .state
            .read()
            .hearings
            .values()
            .filter(|h| h.scheduled_date >= from && h.scheduled_date <= to)
            .cloned()
            .collect();
        hearings.sort_by_key(|h| h.scheduled_date);
        Ok(hearings)
    }

    async fn update(&self, hearing: &Hearing) -> StoreResult<Hearing> {
        let mut state = self.state.write();
        if std::mem::take(&mut state.delete_before_update) {
            state.hearings.remove(&hearing.id);
        }
        match state.hearings.get_mut(&hearing.id) {
            Some(stored) => {
                *stored = hearing.clone();
                Ok(hearing.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.state.write().hearings.remove(&id).is_some())
    }
}

#[async_trait]
impl DocumentRepository for MemoryStore {
    async fn insert(&self, document: &Document) -> StoreResult<Document> {
        let mut state = self.state.write();
        let mut created = document.clone();
        created.id = state.next_id();
        state.documents.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Document>> {
        Ok(self.state.read().documents.get(&id).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Document>> {
        Ok(self.state.read().documents.values().cloned().collect())
    }

    async fn list_by_case(&self, case_id: i64) -> StoreResult<Vec<Document>> {
        Ok(self
            .state
            .read()
            .documents
            .values()
            .filter(|d| d.case_id == case_id)
            .cloned()
            .collect())
    }

    async fn list_by_type(&self, document_type: DocumentType) -> StoreResult<Vec<Document>> {
        Ok(self
            .state
            .read()
            .documents
            .values()
            .filter(|d| d.document_type == document_type)
            .cloned()
            .collect())
    }

    async fn update(&self, document: &Document) -> StoreResult<Document> {
        let mut state = self.state.write();
        if std::mem::take(&mut state.delete_before_update) {
            state.documents.remove(&document.id);
        }
        match state.documents.get_mut(&document.id) {
            Some(stored) => {
                *stored = document.clone();
                Ok(document.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.state.write().documents.remove(&id).is_some())
    }
}

/// Service over a fresh in-memory store with default configuration
pub fn service() -> (Arc<Service>, MemoryStore) {
    service_with(Config::default())
}

pub fn service_with(config: Config) -> (Arc<Service>, MemoryStore) {
    let store = MemoryStore::new();
    let service = Service::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        config,
    );
    (Arc::new(service), store)
}

pub fn new_case(title: &str) -> NewCase {
    NewCase {
        title: title.to_string(),
        ..NewCase::default()
    }
}

pub fn new_hearing(case_id: i64, in_days: i64) -> NewHearing {
    NewHearing {
        case_id: Some(case_id),
        title: Some("Preliminary hearing".to_string()),
        judge_name: Some("Judge Amani".to_string()),
        scheduled_date: Some(Utc::now() + Duration::days(in_days)),
        location: "Courtroom 4".to_string(),
        notes: None,
    }
}
