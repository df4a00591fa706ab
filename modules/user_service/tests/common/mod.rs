//! Shared test fixtures: an in-memory user repository

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use svckit::StoreError;
use user_service::contract::*;
use user_service::domain::repository::{StoreResult, UserRepository};
use user_service::domain::Service;
use user_service::Config;

#[derive(Default)]
struct State {
    next_id: i64,
    users: BTreeMap<i64, User>,
    /// Remove the row right before the next update reaches it
    delete_before_update: bool,
}

#[derive(Clone, Default)]
pub struct MemoryUsers {
    state: Arc<RwLock<State>>,
}

impl MemoryUsers {
    pub fn count(&self) -> usize {
        self.state.read().users.len()
    }

    /// Simulate a concurrent delete racing the next update
    pub fn delete_before_next_update(&self) {
        self.state.write().delete_before_update = true;
    }
}

fn clash(state: &State, user: &User) -> Option<&'static str> {
    for other in state.users.values().filter(|u| u.id != user.id) {
        if other.username == user.username {
            return Some("ux_users_username");
        }
        if other.email == user.email {
            return Some("ux_users_email");
        }
    }
    None
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn insert(&self, user: &User) -> StoreResult<User> {
        let mut state = self.state.write();
        let mut created = user.clone();
        created.id = state.next_id + 1;
        if let Some(index) = clash(&state, &created) {
            return Err(StoreError::UniqueViolation(index.into()));
        }
        state.next_id = created.id;
        state.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(self.state.read().users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.state.read().users.values().cloned().collect())
    }

    async fn exists_by_username(
        &self,
        username: &str,
        exclude_id: Option<i64>,
    ) -> StoreResult<bool> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .any(|u| Some(u.id) != exclude_id && u.username == username))
    }

    async fn exists_by_email(&self, email: &str, exclude_id: Option<i64>) -> StoreResult<bool> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .any(|u| Some(u.id) != exclude_id && u.email == email))
    }

    async fn update(&self, user: &User) -> StoreResult<User> {
        let mut state = self.state.write();
        if std::mem::take(&mut state.delete_before_update) {
            state.users.remove(&user.id);
        }
        if let Some(index) = clash(&state, user) {
            return Err(StoreError::UniqueViolation(index.into()));
        }
        match state.users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.state.write().users.remove(&id).is_some())
    }
}

pub fn service() -> (Arc<Service>, MemoryUsers) {
    let store = MemoryUsers::default();
    let service = Service::new(Arc::new(store.clone()), Config::default());
    (Arc::new(service), store)
}

pub fn new_user(username: &str, roles: &[&str]) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@firm.example"),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        ..NewUser::default()
    }
}

pub fn role_names(user: &User) -> Vec<&str> {
    user.roles.iter().map(String::as_str).collect()
}
