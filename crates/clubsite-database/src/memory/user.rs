//! In-memory credential store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use clubsite_core::error::AppError;
use clubsite_core::result::AppResult;
use clubsite_entity::user::{NewUser, User};

use crate::store::CredentialStore;

/// Users keyed by id behind a single lock.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn admin_exists(&self) -> AppResult<bool> {
        Ok(self.users.read().await.values().any(User::is_admin))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }

    async fn create_first_admin(&self, data: NewUser) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        if users.values().any(User::is_admin) {
            return Ok(None);
        }
        if users.values().any(|u| u.username == data.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                data.username
            )));
        }
        let user = data.into_user();
        users.insert(user.id, user.clone());
        Ok(Some(user))
    }
}
