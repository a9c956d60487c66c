//! In-memory managed user repository implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::error::DomainError;
use crate::domain::user::{seed_users, ManagedUser, ManagedUserRepository, NewUserForm};

/// In-memory implementation of ManagedUserRepository, keyed by user id
#[derive(Debug)]
pub struct InMemoryManagedUserRepository {
    users: Arc<RwLock<BTreeMap<u32, ManagedUser>>>,
}

impl InMemoryManagedUserRepository {
    pub fn new(users: Vec<ManagedUser>) -> Self {
        let users = users.into_iter().map(|user| (user.id(), user)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Repository holding the four demo accounts
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }
}

impl Default for InMemoryManagedUserRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ManagedUserRepository for InMemoryManagedUserRepository {
    async fn list(&self) -> Result<Vec<ManagedUser>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn get(&self, id: u32) -> Result<Option<ManagedUser>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, form: NewUserForm) -> Result<ManagedUser, DomainError> {
        let mut users = self.users.write().await;
        let email = form.email.trim();

        if users
            .values()
            .any(|user| user.email().eq_ignore_ascii_case(email))
        {
            return Err(DomainError::conflict(format!(
                "User with email '{}' already exists",
                email
            )));
        }

        let id = users.keys().next_back().map_or(1, |last| last + 1);
        let user = ManagedUser::new(id, form.name.trim(), email, form.role);

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn deactivate(&self, id: u32) -> Result<ManagedUser, DomainError> {
        let mut users = self.users.write().await;

        let user = users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        user.deactivate();
        Ok(user.clone())
    }
}
