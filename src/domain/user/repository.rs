//! Managed user repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{ManagedUser, NewUserForm};
use crate::domain::error::DomainError;

/// Repository for the accounts shown on the management screen
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ManagedUserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ManagedUser>, DomainError>;

    async fn get(&self, id: u32) -> Result<Option<ManagedUser>, DomainError>;

    /// Add an account; fails with a conflict when the email is taken
    async fn create(&self, form: NewUserForm) -> Result<ManagedUser, DomainError>;

    /// Mark an account inactive and return it
    async fn deactivate(&self, id: u32) -> Result<ManagedUser, DomainError>;
}
