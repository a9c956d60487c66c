//! Managed user domain
//!
//! Accounts listed and administered from the management screen.

mod entity;
mod repository;
mod validation;

pub use entity::{seed_users, ManagedUser, NewUserForm, UserStatus};
pub use repository::ManagedUserRepository;
pub use validation::validate_new_user;

#[cfg(test)]
pub use repository::MockManagedUserRepository;
