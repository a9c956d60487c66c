//! Managed user entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::auth::Role;

/// Status of a clinician or admin account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account can sign in
    #[default]
    Active,
    /// Account was deactivated by an admin
    Inactive,
}

/// An account listed on the admin management screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    id: u32,
    name: String,
    email: String,
    role: Role,
    status: UserStatus,
    last_login: Option<NaiveDate>,
}

impl ManagedUser {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            status: UserStatus::Active,
            last_login: None,
        }
    }

    pub fn with_last_login(mut self, date: NaiveDate) -> Self {
        self.last_login = Some(date);
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn last_login(&self) -> Option<NaiveDate> {
        self.last_login
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, UserStatus::Active)
    }

    pub fn deactivate(&mut self) {
        self.status = UserStatus::Inactive;
    }
}

/// Form for adding an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Accounts the management screen starts with
pub fn seed_users() -> Vec<ManagedUser> {
    vec![
        ManagedUser::new(1, "Dr. Sarah Johnson", "sarah.j@hospital.com", Role::Doctor)
            .with_last_login(date(2025, 12, 10)),
        ManagedUser::new(2, "Dr. Michael Chen", "michael.c@hospital.com", Role::Doctor)
            .with_last_login(date(2025, 12, 9)),
        ManagedUser::new(3, "Dr. Emily Rodriguez", "emily.r@hospital.com", Role::Doctor)
            .with_last_login(date(2025, 12, 8)),
        ManagedUser::new(4, "Admin User", "admin@hospital.com", Role::Admin)
            .with_last_login(date(2025, 12, 10)),
    ]
}
