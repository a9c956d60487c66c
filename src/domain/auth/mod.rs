//! Simulated sign-in
//!
//! There is no identity store: two demo accounts are accepted and
//! everything else is rejected as invalid credentials.

mod entity;
mod validation;

pub use entity::{Credentials, DemoAccount, Role, Session, DEMO_ACCOUNTS};
pub use validation::{
    authenticate, validate_login_form, validate_login_password, INVALID_CREDENTIALS_MESSAGE,
    MIN_LOGIN_PASSWORD_LENGTH,
};
