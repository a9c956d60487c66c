//! Route handlers, one module per screen

pub mod admin;
pub mod auth;
pub mod diagnosis;
pub mod inference;
pub mod profile;
pub mod records;
pub mod reports;
pub mod theme;
