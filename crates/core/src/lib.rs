//! Shared domain types, errors and validation rules for the roster service.

pub mod email;
pub mod error;
pub mod types;
