//! Core types for Marlin.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod account;
pub mod email;

pub use account::{AccountRole, AccountStatus};
pub use email::{Email, EmailError};
