//! Marlin Core - Shared types library.
//!
//! This crate provides common types used across the Marlin components:
//! - `cli` - Operational command-line tools (admin bootstrap, diagnostics)
//! - `integration-tests` - Live-database test harness
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no
//! prompting. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated wrappers for emails, account roles, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
