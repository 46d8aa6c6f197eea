//! Command implementations for the Marlin CLI.

pub mod admin;
pub mod probe;
