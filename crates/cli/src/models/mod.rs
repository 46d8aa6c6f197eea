//! Domain types for the Marlin CLI.

pub mod account;
