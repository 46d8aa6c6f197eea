//! Marlin CLI library.
//!
//! This crate provides the CLI functionality as a library, allowing the
//! provisioning and probing routines to be exercised from the
//! integration-tests crate.
//!
//! # Security
//!
//! The provisioning command handles a plaintext administrative credential.
//! It is held in a [`secrecy::SecretString`] for the duration of a run,
//! hashed with Argon2id before it ever reaches the database, and echoed to
//! the console only behind an explicit `--show-password` flag.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod db;
pub mod models;
pub mod password;
