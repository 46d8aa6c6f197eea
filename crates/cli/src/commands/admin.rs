//! Admin account provisioning.
//!
//! # Usage
//!
//! ```bash
//! # Create or refresh the administrative account
//! marlin admin provision -e developer@gmail.com -n "Developer Admin"
//! ```
//!
//! # Environment Variables
//!
//! - `MARLIN_DATABASE_URL` - MongoDB connection string (with database name)
//! - `MARLIN_ADMIN_PASSWORD` - Password, for non-interactive runs
//!
//! The routine is idempotent: the first run creates the account, every later
//! run re-hashes the supplied password and forces the account back to an
//! active admin. Running it any number of times leaves exactly one account
//! document for the email.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use marlin_core::{AccountRole, Email, EmailError};

use crate::config::{CliConfig, ConfigError};
use crate::db::{self, RepositoryError, accounts::AccountRepository};
use crate::models::account::Account;
use crate::password::{self, HashError};

/// Errors that can occur during admin provisioning.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Empty password supplied.
    #[error("Password must not be empty")]
    EmptyPassword,

    /// Store connection, lookup, or write failure.
    #[error("Store unavailable: {0}")]
    Store(#[from] RepositoryError),

    /// Credential hashing failure. The plaintext is never stored as a
    /// fallback.
    #[error("Credential hashing failed: {0}")]
    Hashing(#[from] HashError),
}

/// Result of a provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// No account existed for the email; a new one was inserted.
    Created,
    /// An account existed; its credential and flags were re-synchronized.
    Updated,
}

/// Ensure the administrative account exists with the given credential.
///
/// Performs one lookup and one write against the store and one hash
/// invocation, then prints a fixed summary and releases the connection.
/// `name` is used only when the account is first created.
///
/// # Errors
///
/// Returns `ProvisionError` if configuration is missing, the email or
/// password is unusable, hashing fails, or any store operation fails. No
/// retry is attempted; a failure before the write leaves the store unchanged.
pub async fn provision(
    email: &str,
    name: &str,
    password: &SecretString,
    show_password: bool,
) -> Result<ProvisionOutcome, ProvisionError> {
    let email = Email::parse(email)?;
    if password.expose_secret().is_empty() {
        return Err(ProvisionError::EmptyPassword);
    }

    let config = CliConfig::from_env()?;
    tracing::info!(
        "Connecting to {}",
        db::redact_connection_string(config.database_url.expose_secret())
    );
    let store = db::connect(&config.database_url).await?;

    let outcome = run_provision(&store, &email, name, password).await;

    if let Ok(outcome) = &outcome {
        match outcome {
            ProvisionOutcome::Created => {
                tracing::info!("Admin account created: {email}");
            }
            ProvisionOutcome::Updated => {
                tracing::info!("Admin account updated: {email}");
            }
        }
        print_summary(&email, password, show_password);
    }

    // Release the connection on every exit path before the process ends.
    store.client.shutdown().await;

    outcome
}

/// The lookup-branch-write core: find by email, hash once, then insert or
/// reset in place.
async fn run_provision(
    store: &db::StoreHandle,
    email: &Email,
    name: &str,
    password: &SecretString,
) -> Result<ProvisionOutcome, ProvisionError> {
    let accounts = AccountRepository::new(&store.database);

    let existing = accounts.find_by_email(email).await?;
    let password_hash = password::hash_password(password.expose_secret())?;

    match existing {
        Some(account) => {
            tracing::info!(
                role = %account.role,
                status = %account.status,
                "Existing account found, resetting credentials"
            );
            accounts.reset_credentials(email, &password_hash).await?;
            Ok(ProvisionOutcome::Updated)
        }
        None => {
            let account = Account::admin(name, email.clone(), password_hash);
            accounts.insert(&account).await?;
            Ok(ProvisionOutcome::Created)
        }
    }
}

/// Fixed operator-facing summary banner.
///
/// The plaintext appears only when `show_password` was explicitly passed;
/// shared and production environments get `[hidden]`.
fn summary_lines(email: &Email, password: &SecretString, show_password: bool) -> Vec<String> {
    let credential = if show_password {
        password.expose_secret()
    } else {
        "[hidden]"
    };

    vec![
        "========================================".to_owned(),
        "  Admin account ready".to_owned(),
        format!("  Email:    {email}"),
        format!("  Password: {credential}"),
        format!("  Role:     {}", AccountRole::Admin),
        "========================================".to_owned(),
    ]
}

fn print_summary(email: &Email, password: &SecretString, show_password: bool) {
    #[allow(clippy::print_stdout)]
    for line in summary_lines(email, password, show_password) {
        println!("{line}");
    }
}
