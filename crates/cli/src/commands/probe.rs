//! Database connectivity probe.
//!
//! # Usage
//!
//! ```bash
//! marlin db probe
//! ```
//!
//! Opens a connection, pings the deployment, and reports the resolved
//! database name, host(s), and the full set of collection names. On failure
//! it prints a fixed checklist of the usual suspects; there is no
//! partial-success state.

use mongodb::bson::doc;
use thiserror::Error;

use secrecy::ExposeSecret;

use crate::config::{CliConfig, ConfigError};
use crate::db::{self, RepositoryError};

/// Errors that can occur while probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store could not be reached or queried.
    #[error("Store unavailable: {0}")]
    Store(#[from] RepositoryError),
}

/// What a successful probe learned about the deployment.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Database name resolved from the connection string.
    pub database: String,
    /// Hosts the client was configured with.
    pub hosts: Vec<String>,
    /// All collection names in the database. Order is not guaranteed.
    pub collections: Vec<String>,
}

/// Static operator hints printed when the store is unreachable. These are
/// not diagnosed programmatically.
const REMEDIATION_CHECKLIST: &[&str] = &[
    "the username and password in the connection string are correct",
    "this machine's IP address is on the deployment's network allow-list",
    "the database user exists and has access to the named database",
];

/// Run the probe end to end: load config, gather the report, print it.
///
/// # Errors
///
/// Returns `ProbeError` if configuration is missing or any store operation
/// fails; the remediation checklist has been printed by then.
pub async fn run() -> Result<(), ProbeError> {
    let config = CliConfig::from_env()?;
    tracing::info!(
        "Probing {}",
        db::redact_connection_string(config.database_url.expose_secret())
    );

    match probe(&config).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(err) => {
            tracing::error!("Connectivity probe failed: {err}");
            print_remediation();
            Err(err)
        }
    }
}

/// Connect, ping, and enumerate collections.
///
/// # Errors
///
/// Returns `ProbeError::Store` if the connection, ping, or collection
/// listing fails.
pub async fn probe(config: &CliConfig) -> Result<ProbeReport, ProbeError> {
    let store = db::connect(&config.database_url).await?;

    let report = gather_report(&store).await;

    // Release the connection on every exit path before the process ends.
    store.client.shutdown().await;

    Ok(report?)
}

async fn gather_report(store: &db::StoreHandle) -> Result<ProbeReport, RepositoryError> {
    store.database.run_command(doc! { "ping": 1 }).await?;
    let collections = store.database.list_collection_names().await?;

    Ok(ProbeReport {
        database: store.database.name().to_owned(),
        hosts: store.hosts.clone(),
        collections,
    })
}

/// Operator-facing report lines.
fn report_lines(report: &ProbeReport) -> Vec<String> {
    let collections = if report.collections.is_empty() {
        "(none)".to_owned()
    } else {
        report.collections.join(", ")
    };

    vec![
        "Connection OK".to_owned(),
        format!("  Database:    {}", report.database),
        format!("  Host(s):     {}", report.hosts.join(", ")),
        format!("  Collections: {collections}"),
    ]
}

fn print_report(report: &ProbeReport) {
    #[allow(clippy::print_stdout)]
    for line in report_lines(report) {
        println!("{line}");
    }
}

fn print_remediation() {
    #[allow(clippy::print_stdout)]
    {
        println!("Connection failed. Check that:");
        for hint in REMEDIATION_CHECKLIST {
            println!("  - {hint}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ProbeReport {
        ProbeReport {
            database: "marlin".to_owned(),
            hosts: vec!["cluster0.example.net:27017".to_owned()],
            collections: vec!["users".to_owned(), "sessions".to_owned()],
        }
    }

    #[test]
    fn test_report_lists_database_hosts_and_collections() {
        let lines = report_lines(&sample_report()).join("\n");
        assert!(lines.contains("Connection OK"));
        assert!(lines.contains("marlin"));
        assert!(lines.contains("cluster0.example.net:27017"));
        assert!(lines.contains("users, sessions"));
    }

    #[test]
    fn test_report_handles_empty_database() {
        let report = ProbeReport {
            collections: Vec::new(),
            ..sample_report()
        };
        let lines = report_lines(&report).join("\n");
        assert!(lines.contains("Collections: (none)"));
    }

    #[test]
    fn test_checklist_covers_the_usual_suspects() {
        let hints = REMEDIATION_CHECKLIST.join(" ");
        assert!(hints.contains("password"));
        assert!(hints.contains("allow-list"));
        assert!(hints.contains("user exists"));
    }
}
