//! Marlin CLI - Operational tools for a MongoDB-backed deployment.
//!
//! # Usage
//!
//! ```bash
//! # Create or refresh the administrative account
//! marlin admin provision -e developer@gmail.com -n "Developer Admin"
//!
//! # Same, non-interactively
//! MARLIN_ADMIN_PASSWORD=dev123 marlin admin provision -e developer@gmail.com
//!
//! # Verify database connectivity and list collections
//! marlin db probe
//! ```
//!
//! # Commands
//!
//! - `admin provision` - Create or refresh the administrative account
//! - `db probe` - Verify connectivity and report topology
//!
//! Both commands exit `0` on success and `1` on any failure, for use in
//! automation pipelines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::SecretString;

use marlin_cli::{commands, config};

#[derive(Parser)]
#[command(name = "marlin")]
#[command(author, version, about = "Marlin operational CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the administrative account
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Database diagnostics
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create the administrative account, or refresh its credential
    Provision {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name (used only when the account is first created)
        #[arg(short, long, default_value = "Administrator")]
        name: String,

        /// Admin password; falls back to MARLIN_ADMIN_PASSWORD, then an
        /// interactive prompt
        #[arg(short, long)]
        password: Option<String>,

        /// Echo the plaintext password in the summary (local/dev use only)
        #[arg(long)]
        show_password: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Verify connectivity and report database name, host(s), and collections
    Probe,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Admin { action } => match action {
            AdminAction::Provision {
                email,
                name,
                password,
                show_password,
            } => {
                let password = resolve_password(password)?;
                commands::admin::provision(&email, &name, &password, show_password).await?;
            }
        },
        Commands::Db { action } => match action {
            DbAction::Probe => commands::probe::run().await?,
        },
    }
    Ok(())
}

/// Resolve the admin password: flag first, then environment, then an
/// interactive no-echo prompt with confirmation.
fn resolve_password(flag: Option<String>) -> Result<SecretString, Box<dyn std::error::Error>> {
    if let Some(password) = flag {
        return Ok(SecretString::from(password));
    }

    if let Some(password) = config::admin_password_from_env() {
        return Ok(password);
    }

    let first = rpassword::prompt_password("New admin password: ")?;
    let second = rpassword::prompt_password("Confirm admin password: ")?;
    if first != second {
        return Err("password confirmation does not match".into());
    }

    Ok(SecretString::from(first))
}
