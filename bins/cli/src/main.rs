//! Inspecta command-line front end.
//!
//! Signs in against the inspection backend, lists and submits inspections,
//! replays recorded GPS tracks and computes balance sheet totals offline.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inspecta_core::balance_sheet::LedgerField;
use inspecta_core::inspection::InspectionStatus;
use inspecta_shared::types::InspectionId;
use inspecta_shared::{AppConfig, Role};

#[derive(Parser)]
#[command(name = "inspecta")]
#[command(about = "Field inspection client")]
#[command(version)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

/// Credentials used to sign in before the command runs.
#[derive(Args)]
struct Credentials {
    /// Account email
    #[arg(long, env = "INSPECTA_EMAIL")]
    email: String,

    /// Account password
    #[arg(long, env = "INSPECTA_PASSWORD", hide_env_values = true)]
    password: String,

    /// Role to sign in as (admin, branch_admin, inspector)
    #[arg(long, env = "INSPECTA_ROLE", default_value = "inspector")]
    role: Role,
}

#[derive(Subcommand)]
enum Command {
    /// Compute balance sheet totals for a ledger
    Totals {
        /// JSON file with ledger fields
        #[arg(long)]
        ledger: Option<PathBuf>,

        /// Override one field, e.g. `--set cash_balance=100`
        #[arg(long = "set", value_parser = parse_field)]
        set: Vec<(LedgerField, String)>,
    },

    /// Sign in and print the account
    Login {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// List submitted inspections
    List {
        #[command(flatten)]
        credentials: Credentials,

        /// Only inspections with this status
        #[arg(long)]
        status: Option<InspectionStatus>,

        /// Free-text search
        #[arg(long)]
        search: Option<String>,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 20)]
        page_size: u32,
    },

    /// Dashboard counts for the signed-in role
    Stats {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Replay a recorded GPS track and print the trail
    Track {
        /// JSON lines file, one position per line
        #[arg(long)]
        replay: PathBuf,

        /// Seconds between samples
        #[arg(long, default_value_t = 1)]
        interval_secs: u64,
    },

    /// Submit an inspection form
    Submit {
        #[command(flatten)]
        credentials: Credentials,

        /// JSON file with the form sections
        #[arg(long)]
        form: PathBuf,

        /// Recorded GPS track to attach
        #[arg(long)]
        replay: Option<PathBuf>,

        /// Seconds between samples while replaying
        #[arg(long, default_value_t = 1)]
        interval_secs: u64,

        /// Update this inspection instead of creating one
        #[arg(long)]
        update: Option<InspectionId>,
    },
}

fn parse_field(arg: &str) -> Result<(LedgerField, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got `{arg}`"))?;
    Ok((name.parse()?, value.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "inspecta=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let config = AppConfig::load()?;

    match cli.command {
        Command::Totals { ledger, set } => commands::totals(ledger.as_deref(), set),
        Command::Login { credentials } => commands::login(&config, &credentials).await,
        Command::List {
            credentials,
            status,
            search,
            page,
            page_size,
        } => commands::list(&config, &credentials, status, search, page, page_size).await,
        Command::Stats { credentials } => commands::stats(&config, &credentials).await,
        Command::Track {
            replay,
            interval_secs,
        } => commands::track(&config, &replay, interval_secs).await,
        Command::Submit {
            credentials,
            form,
            replay,
            interval_secs,
            update,
        } => {
            commands::submit(
                &config,
                &credentials,
                &form,
                replay.as_deref(),
                interval_secs,
                update,
            )
            .await
        }
    }
}
