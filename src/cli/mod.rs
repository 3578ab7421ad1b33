// ABOUTME: CLI argument parsing and command routing for linkdeck
//
// Provides command-line interface for:
// - Launching the TUI (tui, default)
// - Listing companies (companies)
// - Headless Monday.com connection (connect)

pub mod companies;
pub mod connect;

use crate::api::DashboardApiClient;
use crate::config::{AppConfig, ACCESS_TOKEN_ENV};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

/// Terminal dashboard for social link performance tracking
#[derive(Parser)]
#[command(name = "linkdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// List companies and their Monday.com connection status
    Companies(CompaniesArgs),

    /// Connect a company to a Monday.com board without the TUI
    Connect(ConnectArgs),
}

/// Arguments for the companies command
#[derive(clap::Args)]
pub struct CompaniesArgs {
    /// Show only companies not yet connected to Monday.com
    #[arg(long)]
    pub disconnected: bool,
}

/// Arguments for the connect command
#[derive(clap::Args)]
pub struct ConnectArgs {
    /// Id of the company to connect
    #[arg(long)]
    pub company: i64,

    /// Monday.com API token (falls back to MONDAY_API_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Workspace id or name
    #[arg(long)]
    pub workspace: String,

    /// Board id or name
    #[arg(long)]
    pub board: String,

    /// Column id or title to receive view counts
    #[arg(long)]
    pub views: String,

    /// Column id or title to receive like counts
    #[arg(long)]
    pub likes: String,

    /// Column id or title to receive comment counts
    #[arg(long)]
    pub comments: String,
}

/// Build a backend client from config files and the environment.
pub(crate) fn build_client() -> Result<DashboardApiClient> {
    let config = AppConfig::load()?;
    let access_token = config.api.resolve_access_token().with_context(|| {
        format!("No backend access token. Set {ACCESS_TOKEN_ENV} or api.access_token in the config file")
    })?;
    DashboardApiClient::new(&config.api.base_url, access_token, config.api.timeout())
}
