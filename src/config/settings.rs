//! Runtime settings from the command line and `REINVITE_*` variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ORGANIZATION: &str = "18-341";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),
}

#[derive(Parser, Debug, Clone)]
#[command(name = "github-reinvite")]
#[command(about = "Form for re-inviting students to their assignment repositories")]
#[command(version)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "REINVITE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, env = "REINVITE_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// URL of the re-invite endpoint (for example https://host/api/reinvite)
    #[arg(short, long, env = "REINVITE_ENDPOINT")]
    pub endpoint: String,

    /// Organization the form serves
    #[arg(short, long, env = "REINVITE_ORGANIZATION", default_value = DEFAULT_ORGANIZATION)]
    pub organization: String,

    /// Catalog file (.toml, .yaml or .yml) replacing the built-in table
    #[arg(short, long, env = "REINVITE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Endpoint request timeout in seconds
    #[arg(long, env = "REINVITE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long, env = "REINVITE_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "github_reinvite=debug,tower_http=debug,info"
        } else {
            "info"
        }
    }
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: String,
    pub port: u16,
    /// URL of the re-invite endpoint
    pub endpoint: String,
    /// Organization the form serves
    pub organization: String,
    /// Optional catalog file replacing the built-in table
    pub catalog_path: Option<PathBuf>,
    pub timeout: Duration,
}

impl Settings {
    /// Default settings forwarding to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            endpoint: endpoint.into(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            catalog_path: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Socket address the server listens on
    pub fn listen_addr(&self) -> Result<SocketAddr, SettingsError> {
        let addr = format!("{}:{}", self.bind, self.port);
        addr.parse()
            .map_err(|_| SettingsError::InvalidAddress(addr))
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            bind: cli.bind,
            port: cli.port,
            endpoint: cli.endpoint,
            organization: cli.organization,
            catalog_path: cli.catalog,
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }
}
