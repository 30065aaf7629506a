pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::ports::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
use crate::core::output::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Resolved settings the fetcher is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl FetcherConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ConfigProvider for FetcherConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }
}

impl Validate for FetcherConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_range(
            "timeout_ms",
            self.timeout.as_millis(),
            1,
            u128::from(MAX_TIMEOUT_SECS) * 1000,
        )
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "shopping-list-connector")]
#[command(about = "Fetch the product list from the shopping list service")]
pub struct CliConfig {
    #[arg(long, env = "SHOPPING_LIST_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(
        long,
        env = "SHOPPING_LIST_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long, help = "TOML file with a [source] table; overrides --endpoint/--timeout")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Debug)]
    pub output: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Builds the fetcher settings from the config file if one was given,
    /// otherwise from the command line.
    pub fn resolve(&self) -> Result<FetcherConfig> {
        let resolved = match &self.config {
            Some(path) => {
                tracing::debug!("Loading source settings from {}", path.display());
                FetcherConfig::from(&toml_config::TomlConfig::from_file(path)?)
            }
            None => FetcherConfig {
                endpoint: self.endpoint.clone(),
                timeout: Duration::from_secs(self.timeout),
            },
        };

        resolved.validate()?;
        Ok(resolved)
    }
}
