pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, FetcherConfig};
pub use crate::core::{
    connector::Connector,
    fetcher::{fetch_products, ProductFetcher},
    output::OutputFormat,
};
pub use crate::domain::{
    model::Product,
    ports::{ConfigProvider, ProductSource},
};
pub use crate::utils::error::{ConnectorError, ErrorCategory, Result};
