use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/all_products";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    }
}

/// Anything that can hand back the current product list.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}
