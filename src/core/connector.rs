use crate::core::{Product, ProductSource};
use crate::utils::error::Result;
use std::time::Instant;

pub struct Connector<S: ProductSource> {
    source: S,
}

impl<S: ProductSource> Connector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run(&self) -> Result<Vec<Product>> {
        tracing::info!("Fetching product list...");
        let started = Instant::now();

        match self.source.fetch_products().await {
            Ok(products) => {
                tracing::info!(
                    "Fetched {} products in {:?}",
                    products.len(),
                    started.elapsed()
                );
                Ok(products)
            }
            Err(e) => {
                tracing::debug!(
                    "Fetch failed after {:?} (category: {:?})",
                    started.elapsed(),
                    e.category()
                );
                Err(e)
            }
        }
    }
}
