use crate::config::FetcherConfig;
use crate::core::{ConfigProvider, Product, ProductSource};
use crate::utils::error::{ConnectorError, Result};
use crate::utils::validation::Validate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Fetches the product list from the product service with a single GET.
pub struct ProductFetcher {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl ProductFetcher {
    /// Validates the endpoint and timeout before any client is built.
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let settings = FetcherConfig {
            endpoint: config.endpoint().to_string(),
            timeout: config.request_timeout(),
        };
        settings.validate()?;

        let timeout = settings.timeout;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConnectorError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            endpoint: settings.endpoint,
            timeout,
            client,
        })
    }

    async fn get_body(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ConnectorError::HttpStatusError {
                url: self.endpoint.clone(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.transport_error(source))?;

        Ok(body.to_vec())
    }

    fn transport_error(&self, source: reqwest::Error) -> ConnectorError {
        if source.is_timeout() {
            tracing::warn!("Request to {} timed out after {:?}", self.endpoint, self.timeout);
        }
        ConnectorError::TransportError {
            url: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl ProductSource for ProductFetcher {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let body = self.get_body().await?;
        tracing::debug!("Received {} bytes", body.len());
        decode_products(&body)
    }
}

/// One-shot fetch against the endpoint described by `config`.
pub async fn fetch_products<C: ConfigProvider>(config: &C) -> Result<Vec<Product>> {
    ProductFetcher::new(config)?.fetch_products().await
}

/// Turns a response body into products, failing on the first bad element.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>> {
    let json_data: Value = serde_json::from_slice(body).map_err(ConnectorError::ParseError)?;

    let items = match json_data {
        Value::Array(items) => items,
        other => {
            return Err(ConnectorError::validation(
                None,
                format!("expected a JSON array of products, got {}", json_kind(&other)),
            ))
        }
    };

    let mut products = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let product: Product = serde_json::from_value(item)
            .map_err(|e| ConnectorError::validation(Some(index), e.to_string()))?;

        if product.name.trim().is_empty() {
            tracing::warn!("Product at index {} has an empty name", index);
        }
        products.push(product);
    }

    Ok(products)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
