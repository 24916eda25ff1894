// web_app/api/client.rs - Typed calls against the products endpoints
//
// Philosophy:
// - One method per endpoint, no retries, no caching
// - Every non-2xx response becomes ApiError::Status with the backend's message
// - Bodies are read as text first so a bad payload yields a Decode error
//   instead of a transport error

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::{error_message_from_body, ApiConfig, ApiError};
use crate::web_app::model::{
    DataEnvelope, ListQuery, Product, ProductInput, ProductPage, ProductPatch, SaveRequest,
};

/// Handle to the products service, cheap to clone
#[derive(Clone, Debug)]
pub struct ProductApi {
    client: Client,
    config: ApiConfig,
}

impl ProductApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// URL of `GET /products` for the given filters and page
    pub fn list_url(&self, query: &ListQuery) -> Url {
        let mut url = self.config.endpoint(&["products"]);
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        url
    }

    pub fn product_url(&self, id: &str) -> Url {
        self.config.endpoint(&["products", id])
    }

    /// Fetch one page of products matching the filters
    pub async fn list_products(&self, query: &ListQuery) -> Result<ProductPage, ApiError> {
        let url = self.list_url(query);
        tracing::debug!("Listing products: {}", url);

        let page: ProductPage = self.send_json(self.client.get(url)).await?;
        tracing::debug!(
            "Received {} of {} products (page {})",
            page.data.len(),
            page.pagination.total,
            page.pagination.page
        );
        Ok(page)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let url = self.product_url(id);
        let envelope: DataEnvelope<Product> = self.send_json(self.client.get(url)).await?;
        Ok(envelope.data)
    }

    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let url = self.config.endpoint(&["products"]);
        let envelope: DataEnvelope<Product> =
            self.send_json(self.client.post(url).json(input)).await?;
        tracing::info!("Created product {} ({})", envelope.data.id, envelope.data.name);
        Ok(envelope.data)
    }

    pub async fn update_product(&self, id: &str, patch: &ProductPatch) -> Result<Product, ApiError> {
        let url = self.product_url(id);
        let envelope: DataEnvelope<Product> =
            self.send_json(self.client.put(url).json(patch)).await?;
        tracing::info!("Updated product {}", id);
        Ok(envelope.data)
    }

    /// Send a validated form submission
    pub async fn save(&self, request: &SaveRequest) -> Result<Product, ApiError> {
        match request {
            SaveRequest::Create(input) => self.create_product(input).await,
            SaveRequest::Update { id, patch } => self.update_product(id, patch).await,
        }
    }

    /// Delete a product; any 2xx counts as success and the body is ignored
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let url = self.product_url(id);
        self.send(self.client.delete(url)).await?;
        tracing::info!("Deleted product {}", id);
        Ok(())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Could not decode products response: {}", e);
            ApiError::Decode(e)
        })
    }

    /// Send the request and return the body of a successful response
    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Products request failed: {}", e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Products service answered {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message_from_body(&body),
            });
        }
        Ok(body)
    }
}
