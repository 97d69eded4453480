use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::gateway::{GatewayError, ProductGateway};
use crate::model::{Product, ProductDraft, ProductPatch};

/// `{success, data}` or `{success, message}` as sent by the catalog API.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

impl<T> Envelope<T> {
    fn into_data(self, status: StatusCode) -> Result<T, GatewayError> {
        if !status.is_success() || !self.success {
            return Err(GatewayError::Rejected(
                self.message.unwrap_or_else(|| status.to_string()),
            ));
        }
        self.data.ok_or(GatewayError::EmptyEnvelope)
    }

    fn into_message(self, status: StatusCode) -> Result<String, GatewayError> {
        let message = self.message.unwrap_or_else(|| status.to_string());
        if !status.is_success() || !self.success {
            return Err(GatewayError::Rejected(message));
        }
        Ok(message)
    }
}

async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<(StatusCode, Envelope<T>), GatewayError> {
    let status = response.status();
    let envelope = response
        .json::<Envelope<T>>()
        .await
        .map_err(GatewayError::Decode)?;
    Ok((status, envelope))
}

/// reqwest adapter for the `/api/products` endpoints.
pub struct HttpProductGateway {
    client: Client,
    base_url: String,
}

impl HttpProductGateway {
    /// `base_url` is the server origin, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn product_url(&self, id: &str) -> String {
        format!("{}/{}", self.products_url(), id)
    }
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let response = self.client.get(self.products_url()).send().await?;
        let (status, envelope) = read_envelope(response).await?;
        envelope.into_data(status)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError> {
        let response = self
            .client
            .post(self.products_url())
            .json(draft)
            .send()
            .await?;
        let (status, envelope) = read_envelope(response).await?;
        envelope.into_data(status)
    }

    async fn update(&self, id: &str, patch: &ProductPatch) -> Result<Product, GatewayError> {
        let response = self
            .client
            .put(self.product_url(id))
            .json(patch)
            .send()
            .await?;
        let (status, envelope) = read_envelope(response).await?;
        envelope.into_data(status)
    }

    async fn delete(&self, id: &str) -> Result<String, GatewayError> {
        let response = self.client.delete(self.product_url(id)).send().await?;
        let (status, envelope) = read_envelope::<serde_json::Value>(response).await?;
        envelope.into_message(status)
    }
}
