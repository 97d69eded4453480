use async_trait::async_trait;

use crate::model::{Product, ProductDraft, ProductPatch};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The server answered with a failure envelope.
    #[error("{0}")]
    Rejected(String),
    #[error("gateway.transport")]
    Transport(#[from] reqwest::Error),
    #[error("gateway.decode")]
    Decode(#[source] reqwest::Error),
    #[error("gateway.empty_envelope")]
    EmptyEnvelope,
}

/// One method per catalog endpoint.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;
    async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError>;
    async fn update(&self, id: &str, patch: &ProductPatch) -> Result<Product, GatewayError>;
    /// Returns the server's confirmation message.
    async fn delete(&self, id: &str) -> Result<String, GatewayError>;
}
