use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductUpdate};

/// Document-store port for products.
///
/// `get_all` returns records in storage (insertion) order. `save` inserts a new
/// document. `update` merges the provided fields into an existing document in
/// one atomic write and returns the result. `update` and `delete` fail with
/// `RepositoryError::NotFound` when no record has the given id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn update(&self, id: Uuid, update: &ProductUpdate) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
