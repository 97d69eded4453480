use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductUpdate};
use business::domain::product::repository::ProductRepository;

/// Process-local product collection. Keeps insertion order; updates merge
/// under the write lock so they never recreate a removed record.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        self.products.write().await.push(product.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, update: &ProductUpdate) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let existing = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        *existing = existing.merge(update);
        Ok(existing.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let position = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        products.remove(position);
        Ok(())
    }
}
