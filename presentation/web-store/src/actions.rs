use std::sync::Arc;

use crate::gateway::{GatewayError, ProductGateway};
use crate::model::{ProductDraft, ProductPatch};
use crate::state::ProductStore;

/// Result of a store action, shaped for a toast: never an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOutcome {
    pub success: bool,
    pub message: String,
}

impl StoreOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Turns a gateway failure into an outcome. Server rejections keep the
/// server's message; transport problems are logged and replaced by `fallback`.
fn failure(err: GatewayError, fallback: &str) -> StoreOutcome {
    match err {
        GatewayError::Rejected(message) => StoreOutcome::failed(message),
        other => {
            tracing::error!("{}: {}", fallback, other);
            StoreOutcome::failed(fallback)
        }
    }
}

/// The four catalog operations as state transitions.
///
/// Local state only changes after the server confirms; on failure the input
/// snapshot is handed back untouched.
pub struct ProductActions {
    gateway: Arc<dyn ProductGateway>,
}

impl ProductActions {
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self { gateway }
    }

    pub async fn fetch_products(&self, store: ProductStore) -> (ProductStore, StoreOutcome) {
        match self.gateway.list().await {
            Ok(products) => (
                store.with_products(products),
                StoreOutcome::ok("Products fetched successfully"),
            ),
            Err(err) => (store, failure(err, "Failed to fetch products")),
        }
    }

    pub async fn create_product(
        &self,
        store: ProductStore,
        draft: ProductDraft,
    ) -> (ProductStore, StoreOutcome) {
        if !draft.is_complete() {
            return (store, StoreOutcome::failed("All fields are required"));
        }

        match self.gateway.create(&draft).await {
            Ok(product) => (
                store.with_appended(product),
                StoreOutcome::ok("Product created successfully"),
            ),
            Err(err) => (store, failure(err, "Failed to create product")),
        }
    }

    pub async fn update_product(
        &self,
        store: ProductStore,
        id: &str,
        patch: ProductPatch,
    ) -> (ProductStore, StoreOutcome) {
        match self.gateway.update(id, &patch).await {
            Ok(product) => (
                store.with_replaced(id, product),
                StoreOutcome::ok("Product updated successfully"),
            ),
            Err(err) => (store, failure(err, "Failed to update product")),
        }
    }

    pub async fn delete_product(
        &self,
        store: ProductStore,
        id: &str,
    ) -> (ProductStore, StoreOutcome) {
        match self.gateway.delete(id).await {
            Ok(message) => (store.without(id), StoreOutcome::ok(message)),
            Err(err) => (store, failure(err, "Failed to delete product")),
        }
    }
}
