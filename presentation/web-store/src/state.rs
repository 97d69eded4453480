use crate::model::Product;

/// Snapshot of the products known to the UI, in server order.
///
/// Every transition consumes the snapshot and returns the next one, so a
/// renderer can hold the value it was given without it changing underneath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn with_appended(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Swaps the product with `id` for `product`. Unknown ids leave the
    /// snapshot unchanged.
    pub fn with_replaced(mut self, id: &str, product: Product) -> Self {
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == id) {
            *slot = product;
        }
        self
    }

    pub fn without(mut self, id: &str) -> Self {
        self.products.retain(|p| p.id != id);
        self
    }
}
