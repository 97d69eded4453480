use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

/// New product. All fields are required; presence is checked by the server so
/// that a missing field yields the failure envelope rather than a parse error.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name
    pub name: Option<String>,
    /// Unit price, non-negative
    pub price: Option<f64>,
    /// Image URL
    pub image: Option<String>,
}

/// Partial update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Unit price, non-negative
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Image URL
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Image URL
    pub image: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price.value(),
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// `{ "success": true, "data": Product }`
#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub success: bool,
    pub data: ProductResponse,
}

impl From<Product> for ProductEnvelope {
    fn from(product: Product) -> Self {
        Self {
            success: true,
            data: product.into(),
        }
    }
}

/// `{ "success": true, "data": [Product] }`
#[derive(Debug, Clone, Object)]
pub struct ProductListEnvelope {
    pub success: bool,
    pub data: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductListEnvelope {
    fn from(products: Vec<Product>) -> Self {
        Self {
            success: true,
            data: products.into_iter().map(|p| p.into()).collect(),
        }
    }
}

/// `{ "success": true, "message": "..." }`
#[derive(Debug, Clone, Object)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: String,
}

impl MessageEnvelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
