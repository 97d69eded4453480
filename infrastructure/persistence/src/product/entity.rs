use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::Price;

/// Body of a product document as stored in the `document` JSONB column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub name: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub document: Json<ProductDocument>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            document: Json(ProductDocument {
                name: product.name.clone(),
                price: product.price.value(),
                image: product.image.clone(),
            }),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let Json(document) = self.document;
        let price = Price::new(document.price).map_err(|_| {
            tracing::warn!("Stored product {} has an invalid price", self.id);
            RepositoryError::Serialization
        })?;

        Ok(Product::from_repository(
            self.id,
            document.name,
            price,
            document.image,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductProps;

    #[test]
    fn should_store_product_fields_in_document() {
        let product = Product::new(NewProductProps {
            name: Some("Chair".to_string()),
            price: Some(49.99),
            image: Some("http://x/c.png".to_string()),
        })
        .unwrap();

        let entity = ProductEntity::from_domain(&product);

        assert_eq!(entity.id, product.id);
        assert_eq!(
            serde_json::to_value(&entity.document.0).unwrap(),
            serde_json::json!({"name": "Chair", "price": 49.99, "image": "http://x/c.png"})
        );
        assert_eq!(entity.into_domain().unwrap(), product);
    }

    #[test]
    fn should_reject_document_with_negative_price() {
        let now = Utc::now();
        let entity = ProductEntity {
            id: Uuid::new_v4(),
            document: Json(ProductDocument {
                name: "Broken".to_string(),
                price: -3.0,
                image: "http://x/b.png".to_string(),
            }),
            created_at: now,
            updated_at: now,
        };

        assert!(matches!(
            entity.into_domain(),
            Err(RepositoryError::Serialization)
        ));
    }
}
