use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::Price;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw creation input. Every field is optional so presence can be checked here
/// instead of at deserialization time.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.image.is_none()
    }

    /// Checks every provided field and stamps the modification time. The
    /// result can be merged into any stored product without further checks.
    pub fn validate(self) -> Result<ProductUpdate, ProductError> {
        if self.is_empty() {
            return Err(ProductError::EmptyPatch);
        }

        let name = match self.name {
            Some(name) => Some(non_blank(Some(name)).ok_or(ProductError::EmptyField)?),
            None => None,
        };
        let image = match self.image {
            Some(image) => Some(non_blank(Some(image)).ok_or(ProductError::EmptyField)?),
            None => None,
        };
        let price = self.price.map(Price::new).transpose()?;

        Ok(ProductUpdate {
            name,
            price,
            image,
            updated_at: Utc::now(),
        })
    }
}

/// Validated partial update, ready to be merged by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = non_blank(props.name).ok_or(ProductError::MissingFields)?;
        let image = non_blank(props.image).ok_or(ProductError::MissingFields)?;
        let price = Price::new(props.price.ok_or(ProductError::MissingFields)?)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
            image,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: Price,
        image: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            image,
            created_at,
            updated_at,
        }
    }

    /// Merges `update` into a copy of this product. Fields left as `None` keep
    /// their current value; `id` and `created_at` never change.
    pub fn merge(&self, update: &ProductUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            price: update.price.unwrap_or(self.price),
            image: update.image.clone().unwrap_or_else(|| self.image.clone()),
            created_at: self.created_at,
            updated_at: update.updated_at,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chair_props() -> NewProductProps {
        NewProductProps {
            name: Some("Chair".to_string()),
            price: Some(49.99),
            image: Some("http://x/c.png".to_string()),
        }
    }

    #[test]
    fn should_create_product_when_all_fields_present() {
        let product = Product::new(chair_props()).unwrap();

        assert_eq!(product.name, "Chair");
        assert_eq!(product.price.value(), 49.99);
        assert_eq!(product.image, "http://x/c.png");
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_reject_product_when_name_is_blank() {
        let props = NewProductProps {
            name: Some("   ".to_string()),
            ..chair_props()
        };

        assert!(matches!(Product::new(props), Err(ProductError::MissingFields)));
    }

    #[test]
    fn should_reject_product_when_price_is_negative() {
        let props = NewProductProps {
            price: Some(-1.0),
            ..chair_props()
        };

        assert!(matches!(Product::new(props), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_keep_unspecified_fields_when_merging_partial_update() {
        let product = Product::new(chair_props()).unwrap();

        let update = ProductChanges {
            price: Some(39.5),
            ..Default::default()
        }
        .validate()
        .unwrap();

        let updated = product.merge(&update);

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.name, "Chair");
        assert_eq!(updated.image, "http://x/c.png");
        assert_eq!(updated.price.value(), 39.5);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.updated_at, update.updated_at);
    }

    #[test]
    fn should_reject_empty_patch() {
        let result = ProductChanges::default().validate();

        assert!(matches!(result, Err(ProductError::EmptyPatch)));
    }

    #[test]
    fn should_reject_patch_that_blanks_the_image() {
        let result = ProductChanges {
            image: Some(String::new()),
            ..Default::default()
        }
        .validate();

        assert!(matches!(result, Err(ProductError::EmptyField)));
    }

    #[test]
    fn should_reject_patch_with_negative_price() {
        let result = ProductChanges {
            price: Some(-5.0),
            ..Default::default()
        }
        .validate();

        assert!(matches!(result, Err(ProductError::InvalidPrice)));
    }

    proptest! {
        #[test]
        fn creation_succeeds_whenever_all_fields_are_present(
            name in "[a-zA-Z][a-zA-Z0-9 ]{0,30}",
            price in 0.0f64..100_000.0,
            image in "https?://[a-z]{1,10}/[a-z]{1,10}\\.png",
        ) {
            let product = Product::new(NewProductProps {
                name: Some(name.clone()),
                price: Some(price),
                image: Some(image.clone()),
            }).unwrap();

            prop_assert_eq!(product.name, name);
            prop_assert_eq!(product.price.value(), price);
            prop_assert_eq!(product.image, image);
        }

        #[test]
        fn creation_fails_whenever_a_field_is_missing(missing in 0usize..3) {
            let mut props = chair_props();
            match missing {
                0 => props.name = None,
                1 => props.price = None,
                _ => props.image = None,
            }

            prop_assert!(matches!(Product::new(props), Err(ProductError::MissingFields)));
        }
    }
}
