use serde::{Deserialize, Serialize};

/// Product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// Form contents for a product that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl ProductDraft {
    /// Same presence rule the server applies: every field set, text non-blank.
    pub fn is_complete(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.name) && self.price.is_some() && filled(&self.image)
    }
}

/// Fields to overwrite on an existing product.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: Some("Chair".to_string()),
            price: Some(49.99),
            image: Some("http://x/c.png".to_string()),
        }
    }

    #[test]
    fn should_accept_complete_draft() {
        assert!(draft().is_complete());
    }

    #[test]
    fn should_accept_zero_price() {
        let draft = ProductDraft {
            price: Some(0.0),
            ..draft()
        };

        assert!(draft.is_complete());
    }

    #[test]
    fn should_reject_draft_with_blank_name() {
        let draft = ProductDraft {
            name: Some("  ".to_string()),
            ..draft()
        };

        assert!(!draft.is_complete());
    }

    #[test]
    fn should_reject_draft_without_price() {
        let draft = ProductDraft {
            price: None,
            ..draft()
        };

        assert!(!draft.is_complete());
    }

    #[test]
    fn should_only_serialize_patched_fields() {
        let patch = ProductPatch {
            price: Some(10.0),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"price": 10.0})
        );
    }

    #[test]
    fn should_ignore_server_timestamps_when_decoding() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "name": "Chair",
            "price": 49.99,
            "image": "http://x/c.png",
            "created_at": "2024-06-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(product.id, "abc");
    }
}
