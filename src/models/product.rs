use serde::{Deserialize, Serialize};

/// Category as the backend ships it: sometimes a bare name, sometimes an
/// embedded reference object. Always normalize through `name()` before
/// displaying or editing.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum CategoryRef {
    Name(String),
    Object { name: String },
}

impl CategoryRef {
    /// Bare category name, whatever the wire shape was
    pub fn name(&self) -> &str {
        match self {
            CategoryRef::Name(name) => name,
            CategoryRef::Object { name } => name,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: CategoryRef,
    #[serde(rename = "inStock", default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Price formatted for display, always two decimal places
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Normalized category name for display
    pub fn category_name(&self) -> &str {
        self.category.name()
    }
}

/// Body sent on create/update: price already coerced to a number and the
/// category always the bare name string.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_product_with_bare_category_string() {
        let json = r#"{
            "_id": "65a1",
            "name": "Hammer",
            "description": "Claw hammer",
            "price": 19.5,
            "category": "Tools",
            "inStock": false,
            "imageUrl": "https://example.com/hammer.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "65a1");
        assert_eq!(product.category_name(), "Tools");
        assert!(!product.in_stock);
        assert_eq!(product.image_url.as_deref(), Some("https://example.com/hammer.png"));
    }

    #[test]
    fn parses_product_with_embedded_category_object() {
        let json = r#"{
            "_id": "65a2",
            "name": "Drill",
            "price": 120.0,
            "category": { "_id": "c1", "name": "Power Tools" }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category_name(), "Power Tools");
        // Missing optional fields fall back to their defaults
        assert!(product.in_stock);
        assert_eq!(product.description, None);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn display_price_always_shows_two_decimals() {
        let json = r#"{"_id":"1","name":"Widget","price":19.5,"category":"Tools"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.display_price(), "19.50");
    }

    #[test]
    fn payload_serializes_with_backend_field_names() {
        let payload = ProductPayload {
            name: "Widget".to_string(),
            description: String::new(),
            price: 12.99,
            category: "Tools".to_string(),
            in_stock: true,
            image_url: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["name"], "Widget");
        assert_eq!(value["price"], 12.99);
        assert_eq!(value["inStock"], true);
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("in_stock").is_none());
    }
}
