use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorías fijas que acepta el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Accessories,
    Books,
    Clothing,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Accessories,
        Category::Books,
        Category::Clothing,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::Books => "Books",
            Category::Clothing => "Clothing",
            Category::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Producto tal como lo devuelve el servidor. El id lo asigna el backend
/// (Mongo lo serializa como "_id") y es inmutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category: Category,
}

/// Payload de actualización: todos los campos opcionales.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl From<ProductCreate> for ProductUpdate {
    fn from(payload: ProductCreate) -> Self {
        Self {
            name: Some(payload.name),
            price: Some(payload.price),
            category: Some(payload.category),
        }
    }
}

/// Agregación de solo lectura mostrada en el dashboard. Se recalcula en
/// cada fetch exitoso; no deriva estado que el servidor no tenga ya.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProductStats {
    pub total: usize,
    pub total_value: f64,
    pub average_price: f64,
}

impl ProductStats {
    pub fn compute(products: &[Product]) -> Self {
        let total = products.len();
        let total_value: f64 = products.iter().map(|p| p.price).sum();
        let average_price = if total > 0 {
            total_value / total as f64
        } else {
            0.0
        };

        Self {
            total,
            total_value,
            average_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            category: Category::Other,
        }
    }

    #[test]
    fn stats_over_empty_list_are_zero() {
        let stats = ProductStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_value, 0.0);
        // 0, no NaN ni error
        assert_eq!(stats.average_price, 0.0);
    }

    #[test]
    fn stats_sum_and_average() {
        let products = vec![product("1", 10.0), product("2", 20.0), product("3", 30.0)];
        let stats = ProductStats::compute(&products);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.total_value, 60.0);
        assert_eq!(stats.average_price, 20.0);
    }

    #[test]
    fn category_round_trips_through_strings() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("Gadgets"), None);
    }

    #[test]
    fn product_deserializes_mongo_style_id() {
        let json = r#"{"_id":"abc123","name":"Widget","price":9.99,"category":"Electronics"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "abc123");
        assert_eq!(product.category, Category::Electronics);
    }

    #[test]
    fn update_payload_skips_unset_fields() {
        let update = ProductUpdate {
            price: Some(5.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"price":5.0}"#);
    }
}
