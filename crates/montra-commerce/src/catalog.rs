//! Catalog document types: categories, products and the loaded catalog.
//!
//! The catalog is fetched as a single JSON document and replaced
//! wholesale, never patched. Its data is trusted: lookup misses are
//! tolerated, and a malformed price cell is kept and rendered as a
//! placeholder rather than failing the load.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::{CategoryId, ProductId};
use crate::money::{format_eur, Money};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
}

/// A raw price cell from the catalog document.
///
/// Deserializes leniently: a JSON number or a numeric string yields the
/// value, anything else yields a non-finite placeholder value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Price(f64);

impl Price {
    /// Wrap a raw price value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw numeric value (possibly non-finite).
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Whether the price parses as a finite number.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite()
    }

    /// The price as an exact amount, if it parses.
    pub fn money(&self) -> Option<Money> {
        Money::from_decimal(self.0)
    }

    /// Display label: the money rule, or the placeholder.
    pub fn label(&self) -> String {
        format_eur(self.0)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        // Non-finite prices compare equal.
        self.0 == other.0 || (!self.0.is_finite() && !other.0.is_finite())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let number = match value {
            serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            serde_json::Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        };
        Ok(Price(number))
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description shown on cards and in the detail view.
    pub description: String,
    /// Unit price as it appears in the document.
    pub price: Price,
    /// Category this product belongs to (exact match, no hierarchy).
    pub category: CategoryId,
    /// Image URL.
    pub image: String,
}

/// The loaded catalog: ordered categories and products.
///
/// Both top-level keys are required; a document missing either fails to
/// deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Categories, in document order.
    pub categories: Vec<Category>,
    /// Products, in document order.
    pub products: Vec<Product>,
}

impl Catalog {
    /// Look up a category name by id. A miss yields the empty string,
    /// not an error.
    pub fn category_name(&self, id: &CategoryId) -> &str {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    /// Look up a product by id.
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}
