//! Shopping cart rules: add-or-increment lines and totals.
//!
//! The cart lives for the page session and is keyed by product id: at most
//! one line per product, in first-added order. There is no explicit empty
//! operation; the session ends by being discarded.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price captured when the product was first added. Later
    /// catalog price changes do not affect existing lines.
    pub unit_price: Money,
    /// Quantity; saturates at the integer limit, no cap enforced.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// The session cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same product has its quantity incremented;
    /// otherwise a new line is appended with quantity 1. A product whose
    /// price does not parse is priced at zero.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price.money().unwrap_or_else(Money::zero),
            quantity: 1,
        });
    }

    /// Sum of line subtotals. An empty cart totals exactly zero.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc.saturating_add(line.subtotal()))
    }

    /// The cart lines, in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
