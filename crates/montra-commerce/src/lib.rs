//! Storefront domain types and logic for Montra.
//!
//! This crate provides the pure core of the storefront widget:
//!
//! - **Catalog**: products, categories, and the loaded catalog document
//! - **Search**: deriving a filtered/sorted product view from criteria
//! - **Cart**: session cart rules and totals
//! - **Estimate**: the order-total calculation form
//! - **Money**: euro amounts and the storefront display rule
//!
//! Everything here is synchronous and I/O-free; fetching the catalog and
//! driving the event loop live in `montra-data` and `montra-core`.
//!
//! # Example
//!
//! ```rust
//! use montra_commerce::prelude::*;
//!
//! let catalog: Catalog = serde_json::from_str(
//!     r#"{"categories": [{"id": "c1", "name": "Toys"}],
//!         "products": [{"id": "p1", "name": "Kite", "description": "A red kite",
//!                       "price": 12.5, "category": "c1", "image": "kite.jpg"}]}"#,
//! ).unwrap();
//!
//! // Derive the visible list.
//! let view = derive_view(&catalog, &FilterCriteria::new().with_search("kite"));
//! assert_eq!(view.len(), 1);
//!
//! // Accumulate a cart.
//! let mut cart = Cart::new();
//! cart.add(&view[0]);
//! assert_eq!(cart.total().display(), "12,50 €");
//! ```

pub mod cart;
pub mod catalog;
pub mod estimate;
pub mod ids;
pub mod money;
pub mod search;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Category, Price, Product};
pub use ids::{CategoryId, ProductId};
pub use money::Money;
pub use search::{derive_view, FilterCriteria, SortMode};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartLine};
    pub use crate::catalog::{Catalog, Category, Price, Product};
    pub use crate::estimate::{estimate, Estimate, EstimateError};
    pub use crate::ids::{CategoryId, ProductId};
    pub use crate::money::{format_eur, Money};
    pub use crate::search::{derive_view, FilterCriteria, SortMode};
}
