//! Render commands and the view payloads they carry.
//!
//! View types are built by the dispatch pipeline with money labels and
//! category names already resolved, so the presentation adapter stays
//! markup-only and never reads state back.

use serde::Serialize;

use montra_commerce::cart::Cart;
use montra_commerce::catalog::{Catalog, Category, Product};
use montra_commerce::estimate::{Estimate, EstimateError};
use montra_commerce::ids::ProductId;

/// Severity of a transient feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A product card in the list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price per the money rule, or the placeholder.
    pub price_label: String,
    /// Resolved category name; empty on a lookup miss.
    pub category_name: String,
    pub image: String,
}

impl ProductCard {
    /// Build a card for one product.
    pub fn build(catalog: &Catalog, product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price_label: product.price.label(),
            category_name: catalog.category_name(&product.category).to_string(),
            image: product.image.clone(),
        }
    }
}

/// The filtered/sorted product list, ready to render.
///
/// Only emitted once a catalog is loaded, so an empty list always means
/// "filters matched zero products", never "no catalog yet".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListView {
    pub products: Vec<ProductCard>,
}

impl ProductListView {
    /// Build the view for a derived product sequence.
    pub fn build(catalog: &Catalog, products: &[Product]) -> Self {
        Self {
            products: products
                .iter()
                .map(|p| ProductCard::build(catalog, p))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// An option for the calculator's product selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductOption {
    pub id: ProductId,
    /// Label in the form `"Name (12,50 €)"`.
    pub label: String,
}

impl ProductOption {
    pub fn build(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            label: format!("{} ({})", product.name, product.price.label()),
        }
    }
}

/// A cart line, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
    pub quantity: u32,
    pub name: String,
    /// Line subtotal per the money rule.
    pub subtotal_label: String,
}

/// The cart lines plus the running total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Cart total per the money rule; `"0,00 €"` when empty.
    pub total_label: String,
}

impl CartView {
    /// Build the full cart view from the current cart.
    pub fn build(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    quantity: line.quantity,
                    name: line.name.clone(),
                    subtotal_label: line.subtotal().display(),
                })
                .collect(),
            total_label: cart.total().display(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The modal detail view of a single product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailView {
    pub name: String,
    pub image: String,
    pub description: String,
    pub price_label: String,
    pub category_name: String,
}

impl ProductDetailView {
    pub fn build(catalog: &Catalog, product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            price_label: product.price.label(),
            category_name: catalog.category_name(&product.category).to_string(),
        }
    }
}

/// The computed calculation, echoing product and quantity back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationView {
    pub product_name: String,
    pub quantity: f64,
    pub total_label: String,
}

impl CalculationView {
    pub fn build(estimate: &Estimate) -> Self {
        Self {
            product_name: estimate.product_name.clone(),
            quantity: estimate.quantity,
            total_label: estimate.total_label(),
        }
    }
}

/// Result of the calculation form.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    /// Inputs validated and the product was found.
    Computed(CalculationView),
    /// Inputs validated but the selection misses the catalog; clear the
    /// display.
    Cleared,
    /// Validation failed; errors render inline next to their fields.
    Invalid(Vec<EstimateError>),
}

/// A command from the dispatch loop to the presentation adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Render the product list view.
    RenderProducts(ProductListView),
    /// Populate the category filter control.
    RenderFilterOptions(Vec<Category>),
    /// Populate the calculator's product selector.
    RenderProductOptions(Vec<ProductOption>),
    /// Render the cart lines and total.
    RenderCart(CartView),
    /// Render the calculation result or its validation errors.
    RenderCalculation(CalculationOutcome),
    /// Open the detail view.
    ShowDetail(ProductDetailView),
    /// Close the detail view.
    CloseDetail,
    /// Show a transient feedback message.
    Feedback { message: String, severity: Severity },
    /// Toggle the loading indicator.
    SetLoading(bool),
}
