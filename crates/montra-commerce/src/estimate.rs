//! Order-total estimator for the calculation form.
//!
//! A stateless compute-and-display operation: it never touches the cart.
//! Both validation checks run on every submission, so both errors can be
//! reported at once.

use thiserror::Error;

use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::money::Money;

/// Validation failures for the calculation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// No product is selected.
    #[error("select a product")]
    ProductRequired,

    /// The quantity is not a finite positive number (non-numeric, zero,
    /// or negative).
    #[error("quantity must be a positive number")]
    QuantityInvalid,
}

/// A computed order-total estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Name of the selected product, echoed back for confirmation.
    pub product_name: String,
    /// Parsed quantity (fractional quantities are accepted).
    pub quantity: f64,
    /// Price times quantity; `None` when the product's price does not
    /// parse, rendered as a placeholder.
    pub total: Option<Money>,
}

impl Estimate {
    /// Display label for the total.
    pub fn total_label(&self) -> String {
        match self.total {
            Some(total) => total.display(),
            None => crate::money::PLACEHOLDER.to_string(),
        }
    }
}

/// Validate the form inputs and compute the estimate.
///
/// `Ok(None)` means the inputs validated but the selection no longer
/// exists in the catalog; lookup misses are tolerated, never raised.
pub fn estimate(
    catalog: &Catalog,
    selection: Option<&ProductId>,
    quantity_raw: &str,
) -> Result<Option<Estimate>, Vec<EstimateError>> {
    let mut errors = Vec::new();
    if selection.is_none() {
        errors.push(EstimateError::ProductRequired);
    }
    let quantity = parse_quantity(quantity_raw);
    if quantity.is_none() {
        errors.push(EstimateError::QuantityInvalid);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let (Some(id), Some(quantity)) = (selection, quantity) else {
        return Err(errors);
    };
    let Some(product) = catalog.find_product(id) else {
        return Ok(None);
    };

    let total = product
        .price
        .money()
        .and_then(|price| price.multiply_decimal(quantity));

    Ok(Some(Estimate {
        product_name: product.name.clone(),
        quantity,
        total,
    }))
}

/// Parse a free-text quantity: trimmed, finite, strictly positive.
fn parse_quantity(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
