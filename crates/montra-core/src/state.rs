//! Owned session state and the pure intent-to-effect transition.
//!
//! `update` does no I/O: `Intent::LoadCatalog` only yields the loading
//! indicator effects, the fetch itself is driven by the event loop in
//! [`crate::app`]. This keeps every state transition testable without a
//! rendering environment or a network.

use montra_commerce::cart::Cart;
use montra_commerce::catalog::Catalog;
use montra_commerce::estimate;
use montra_commerce::search::{derive_view, FilterCriteria};

use crate::effect::{
    CalculationOutcome, CalculationView, CartView, Effect, ProductDetailView, ProductListView,
    ProductOption, Severity,
};
use crate::intent::Intent;

/// Single source of truth for the page session.
///
/// Created once at session start and discarded at session end. `catalog`
/// stays `None` until a load completes, which is distinct from a loaded
/// catalog whose filtered view is empty.
#[derive(Debug, Default)]
pub struct StoreState {
    catalog: Option<Catalog>,
    cart: Cart,
}

impl StoreState {
    /// Fresh state for a new session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded catalog, if any.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// The session cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

/// Apply one intent to the state, returning render effects in order.
pub fn update(state: &mut StoreState, intent: Intent) -> Vec<Effect> {
    match intent {
        Intent::LoadCatalog => vec![
            Effect::SetLoading(true),
            feedback("Loading catalog...", Severity::Success),
        ],
        Intent::CatalogLoaded(Ok(catalog)) => on_catalog_loaded(state, catalog),
        Intent::CatalogLoaded(Err(error)) => {
            // The previous catalog (possibly none) stays in place.
            tracing::warn!(%error, "catalog load failed");
            vec![
                feedback("Could not load the catalog.", Severity::Error),
                Effect::SetLoading(false),
            ]
        }
        Intent::FiltersChanged(criteria) | Intent::SearchEdited(criteria) => {
            render_products(state, &criteria)
        }
        Intent::ClearFilters => {
            let mut effects = render_products(state, &FilterCriteria::default());
            effects.push(feedback("Filters cleared.", Severity::Success));
            effects
        }
        Intent::AddToCart(id) => {
            let Some(product) = state.catalog.as_ref().and_then(|c| c.find_product(&id)).cloned()
            else {
                tracing::warn!(product = %id, "add-to-cart for unknown product");
                return Vec::new();
            };
            if !product.price.is_valid() {
                tracing::warn!(product = %id, "unparseable price, cart line priced at zero");
            }
            state.cart.add(&product);
            vec![
                Effect::RenderCart(CartView::build(&state.cart)),
                feedback(
                    format!("\"{}\" was added to the cart.", product.name),
                    Severity::Success,
                ),
            ]
        }
        Intent::ViewDetails(id) => {
            let Some(catalog) = &state.catalog else {
                return Vec::new();
            };
            match catalog.find_product(&id) {
                Some(product) => {
                    vec![Effect::ShowDetail(ProductDetailView::build(catalog, product))]
                }
                None => {
                    tracing::warn!(product = %id, "detail view for unknown product");
                    Vec::new()
                }
            }
        }
        Intent::CloseDetails => vec![Effect::CloseDetail],
        Intent::Calculate { selection, quantity } => {
            let empty = Catalog::default();
            let catalog = state.catalog.as_ref().unwrap_or(&empty);
            match estimate::estimate(catalog, selection.as_ref(), &quantity) {
                Ok(Some(estimate)) => vec![
                    Effect::RenderCalculation(CalculationOutcome::Computed(
                        CalculationView::build(&estimate),
                    )),
                    feedback("Calculation complete.", Severity::Success),
                ],
                Ok(None) => vec![Effect::RenderCalculation(CalculationOutcome::Cleared)],
                Err(errors) => {
                    vec![Effect::RenderCalculation(CalculationOutcome::Invalid(errors))]
                }
            }
        }
    }
}

/// Replace the catalog wholesale and rebuild the catalog-backed views.
fn on_catalog_loaded(state: &mut StoreState, catalog: Catalog) -> Vec<Effect> {
    tracing::info!(
        products = catalog.products.len(),
        categories = catalog.categories.len(),
        "catalog loaded"
    );

    let products = derive_view(&catalog, &FilterCriteria::default());
    let effects = vec![
        Effect::RenderFilterOptions(catalog.categories.clone()),
        Effect::RenderProductOptions(
            catalog.products.iter().map(ProductOption::build).collect(),
        ),
        Effect::RenderProducts(ProductListView::build(&catalog, &products)),
        Effect::RenderCart(CartView::build(&state.cart)),
        feedback("Catalog loaded.", Severity::Success),
        Effect::SetLoading(false),
    ];
    state.catalog = Some(catalog);
    effects
}

/// Derive and render the product list for the given criteria.
/// A no-op while no catalog is loaded (the controls are inert then).
fn render_products(state: &StoreState, criteria: &FilterCriteria) -> Vec<Effect> {
    let Some(catalog) = &state.catalog else {
        return Vec::new();
    };
    let products = derive_view(catalog, criteria);
    vec![Effect::RenderProducts(ProductListView::build(catalog, &products))]
}

fn feedback(message: impl Into<String>, severity: Severity) -> Effect {
    Effect::Feedback {
        message: message.into(),
        severity,
    }
}
