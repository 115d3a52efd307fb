//! The presentation adapter boundary.

use montra_commerce::catalog::Category;

use crate::effect::{
    CalculationOutcome, CartView, Effect, ProductDetailView, ProductListView, ProductOption,
    Severity,
};

/// The presentation layer, as seen from the dispatch loop.
///
/// Implementations own the markup, the modal chrome and the form controls;
/// the core hands them ready-to-render view data and never reads it back.
/// User interactions flow the other way, as [`crate::Intent`] values.
pub trait Presenter {
    /// Render the product list view (may be empty).
    fn render_products(&mut self, view: ProductListView);

    /// Populate the category filter control.
    fn render_filter_options(&mut self, categories: Vec<Category>);

    /// Populate the calculator's product selector.
    fn render_product_options(&mut self, options: Vec<ProductOption>);

    /// Render the cart lines and total.
    fn render_cart(&mut self, view: CartView);

    /// Render the calculation result or its validation errors.
    fn render_calculation(&mut self, outcome: CalculationOutcome);

    /// Open the product detail view.
    fn show_detail(&mut self, view: ProductDetailView);

    /// Close the product detail view.
    fn close_detail(&mut self);

    /// Show a transient feedback message.
    fn show_feedback(&mut self, message: &str, severity: Severity);

    /// Toggle the loading indicator.
    fn set_loading(&mut self, loading: bool);
}

/// Apply one effect to a presenter.
pub fn apply(presenter: &mut impl Presenter, effect: Effect) {
    match effect {
        Effect::RenderProducts(view) => presenter.render_products(view),
        Effect::RenderFilterOptions(categories) => presenter.render_filter_options(categories),
        Effect::RenderProductOptions(options) => presenter.render_product_options(options),
        Effect::RenderCart(view) => presenter.render_cart(view),
        Effect::RenderCalculation(outcome) => presenter.render_calculation(outcome),
        Effect::ShowDetail(view) => presenter.show_detail(view),
        Effect::CloseDetail => presenter.close_detail(),
        Effect::Feedback { message, severity } => presenter.show_feedback(&message, severity),
        Effect::SetLoading(loading) => presenter.set_loading(loading),
    }
}
