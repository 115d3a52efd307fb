//! User and system events entering the dispatch loop.

use montra_commerce::catalog::Catalog;
use montra_commerce::ids::ProductId;
use montra_commerce::search::FilterCriteria;
use montra_data::LoadError;

/// An event dispatched to the storefront.
///
/// The presentation adapter constructs user intents from its controls and
/// tags them with the data the core needs (criteria, product ids, raw
/// form input); `CatalogLoaded` re-enters the loop from the fetch task.
#[derive(Debug, Clone)]
pub enum Intent {
    /// Start (or restart) loading the catalog document.
    LoadCatalog,
    /// A catalog fetch finished.
    CatalogLoaded(Result<Catalog, LoadError>),
    /// A discrete filter control changed; recompute synchronously.
    FiltersChanged(FilterCriteria),
    /// The free-text search field was edited; debounced before dispatch.
    SearchEdited(FilterCriteria),
    /// The adapter reset its filter controls; render the default view.
    ClearFilters,
    /// Add one unit of a product to the cart.
    AddToCart(ProductId),
    /// Open the detail view for a product.
    ViewDetails(ProductId),
    /// Close the detail view.
    CloseDetails,
    /// Run the order-total calculation form.
    Calculate {
        /// Selected product id, if any.
        selection: Option<ProductId>,
        /// Raw quantity text from the form.
        quantity: String,
    },
}

impl Intent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::LoadCatalog => "load-catalog",
            Intent::CatalogLoaded(_) => "catalog-loaded",
            Intent::FiltersChanged(_) => "filters-changed",
            Intent::SearchEdited(_) => "search-edited",
            Intent::ClearFilters => "clear-filters",
            Intent::AddToCart(_) => "add-to-cart",
            Intent::ViewDetails(_) => "view-details",
            Intent::CloseDetails => "close-details",
            Intent::Calculate { .. } => "calculate",
        }
    }
}
