//! Filtering and sorting of the product list.
//!
//! `derive_view` is a pure function from a catalog plus filter criteria to
//! the visible product sequence. It never mutates the catalog and returns
//! a fresh list on every call; an empty result is a valid outcome, not an
//! error.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::catalog::{Catalog, Product};
use crate::ids::CategoryId;

/// Sort modes for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep the post-filter order.
    #[default]
    Default,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
}

impl SortMode {
    /// Wire string, as used by the sort control.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::NameAsc => "name-asc",
        }
    }

    /// Parse a wire string; unknown values fall back to `Default`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            "name-asc" => SortMode::NameAsc,
            _ => SortMode::Default,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Default => "Featured",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::NameAsc => "Name: A-Z",
        }
    }
}

/// The filter controls' current selection.
///
/// Transient UI state: owned by the presentation adapter and passed by
/// value into `derive_view`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Restrict to one category (exact match, no hierarchy).
    pub category: Option<CategoryId>,
    /// Free-text search term; matched against name and description.
    pub search: String,
    /// Sort mode.
    pub sort: SortMode,
}

impl FilterCriteria {
    /// Criteria matching everything in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category = Some(id.into());
        self
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}

/// Derive the visible product list from a catalog and filter criteria.
///
/// Filtering walks the catalog in document order; sorting is stable, so
/// ties keep their relative input order.
pub fn derive_view(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Product> {
    let mut products: Vec<Product> = catalog
        .products
        .iter()
        .filter(|p| {
            criteria
                .category
                .as_ref()
                .map_or(true, |c| &p.category == c)
        })
        .filter(|p| matches_search(p, &criteria.search))
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::Default => {}
        SortMode::PriceAsc => products.sort_by(cmp_price),
        SortMode::PriceDesc => products.sort_by(|a, b| cmp_price(b, a)),
        SortMode::NameAsc => products.sort_by(|a, b| cmp_name(&a.name, &b.name)),
    }

    products
}

/// Case-insensitive substring match against name or description.
/// A blank term (after trimming) matches everything.
fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    product.name.to_lowercase().contains(&term)
        || product.description.to_lowercase().contains(&term)
}

/// Numeric price compare; unparseable prices sort lowest.
fn cmp_price(a: &Product, b: &Product) -> Ordering {
    price_key(a)
        .partial_cmp(&price_key(b))
        .unwrap_or(Ordering::Equal)
}

fn price_key(product: &Product) -> f64 {
    let value = product.price.get();
    if value.is_finite() {
        value
    } else {
        f64::NEG_INFINITY
    }
}

/// Case-insensitive lexicographic name compare.
fn cmp_name(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;
    use crate::ids::ProductId;

    fn product(id: &str, name: &str, description: &str, price: f64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::new(price),
            category: CategoryId::new(category),
            image: format!("{id}.jpg"),
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            categories: vec![
                crate::catalog::Category { id: CategoryId::new("a"), name: "Alpha".into() },
                crate::catalog::Category { id: CategoryId::new("b"), name: "Beta".into() },
            ],
            products: vec![
                product("p-1", "Zebra figure", "striped miniature", 10.0, "a"),
                product("p-2", "apple crate", "Wooden box", 5.5, "b"),
                product("p-3", "Banner", "cloth STANDARD", 10.0, "a"),
                product("p-4", "mug", "ceramic", 2.0, "b"),
            ],
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_catalog_order() {
        let catalog = catalog();
        let view = derive_view(&catalog, &FilterCriteria::default());
        assert_eq!(ids(&view), ["p-1", "p-2", "p-3", "p-4"]);
    }

    #[test]
    fn test_category_filter_is_subset() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_category("b");
        let view = derive_view(&catalog, &criteria);
        assert_eq!(ids(&view), ["p-2", "p-4"]);
        assert!(view.iter().all(|p| p.category.as_str() == "b"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_search("ZEBRA");
        assert_eq!(ids(&derive_view(&catalog, &criteria)), ["p-1"]);

        // Matches in the description too.
        let criteria = FilterCriteria::new().with_search("standard");
        assert_eq!(ids(&derive_view(&catalog, &criteria)), ["p-3"]);
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_search("  mug  ");
        assert_eq!(ids(&derive_view(&catalog, &criteria)), ["p-4"]);

        let criteria = FilterCriteria::new().with_search("   ");
        assert_eq!(derive_view(&catalog, &criteria).len(), 4);
    }

    #[test]
    fn test_price_sort_and_reverse() {
        let catalog = catalog();
        let asc = derive_view(&catalog, &FilterCriteria::new().with_sort(SortMode::PriceAsc));
        assert_eq!(ids(&asc), ["p-4", "p-2", "p-1", "p-3"]);

        // Ties (p-1 and p-3 at 10.0) keep input order in both directions.
        let desc = derive_view(&catalog, &FilterCriteria::new().with_sort(SortMode::PriceDesc));
        assert_eq!(ids(&desc), ["p-1", "p-3", "p-2", "p-4"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let catalog = catalog();
        let view = derive_view(&catalog, &FilterCriteria::new().with_sort(SortMode::NameAsc));
        assert_eq!(ids(&view), ["p-2", "p-3", "p-4", "p-1"]);
    }

    #[test]
    fn test_unparseable_price_sorts_lowest() {
        let mut catalog = catalog();
        catalog.products.push(product("p-5", "Mystery", "no price", f64::NAN, "a"));
        let view = derive_view(&catalog, &FilterCriteria::new().with_sort(SortMode::PriceAsc));
        assert_eq!(view[0].id.as_str(), "p-5");
    }

    #[test]
    fn test_empty_result_is_valid() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_search("no such thing");
        assert!(derive_view(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let catalog = catalog();
        let before = catalog.clone();
        let criteria = FilterCriteria::new()
            .with_category("a")
            .with_search("zebra")
            .with_sort(SortMode::PriceDesc);
        let _ = derive_view(&catalog, &criteria);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_sort_mode_wire_strings() {
        assert_eq!(SortMode::from_str("price-asc"), SortMode::PriceAsc);
        assert_eq!(SortMode::from_str("garbage"), SortMode::Default);
        assert_eq!(SortMode::NameAsc.as_str(), "name-asc");
        assert_eq!(SortMode::PriceDesc.display_name(), "Price: High to Low");
    }
}
