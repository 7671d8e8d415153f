//! Derived Views
//!
//! Pure functions over store state and the transient catalog filter.
//! Nothing here mutates or persists.

use crate::collection::Collection;
use crate::models::{Category, Item};

/// Transient catalog filter (search box + category select), never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search_term: String,
    /// `None` = all categories
    pub category: Option<Category>,
}

impl CatalogFilter {
    pub fn matches(&self, item: &Item) -> bool {
        name_matches(item, &self.search_term.to_lowercase())
            && self.category.map_or(true, |c| item.category == c)
    }
}

fn name_matches(item: &Item, needle_lower: &str) -> bool {
    needle_lower.is_empty() || item.name.to_lowercase().contains(needle_lower)
}

/// Items whose name contains `search_term` (case-insensitive) and whose
/// category equals `category` when one is set. Keeps the input order.
pub fn filter_catalog<'a>(
    items: &'a [Item],
    search_term: &str,
    category: Option<Category>,
) -> impl Iterator<Item = &'a Item> + 'a {
    let needle = search_term.to_lowercase();
    items.iter().filter(move |item| {
        name_matches(item, &needle) && category.map_or(true, |c| item.category == c)
    })
}

/// Sum of item prices at full precision. Round only via [`format_price`].
pub fn cart_total(cart: &Collection) -> f64 {
    cart.iter().fold(0.0, |acc, item| acc + item.price)
}

/// Two-decimal display form of a price or total
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Header badge numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeCounts {
    pub cart: usize,
    pub favorites: usize,
}

pub fn counts(cart: &Collection, favorites: &Collection) -> BadgeCounts {
    BadgeCounts {
        cart: cart.len(),
        favorites: favorites.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::aircraft;
    use crate::models::ItemId;

    fn catalog() -> Vec<Item> {
        vec![
            aircraft(1, "F-22 Raptor", 150.0, Category::MultiRole),
            aircraft(2, "MiG-31", 80.0, Category::Interceptor),
            aircraft(3, "RAPTOR trainer", 10.0, Category::MilitaryTransport),
            aircraft(4, "C-17 Globemaster", 200.0, Category::MilitaryTransport),
            aircraft(5, "Su-27", 60.0, Category::Interceptor),
        ]
    }

    fn ids<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<ItemId> {
        items.map(|item| item.id).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let items = catalog();
        assert_eq!(ids(filter_catalog(&items, "", None)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = catalog();
        assert_eq!(ids(filter_catalog(&items, "raptor", None)), vec![1, 3]);
        assert_eq!(ids(filter_catalog(&items, "RaPtOr", None)), vec![1, 3]);
        assert_eq!(ids(filter_catalog(&items, "nothing", None)), Vec::<ItemId>::new());
    }

    #[test]
    fn test_category_and_search_combine() {
        let items = catalog();
        assert_eq!(ids(filter_catalog(&items, "", Some(Category::Interceptor))), vec![2, 5]);
        assert_eq!(
            ids(filter_catalog(&items, "raptor", Some(Category::MilitaryTransport))),
            vec![3]
        );
        assert!(filter_catalog(&items, "mig", Some(Category::MultiRole)).next().is_none());
    }

    #[test]
    fn test_filter_matches_agrees_with_filter_catalog() {
        let items = catalog();
        let filter = CatalogFilter {
            search_term: "-".to_string(),
            category: Some(Category::Interceptor),
        };
        let expected = ids(filter_catalog(&items, &filter.search_term, filter.category));
        let actual = ids(items.iter().filter(|item| filter.matches(item)));
        assert_eq!(actual, expected);
        assert!(CatalogFilter::default().matches(&items[0]));
    }

    #[test]
    fn test_cart_total() {
        assert_eq!(cart_total(&Collection::new()), 0.0);

        let cart: Collection = vec![
            aircraft(1, "a", 10.5, Category::MultiRole),
            aircraft(2, "b", 5.25, Category::MultiRole),
        ]
        .into();
        assert_eq!(cart_total(&cart), 15.75);
    }

    #[test]
    fn test_total_keeps_precision_until_display() {
        let cart: Collection = vec![
            aircraft(1, "a", 0.1, Category::MultiRole),
            aircraft(2, "b", 0.2, Category::MultiRole),
            aircraft(3, "c", 0.005, Category::MultiRole),
        ]
        .into();
        let total = cart_total(&cart);
        assert!((total - 0.305).abs() < 1e-12);
        assert_eq!(format_price(15.75), "15.75");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(3.0), "3.00");
    }

    #[test]
    fn test_counts() {
        let cart: Collection = vec![aircraft(1, "a", 1.0, Category::MultiRole)].into();
        let favorites: Collection = catalog().into();
        assert_eq!(counts(&cart, &favorites), BadgeCounts { cart: 1, favorites: 5 });
        assert_eq!(counts(&Collection::new(), &Collection::new()), BadgeCounts::default());
    }
}
