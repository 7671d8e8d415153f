//! Application Context
//!
//! Transient UI state shared via Leptos Context API: current page and the
//! catalog filter. None of it is persisted.

use leptos::prelude::*;

use crate::models::{Category, ItemId};
use crate::selectors::CatalogFilter;

/// Screen shown in the main area
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Catalog,
    Favorites,
    Cart,
    Product(ItemId),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Catalog search text - read
    pub search_term: ReadSignal<String>,
    set_search_term: WriteSignal<String>,
    /// Catalog category (None = all) - read
    pub category: ReadSignal<Option<Category>>,
    set_category: WriteSignal<Option<Category>>,
}

impl AppContext {
    pub fn new() -> Self {
        let (page, set_page) = signal(Page::default());
        let (search_term, set_search_term) = signal(String::new());
        let (category, set_category) = signal::<Option<Category>>(None);
        Self {
            page,
            set_page,
            search_term,
            set_search_term,
            category,
            set_category,
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    pub fn set_search_term(&self, term: String) {
        self.set_search_term.set(term);
    }

    pub fn set_category(&self, category: Option<Category>) {
        self.set_category.set(category);
    }

    /// Current filter as a plain value (tracked)
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            search_term: self.search_term.get(),
            category: self.category.get(),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
