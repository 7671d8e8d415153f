//! Aircraft Shop App
//!
//! Root component: wires the collection store, kicks off the one-shot cart
//! fetch and switches between pages.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpCartSource;
use crate::components::{CartPage, CatalogPage, FavoritesPage, Header, HomePage, ProductDetails};
use crate::config::ShopConfig;
use crate::context::{AppContext, Page};
use crate::persistence::BrowserStorage;
use crate::store::{provide_collection_store, CollectionStore};

#[component]
pub fn App() -> impl IntoView {
    let config = ShopConfig::from_build_env();
    let store = CollectionStore::new(Arc::new(BrowserStorage));
    let ctx = AppContext::new();

    // Provide context to all children
    provide_collection_store(store);
    provide_context(ctx);
    provide_context(config.clone());

    // Seed favorites and fetch the remote cart once; renders do not wait for it
    let source = HttpCartSource::new(&config);
    spawn_local(async move {
        store.initialize(&source).await;
    });

    view! {
        <div class="app">
            <Header />

            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Catalog => view! { <CatalogPage /> }.into_any(),
                    Page::Favorites => view! { <FavoritesPage /> }.into_any(),
                    Page::Cart => view! { <CartPage /> }.into_any(),
                    Page::Product(item_id) => view! { <ProductDetails item_id=item_id /> }.into_any(),
                }}
            </main>

            <footer class="footer">
                <p>"© 2023 Aircraft Shop. All rights reserved."</p>
            </footer>
        </div>
    }
}
