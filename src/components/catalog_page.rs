//! Catalog Page Component
//!
//! Searchable, category-filtered list of all aircraft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CatalogClient;
use crate::config::ShopConfig;
use crate::context::use_app_context;
use crate::models::{Category, Item, CATEGORIES};
use crate::selectors::filter_catalog;
use super::AircraftCard;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<ShopConfig>();
    let (aircraft, set_aircraft) = signal(Vec::<Item>::new());

    // Load catalog on mount
    Effect::new(move |_| {
        let client = CatalogClient::new(config.clone());
        spawn_local(async move {
            match client.list_aircraft().await {
                Ok(loaded) => {
                    log::info!("Loaded {} catalog items", loaded.len());
                    set_aircraft.set(loaded);
                }
                Err(e) => log::error!("Failed to load catalog: {}", e),
            }
        });
    });

    let visible = Memo::new(move |_| {
        let filter = ctx.filter();
        aircraft.with(|items| {
            filter_catalog(items, &filter.search_term, filter.category)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="catalog">
            <h2>"Aircraft Catalog"</h2>

            <div class="filters">
                <input
                    type="text"
                    placeholder="Search"
                    prop:value=move || ctx.search_term.get()
                    on:input=move |ev| ctx.set_search_term(event_target_value(&ev))
                />
                <select
                    prop:value=move || ctx.category.get().map(|c| c.as_str()).unwrap_or_default()
                    on:change=move |ev| ctx.set_category(Category::from_filter_value(&event_target_value(&ev)))
                >
                    <option value="">"All categories"</option>
                    {CATEGORIES
                        .iter()
                        .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="aircraft-list">
                <For
                    each=move || visible.get()
                    key=|item| item.id
                    children=move |item| view! { <AircraftCard item=item /> }
                />
            </div>
        </div>
    }
}
