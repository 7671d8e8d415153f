//! Favorites Page Component

use leptos::prelude::*;

use crate::store::use_collection_store;
use super::AircraftCard;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let store = use_collection_store();

    view! {
        <div class="favorites">
            <h2>"Favorites"</h2>
            <Show
                when=move || !store.favorites().is_empty()
                fallback=|| view! { <p class="empty">"No favorites yet."</p> }
            >
                <div class="aircraft-list">
                    <For
                        each=move || store.favorites()
                        key=|item| item.id
                        children=move |item| view! { <AircraftCard item=item /> }
                    />
                </div>
            </Show>
        </div>
    }
}
