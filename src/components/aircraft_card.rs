//! Aircraft Card Component
//!
//! Single catalog item with favorite/cart actions.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::models::Item;
use crate::selectors::format_price;
use crate::store::use_collection_store;

/// Card for one aircraft, used by every list screen
#[component]
pub fn AircraftCard(item: Item) -> impl IntoView {
    let store = use_collection_store();
    let ctx = use_app_context();
    let id = item.id;

    let favorite_item = item.clone();
    let on_favorite = move |_| store.toggle_favorite(favorite_item.clone());

    let cart_item = item.clone();
    let on_cart = move |_| {
        if store.in_cart(id) {
            store.remove_from_cart(id);
        } else {
            store.add_to_cart(cart_item.clone());
        }
    };

    view! {
        <div class="aircraft-card">
            <img src=item.img.clone() alt=item.name.clone() />
            <h3>{item.name.clone()}</h3>
            <p>{item.description.clone()}</p>
            <p class="category">{item.category.as_str()}</p>
            <p class="price">"Price: " {format_price(item.price)} " $"</p>
            <button class="favorite-btn" on:click=on_favorite>
                {move || if store.is_favorite(id) { "Remove from Favorites" } else { "Add to Favorites" }}
            </button>
            <button class="cart-btn" on:click=on_cart>
                {move || if store.in_cart(id) { "Remove from Cart" } else { "Add to Cart" }}
            </button>
            <button class="details-btn" on:click=move |_| ctx.navigate(Page::Product(id))>
                "View Details"
            </button>
        </div>
    }
}
