//! Cart Page Component
//!
//! Cart contents with the running total.

use leptos::prelude::*;

use crate::selectors::{cart_total, format_price};
use crate::store::{use_collection_store, CartStatus};
use super::AircraftCard;

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_collection_store();
    let total = Memo::new(move |_| cart_total(&store.cart()));

    view! {
        <div class="cart">
            <h2>"Cart"</h2>
            {move || match store.cart_status() {
                CartStatus::Pending => view! { <p class="cart-status">"Loading cart..."</p> }.into_any(),
                CartStatus::Unavailable(_) => {
                    view! { <p class="cart-status">"Saved cart could not be loaded."</p> }.into_any()
                }
                CartStatus::Loaded => ().into_any(),
            }}
            <div class="aircraft-list">
                <For
                    each=move || store.cart()
                    key=|item| item.id
                    children=move |item| view! { <AircraftCard item=item /> }
                />
            </div>
            <div class="total">
                <p>"Total: " {move || format_price(total.get())} " $"</p>
            </div>
        </div>
    }
}
