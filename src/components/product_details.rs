//! Product Details Component
//!
//! Full view of one aircraft, loaded from the catalog API by id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CatalogClient;
use crate::config::ShopConfig;
use crate::models::{Item, ItemId};
use crate::selectors::format_price;
use crate::store::use_collection_store;

#[component]
pub fn ProductDetails(item_id: ItemId) -> impl IntoView {
    let store = use_collection_store();
    let config = expect_context::<ShopConfig>();
    let (aircraft, set_aircraft) = signal::<Option<Item>>(None);

    Effect::new(move |_| {
        let client = CatalogClient::new(config.clone());
        spawn_local(async move {
            match client.get_aircraft(item_id).await {
                Ok(item) => set_aircraft.set(Some(item)),
                Err(e) => log::error!("Failed to load aircraft {}: {}", item_id, e),
            }
        });
    });

    move || match aircraft.get() {
        None => view! { <div>"Loading..."</div> }.into_any(),
        Some(item) => {
            let favorite_item = item.clone();
            let cart_item = item.clone();
            view! {
                <div class="product-details">
                    <h2>{item.name.clone()}</h2>
                    <img src=item.img.clone() alt=item.name.clone() />
                    <p>{item.description.clone()}</p>
                    <p class="category">{item.category.as_str()}</p>
                    <p class="price">"Price: " {format_price(item.price)} " $"</p>
                    <button on:click=move |_| { store.add_to_favorites(favorite_item.clone()); }>
                        "Add to Favorites"
                    </button>
                    <button on:click=move |_| { store.add_to_cart(cart_item.clone()); }>
                        "Add to Cart"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
