//! Header Component
//!
//! Navigation bar with cart and favorites badge counts.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::selectors::counts;
use crate::store::use_collection_store;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_collection_store();
    let ctx = use_app_context();
    let badges = Memo::new(move |_| counts(&store.cart(), &store.favorites()));

    let nav_class = move |page: Page| {
        move || if ctx.page.get() == page { "nav-link active" } else { "nav-link" }
    };

    view! {
        <header class="header">
            <nav>
                <ul>
                    <li><a class={nav_class(Page::Home)} on:click=move |_| ctx.navigate(Page::Home)>"Home"</a></li>
                    <li><a class={nav_class(Page::Catalog)} on:click=move |_| ctx.navigate(Page::Catalog)>"Catalog"</a></li>
                    <li>
                        <a class={nav_class(Page::Favorites)} on:click=move |_| ctx.navigate(Page::Favorites)>
                            {move || format!("Favorites ({})", badges.get().favorites)}
                        </a>
                    </li>
                    <li>
                        <a class={nav_class(Page::Cart)} on:click=move |_| ctx.navigate(Page::Cart)>
                            {move || format!("Cart ({})", badges.get().cart)}
                        </a>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
