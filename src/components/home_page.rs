//! Home Page Component

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="home">
            <section class="about">
                <h2>"Welcome to our shop!"</h2>
                <p>"We offer a wide range of high-quality fighter aircraft."</p>
                <button on:click=move |_| ctx.navigate(Page::Catalog)>"Browse the catalog"</button>
            </section>
        </div>
    }
}
