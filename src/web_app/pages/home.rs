// web_app/pages/home.rs - Landing page

use leptos::prelude::*;

use crate::web_app::behavior::catalog::displayable;
use crate::web_app::components::{Banner, ProductGrid};
use crate::web_app::state::use_app_context;

const BEST_SELLER_COUNT: usize = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let products = ctx.products();

    let best_sellers = Signal::derive(move || {
        products.with(|catalog| {
            let mut shown = displayable(catalog);
            shown.truncate(BEST_SELLER_COUNT);
            shown
        })
    });

    view! {
        <div class="mt-6">
            <Banner />
            <section class="mt-16">
                <p class="text-2xl md:text-3xl font-medium">"Best Sellers"</p>
                <ProductGrid products=best_sellers />
            </section>
        </div>
    }
}
