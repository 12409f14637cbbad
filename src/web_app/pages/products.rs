// web_app/pages/products.rs - Product listings
//
// - AllProductsPage: every in-stock product, narrowed by the navbar search
// - CategoryPage: in-stock products of the category in the URL

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::behavior::catalog::{in_category, matching_query};
use crate::web_app::components::ProductGrid;
use crate::web_app::state::use_app_context;

#[component]
fn ListingHeader(#[prop(into)] title: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-end w-max mt-16">
            <p class="text-2xl font-medium uppercase">{move || title.get()}</p>
            <div class="w-16 h-0.5 bg-red-500 rounded-full"></div>
        </div>
    }
}

#[component]
pub fn AllProductsPage() -> impl IntoView {
    let ctx = use_app_context();
    let products = ctx.products();
    let query = ctx.search_query();

    let filtered = Signal::derive(move || {
        let query = query.get();
        products.with(|catalog| matching_query(catalog, &query))
    });

    view! {
        <div>
            <ListingHeader title="All Products".to_string() />
            <ProductGrid products=filtered empty_message="No products match your search." />
        </div>
    }
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let ctx = use_app_context();
    let products = ctx.products();
    let params = use_params_map();

    let category = Memo::new(move |_| params.with(|p| p.get("category")).unwrap_or_default());
    let filtered = Signal::derive(move || {
        let segment = category.get();
        products.with(|catalog| in_category(catalog, &segment))
    });

    view! {
        <div>
            <ListingHeader title=Signal::derive(move || category.get()) />
            <ProductGrid products=filtered empty_message="No products found in this category." />
        </div>
    }
}
