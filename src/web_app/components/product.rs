// web_app/components/product.rs - Product display components
//
// - ProductCard: Grid card linking to the detail page
// - ProductGrid: Responsive grid of cards, with loading, error and empty states

use leptos::prelude::*;

use crate::web_app::components::common::{scroll_to_top, ErrorDisplay, Loading, PriceDisplay};
use crate::web_app::config::image_url;
use crate::web_app::model::{CatalogStatus, Product};
use crate::web_app::state::{use_app_context, Navigator};

/// Product card
///
/// Clicking the card opens the detail page; signed-in shoppers also get an
/// add button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let navigator = Navigator::new();

    let route = product.route();
    let product_id = product.id.clone();
    let image = product.first_image().map(image_url).unwrap_or_default();

    view! {
        <div
            class="border border-gray-500/20 rounded-md px-3 py-2 bg-white w-full cursor-pointer hover:shadow-md transition"
            on:click=move |_| {
                navigator.go(&route);
                scroll_to_top();
            }
        >
            <div class="flex items-center justify-center px-2">
                <img class="max-w-26 md:max-w-36 transition group-hover:scale-105" src=image alt=product.name.clone() />
            </div>
            <div class="text-gray-500/60 text-sm mt-2">
                <p>{product.category.clone()}</p>
                <p class="text-gray-700 font-medium text-lg truncate w-full">{product.name.clone()}</p>
                <div class="flex items-end justify-between mt-3">
                    <p class="flex items-baseline gap-2">
                        <PriceDisplay price=product.offer_price highlight=true />
                        <PriceDisplay price=product.price />
                    </p>
                    <Show when=move || ctx.user().get().is_some()>
                        {
                            let product_id = product_id.clone();
                            view! {
                                <button
                                    class="bg-red-100 border border-red-300 px-3 h-[34px] rounded text-red-600 font-medium"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        ctx.add_to_cart(&product_id);
                                    }
                                >
                                    "Add"
                                </button>
                            }
                        }
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Grid of product cards
///
/// Until the catalog has arrived the grid shows a spinner, and a failed
/// load is shown in place of the products.
#[component]
pub fn ProductGrid(
    /// Products to show, already filtered
    #[prop(into)]
    products: Signal<Vec<Product>>,
    #[prop(default = "No products found.")]
    empty_message: &'static str,
) -> impl IntoView {
    let status = use_app_context().catalog_status();

    view! {
        {move || match status.get() {
            CatalogStatus::Loading => view! { <Loading message="Loading products..." /> }.into_any(),
            CatalogStatus::Failed(error) => view! { <ErrorDisplay error=error /> }.into_any(),
            CatalogStatus::Ready => {
                let items = products.get();
                if items.is_empty() {
                    view! { <p class="text-gray-500 my-8 text-center">{empty_message}</p> }.into_any()
                } else {
                    view! {
                        <div class="my-6 grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4 w-full">
                            {items.into_iter().map(|product| view! { <ProductCard product=product /> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }
        }}
    }
}
