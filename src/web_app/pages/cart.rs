// web_app/pages/cart.rs - Cart summary

use leptos::prelude::*;

use crate::web_app::components::{format_rupees, PriceDisplay};
use crate::web_app::config::image_url;
use crate::web_app::model::Route;
use crate::web_app::state::use_app_context;

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_app_context();
    let products = ctx.products();
    let cart = ctx.cart();

    let lines = Memo::new(move |_| cart.with(|c| products.with(|catalog| c.lines(catalog))));
    let total = move || format_rupees(cart.with(|c| products.with(|catalog| c.total(catalog))));

    view! {
        <div class="mt-16">
            <h1 class="text-3xl font-medium mb-6">
                "Shopping Cart "
                <span class="text-sm text-red-500">{move || format!("{} Items", ctx.cart_count())}</span>
            </h1>
            {move || {
                let lines = lines.get();
                if lines.is_empty() {
                    return view! {
                        <p class="text-gray-500">
                            "Your cart is empty. "
                            <a href=Route::Products.path() class="text-red-600 underline">"Continue shopping"</a>
                        </p>
                    }
                    .into_any();
                }
                view! {
                    <div class="flex flex-col gap-4 max-w-3xl">
                        {lines
                            .into_iter()
                            .map(|line| {
                                let subtotal = line.subtotal();
                                let image = line.product.first_image().map(image_url).unwrap_or_default();
                                view! {
                                    <div class="flex items-center justify-between border-b border-gray-200 pb-4">
                                        <div class="flex items-center gap-4">
                                            <img src=image alt=line.product.name.clone() class="w-20 h-20 object-cover border rounded" />
                                            <div>
                                                <p class="font-medium">{line.product.name.clone()}</p>
                                                <p class="text-gray-500">{format!("Qty: {}", line.quantity)}</p>
                                            </div>
                                        </div>
                                        <PriceDisplay price=subtotal highlight=true />
                                    </div>
                                }
                            })
                            .collect_view()}
                        <p class="flex justify-between text-lg font-medium mt-4">
                            <span>"Total Amount:"</span>
                            <span>{total}</span>
                        </p>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
