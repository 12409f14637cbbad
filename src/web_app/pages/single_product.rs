// web_app/pages/single_product.rs - Product detail page
//
// Resolves the product from the `:id` route parameter against the shared
// catalog, shows an image gallery, prices, cart actions and up to five
// related products from the same category.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::behavior::catalog::{find_product, related_products, RelatedSection};
use crate::web_app::behavior::gallery::Gallery;
use crate::web_app::components::{scroll_to_top, PriceDisplay, ProductGrid};
use crate::web_app::config::image_url;
use crate::web_app::model::{Product, Route};
use crate::web_app::state::{use_app_context, AppContext, Navigator};

#[component]
pub fn SingleProductPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigator = Navigator::new();
    let params = use_params_map();
    let products = ctx.products();

    let product = Memo::new(move |_| {
        let id = params.with(|p| p.get("id"))?;
        let found = products.with(|catalog| find_product(catalog, &id).cloned());
        if found.is_none() {
            tracing::debug!("No product with id {} in the current catalog", id);
        }
        found
    });

    // Recomputed only when the catalog or the resolved product changes.
    let related = Memo::new(move |_| {
        product.with(|current| {
            current
                .as_ref()
                .map(|p| products.with(|catalog| related_products(catalog, p)))
                .unwrap_or_default()
        })
    });

    let gallery = RwSignal::new(Gallery::default());
    Effect::new(move || {
        if let Some(p) = product.get() {
            gallery.update(|g| {
                g.sync(&p);
            });
        }
    });

    let section = Memo::new(move |_| related.with(|items| RelatedSection::from_related(items)));

    let related_section = move || match section.get() {
        RelatedSection::NoneFound => view! {
            <p class="text-gray-500 mt-6">"No related products found."</p>
        }
        .into_any(),
        RelatedSection::Grid(in_stock) => view! {
            <ProductGrid products=Signal::stored(in_stock) empty_message="" />
            <button
                class="mx-auto cursor-pointer px-12 my-16 py-2.5 border rounded text-red-600 hover:bg-red-50 transition"
                on:click=move |_| {
                    navigator.go(&Route::Products);
                    scroll_to_top();
                }
            >
                "See More"
            </button>
        }
        .into_any(),
    };

    move || {
        product.get().map(|p| {
            view! {
                <div class="mt-12">
                    <Breadcrumb product=p.clone() />
                    <div class="flex flex-col md:flex-row gap-16 mt-4">
                        <ImageGallery product=p.clone() gallery=gallery />
                        <ProductSummary product=p ctx=ctx navigator=navigator />
                    </div>
                    <div class="flex flex-col items-center mt-20">
                        <div class="flex flex-col items-center w-max">
                            <p class="text-3xl font-medium">"Related Products"</p>
                            <div class="w-20 h-0.5 bg-red-500 rounded-full mt-2"></div>
                        </div>
                        {related_section}
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn Breadcrumb(product: Product) -> impl IntoView {
    let category_path = Route::Category(product.category.clone()).path();

    view! {
        <p>
            <a href=Route::Home.path()>"Home"</a>
            " / "
            <a href=Route::Products.path()>"Products"</a>
            " / "
            <a href=category_path>{product.category}</a>
            " / "
            <span class="text-red-500">{product.name}</span>
        </p>
    }
}

#[component]
fn ImageGallery(product: Product, gallery: RwSignal<Gallery>) -> impl IntoView {
    let thumbnails = product
        .images
        .iter()
        .cloned()
        .map(|image| {
            let src = image_url(&image);
            let for_class = product.clone();
            let for_click = product.clone();
            let image_for_class = image.clone();
            view! {
                <div
                    class=move || {
                        if gallery.with(|g| g.is_selected(&for_class, &image_for_class)) {
                            "border max-w-24 border-red-500 rounded overflow-hidden cursor-pointer"
                        } else {
                            "border max-w-24 border-gray-500/30 rounded overflow-hidden cursor-pointer"
                        }
                    }
                    on:click=move |_| gallery.update(|g| g.select(&for_click, &image))
                >
                    <img src=src alt="Thumbnail" />
                </div>
            }
        })
        .collect_view();

    let alt = product.name.clone();
    let main_image = move || gallery.with(|g| g.main_image(&product).map(image_url));

    view! {
        <div class="flex gap-3">
            <div class="flex flex-col gap-3">{thumbnails}</div>
            <div class="border border-gray-500/30 max-w-100 rounded overflow-hidden">
                <img src=main_image alt=alt class="w-full h-full object-cover" />
            </div>
        </div>
    }
}

#[component]
fn ProductSummary(product: Product, ctx: AppContext, navigator: Navigator) -> impl IntoView {
    let description = product
        .description
        .iter()
        .cloned()
        .map(|line| view! { <li>{line}</li> })
        .collect_view();

    let product_id = product.id.clone();
    let actions = move || {
        if ctx.user().get().is_none() {
            return view! {
                <p class="mt-10 text-gray-600">
                    "Please "
                    <a href=Route::Login.path() class="text-red-600 underline">"log in"</a>
                    " to add items to your cart."
                </p>
            }
            .into_any();
        }

        let add_id = product_id.clone();
        let buy_id = product_id.clone();
        view! {
            <div class="flex items-center mt-10 gap-4 text-base">
                <button
                    class="w-full py-3.5 cursor-pointer font-medium bg-gray-100 text-gray-800/80 hover:bg-gray-200 transition"
                    on:click=move |_| ctx.add_to_cart(&add_id)
                >
                    "Add to Cart"
                </button>
                <button
                    class="w-full py-3.5 cursor-pointer font-medium bg-red-500 text-white hover:bg-red-600 transition"
                    on:click=move |_| {
                        ctx.add_to_cart(&buy_id);
                        navigator.go(&Route::Cart);
                        scroll_to_top();
                    }
                >
                    "Buy Now"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="text-sm w-full md:w-1/2">
            <h1 class="text-3xl font-medium">{product.name.clone()}</h1>
            <div class="mt-6">
                <p>"MRP: " <PriceDisplay price=product.price /></p>
                <p>"Offer: " <PriceDisplay price=product.offer_price highlight=true /></p>
                <span class="text-gray-500/70">"(inclusive of all taxes)"</span>
            </div>
            <p class="text-base font-medium mt-6">"About Product"</p>
            <ul class="list-disc ml-4 text-gray-500/70">{description}</ul>
            {actions}
        </div>
    }
}
