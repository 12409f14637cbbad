// web_app/app.rs - Root application component
//
// Provides the AppContext, loads the catalog and current session, and
// sets up routing around the shared navbar and notification overlay.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{LoginModal, Navbar, ToastStack};
use crate::web_app::pages::{
    AllProductsPage, CartPage, CategoryPage, HomePage, LoginPage, SingleProductPage,
};
use crate::web_app::model::{Route as Page, Toast};
use crate::web_app::server_fns::{current_user, get_products};
use crate::web_app::state::AppContext;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Shared AppContext, filled from the server functions
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let ctx = AppContext::provide();

    let catalog = Resource::new(|| (), |_| get_products());
    let session = Resource::new(|| (), |_| current_user());

    Effect::new(move || match catalog.get() {
        Some(Ok(products)) => ctx.set_products(products),
        Some(Err(e)) => {
            tracing::error!("Failed to load catalog: {}", e);
            ctx.catalog_failed(e.to_string());
        }
        None => {}
    });

    Effect::new(move || match session.get() {
        Some(Ok(user)) => ctx.set_user().set(user),
        Some(Err(e)) => {
            tracing::error!("Failed to load session: {}", e);
            ctx.notify(Toast::error("Could not restore your session"));
        }
        None => {}
    });

    view! {
        <Title text="M Kart" />
        <Meta name="description" content="Fresh groceries delivered" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/grocery_kart.css" />

        <Router>
            <Navbar />
            <ToastStack />
            <LoginModal />
            <main class="min-h-screen px-6 md:px-16 lg:px-24 xl:px-32 text-gray-700">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=AllProductsPage />
                    <Route path=path!("/products/:category") view=CategoryPage />
                    <Route path=path!("/products/:category/:id") view=SingleProductPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=Page::Home.path()
                    class="px-6 py-3 bg-red-500 text-white rounded hover:bg-red-600 transition-colors"
                >
                    "Back to Home"
                </a>
            </div>
        </div>
    }
}
