// web_app/state.rs - Shared storefront state
//
// One AppContext is created by the root component and provided through
// Leptos context. Consumers get typed handles: read-only signals for data
// they only display, explicit writers or methods for what they may change.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use uuid::Uuid;

use crate::web_app::model::{CartItems, CatalogStatus, Product, Route, Toast, User};

#[derive(Clone, Copy)]
pub struct AppContext {
    products: RwSignal<Vec<Product>>,
    catalog_status: RwSignal<CatalogStatus>,
    user: RwSignal<Option<User>>,
    cart: RwSignal<CartItems>,
    search_query: RwSignal<String>,
    show_user_login: RwSignal<bool>,
    toasts: RwSignal<Vec<Toast>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            catalog_status: RwSignal::new(CatalogStatus::Loading),
            user: RwSignal::new(None),
            cart: RwSignal::new(CartItems::default()),
            search_query: RwSignal::new(String::new()),
            show_user_login: RwSignal::new(false),
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Create the context and provide it to the current owner's subtree
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    pub fn products(&self) -> ReadSignal<Vec<Product>> {
        self.products.read_only()
    }

    pub fn set_products(&self, products: Vec<Product>) {
        tracing::debug!(count = products.len(), "catalog replaced");
        self.products.set(products);
        self.catalog_status.set(CatalogStatus::Ready);
    }

    pub fn catalog_status(&self) -> ReadSignal<CatalogStatus> {
        self.catalog_status.read_only()
    }

    /// Record a failed catalog load; the current products are kept
    pub fn catalog_failed(&self, message: impl Into<String>) {
        self.catalog_status.set(CatalogStatus::Failed(message.into()));
    }

    pub fn user(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    pub fn set_user(&self) -> WriteSignal<Option<User>> {
        self.user.write_only()
    }

    pub fn cart(&self) -> ReadSignal<CartItems> {
        self.cart.read_only()
    }

    /// Units in the cart. Tracked, so views re-render on change.
    pub fn cart_count(&self) -> u32 {
        self.cart.with(CartItems::count)
    }

    pub fn add_to_cart(&self, product_id: &str) {
        self.cart.update(|cart| cart.add(product_id));
        tracing::info!(product_id, "added to cart");
        self.notify(Toast::success("Added to Cart"));
    }

    pub fn search_query(&self) -> RwSignal<String> {
        self.search_query
    }

    pub fn show_user_login(&self) -> RwSignal<bool> {
        self.show_user_login
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn notify(&self, toast: Toast) {
        self.toasts.update(|toasts| toasts.push(toast));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The AppContext provided by the root component
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Copyable handle to the router's navigate function.
///
/// The closure returned by `use_navigate` is kept in local storage so
/// event handlers and reactive closures can capture the handle freely.
#[derive(Clone, Copy)]
pub struct Navigator(StoredValue<Box<dyn Fn(&str, NavigateOptions)>, LocalStorage>);

impl Navigator {
    /// Must be called under a `<Router>`
    pub fn new() -> Self {
        let navigate: Box<dyn Fn(&str, NavigateOptions)> = Box::new(use_navigate());
        Self(StoredValue::new_local(navigate))
    }

    pub fn go(&self, route: &Route) {
        tracing::debug!("navigate to {}", route);
        let path = route.path();
        self.0
            .with_value(|navigate| navigate(&path, NavigateOptions::default()));
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
