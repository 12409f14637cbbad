// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the browser and the server functions.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Path of the product listing view.
pub const PRODUCTS_PATH: &str = "/products";

/// Product from the catalog (matches the upstream catalog document)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub offer_price: Decimal,
    /// Ordered image references, relative to the image base URL
    #[serde(rename = "image", default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    pub in_stock: bool,
}

impl Product {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Route of this product's detail page
    pub fn route(&self) -> Route {
        Route::Product {
            category: self.category.clone(),
            id: self.id.clone(),
        }
    }
}

/// Signed-in shopper
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Name shown in menus; "User" when the account has no name
    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => "User",
            name => name,
        }
    }
}

/// Payload returned by the logout endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// One promotional slide of the home page banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerSlide {
    pub id: u32,
    pub desktop_image: &'static str,
    pub mobile_image: &'static str,
    pub title: &'static str,
    pub primary_label: &'static str,
    pub secondary_label: &'static str,
}

pub const BANNER_SLIDES: [BannerSlide; 3] = [
    BannerSlide {
        id: 1,
        desktop_image: "/assets/banner1.png",
        mobile_image: "/assets/banner1.png",
        title: "Freshness You Can Trust, Savings You will Love!",
        primary_label: "Shop Now",
        secondary_label: "Explore Deals",
    },
    BannerSlide {
        id: 2,
        desktop_image: "/assets/banner2.png",
        mobile_image: "/assets/banner2.png",
        title: "Discover Amazing Deals on Fresh Products!",
        primary_label: "Shop Now",
        secondary_label: "View Offers",
    },
    BannerSlide {
        id: 3,
        desktop_image: "/assets/banner3.png",
        mobile_image: "/assets/banner3.png",
        title: "Quality Products at Unbeatable Prices!",
        primary_label: "Shop Now",
        secondary_label: "Browse All",
    },
];

pub const BANNER_SLIDE_COUNT: NonZeroUsize = match NonZeroUsize::new(BANNER_SLIDES.len()) {
    Some(count) => count,
    None => panic!("the banner needs at least one slide"),
};

/// Logical destinations of the storefront
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    Category(String),
    Product { category: String, id: String },
    Cart,
    MyOrders,
    Login,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => PRODUCTS_PATH.to_string(),
            Route::Category(category) => {
                format!("{}/{}", PRODUCTS_PATH, category.to_lowercase())
            }
            Route::Product { category, id } => {
                format!("{}/{}/{}", PRODUCTS_PATH, category.to_lowercase(), id)
            }
            Route::Cart => "/cart".to_string(),
            Route::MyOrders => "/my-orders".to_string(),
            Route::Login => "/login".to_string(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// True only for the product listing view itself, not its sub-paths
pub fn is_listing_path(pathname: &str) -> bool {
    pathname == PRODUCTS_PATH
}

/// Cart contents: product id -> quantity
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItems(BTreeMap<String, u32>);

/// A cart entry joined with its catalog product
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.product.offer_price * Decimal::from(self.quantity)
    }
}

impl CartItems {
    pub fn add(&mut self, product_id: &str) {
        *self.0.entry(product_id.to_string()).or_insert(0) += 1;
    }

    pub fn quantity(&self, product_id: &str) -> u32 {
        self.0.get(product_id).copied().unwrap_or(0)
    }

    /// Total number of units in the cart
    pub fn count(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries that resolve against the catalog, in product id order
    pub fn lines(&self, catalog: &[Product]) -> Vec<CartLine> {
        self.0
            .iter()
            .filter_map(|(id, &quantity)| {
                catalog.iter().find(|p| &p.id == id).map(|product| CartLine {
                    product: product.clone(),
                    quantity,
                })
            })
            .collect()
    }

    pub fn total(&self, catalog: &[Product]) -> Decimal {
        self.lines(catalog).iter().map(CartLine::subtotal).sum()
    }
}

/// Progress of the client-side catalog load
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient user-facing notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }
}
