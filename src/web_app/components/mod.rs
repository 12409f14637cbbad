// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Small shared widgets (Loading, ModalWrapper, PriceDisplay, ...)
// - banner.rs: Home page slideshow
// - navbar.rs: Navigation, search and session menu
// - product.rs: ProductCard and ProductGrid
// - toast.rs: Notification overlay
// - login.rs: Sign-in form and modal

pub mod banner;
pub mod common;
pub mod login;
pub mod navbar;
pub mod product;
pub mod toast;

pub use banner::Banner;
pub use common::*;
pub use login::{LoginForm, LoginModal};
pub use navbar::Navbar;
pub use product::{ProductCard, ProductGrid};
pub use toast::ToastStack;
