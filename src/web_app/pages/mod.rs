// web_app/pages/mod.rs - Page components module
//
// One component per route:
// - HomePage: Banner and best sellers
// - AllProductsPage / CategoryPage: Listings
// - SingleProductPage: Product detail with related products
// - CartPage: Cart summary
// - LoginPage: Sign-in form

pub mod cart;
pub mod home;
pub mod login;
pub mod products;
pub mod single_product;

pub use cart::CartPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use products::{AllProductsPage, CategoryPage};
pub use single_product::SingleProductPage;
