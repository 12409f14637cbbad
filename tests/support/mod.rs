// support/mod.rs - Shared test fixtures
//
// Small catalog builders used by the behaviour and server suites.

#![allow(dead_code)]

use grocery_kart::web_app::model::Product;
use rust_decimal::Decimal;

pub fn product(id: &str, category: &str, in_stock: bool) -> Product {
    Product {
        id: id.to_string(),
        name: format!("{} {}", category, id),
        category: category.to_string(),
        price: Decimal::new(50, 0),
        offer_price: Decimal::new(45, 0),
        images: vec![format!("{}_1.png", id), format!("{}_2.png", id)],
        description: vec!["Fresh".to_string()],
        in_stock,
    }
}

pub fn with_images(id: &str, images: &[&str]) -> Product {
    Product {
        images: images.iter().map(|i| i.to_string()).collect(),
        ..product(id, "Fruits", true)
    }
}

/// Mixed catalog: 7 vegetables (two out of stock), 2 fruits, 1 dairy item
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product("v1", "Vegetables", true),
        product("v2", "Vegetables", false),
        product("f1", "Fruits", true),
        product("v3", "Vegetables", true),
        product("v4", "Vegetables", true),
        product("d1", "Dairy", true),
        product("v5", "Vegetables", false),
        product("v6", "Vegetables", true),
        product("f2", "Fruits", false),
        product("v7", "Vegetables", true),
    ]
}
