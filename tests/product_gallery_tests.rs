// tests/product_gallery_tests.rs - Thumbnail selection on the detail page

mod support;

use grocery_kart::web_app::behavior::gallery::Gallery;
use support::with_images;

#[test]
fn test_selecting_thumbnail_changes_main_image_only() {
    let product = with_images("p1", &["a.png", "b.png", "c.png"]);
    let before = product.images.clone();
    let mut gallery = Gallery::default();
    gallery.sync(&product);

    gallery.select(&product, "c.png");

    assert_eq!(gallery.main_image(&product), Some("c.png"));
    assert!(gallery.is_selected(&product, "c.png"));
    assert!(!gallery.is_selected(&product, "a.png"));
    assert_eq!(product.images, before);
}

#[test]
fn test_new_product_resets_to_first_image() {
    let first = with_images("p1", &["a.png", "b.png"]);
    let second = with_images("p2", &["x.png", "y.png"]);
    let mut gallery = Gallery::default();

    gallery.sync(&first);
    gallery.select(&first, "b.png");
    assert!(gallery.sync(&second));

    assert_eq!(gallery.main_image(&second), Some("x.png"));
}

#[test]
fn test_same_product_keeps_selection() {
    let product = with_images("p1", &["a.png", "b.png"]);
    let mut gallery = Gallery::default();

    gallery.sync(&product);
    gallery.select(&product, "b.png");
    // Catalog refresh delivers an equal product with the same id
    let refreshed = product.clone();
    assert!(!gallery.sync(&refreshed));

    assert_eq!(gallery.main_image(&refreshed), Some("b.png"));
}

#[test]
fn test_untracked_product_shows_first_image() {
    let tracked = with_images("p1", &["a.png", "b.png"]);
    let other = with_images("p2", &["x.png"]);
    let mut gallery = Gallery::default();
    gallery.select(&tracked, "b.png");

    assert_eq!(gallery.main_image(&other), Some("x.png"));
}

#[test]
fn test_product_without_images() {
    let product = with_images("p1", &[]);
    let mut gallery = Gallery::default();
    gallery.sync(&product);
    assert_eq!(gallery.main_image(&product), None);
}
