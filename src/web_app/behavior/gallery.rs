// web_app/behavior/gallery.rs - Main image selection on the detail page

use crate::web_app::model::Product;

/// Which image of the viewed product is shown large.
///
/// The selection belongs to one product id. Viewing a different product
/// resets it to that product's first image; the product itself is never
/// modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    product_id: Option<String>,
    selected: Option<String>,
}

impl Gallery {
    /// Track `product`, resetting the selection if its identity changed.
    /// Returns true when a reset happened.
    pub fn sync(&mut self, product: &Product) -> bool {
        if self.product_id.as_deref() == Some(product.id.as_str()) {
            return false;
        }
        self.product_id = Some(product.id.clone());
        self.selected = product.first_image().map(str::to_string);
        true
    }

    /// Thumbnail click
    pub fn select(&mut self, product: &Product, image: &str) {
        self.sync(product);
        self.selected = Some(image.to_string());
    }

    /// Image to display for `product`: the selection when it belongs to this
    /// product, otherwise the first image.
    pub fn main_image<'a>(&'a self, product: &'a Product) -> Option<&'a str> {
        if self.product_id.as_deref() == Some(product.id.as_str()) {
            self.selected.as_deref()
        } else {
            product.first_image()
        }
    }

    pub fn is_selected(&self, product: &Product, image: &str) -> bool {
        self.main_image(product) == Some(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, images: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            category: "Snacks".to_string(),
            price: Decimal::new(20, 0),
            offer_price: Decimal::new(18, 0),
            images: images.iter().map(|s| s.to_string()).collect(),
            description: vec![],
            in_stock: true,
        }
    }

    #[test]
    fn test_defaults_to_first_image() {
        let p = product("a", &["a1.png", "a2.png"]);
        let mut gallery = Gallery::default();
        assert_eq!(gallery.main_image(&p), Some("a1.png"));
        assert!(gallery.sync(&p));
        assert!(!gallery.sync(&p));
        assert_eq!(gallery.main_image(&p), Some("a1.png"));
    }

    #[test]
    fn test_select_keeps_product_untouched() {
        let p = product("a", &["a1.png", "a2.png"]);
        let before = p.clone();
        let mut gallery = Gallery::default();
        gallery.sync(&p);
        gallery.select(&p, "a2.png");
        assert_eq!(gallery.main_image(&p), Some("a2.png"));
        assert!(gallery.is_selected(&p, "a2.png"));
        assert_eq!(p, before);
    }

    #[test]
    fn test_product_without_images() {
        let p = product("empty", &[]);
        let mut gallery = Gallery::default();
        gallery.sync(&p);
        assert_eq!(gallery.main_image(&p), None);
    }
}
