// web_app/behavior/catalog.rs - Derived views of the product catalog

use crate::web_app::model::Product;

/// Maximum number of related products suggested on a detail page
pub const RELATED_LIMIT: usize = 5;

pub fn find_product<'a>(catalog: &'a [Product], id: &str) -> Option<&'a Product> {
    catalog.iter().find(|p| p.id == id)
}

/// Same-category products other than `product`, first `RELATED_LIMIT` in
/// catalog order. Stock is not considered here; see `displayable`.
pub fn related_products(catalog: &[Product], product: &Product) -> Vec<Product> {
    catalog
        .iter()
        .filter(|item| item.category == product.category && item.id != product.id)
        .take(RELATED_LIMIT)
        .cloned()
        .collect()
}

/// In-stock subset, in order
pub fn displayable(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.in_stock).cloned().collect()
}

/// What the related-products area of a detail page shows
#[derive(Clone, Debug, PartialEq)]
pub enum RelatedSection {
    /// No same-category candidates at all
    NoneFound,
    /// In-stock candidates and a "See More" link. The grid may be empty
    /// when every candidate is out of stock.
    Grid(Vec<Product>),
}

impl RelatedSection {
    /// Decided on the candidates before the stock filter
    pub fn from_related(related: &[Product]) -> Self {
        if related.is_empty() {
            RelatedSection::NoneFound
        } else {
            RelatedSection::Grid(displayable(related))
        }
    }
}

/// In-stock products whose name contains `query`, ignoring case.
/// A blank query matches every in-stock product.
pub fn matching_query(catalog: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|p| p.in_stock)
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// In-stock products of a category, matched against a lowercased path segment
pub fn in_category(catalog: &[Product], category_segment: &str) -> Vec<Product> {
    let segment = category_segment.to_lowercase();
    catalog
        .iter()
        .filter(|p| p.in_stock && p.category.to_lowercase() == segment)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(id: &str, name: &str, category: &str, in_stock: bool) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price: Decimal::new(50, 0),
            offer_price: Decimal::new(45, 0),
            images: vec![format!("{}.png", id)],
            description: vec![],
            in_stock,
        }
    }

    #[test]
    fn test_find_product() {
        let catalog = vec![item("1", "Apple", "Fruits", true), item("2", "Milk", "Dairy", true)];
        assert_eq!(find_product(&catalog, "2").map(|p| p.name.as_str()), Some("Milk"));
        assert!(find_product(&catalog, "999").is_none());
    }

    #[test]
    fn test_related_excludes_self_and_other_categories() {
        let catalog = vec![
            item("1", "Apple", "Fruits", true),
            item("2", "Milk", "Dairy", true),
            item("3", "Mango", "Fruits", false),
        ];
        let related = related_products(&catalog, &catalog[0]);
        let ids: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_related_is_capped_in_catalog_order() {
        let catalog: Vec<Product> = (0..9)
            .map(|i| item(&i.to_string(), "Veg", "Vegetables", true))
            .collect();
        let related = related_products(&catalog, &catalog[4]);
        let ids: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "5"]);
    }

    #[test]
    fn test_displayable_drops_out_of_stock() {
        let products = vec![item("1", "A", "X", false), item("2", "B", "X", true)];
        let visible = displayable(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_matching_query_is_case_insensitive() {
        let catalog = vec![
            item("1", "Brown Bread", "Bakery", true),
            item("2", "White bread", "Bakery", false),
            item("3", "Butter", "Dairy", true),
        ];
        let found = matching_query(&catalog, "BREAD");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
        assert_eq!(matching_query(&catalog, "  ").len(), 2);
    }

    #[test]
    fn test_in_category_matches_lowercased_segment() {
        let catalog = vec![item("1", "Milk", "Dairy", true), item("2", "Apple", "Fruits", true)];
        let dairy = in_category(&catalog, "dairy");
        assert_eq!(dairy.len(), 1);
        assert_eq!(dairy[0].id, "1");
    }
}
