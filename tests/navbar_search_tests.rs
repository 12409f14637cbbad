// tests/navbar_search_tests.rs - Live search, submit and route-change clearing

use grocery_kart::web_app::behavior::navbar::NavbarState;
use grocery_kart::web_app::model::Route;

/// Stand-in for the shared context and the router: records the shared query
/// and every navigation the navbar asks for.
#[derive(Default)]
struct Harness {
    nav: NavbarState,
    shared_query: String,
    navigations: Vec<Route>,
    pathname: String,
}

impl Harness {
    fn at(pathname: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            ..Default::default()
        }
    }

    fn type_text(&mut self, value: &str) {
        let reaction = self.nav.input(value, &self.pathname);
        self.shared_query = reaction.query;
        if let Some(route) = reaction.navigate_to {
            self.navigations.push(route);
        }
    }

    fn arrive(&mut self, pathname: &str) {
        self.pathname = pathname.to_string();
        if self.nav.route_changed(pathname) {
            self.shared_query.clear();
        }
    }
}

#[test]
fn test_non_blank_keystroke_off_listing_navigates_once() {
    let mut h = Harness::at("/");
    h.type_text("apple");

    assert_eq!(h.navigations, vec![Route::Products]);
    assert_eq!(h.shared_query, "apple");
    assert_eq!(h.nav.search_text, "apple");
}

#[test]
fn test_blank_keystrokes_never_navigate() {
    for value in ["", " ", "   \t"] {
        let mut h = Harness::at("/cart");
        h.type_text(value);
        assert!(h.navigations.is_empty(), "value {:?}", value);
        assert_eq!(h.shared_query, value);
    }
}

#[test]
fn test_typing_on_listing_only_updates_query() {
    let mut h = Harness::at("/products");
    h.type_text("a");
    h.type_text("ap");
    h.type_text("app");

    assert!(h.navigations.is_empty());
    assert_eq!(h.shared_query, "app");
}

#[test]
fn test_category_path_counts_as_off_listing() {
    let mut h = Harness::at("/products/fruits");
    h.type_text("milk");
    assert_eq!(h.navigations, vec![Route::Products]);
}

#[test]
fn test_keystroke_keeps_menu_open() {
    let mut h = Harness::at("/");
    h.nav.toggle_menu();
    h.type_text("bread");
    assert!(h.nav.menu_open);
}

#[test]
fn test_leaving_listing_clears_both_buffers() {
    let mut h = Harness::at("/products");
    h.type_text("tomato");
    assert_eq!(h.shared_query, "tomato");

    h.arrive("/products/vegetables/gd47g34h");

    assert_eq!(h.nav.search_text, "");
    assert_eq!(h.shared_query, "");
}

#[test]
fn test_arriving_at_listing_keeps_query() {
    let mut h = Harness::at("/");
    h.type_text("onion");
    h.arrive("/products");

    assert_eq!(h.nav.search_text, "onion");
    assert_eq!(h.shared_query, "onion");
}

#[test]
fn test_submit_closes_menu_and_targets_listing() {
    let mut nav = NavbarState::default();
    nav.toggle_menu();
    nav.input("paneer", "/products");

    assert_eq!(nav.submit(), Some(Route::Products));
    assert!(!nav.menu_open);
}

#[test]
fn test_blank_submit_is_noop() {
    let mut nav = NavbarState::default();
    nav.toggle_menu();
    nav.input("  ", "/");

    assert_eq!(nav.submit(), None);
    assert!(nav.menu_open);
}
