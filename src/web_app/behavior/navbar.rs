// web_app/behavior/navbar.rs - Navbar menu and search buffer
//
// Keystrokes and route changes are separate triggers: `input` may request a
// navigation, and only the later location change calls `route_changed`.

use crate::web_app::model::{is_listing_path, Route};

/// What the caller must do after a keystroke in the search box
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputReaction {
    /// Value to mirror into the shared search query
    pub query: String,
    pub navigate_to: Option<Route>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub menu_open: bool,
    pub search_text: String,
}

impl NavbarState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Live search: store the text and, away from the listing view, ask to
    /// go there once something non-blank was typed.
    pub fn input(&mut self, value: impl Into<String>, pathname: &str) -> InputReaction {
        self.search_text = value.into();
        let navigate_to = (!is_listing_path(pathname) && !self.search_text.trim().is_empty())
            .then_some(Route::Products);

        InputReaction {
            query: self.search_text.clone(),
            navigate_to,
        }
    }

    /// Enter / search button. Blank buffers are a no-op.
    pub fn submit(&mut self) -> Option<Route> {
        if self.search_text.trim().is_empty() {
            return None;
        }
        self.close_menu();
        Some(Route::Products)
    }

    /// Location changed. Leaving the listing view clears the local buffer;
    /// returns true when the shared query must be cleared as well.
    pub fn route_changed(&mut self, pathname: &str) -> bool {
        if is_listing_path(pathname) {
            return false;
        }
        self.search_text.clear();
        true
    }
}
