// web_app/behavior/mod.rs - UI state machines and derivations
//
// Everything here is plain Rust with no reactive types, so the rules the
// components follow can be exercised without a browser. Components keep
// these values inside signals and apply the reactions they return.

pub mod carousel;
pub mod catalog;
pub mod gallery;
pub mod navbar;
pub mod session;

pub use carousel::Carousel;
pub use catalog::{
    displayable, find_product, in_category, matching_query, related_products, RelatedSection,
    RELATED_LIMIT,
};
pub use gallery::Gallery;
pub use navbar::{InputReaction, NavbarState};
pub use session::LogoutOutcome;
