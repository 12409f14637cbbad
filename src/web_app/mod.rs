// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - behavior/: Pure UI state machines and derivations (no Leptos types)
// - error.rs / config.rs: Error type and configuration
// - state.rs: AppContext, the injected shared state
// - server_fns.rs: Server function declarations (both client and server)
// - api/: In-memory catalog and session stores (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod behavior;
pub mod error;
pub mod config;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod state;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Catalog and session stores (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
