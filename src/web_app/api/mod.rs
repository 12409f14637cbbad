// web_app/api/mod.rs - Server-side stores
//
// The catalog is loaded once at startup; the session store holds the
// single demo session. Both are process-global, like a connection pool.

pub mod catalog;
pub mod session;
