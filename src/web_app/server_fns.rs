// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP requests to the server
//
// This file must be compiled for BOTH ssr and hydrate features.

use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use crate::web_app::model::*;

/// Full product catalog
#[server(prefix = "/api", endpoint = "products")]
pub async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::catalog;

    let products = catalog::get_catalog().map_err(|e| {
        tracing::error!("Catalog request failed: {}", e);
        ServerFnError::new(format!("Catalog unavailable: {}", e))
    })?;

    tracing::debug!("Serving {} products", products.len());
    Ok(products)
}

/// Signed-in user, if any
#[server(prefix = "/api", endpoint = "user/current")]
pub async fn current_user() -> Result<Option<User>, ServerFnError> {
    use crate::web_app::api::session;

    Ok(session::current_user())
}

/// Start a session for `name` / `email`
#[server(prefix = "/api", endpoint = "user/login")]
pub async fn login_user(name: String, email: String) -> Result<User, ServerFnError> {
    use crate::web_app::api::session;

    session::sign_in(&name, &email).map_err(|e| {
        tracing::warn!("Login rejected: {}", e);
        ServerFnError::new(e.to_string())
    })
}

/// End the current session: `GET /api/user/logout`
#[server(prefix = "/api", endpoint = "user/logout", input = GetUrl)]
pub async fn logout_user() -> Result<LogoutResponse, ServerFnError> {
    use crate::web_app::api::session;

    let response = session::end_session();
    tracing::info!("Logout: success={}, message='{}'", response.success, response.message);
    Ok(response)
}
