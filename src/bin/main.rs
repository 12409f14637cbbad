// Grocery Kart storefront server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) and server functions
// - In-memory catalog loaded from a JSON seed file
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use grocery_kart::web_app::api::{catalog, session};
    use grocery_kart::web_app::config::ServerConfig;
    use grocery_kart::web_app::App as WebApp;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use tracing_subscriber::EnvFilter;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();

    let products = catalog::load_catalog(&config.catalog_path)
        .await
        .with_context(|| format!("could not load catalog from {}", config.catalog_path.display()))?;
    tracing::info!("Loaded {} products from {}", products.len(), config.catalog_path.display());
    catalog::init_catalog(products);

    if let Some(user) = config.demo_user {
        tracing::info!("Starting with a signed-in demo session for {}", user.email);
        session::restore(user);
    }

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).context("could not read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.to_string();

        App::new()
            // Server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // JS/WASM/CSS bundle and static images
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            .service(Files::new("/assets", format!("{site_root_str}/assets")))
            // Leptos routes for SSR with the HTML shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
