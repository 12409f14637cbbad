// web_app/config.rs - Storefront configuration
//
// The image base URL is baked in at compile time so the browser bundle and
// the server agree on it. Server-only settings come from the environment
// (optionally via a .env file).

pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:5000/images/";

/// Base URL product image references are resolved against
pub fn image_base_url() -> &'static str {
    option_env!("KART_IMAGE_BASE_URL").unwrap_or(DEFAULT_IMAGE_BASE_URL)
}

/// Join an image reference onto the base URL with exactly one slash
pub fn image_url_with_base(base: &str, reference: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        reference.trim_start_matches('/')
    )
}

pub fn image_url(reference: &str) -> String {
    image_url_with_base(image_base_url(), reference)
}

#[cfg(feature = "ssr")]
pub use server::ServerConfig;

#[cfg(feature = "ssr")]
mod server {
    use std::env;
    use std::path::PathBuf;

    use crate::web_app::model::User;

    pub const DEFAULT_CATALOG_PATH: &str = "data/products.json";

    /// Settings read by the server binary at startup
    #[derive(Clone, Debug, PartialEq)]
    pub struct ServerConfig {
        pub catalog_path: PathBuf,
        /// Session signed in at boot, for demos without a login service
        pub demo_user: Option<User>,
    }

    impl ServerConfig {
        /// Read configuration from `.env` and the process environment
        pub fn from_env() -> Self {
            dotenv::dotenv().ok();
            Self::from_lookup(|key| env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let catalog_path = lookup("KART_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

            let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
            let demo_user = match (non_blank("KART_DEMO_USER_NAME"), non_blank("KART_DEMO_USER_EMAIL")) {
                (Some(name), Some(email)) => Some(User {
                    id: "demo".to_string(),
                    name,
                    email,
                }),
                _ => None,
            };

            Self {
                catalog_path,
                demo_user,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        #[test]
        fn test_defaults_without_environment() {
            let config = ServerConfig::from_lookup(|_| None);
            assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
            assert!(config.demo_user.is_none());
        }

        #[test]
        fn test_demo_user_needs_name_and_email() {
            let vars: HashMap<&str, &str> = [
                ("KART_CATALOG_PATH", "/srv/catalog.json"),
                ("KART_DEMO_USER_NAME", "Asha"),
            ]
            .into_iter()
            .collect();
            let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
            assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
            assert!(config.demo_user.is_none());

            let vars: HashMap<&str, &str> = [
                ("KART_DEMO_USER_NAME", "Asha"),
                ("KART_DEMO_USER_EMAIL", "asha@example.com"),
            ]
            .into_iter()
            .collect();
            let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
            let user = config.demo_user.unwrap();
            assert_eq!(user.name, "Asha");
            assert_eq!(user.email, "asha@example.com");
        }

        #[test]
        fn test_blank_demo_name_is_ignored() {
            let vars: HashMap<&str, &str> = [
                ("KART_DEMO_USER_NAME", "  "),
                ("KART_DEMO_USER_EMAIL", "asha@example.com"),
            ]
            .into_iter()
            .collect();
            let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
            assert!(config.demo_user.is_none());
        }
    }
}
