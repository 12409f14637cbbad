// tests/server_fn_tests.rs
// Server functions called directly, as the server runs them

mod support;

use grocery_kart::web_app::api::catalog;
use grocery_kart::web_app::server_fns::*;
use support::sample_catalog;

#[tokio::test]
async fn test_get_products_serves_catalog() -> anyhow::Result<()> {
    catalog::set_test_catalog(sample_catalog());

    let products = get_products()
        .await
        .map_err(|e| anyhow::anyhow!("get_products failed: {}", e))?;

    assert_eq!(products, sample_catalog());
    Ok(())
}

// Single test: the session store is process-wide.
#[tokio::test]
async fn test_session_lifecycle() -> anyhow::Result<()> {
    // 1. No session yet
    let response = logout_user()
        .await
        .map_err(|e| anyhow::anyhow!("logout_user failed: {}", e))?;
    assert!(!response.success);
    assert_eq!(current_user().await.map_err(|e| anyhow::anyhow!("{}", e))?, None);

    // 2. Invalid sign-ins are rejected
    assert!(login_user("".to_string(), "jane@example.com".to_string()).await.is_err());
    assert!(login_user("Jane".to_string(), "not-an-email".to_string()).await.is_err());

    // 3. Valid sign-in
    let user = login_user("Jane".to_string(), "Jane@Example.com".to_string())
        .await
        .map_err(|e| anyhow::anyhow!("login_user failed: {}", e))?;
    assert_eq!(user.name, "Jane");
    assert_eq!(user.id, "jane@example.com");
    assert_eq!(
        current_user().await.map_err(|e| anyhow::anyhow!("{}", e))?,
        Some(user)
    );

    // 4. Logout ends it
    let response = logout_user()
        .await
        .map_err(|e| anyhow::anyhow!("logout_user failed: {}", e))?;
    assert!(response.success);
    assert_eq!(response.message, "Logged Out");
    assert_eq!(current_user().await.map_err(|e| anyhow::anyhow!("{}", e))?, None);

    Ok(())
}
