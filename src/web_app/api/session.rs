// web_app/api/session.rs - Demo session store
//
// Holds at most one signed-in user for the whole server. Credential
// checking belongs to the account service; this store only records who is
// signed in so the storefront can be exercised end to end.

use std::sync::{Mutex, PoisonError};

use crate::web_app::error::{Result, StorefrontError};
use crate::web_app::model::{LogoutResponse, User};

static SESSION: Mutex<Option<User>> = Mutex::new(None);

pub fn current_user() -> Option<User> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Validate and record a sign-in
pub fn sign_in(name: &str, email: &str) -> Result<User> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err(StorefrontError::InvalidUser("name is required".to_string()));
    }
    if !email.contains('@') {
        return Err(StorefrontError::InvalidUser(format!("'{}' is not an email address", email)));
    }

    let user = User {
        id: email.to_lowercase(),
        name: name.to_string(),
        email: email.to_string(),
    };
    restore(user.clone());
    Ok(user)
}

/// Install a session without validation (startup demo user)
pub fn restore(user: User) {
    tracing::info!(user = %user.email, "session started");
    *SESSION.lock().unwrap_or_else(PoisonError::into_inner) = Some(user);
}

/// End the current session, if any
pub fn end_session() -> LogoutResponse {
    let previous = SESSION.lock().unwrap_or_else(PoisonError::into_inner).take();

    match previous {
        Some(user) => {
            tracing::info!(user = %user.email, "session ended");
            LogoutResponse {
                success: true,
                message: "Logged Out".to_string(),
            }
        }
        None => {
            tracing::warn!("logout requested without an active session");
            LogoutResponse {
                success: false,
                message: "Not logged in".to_string(),
            }
        }
    }
}
