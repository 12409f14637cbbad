// tests/logout_flow_tests.rs - Session reactions to the logout response

use grocery_kart::web_app::behavior::session::LogoutOutcome;
use grocery_kart::web_app::model::{LogoutResponse, Route, ToastKind, User};

/// Applies an outcome the way the navbar does and reports where it navigated
fn apply(outcome: &LogoutOutcome, session: &mut Option<User>) -> Option<Route> {
    if outcome.clears_session() {
        *session = None;
    }
    outcome.redirect()
}

fn signed_in() -> Option<User> {
    Some(User {
        id: "jane@example.com".to_string(),
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
    })
}

#[test]
fn test_successful_logout_clears_session_and_goes_home() {
    let mut session = signed_in();
    let outcome = LogoutOutcome::from_response::<String>(Ok(LogoutResponse {
        success: true,
        message: "Logged out".to_string(),
    }));

    let navigated = apply(&outcome, &mut session);

    assert_eq!(session, None);
    assert_eq!(navigated, Some(Route::Home));
    assert_eq!(outcome.toast().kind, ToastKind::Success);
    assert_eq!(outcome.toast().message, "Logged out");
}

#[test]
fn test_rejected_logout_keeps_session() {
    let mut session = signed_in();
    let outcome = LogoutOutcome::from_response::<String>(Ok(LogoutResponse {
        success: false,
        message: "X".to_string(),
    }));

    let navigated = apply(&outcome, &mut session);

    assert_eq!(session, signed_in());
    assert_eq!(navigated, None);
    assert_eq!(outcome.toast().kind, ToastKind::Error);
    assert_eq!(outcome.toast().message, "X");
}

#[test]
fn test_failed_request_keeps_session() {
    let mut session = signed_in();
    let outcome = LogoutOutcome::from_response(Err(anyhow::anyhow!("Network Error")));

    assert_eq!(apply(&outcome, &mut session), None);
    assert_eq!(session, signed_in());
    assert_eq!(outcome.toast().message, "Network Error");
}
