// web_app/behavior/session.rs - Interpreting the logout response

use std::fmt::Display;

use crate::web_app::model::{LogoutResponse, Route, Toast};

/// Result of a logout attempt and the reactions it calls for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Server ended the session
    LoggedOut { message: String },
    /// Server answered but refused
    Rejected { message: String },
    /// The request itself failed
    Failed { message: String },
}

impl LogoutOutcome {
    pub fn from_response<E: Display>(result: Result<LogoutResponse, E>) -> Self {
        match result {
            Ok(LogoutResponse { success: true, message }) => LogoutOutcome::LoggedOut { message },
            Ok(LogoutResponse { success: false, message }) => LogoutOutcome::Rejected { message },
            Err(err) => LogoutOutcome::Failed {
                message: err.to_string(),
            },
        }
    }

    /// Only a successful logout touches the session identity
    pub fn clears_session(&self) -> bool {
        matches!(self, LogoutOutcome::LoggedOut { .. })
    }

    pub fn redirect(&self) -> Option<Route> {
        self.clears_session().then_some(Route::Home)
    }

    pub fn toast(&self) -> Toast {
        match self {
            LogoutOutcome::LoggedOut { message } => Toast::success(message.clone()),
            LogoutOutcome::Rejected { message } | LogoutOutcome::Failed { message } => {
                Toast::error(message.clone())
            }
        }
    }
}
