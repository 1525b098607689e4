//! Session check: classify the "current user" lookup and plan the guard's
//! response.
//!
//! DESIGN
//! ======
//! The guard's mount decision ([`MountPlan`]) and the fetch outcome
//! ([`SessionCheck`]) are both reduced by pure functions, and
//! the guard's side effects (store/clear user, notice, token removal,
//! navigation) are described by a [`GuardPlan`] value. The component only
//! executes the plan, which keeps navigation policy out of the fetch path and
//! makes every guard branch testable off-browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::types::{ApiFailure, User};

/// First decision on guard mount, taken before any network traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountPlan {
    /// No stored token: go to login without issuing any API call.
    RedirectToLogin,
    /// A token is present: run exactly one session check.
    CheckSession,
}

/// Decide what the guard does on mount from the stored token.
pub fn mount_plan(token: Option<&str>) -> MountPlan {
    if token.is_some() {
        MountPlan::CheckSession
    } else {
        MountPlan::RedirectToLogin
    }
}

/// Outcome of a session check.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionCheck {
    /// The backend confirmed the session; render protected content.
    Authenticated(User),
    /// The backend explicitly rejected the session (`success: false`).
    Unauthenticated { message: String },
    /// The backend could not be reached or answered out of contract.
    TransientError(String),
}

/// What the session guard does once a check settles.
#[derive(Clone, Debug, PartialEq)]
pub struct GuardPlan {
    /// New value for the shared user slot.
    pub user: Option<User>,
    /// Transient notice to surface, if any.
    pub notice: Option<String>,
    /// Whether the stored token is removed.
    pub clear_token: bool,
    /// Navigation target, if any.
    pub redirect: Option<&'static str>,
}

/// Classify a "get current user" outcome.
pub fn classify(outcome: Result<User, ApiFailure>) -> SessionCheck {
    match outcome {
        Ok(user) => SessionCheck::Authenticated(user),
        Err(ApiFailure::Rejected(message)) => SessionCheck::Unauthenticated { message },
        Err(failure) => SessionCheck::TransientError(failure.message().to_owned()),
    }
}

/// Map a [`SessionCheck`] to the guard's side effects.
///
/// An explicit rejection invalidates the session: token removed, redirect to
/// login. A transient fault keeps the token and stays put so a flaky network
/// does not log the user out. This asymmetry is intentional.
pub fn guard_plan(check: SessionCheck) -> GuardPlan {
    match check {
        SessionCheck::Authenticated(user) => GuardPlan {
            user: Some(user),
            notice: None,
            clear_token: false,
            redirect: None,
        },
        SessionCheck::Unauthenticated { message } => GuardPlan {
            user: None,
            notice: Some(message),
            clear_token: true,
            redirect: Some("/login"),
        },
        SessionCheck::TransientError(message) => GuardPlan {
            user: None,
            notice: Some(message),
            clear_token: false,
            redirect: None,
        },
    }
}

/// Run the "get current user" call and classify the result.
pub async fn check_session() -> SessionCheck {
    classify(super::api::get_current_user().await)
}
