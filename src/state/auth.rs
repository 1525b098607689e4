#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state holding the current user.
///
/// Written only by the session guard (on check settlement) and the logout
/// action; read by every protected view.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

/// Route for the user-name control in the header: admins land on the
/// management view, everyone else on their profile.
pub fn profile_route(user: &User) -> &'static str {
    if user.is_admin { "/admin" } else { "/profile" }
}
