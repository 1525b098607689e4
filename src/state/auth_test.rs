use super::*;

fn user(is_admin: bool) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: None,
        is_admin,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

// =============================================================
// profile_route
// =============================================================

#[test]
fn profile_route_admin_goes_to_admin() {
    assert_eq!(profile_route(&user(true)), "/admin");
}

#[test]
fn profile_route_regular_user_goes_to_profile() {
    assert_eq!(profile_route(&user(false)), "/profile");
}
