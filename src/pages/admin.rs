//! Admin page — management view for admin users.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Movie management landing for admins. Reached from the header user-name
/// control when the current user has the admin flag.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    view! {
        <div class="admin-page">
            <h1>"Movie Management"</h1>
            <p class="admin-page__user">{move || format!("Signed in as {}", user_name())}</p>
        </div>
    }
}
