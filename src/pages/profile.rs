//! Profile page for regular users.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Profile landing for non-admin users.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    view! {
        <div class="profile-page">
            <h1>"My Bookings"</h1>
            <p class="profile-page__user">{move || format!("Signed in as {}", user_name())}</p>
        </div>
    }
}
