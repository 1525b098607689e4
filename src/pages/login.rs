//! Login landing page.
//!
//! The login flow itself is external: it stores the session token in
//! `localStorage` and returns to `/`, where the guard validates it.

use leptos::prelude::*;

/// Login page — entry point for unauthenticated visitors.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"PCUBE Movies"</h1>
            <p>"Book your tickets"</p>
            <a href="/api/auth/login" class="login-page__button">
                "Sign in"
            </a>
        </div>
    }
}
