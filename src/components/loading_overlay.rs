//! Full-page loading overlay driven by the shared loader count.

use leptos::prelude::*;

use crate::state::loader::LoaderState;

/// Spinner overlay, visible while any request is in flight.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let loader = expect_context::<RwSignal<LoaderState>>();

    view! {
        <Show when=move || loader.get().is_visible()>
            <div class="loading-overlay">
                <div class="loading-overlay__spinner"></div>
            </div>
        </Show>
    }
}
