//! Transient notice toasts, the only surface where failures are reported.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// How long a notice stays on screen before auto-dismissing.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u64 = 4000;

/// Renders the notice queue as a stack of toasts.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-host">
            {move || {
                notices
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        view! { <NoticeItem id=notice.id text=notice.text/> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// A single toast. Auto-dismisses after a few seconds; clicking dismisses
/// immediately.
#[component]
fn NoticeItem(id: u64, text: String) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS)).await;
            notices.update(|n| n.dismiss(id));
        });
    });

    view! {
        <div
            class="notice notice--error"
            on:click=move |_| notices.update(|n| n.dismiss(id))
        >
            {text}
        </div>
    }
}
