//! Session guard wrapping all protected routes with the shared page shell.
//!
//! On mount the guard reads the stored token: absent tokens go straight to
//! `/login` without touching the network; otherwise it runs exactly one
//! session check and executes the resulting guard plan. Children render
//! only while the shared user slot is populated.
//!
//! Known issue: if the guard is torn down while the check is in flight, the
//! settlement still writes into the signals. Leptos makes that write a no-op
//! once the owner is disposed, so it is left unguarded here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, profile_route};
use crate::state::loader::LoaderState;
use crate::state::notice::NoticeState;

/// Access-control wrapper: verifies the session before rendering `children`
/// inside the app header shell.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let loader = expect_context::<RwSignal<LoaderState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    // On mount: no token means login, otherwise run the session check once.
    {
        let navigate = use_navigate();
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            {
                use crate::net::session::MountPlan;

                let token = crate::util::token::read();
                match crate::net::session::mount_plan(token.as_deref()) {
                    MountPlan::RedirectToLogin => {
                        navigate("/login", NavigateOptions::default());
                        return;
                    }
                    MountPlan::CheckSession => {}
                }

                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    loader.update(|l| l.show());
                    let check = crate::net::session::check_session().await;
                    loader.update(|l| l.hide());

                    let plan = crate::net::session::guard_plan(check);
                    if let Some(message) = &plan.notice {
                        leptos::logging::warn!("session check failed: {message}");
                        notices.update(|n| {
                            n.push_error(message.clone());
                        });
                    }
                    auth.update(|a| a.user = plan.user);
                    if plan.clear_token {
                        crate::util::token::clear();
                    }
                    if let Some(target) = plan.redirect {
                        navigate(target, NavigateOptions::default());
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                // The guard resolves in the browser; SSR renders nothing
                // until hydration runs the check.
                let _ = (&navigate, loader, notices);
            }
        });
    }

    let navigate = use_navigate();
    view! {
        {move || {
            let navigate = navigate.clone();
            auth.get().user.map(|user| {
                let home_nav = navigate.clone();
                let user_nav = navigate.clone();
                let logout_nav = navigate.clone();
                let user_target = profile_route(&user);
                let user_name = user.name.clone();

                view! {
                    <div class="layout">
                        <header class="layout__header">
                            <h1
                                class="layout__title"
                                on:click=move |_| home_nav("/", NavigateOptions::default())
                            >
                                "PCUBE Movies"
                            </h1>

                            <div class="layout__session">
                                <span
                                    class="layout__user-name"
                                    on:click=move |_| user_nav(user_target, NavigateOptions::default())
                                >
                                    {user_name}
                                </span>
                                <button
                                    class="layout__logout"
                                    on:click=move |_| {
                                        crate::util::token::clear();
                                        logout_nav("/login", NavigateOptions::default());
                                    }
                                >
                                    "Log out"
                                </button>
                            </div>
                        </header>

                        <main class="layout__content">{children()}</main>
                    </div>
                }
            })
        }}
    }
}
