//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loading_overlay::LoadingOverlay;
use crate::components::notice_host::NoticeHost;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    admin::AdminPage, home::HomePage, login::LoginPage, movie::MoviePage, profile::ProfilePage,
};
use crate::state::{auth::AuthState, loader::LoaderState, notice::NoticeState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts (the session guard is the only writer
/// of the user slot) and sets up client-side routing. Every route except
/// `/login` is wrapped in the session guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let loader = RwSignal::new(LoaderState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(auth);
    provide_context(loader);
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/pcube-movies.css"/>
        <Title text="PCUBE Movies"/>

        <NoticeHost/>
        <LoadingOverlay/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <ProtectedRoute><AdminPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("movie"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute><MoviePage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
