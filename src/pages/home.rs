//! Home page — fetches the movie catalog once and filters it client-side.

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::net::types::Movie;
use crate::state::loader::LoaderState;
use crate::state::movies::filter_movies;
use crate::state::notice::NoticeState;

/// Movie list with a search box. One fetch on mount; filtering is a derived
/// view recomputed per keystroke, never a refetch.
#[component]
pub fn HomePage() -> impl IntoView {
    let loader = expect_context::<RwSignal<LoaderState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let movies = RwSignal::new(Vec::<Movie>::new());
    let search_text = RwSignal::new(String::new());

    // Fetch the catalog once on mount. On failure the previous list (empty
    // on first load) is left untouched and the message surfaces as a notice.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            loader.update(|l| l.show());
            let outcome = crate::net::api::list_movies().await;
            loader.update(|l| l.hide());

            match outcome {
                Ok(list) => movies.set(list),
                Err(failure) => {
                    leptos::logging::warn!("movie list fetch failed: {}", failure.message());
                    notices.update(|n| {
                        n.push_error(failure.message().to_owned());
                    });
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (loader, notices);
        }
    });

    let filtered = move || filter_movies(&movies.get(), &search_text.get());

    view! {
        <div class="home-page">
            <input
                class="home-page__search"
                type="text"
                placeholder="Search for movies"
                prop:value=move || search_text.get()
                on:input=move |ev| search_text.set(event_target_value(&ev))
            />

            <div class="home-page__grid">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|movie| view! { <MovieCard movie=movie/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
