//! Movie detail page.
//!
//! Reads the movie id from the route parameter and the show date from the
//! `date` query parameter (`/movie/:id?date=YYYY-MM-DD`).

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

/// Detail view for a single movie on a given show date.
#[component]
pub fn MoviePage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    let movie_id = move || params.read().get("id").unwrap_or_default();
    let show_date = move || query.read().get("date").unwrap_or_default();

    view! {
        <div class="movie-page">
            <h1>{move || format!("Movie {}", movie_id())}</h1>
            <p class="movie-page__date">{move || format!("Showings on {}", show_date())}</p>
        </div>
    }
}
