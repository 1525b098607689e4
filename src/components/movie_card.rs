//! Poster card for the home page movie grid.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Movie;
use crate::util::dates::{movie_route, today};

/// A clickable poster card; selecting it opens the detail view for today's
/// show date.
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let navigate = use_navigate();
    let movie_id = movie.id.clone();

    let on_open = move |_| {
        navigate(&movie_route(&movie_id, &today()), NavigateOptions::default());
    };

    view! {
        <div class="movie-card" on:click=on_open>
            <img
                class="movie-card__poster"
                src=movie.poster
                alt=movie.title.clone()
                height="300"
                width="200"
            />
            <p class="movie-card__title">{movie.title}</p>
        </div>
    }
}
