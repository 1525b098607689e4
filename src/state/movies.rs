#[cfg(test)]
#[path = "movies_test.rs"]
mod movies_test;

use crate::net::types::Movie;

/// Case-insensitive substring filter over movie titles.
///
/// The stored list is never modified; the filtered view is recomputed on
/// every keystroke. An empty query yields the full list.
pub fn filter_movies(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
