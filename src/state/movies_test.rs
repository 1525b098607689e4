use super::*;

fn movie(id: &str, title: &str) -> Movie {
    Movie {
        id: id.to_owned(),
        title: title.to_owned(),
        poster: format!("https://cdn/{id}.jpg"),
        description: None,
        genre: None,
        language: None,
        duration: None,
        release_date: None,
    }
}

fn catalog() -> Vec<Movie> {
    vec![
        movie("m-1", "Dune: Part Two"),
        movie("m-2", "The Dark Knight"),
        movie("m-3", "Arrival"),
    ]
}

// =============================================================
// filter_movies
// =============================================================

#[test]
fn empty_query_yields_full_list() {
    let movies = catalog();
    assert_eq!(filter_movies(&movies, ""), movies);
}

#[test]
fn filter_is_case_insensitive() {
    let movies = catalog();
    let hits = filter_movies(&movies, "dArK");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "m-2");
}

#[test]
fn filter_matches_substring_anywhere_in_title() {
    let movies = catalog();
    let hits = filter_movies(&movies, "riv");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Arrival");
}

#[test]
fn filter_with_no_match_yields_empty() {
    let movies = catalog();
    assert!(filter_movies(&movies, "zzz").is_empty());
}

#[test]
fn filter_does_not_touch_stored_list() {
    let movies = catalog();
    let _ = filter_movies(&movies, "dune");
    assert_eq!(movies.len(), 3);
}
