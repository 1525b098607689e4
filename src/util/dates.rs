//! Show-date formatting and the movie detail route.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Format a show date as `YYYY-MM-DD` with zero padding.
pub fn format_show_date(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Detail route for a movie on a given show date.
pub fn movie_route(movie_id: &str, date: &str) -> String {
    format!("/movie/{movie_id}?date={date}")
}

/// Today's date from the browser clock, formatted as `YYYY-MM-DD`.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        // js_sys months are zero-based.
        format_show_date(now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format_show_date(1970, 1, 1)
    }
}
