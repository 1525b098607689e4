use super::*;

// =============================================================
// format_show_date
// =============================================================

#[test]
fn format_show_date_zero_pads_month_and_day() {
    assert_eq!(format_show_date(2024, 3, 5), "2024-03-05");
}

#[test]
fn format_show_date_keeps_two_digit_fields() {
    assert_eq!(format_show_date(2024, 11, 23), "2024-11-23");
}

// =============================================================
// movie_route
// =============================================================

#[test]
fn movie_route_includes_id_and_date_query() {
    assert_eq!(movie_route("X", "2024-03-05"), "/movie/X?date=2024-03-05");
}

#[test]
fn movie_route_uses_raw_backend_id() {
    assert_eq!(
        movie_route("665f1c2ab1", "2025-01-01"),
        "/movie/665f1c2ab1?date=2025-01-01"
    );
}
