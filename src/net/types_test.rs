use super::*;

// =============================================================
// decode_envelope — success path
// =============================================================

#[test]
fn decode_envelope_success_returns_user() {
    let body = serde_json::json!({
        "success": true,
        "data": {
            "_id": "u-1",
            "name": "Alice",
            "email": "alice@example.com",
            "isAdmin": true
        }
    });

    let user: User = decode_envelope(&body).expect("user");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert!(user.is_admin);
}

#[test]
fn decode_envelope_success_returns_movie_list() {
    let body = serde_json::json!({
        "success": true,
        "data": [
            { "_id": "m-1", "title": "Dune", "poster": "https://cdn/p1.jpg" },
            {
                "_id": "m-2",
                "title": "Arrival",
                "poster": "https://cdn/p2.jpg",
                "genre": "Sci-Fi",
                "duration": 116,
                "releaseDate": "2016-11-11"
            }
        ]
    });

    let movies: Vec<Movie> = decode_envelope(&body).expect("movies");
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, "m-1");
    assert!(movies[0].genre.is_none());
    assert_eq!(movies[1].duration, Some(116));
    assert_eq!(movies[1].release_date.as_deref(), Some("2016-11-11"));
}

#[test]
fn decode_envelope_tolerates_unknown_fields() {
    let body = serde_json::json!({
        "success": true,
        "data": {
            "_id": "u-1",
            "name": "Alice",
            "createdAt": "2024-01-01",
            "__v": 0
        },
        "requestId": "abc"
    });

    let user: User = decode_envelope(&body).expect("user");
    assert_eq!(user.name, "Alice");
    assert!(!user.is_admin);
}

// =============================================================
// decode_envelope — rejection
// =============================================================

#[test]
fn decode_envelope_failure_carries_server_message() {
    let body = serde_json::json!({ "success": false, "message": "invalid token" });
    let err = decode_envelope::<User>(&body).unwrap_err();
    assert_eq!(err, ApiFailure::Rejected("invalid token".to_owned()));
}

#[test]
fn decode_envelope_failure_without_message_uses_default() {
    let body = serde_json::json!({ "success": false });
    let err = decode_envelope::<User>(&body).unwrap_err();
    assert_eq!(err, ApiFailure::Rejected("request failed".to_owned()));
    assert_eq!(err.message(), "request failed");
}

// =============================================================
// decode_envelope — malformed responses
// =============================================================

#[test]
fn decode_envelope_missing_success_is_malformed() {
    let body = serde_json::json!({ "data": { "_id": "u-1", "name": "Alice" } });
    let err = decode_envelope::<User>(&body).unwrap_err();
    assert!(matches!(err, ApiFailure::MalformedResponse(_)));
}

#[test]
fn decode_envelope_non_boolean_success_is_malformed() {
    let body = serde_json::json!({ "success": "yes", "data": {} });
    let err = decode_envelope::<User>(&body).unwrap_err();
    assert!(matches!(err, ApiFailure::MalformedResponse(_)));
}

#[test]
fn decode_envelope_success_without_data_is_malformed() {
    let body = serde_json::json!({ "success": true });
    let err = decode_envelope::<User>(&body).unwrap_err();
    assert!(matches!(err, ApiFailure::MalformedResponse(_)));
}

#[test]
fn decode_envelope_wrong_data_shape_is_malformed() {
    let body = serde_json::json!({ "success": true, "data": { "title": "no id" } });
    let err = decode_envelope::<Movie>(&body).unwrap_err();
    assert!(matches!(err, ApiFailure::MalformedResponse(_)));
}
