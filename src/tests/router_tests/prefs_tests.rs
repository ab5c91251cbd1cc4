use crate::db::kv;
use crate::router::handle;
use crate::state::load_state;
use crate::tests::utils::{body_text, get, init_test_db, post_form};
use std::collections::HashMap;

#[test]
fn rating_posts_clamp_and_persist() {
    let db = init_test_db();

    let resp = handle(
        post_form("/rating", &[("id", "lakehurst-loop"), ("value", "7")]),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/");

    let stored: HashMap<String, i64> = kv::load_json(&db, kv::KEY_RATINGS, HashMap::new());
    assert_eq!(stored["lakehurst-loop"], 5);

    // Clearing drops the entry rather than storing a zero.
    handle(
        post_form("/rating", &[("id", "lakehurst-loop"), ("value", "-3")]),
        &db,
    )
    .unwrap();
    let stored: HashMap<String, i64> = kv::load_json(&db, kv::KEY_RATINGS, HashMap::new());
    assert!(stored.is_empty());
}

#[test]
fn rating_without_an_id_is_a_bad_request() {
    let db = init_test_db();
    let result = handle(post_form("/rating", &[("value", "3")]), &db);
    assert!(result.is_err());
}

#[test]
fn unreadable_form_body_reports_the_read_error() {
    use crate::errors::ServerError;
    use astra::Body;
    use http::{Method, Request};
    use std::io::{self, Read};

    struct BrokenPipe;
    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection reset"))
        }
    }

    let db = init_test_db();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/rating")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::wrap_reader(BrokenPipe))
        .unwrap();

    match handle(req, &db) {
        Err(ServerError::BadRequest(msg)) => {
            assert!(msg.contains("unreadable form body"));
            assert!(msg.contains("connection reset"));
        }
        other => panic!("expected a bad request, got {other:?}"),
    }
}

#[test]
fn favorite_toggles_on_and_off() {
    let db = init_test_db();

    handle(post_form("/favorite", &[("id", "bee-creek-3507")]), &db).unwrap();
    assert_eq!(load_state(&db).favorites, vec!["bee-creek-3507"]);

    let body = body_text(handle(get("/"), &db).unwrap());
    assert!(body.contains("pp-like is-on"));

    handle(post_form("/favorite", &[("id", "bee-creek-3507")]), &db).unwrap();
    assert!(load_state(&db).favorites.is_empty());
}

#[test]
fn theme_toggle_flips_the_page_attribute() {
    let db = init_test_db();

    handle(post_form("/theme", &[]), &db).unwrap();
    let body = body_text(handle(get("/"), &db).unwrap());
    assert!(body.contains("data-theme=\"dark\""));

    handle(post_form("/theme", &[]), &db).unwrap();
    let body = body_text(handle(get("/"), &db).unwrap());
    assert!(body.contains("data-theme=\"light\""));
}

#[test]
fn rated_home_shows_filled_stars_on_the_page() {
    let db = init_test_db();

    handle(
        post_form("/rating", &[("id", "lakehurst-loop"), ("value", "4")]),
        &db,
    )
    .unwrap();

    let body = body_text(handle(get("/"), &db).unwrap());
    assert!(body.contains("★"));
}
