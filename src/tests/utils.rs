use crate::db::connection::{init_db, Database};
use astra::Body;
use http::{Method, Request};
use std::time::{SystemTime, UNIX_EPOCH};

/// A fresh database under a unique temp path, initialized with the
/// production schema.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "portfolio_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// A form POST with the given key/value pairs, encoded the way a browser
/// submits them.
pub fn post_form(path: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in fields {
        body.append_pair(k, v);
    }
    let body = body.finish();

    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.into_bytes()))
        .unwrap()
}

pub fn body_text(resp: astra::Response) -> String {
    let mut body = String::new();
    use std::io::Read;
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
