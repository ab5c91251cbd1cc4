use crate::db::kv;
use crate::domain::home::{default_homes, Home};
use crate::router::handle;
use crate::tests::utils::{body_text, get, init_test_db, post_form};

#[test]
fn csv_import_merges_and_reports_a_summary() {
    let db = init_test_db();

    let csv = "id,title,region,price\n\
               bee-creek-3507,3507 Bee Creek Rd (updated),Hill Country,1350000\n\
               canyon-bluff,Canyon Bluff Cabin,Hill Country,825000\n\
               ,,,";
    let resp = handle(post_form("/import/csv", &[("payload", csv)]), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("added 1, updated 1, skipped 1"));

    let homes: Vec<Home> = kv::load_json(&db, kv::KEY_HOMES, Vec::new());
    assert_eq!(homes.len(), 3);

    // The new row had a price but no income fields: the estimator filled them.
    let cabin = homes.iter().find(|h| h.id == "canyon-bluff").unwrap();
    assert!(cabin.monthly_income_min.is_some());
    assert!(cabin.annual_income_max.is_some());

    // The updated row kept its untouched fields.
    let updated = homes.iter().find(|h| h.id == "bee-creek-3507").unwrap();
    assert_eq!(updated.title, "3507 Bee Creek Rd (updated)");
    assert_eq!(updated.beds, Some(3.0));
}

#[test]
fn empty_csv_means_nothing_to_import() {
    let db = init_test_db();

    let resp = handle(post_form("/import/csv", &[("payload", "id,title")]), &db).unwrap();
    assert!(body_text(resp).contains("Nothing to import"));

    let homes: Vec<Home> = kv::load_json(&db, kv::KEY_HOMES, default_homes());
    assert_eq!(homes, default_homes());
}

#[test]
fn json_replace_swaps_the_whole_catalog() {
    let db = init_test_db();

    let payload = r#"[{"id": "solo", "title": "Only Home", "region": "Nowhere"}]"#;
    let resp = handle(post_form("/import/json", &[("payload", payload)]), &db).unwrap();
    assert!(body_text(resp).contains("Catalog replaced: 1 homes"));

    let body = body_text(handle(get("/"), &db).unwrap());
    assert!(body.contains("Only Home"));
    assert!(!body.contains("Lakehurst Loop"));
}

#[test]
fn malformed_json_reports_the_error_and_keeps_the_catalog() {
    let db = init_test_db();

    // Establish a saved catalog first, so "unchanged" is observable.
    handle(post_form("/reset", &[]), &db).unwrap();

    let resp = handle(post_form("/import/json", &[("payload", "{not json")]), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_text(resp).contains("JSON parse error"));

    let homes: Vec<Home> = kv::load_json(&db, kv::KEY_HOMES, Vec::new());
    assert_eq!(homes, default_homes());
}

#[test]
fn hero_overrides_import_and_take_precedence() {
    let db = init_test_db();

    let lines = "lakehurst-loop | https://example.com/dock.jpg\nnot a line";
    let resp = handle(post_form("/import/heroes", &[("payload", lines)]), &db).unwrap();
    assert!(body_text(resp).contains("1 accepted, 1 ignored"));

    let body = body_text(handle(get("/"), &db).unwrap());
    // Overrides beat the record's own homeImageUrl.
    assert!(body.contains("https://example.com/dock.jpg"));
    assert!(!body.contains("photos.zillowstatic.com"));
}

#[test]
fn reset_restores_the_default_catalog() {
    let db = init_test_db();

    let payload = r#"[{"id": "solo", "title": "Only Home"}]"#;
    handle(post_form("/import/json", &[("payload", payload)]), &db).unwrap();

    let resp = handle(post_form("/reset", &[]), &db).unwrap();
    assert_eq!(resp.status(), 303);

    let homes: Vec<Home> = kv::load_json(&db, kv::KEY_HOMES, Vec::new());
    assert_eq!(homes, default_homes());
}

#[test]
fn fetch_failure_reports_and_leaves_catalog_alone() {
    let db = init_test_db();

    // Nothing listens on this port; the fetch fails fast.
    let resp = handle(
        post_form("/fetch", &[("url", "http://127.0.0.1:1/homes.json")]),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_text(resp).contains("Fetch failed"));

    let homes: Vec<Home> = kv::load_json(&db, kv::KEY_HOMES, default_homes());
    assert_eq!(homes, default_homes());
}
