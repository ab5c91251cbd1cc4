use crate::router::handle;
use crate::tests::utils::{body_text, get, init_test_db, post_form};

#[test]
fn catalog_page_renders_the_default_homes() {
    let db = init_test_db();

    let resp = handle(get("/"), &db).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Lakehurst Loop"));
    assert!(body.contains("Bee Creek Rd"));
    assert!(body.contains("Hill Country"));
    // Prices render through the money formatter.
    assert!(body.contains("$6.55M"));
}

#[test]
fn stylesheet_and_sample_catalog_are_served() {
    let db = init_test_db();

    let css = handle(get("/static/main.css"), &db).unwrap();
    assert_eq!(css.status(), 200);
    assert_eq!(css.headers()["Content-Type"], "text/css");

    let json = handle(get("/static/homes.json"), &db).unwrap();
    assert_eq!(json.status(), 200);
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db();
    assert!(handle(get("/nope"), &db).is_err());
}

#[test]
fn error_pages_render_in_the_app_layout() {
    let db = init_test_db();

    let err = match handle(get("/nope"), &db) {
        Err(e) => e,
        Ok(_) => panic!("expected an error for an unknown path"),
    };
    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 404);

    let body = body_text(resp);
    assert!(body.contains("pp-page"));
    assert!(body.contains("data-theme=\"light\""));
    assert!(body.contains("Error 404"));
    // The not-found page points back into the app.
    assert!(body.contains("href=\"/import\""));
}

#[test]
fn region_filter_narrows_the_page() {
    let db = init_test_db();

    // Merge in a home from a second region, then filter to it.
    let csv = "id,title,region\nmueller-casita,Mueller Casita,East Austin";
    handle(post_form("/import/csv", &[("payload", csv)]), &db).unwrap();
    handle(post_form("/region", &[("region", "East Austin")]), &db).unwrap();

    let body = body_text(handle(get("/"), &db).unwrap());
    assert!(body.contains("Mueller Casita"));
    assert!(!body.contains("Lakehurst Loop"));
}

#[test]
fn collapsing_a_region_hides_its_cards() {
    let db = init_test_db();

    let resp = handle(post_form("/collapse", &[("region", "Hill Country")]), &db).unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_text(handle(get("/"), &db).unwrap());
    assert!(body.contains("Hill Country"));
    assert!(!body.contains("Lakehurst Loop"));
}

#[test]
fn export_csv_round_trips_through_the_importer() {
    let db = init_test_db();

    let resp = handle(get("/export.csv"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/csv");

    let csv = body_text(resp);
    let rows = crate::domain::tabular::parse_rows(&csv);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "lakehurst-loop");
    // The quoted title survives its commas.
    assert_eq!(rows[1]["title"], "3507 Bee Creek Rd, Spicewood, TX 78669");
}
