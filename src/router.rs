use crate::db::Database;
use crate::domain::catalog::{
    self, export_rows, group_by_region, hero_url, parse_hero_lines, region_names, toggle_favorite,
    EXPORT_HEADERS,
};
use crate::domain::home::default_homes;
use crate::domain::normalize::{normalize_record, normalize_row};
use crate::domain::reconcile::merge;
use crate::domain::tabular::{encode_csv, parse_rows};
use crate::errors::ServerError;
use crate::remote::{CatalogFetcher, DEFAULT_CATALOG_URL};
use crate::responses::{
    css_response, csv_response, html_response, json_response, see_other, ResultResp,
};
use crate::state::{self, load_state};
use crate::templates::components::home_card::CardVm;
use crate::templates::pages::{catalog_page, import_page, CatalogVm, ImportVm, RegionVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => get_catalog(db),
        ("GET", "/import") => get_import(db, None),
        ("GET", "/export.csv") => get_export_csv(db),
        ("GET", "/static/main.css") => css_response(include_str!("../static/main.css")),
        ("GET", "/static/homes.json") => json_response(include_str!("../static/homes.json")),

        ("POST", "/rating") => post_rating(db, read_form(&mut req)?),
        ("POST", "/favorite") => post_favorite(db, read_form(&mut req)?),
        ("POST", "/theme") => post_theme(db),
        ("POST", "/region") => post_region(db, read_form(&mut req)?),
        ("POST", "/collapse") => post_collapse(db, read_form(&mut req)?),
        ("POST", "/import/json") => post_import_json(db, read_form(&mut req)?),
        ("POST", "/import/csv") => post_import_csv(db, read_form(&mut req)?),
        ("POST", "/import/heroes") => post_import_heroes(db, read_form(&mut req)?),
        ("POST", "/fetch") => post_fetch(db, read_form(&mut req)?),
        ("POST", "/reset") => post_reset(db),

        _ => Err(ServerError::NotFound),
    }
}

/* ================================
   PAGES
================================ */

fn get_catalog(db: &Database) -> ResultResp {
    let st = load_state(db);

    let sections = group_by_region(&st.homes, &st.region_filter)
        .into_iter()
        .map(|(name, homes)| RegionVm {
            collapsed: st.collapsed.get(&name).copied().unwrap_or(false),
            cards: homes
                .into_iter()
                .map(|h| CardVm {
                    hero_url: hero_url(h, &st.hero_overrides),
                    rating: st.ratings.display_value(&h.id),
                    is_favorite: st.favorites.iter().any(|f| f == &h.id),
                    home: h.clone(),
                })
                .collect(),
            name,
        })
        .collect();

    html_response(catalog_page(&CatalogVm {
        regions: region_names(&st.homes),
        region_filter: st.region_filter,
        theme: st.theme,
        sections,
    }))
}

fn get_import(db: &Database, message: Option<String>) -> ResultResp {
    let st = load_state(db);
    html_response(import_page(&ImportVm {
        theme: st.theme,
        message,
        default_fetch_url: DEFAULT_CATALOG_URL.to_string(),
    }))
}

fn get_export_csv(db: &Database) -> ResultResp {
    let st = load_state(db);
    let body = encode_csv(&EXPORT_HEADERS, &export_rows(&st.homes));
    csv_response("portfolio.csv", body)
}

/* ================================
   PREFERENCE TOGGLES
================================ */

fn post_rating(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let id = require(&form, "id")?;
    let value: i64 = form
        .get("value")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("missing rating value".into()))?;

    let mut st = load_state(db);
    st.ratings.set(&id, value);
    state::save_ratings(db, &st.ratings)?;
    see_other("/")
}

fn post_favorite(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let id = require(&form, "id")?;

    let mut st = load_state(db);
    toggle_favorite(&mut st.favorites, &id);
    state::save_favorites(db, &st.favorites)?;
    see_other("/")
}

fn post_theme(db: &Database) -> ResultResp {
    let st = load_state(db);
    state::save_theme(db, st.theme.toggled())?;
    see_other("/")
}

fn post_region(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let region = form
        .get("region")
        .cloned()
        .unwrap_or_else(|| catalog::ALL_REGIONS.to_string());
    state::save_region_filter(db, &region)?;
    see_other("/")
}

fn post_collapse(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let region = require(&form, "region")?;

    let mut st = load_state(db);
    let folded = st.collapsed.get(&region).copied().unwrap_or(false);
    st.collapsed.insert(region, !folded);
    state::save_collapsed(db, &st.collapsed)?;
    see_other("/")
}

/* ================================
   IMPORTS
================================ */

fn post_import_json(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let payload = form.get("payload").map(String::as_str).unwrap_or("");

    let value: serde_json::Value = match serde_json::from_str(payload) {
        Ok(v) => v,
        // Report the parse error verbatim; the stored catalog stays put.
        Err(e) => return get_import(db, Some(format!("JSON parse error: {e}"))),
    };
    let Some(entries) = value.as_array() else {
        return get_import(db, Some("Expected a JSON array of homes.".to_string()));
    };

    let mut homes = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    for entry in entries {
        match normalize_record(entry) {
            Some(patch) => homes.push(patch.into_home()),
            None => skipped += 1,
        }
    }

    state::save_homes(db, &homes)?;
    println!("📋 Catalog replaced from pasted JSON: {} homes", homes.len());
    get_import(
        db,
        Some(format!(
            "Catalog replaced: {} homes ({} skipped).",
            homes.len(),
            skipped
        )),
    )
}

fn post_import_csv(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let payload = form.get("payload").map(String::as_str).unwrap_or("");

    let rows = parse_rows(payload);
    if rows.is_empty() {
        return get_import(db, Some("Nothing to import.".to_string()));
    }

    let st = load_state(db);
    let (homes, summary) = merge(&st.homes, rows.iter().map(normalize_row));
    state::save_homes(db, &homes)?;

    println!("📋 CSV import: {summary}");
    get_import(db, Some(format!("Imported rows: {summary}.")))
}

fn post_import_heroes(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let payload = form.get("payload").map(String::as_str).unwrap_or("");

    let (accepted, ignored) = parse_hero_lines(payload);
    let mut st = load_state(db);
    let count = accepted.len();
    st.hero_overrides.extend(accepted);
    state::save_hero_overrides(db, &st.hero_overrides)?;

    get_import(
        db,
        Some(format!("Hero overrides: {count} accepted, {ignored} ignored.")),
    )
}

fn post_fetch(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let url = form
        .get("url")
        .filter(|u| !u.trim().is_empty())
        .map(String::as_str)
        .unwrap_or(DEFAULT_CATALOG_URL)
        .to_string();

    let fetched = CatalogFetcher::new().and_then(|fetcher| fetcher.fetch(&url));
    match fetched {
        Ok((homes, dropped)) => {
            state::save_homes(db, &homes)?;
            println!("🌐 Fetched {} homes from {url}", homes.len());
            get_import(
                db,
                Some(format!(
                    "Fetched {} homes ({} dropped).",
                    homes.len(),
                    dropped
                )),
            )
        }
        Err(e) => {
            eprintln!("Fetch failed for {url}: {e}");
            get_import(db, Some(format!("Fetch failed: {e}")))
        }
    }
}

fn post_reset(db: &Database) -> ResultResp {
    state::save_homes(db, &default_homes())?;
    see_other("/import")
}

/* ================================
   FORM PLUMBING
================================ */

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

fn require(form: &HashMap<String, String>, key: &str) -> Result<String, ServerError> {
    form.get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing {key}")))
}
