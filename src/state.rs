// src/state.rs
//
// The explicit application state: everything the page session keeps, loaded
// from the persistence bridge and handed to pure domain functions. Handlers
// write back only the keys they touched.

use crate::db::connection::Database;
use crate::db::kv;
use crate::domain::home::{default_homes, Home};
use crate::domain::rating::Ratings;
use crate::errors::ServerError;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_stored(s: &str) -> Self {
        if s == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct AppState {
    pub homes: Vec<Home>,
    pub ratings: Ratings,
    pub favorites: Vec<String>,
    pub hero_overrides: HashMap<String, String>,
    pub region_filter: String,
    pub theme: Theme,
    pub collapsed: HashMap<String, bool>,
}

/// Loads the whole session state. Every piece falls back independently, so
/// one corrupt key never takes the others down.
pub fn load_state(db: &Database) -> AppState {
    let homes: Vec<Home> = kv::load_json(db, kv::KEY_HOMES, default_homes());
    let ratings = Ratings::from_stored(kv::load_json(db, kv::KEY_RATINGS, HashMap::new()));
    let favorites: Vec<String> = kv::load_json(db, kv::KEY_FAVORITES, Vec::new());
    let hero_overrides: HashMap<String, String> =
        kv::load_json(db, kv::KEY_HERO_OVERRIDES, HashMap::new());
    let region_filter: String =
        kv::load_json(db, kv::KEY_REGION, crate::domain::catalog::ALL_REGIONS.to_string());
    let theme_raw: String = kv::load_json(db, kv::KEY_THEME, "light".to_string());
    let collapsed: HashMap<String, bool> = kv::load_json(db, kv::KEY_COLLAPSED, HashMap::new());

    AppState {
        homes,
        ratings,
        favorites,
        hero_overrides,
        region_filter,
        theme: Theme::from_stored(&theme_raw),
        collapsed,
    }
}

pub fn save_homes(db: &Database, homes: &[Home]) -> Result<(), ServerError> {
    kv::save_json(db, kv::KEY_HOMES, &homes)
}

pub fn save_ratings(db: &Database, ratings: &Ratings) -> Result<(), ServerError> {
    kv::save_json(db, kv::KEY_RATINGS, &ratings.to_stored())
}

pub fn save_favorites(db: &Database, favorites: &[String]) -> Result<(), ServerError> {
    kv::save_json(db, kv::KEY_FAVORITES, &favorites)
}

pub fn save_hero_overrides(
    db: &Database,
    overrides: &HashMap<String, String>,
) -> Result<(), ServerError> {
    kv::save_json(db, kv::KEY_HERO_OVERRIDES, overrides)
}

pub fn save_region_filter(db: &Database, region: &str) -> Result<(), ServerError> {
    kv::save_json(db, kv::KEY_REGION, &region)
}

pub fn save_theme(db: &Database, theme: Theme) -> Result<(), ServerError> {
    kv::save_json(db, kv::KEY_THEME, &theme.as_str())
}

pub fn save_collapsed(db: &Database, collapsed: &HashMap<String, bool>) -> Result<(), ServerError> {
    kv::save_json(db, kv::KEY_COLLAPSED, collapsed)
}
