// src/db/kv.rs
//
// The persistence bridge: JSON-encoded values under versioned string keys,
// one row per key in `kv_store`. Loads fall back, saves write through.

use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

// Keys carry a version suffix so a shape change can't collide with data
// written by an older build.
pub const KEY_HOMES: &str = "pp.homes.v1";
pub const KEY_REGION: &str = "pp.region.v1";
pub const KEY_HERO_OVERRIDES: &str = "pp.heroOverrides.v1";
pub const KEY_THEME: &str = "pp.theme.v1";
pub const KEY_RATINGS: &str = "pp.ratings.v1";
pub const KEY_FAVORITES: &str = "pp.favorites.v1";
pub const KEY_COLLAPSED: &str = "pp.collapsed.v1";

/// Loads the value stored under `key`, falling back to `fallback` on an
/// absent row, malformed JSON, or any DB error. Never fails: stale or
/// corrupt persisted state must not take the page down.
pub fn load_json<T: DeserializeOwned>(db: &Database, key: &str, fallback: T) -> T {
    let stored = db.with_conn(|conn| {
        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(ServerError::from)
    });

    match stored {
        Ok(Some(text)) => serde_json::from_str(&text).unwrap_or(fallback),
        _ => fallback,
    }
}

/// Serializes `value` and writes it through under `key`. Unlike loads,
/// a failed write surfaces to the caller.
pub fn save_json<T: Serialize>(db: &Database, key: &str, value: &T) -> Result<(), ServerError> {
    let text = serde_json::to_string(value)
        .map_err(|e| ServerError::DbError(format!("Serialize for {key} failed: {e}")))?;
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, text, now],
        )?;
        Ok(())
    })
}
