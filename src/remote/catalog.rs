// src/remote/catalog.rs
//
// One-shot fetch of a static JSON catalog document. No retry: a failure is
// reported to the user and the stored catalog stays as it was.

use crate::domain::home::Home;
use crate::domain::normalize::normalize_record;
use crate::remote::FetchError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// The bundled sample document served by this app itself, so a fresh
/// install has something to fetch against.
pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:3000/static/homes.json";

pub struct CatalogFetcher {
    client: Client,
}

impl CatalogFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// GETs `url` and normalizes the returned array. Entries that fail
    /// validation are dropped; the count of drops is returned alongside.
    pub fn fetch(&self, url: &str) -> Result<(Vec<Home>, usize), FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Network(format!("HTTP {}", resp.status())));
        }

        let body = resp.text().map_err(|e| FetchError::Network(e.to_string()))?;
        parse_catalog(&body)
    }
}

/// Parses a catalog document: a JSON array of Home-shaped objects, each run
/// through the field normalizer.
pub fn parse_catalog(body: &str) -> Result<(Vec<Home>, usize), FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::JsonParse(e.to_string()))?;
    let entries = value
        .as_array()
        .ok_or_else(|| FetchError::UnexpectedShape("expected a JSON array of homes".to_string()))?;

    let mut homes = Vec::with_capacity(entries.len());
    let mut dropped = 0;
    for entry in entries {
        match normalize_record(entry) {
            Some(patch) => homes.push(patch.into_home()),
            None => dropped += 1,
        }
    }
    Ok((homes, dropped))
}
