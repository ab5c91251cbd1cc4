// src/domain/home.rs

use serde::{Deserialize, Serialize};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// One property's full attribute set. Field names serialize in camelCase so
/// the persisted catalog and the paste-JSON import share one shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Home {
    pub id: String,
    pub region: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_income_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_income_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe_blurb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redfin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_image_url: Option<String>,
}

impl Home {
    /// A record is storable only with a non-empty id and title.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.title.trim().is_empty()
    }
}

/// Derives a stable id from a display title: lowercase, runs of
/// non-alphanumerics collapse to a single hyphen, ends trimmed.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// The starter catalog: shown on first launch and restored on reset.
pub fn default_homes() -> Vec<Home> {
    vec![
        Home {
            id: "lakehurst-loop".to_string(),
            region: "Hill Country".to_string(),
            title: "19813 & 19817 Lakehurst Loop, Spicewood, TX 78669".to_string(),
            beds: Some(4.0),
            baths: Some(4.0),
            sqft: Some(4000.0),
            price: Some(6_550_000.0),
            monthly_income_min: Some(12_000.0),
            monthly_income_max: Some(16_000.0),
            annual_income_min: Some(144_000.0),
            annual_income_max: Some(192_000.0),
            roi_notes: Some(
                "Lakefront Hill Country luxury with limited comparable inventory. \
                 Pricing power driven by water access + gated feel."
                    .to_string(),
            ),
            vibe_title: Some("Lake & Wine Night".to_string()),
            vibe_blurb: Some("Dock-to-dinner energy.".to_string()),
            map_url: Some(
                "https://www.google.com/maps/search/?api=1&query=19813%20Lakehurst%20Loop%20Spicewood%20TX"
                    .to_string(),
            ),
            redfin_url: Some("https://www.redfin.com/".to_string()),
            home_image_url: Some(
                "https://photos.zillowstatic.com/fp/20f5b7b63b700d484db70e0c98234a5c-p_f.jpg"
                    .to_string(),
            ),
        },
        Home {
            id: "bee-creek-3507".to_string(),
            region: "Hill Country".to_string(),
            title: "3507 Bee Creek Rd, Spicewood, TX 78669".to_string(),
            beds: Some(3.0),
            baths: Some(3.0),
            sqft: Some(3777.0),
            price: Some(1_299_000.0),
            monthly_income_min: Some(4_500.0),
            monthly_income_max: Some(6_500.0),
            annual_income_min: Some(54_000.0),
            annual_income_max: Some(78_000.0),
            roi_notes: Some(
                "Hill Country charm at a more accessible price point. \
                 Great for wine country weekends."
                    .to_string(),
            ),
            vibe_title: Some("Wine Country Escape".to_string()),
            vibe_blurb: Some("Relaxed hill country vibes.".to_string()),
            map_url: Some(
                "https://www.google.com/maps/search/?api=1&query=3507%20Bee%20Creek%20Rd%20Spicewood%20TX"
                    .to_string(),
            ),
            redfin_url: Some("https://www.redfin.com/".to_string()),
            home_image_url: None,
        },
    ]
}
