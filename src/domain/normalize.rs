// src/domain/normalize.rs
//
// Coerces loosely-typed records (pasted JSON elements, tabular rows) into
// normalized patches ready for the reconciler. This is the anti-corruption
// layer between whatever the family pastes in and the stored catalog.

use crate::domain::estimator::estimate_income;
use crate::domain::home::{slugify, Home, UNCATEGORIZED};
use crate::domain::tabular::Row;
use serde_json::Value;

/// The fields a source record actually supplied. Everything except id and
/// title is optional: an unset field must never erase a stored value when
/// the patch is merged, and defaults apply only when a full record is
/// materialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomePatch {
    pub id: String,
    pub title: String,
    pub region: Option<String>,
    pub beds: Option<f64>,
    pub baths: Option<f64>,
    pub sqft: Option<f64>,
    pub price: Option<f64>,
    pub monthly_income_min: Option<f64>,
    pub monthly_income_max: Option<f64>,
    pub annual_income_min: Option<f64>,
    pub annual_income_max: Option<f64>,
    pub roi_notes: Option<String>,
    pub vibe_title: Option<String>,
    pub vibe_blurb: Option<String>,
    pub map_url: Option<String>,
    pub redfin_url: Option<String>,
    pub home_image_url: Option<String>,
}

impl HomePatch {
    /// Materializes a full record from this patch, applying the region
    /// default for records that never named one.
    pub fn into_home(self) -> Home {
        Home {
            id: self.id,
            region: self.region.unwrap_or_else(|| UNCATEGORIZED.to_string()),
            title: self.title,
            beds: self.beds,
            baths: self.baths,
            sqft: self.sqft,
            price: self.price,
            monthly_income_min: self.monthly_income_min,
            monthly_income_max: self.monthly_income_max,
            annual_income_min: self.annual_income_min,
            annual_income_max: self.annual_income_max,
            roi_notes: self.roi_notes,
            vibe_title: self.vibe_title,
            vibe_blurb: self.vibe_blurb,
            map_url: self.map_url,
            redfin_url: self.redfin_url,
            home_image_url: self.home_image_url,
        }
    }

    /// Shallow merge into an existing record: supplied fields override,
    /// unset fields leave the stored value alone.
    pub fn apply_to(&self, existing: &mut Home) {
        existing.title = self.title.clone();

        macro_rules! override_if_set {
            ($field:ident) => {
                if let Some(v) = &self.$field {
                    existing.$field = Some(v.clone());
                }
            };
        }

        if let Some(region) = &self.region {
            existing.region = region.clone();
        }
        override_if_set!(beds);
        override_if_set!(baths);
        override_if_set!(sqft);
        override_if_set!(price);
        override_if_set!(monthly_income_min);
        override_if_set!(monthly_income_max);
        override_if_set!(annual_income_min);
        override_if_set!(annual_income_max);
        override_if_set!(roi_notes);
        override_if_set!(vibe_title);
        override_if_set!(vibe_blurb);
        override_if_set!(map_url);
        override_if_set!(redfin_url);
        override_if_set!(home_image_url);
    }
}

/// Normalizes one loosely-typed JSON object. Returns `None` for records
/// that cannot produce a non-empty id and title; those are skipped, never
/// stored.
pub fn normalize_record(value: &Value) -> Option<HomePatch> {
    let title = text_field(value, "title")?;

    let id = match text_field(value, "id") {
        Some(id) => id,
        None => slugify(&title),
    };
    if id.is_empty() {
        return None;
    }

    let mut patch = HomePatch {
        id,
        title,
        region: text_field(value, "region"),
        beds: number_field(value, "beds"),
        baths: number_field(value, "baths"),
        sqft: number_field(value, "sqft"),
        // Prices are non-negative in this catalog; a negative one would
        // flow into the income estimator, so it is dropped as unparsable.
        price: number_field(value, "price").filter(|p| *p >= 0.0),
        monthly_income_min: number_field(value, "monthlyIncomeMin"),
        monthly_income_max: number_field(value, "monthlyIncomeMax"),
        annual_income_min: number_field(value, "annualIncomeMin"),
        annual_income_max: number_field(value, "annualIncomeMax"),
        roi_notes: text_field(value, "roiNotes"),
        vibe_title: text_field(value, "vibeTitle"),
        vibe_blurb: text_field(value, "vibeBlurb"),
        map_url: text_field(value, "mapUrl"),
        redfin_url: text_field(value, "redfinUrl"),
        home_image_url: text_field(value, "homeImageUrl"),
    };

    fill_income_from_price(&mut patch);
    Some(patch)
}

/// Lifts a tabular row into a JSON object and normalizes it.
pub fn normalize_row(row: &Row) -> Option<HomePatch> {
    let obj: serde_json::Map<String, Value> = row
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    normalize_record(&Value::Object(obj))
}

/// When a price is known and any income bound is missing, the estimator
/// fills exactly the missing ones. Explicit values win, field by field.
fn fill_income_from_price(patch: &mut HomePatch) {
    let Some(price) = patch.price else { return };

    let any_missing = patch.monthly_income_min.is_none()
        || patch.monthly_income_max.is_none()
        || patch.annual_income_min.is_none()
        || patch.annual_income_max.is_none();
    if !any_missing {
        return;
    }

    let est = estimate_income(price);
    patch.monthly_income_min.get_or_insert(est.monthly_min);
    patch.monthly_income_max.get_or_insert(est.monthly_max);
    patch.annual_income_min.get_or_insert(est.annual_min);
    patch.annual_income_max.get_or_insert(est.annual_max);
}

/// String-ish field access: strings trim, numbers stringify (ids are
/// sometimes numeric in pasted data). Empty means absent.
fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric field access: JSON numbers pass through, strings parse with `$`
/// and thousands separators tolerated. Non-finite or unparsable is absent,
/// never zero.
fn number_field(value: &Value, key: &str) -> Option<f64> {
    match value.get(key)? {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let cleaned = s.trim().trim_start_matches('$').replace(',', "");
            cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}
