// src/domain/catalog.rs
//
// Read-side helpers over the catalog: region grouping for the page,
// hero image precedence, the favorites shortlist, the hero-override
// import format, and the CSV export rows.

use crate::domain::home::{Home, UNCATEGORIZED};
use std::collections::HashMap;

pub const ALL_REGIONS: &str = "All regions";

/// Region names for the filter select: sorted, with "All regions" first.
pub fn region_names(homes: &[Home]) -> Vec<String> {
    let mut names: Vec<String> = homes
        .iter()
        .map(|h| region_of(h).to_string())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    names.insert(0, ALL_REGIONS.to_string());
    names
}

/// Groups homes by region for display, preserving catalog order both for
/// the region sections and within each section.
pub fn group_by_region<'a>(homes: &'a [Home], filter: &str) -> Vec<(String, Vec<&'a Home>)> {
    let mut groups: Vec<(String, Vec<&Home>)> = Vec::new();
    for home in homes {
        let region = region_of(home);
        if filter != ALL_REGIONS && region != filter {
            continue;
        }
        match groups.iter_mut().find(|(name, _)| name == region) {
            Some((_, list)) => list.push(home),
            None => groups.push((region.to_string(), vec![home])),
        }
    }
    groups
}

fn region_of(home: &Home) -> &str {
    if home.region.trim().is_empty() {
        UNCATEGORIZED
    } else {
        &home.region
    }
}

/// Hero image precedence: per-home override, then the record's own image,
/// then a deterministic placeholder seeded by the id.
pub fn hero_url(home: &Home, overrides: &HashMap<String, String>) -> String {
    if let Some(url) = overrides.get(&home.id) {
        return url.clone();
    }
    if let Some(url) = &home.home_image_url {
        return url.clone();
    }
    let seed: String = url::form_urlencoded::byte_serialize(home.id.as_bytes()).collect();
    format!("https://picsum.photos/seed/{seed}/1200/700")
}

/// Adds the id to the shortlist, or removes it if already present.
pub fn toggle_favorite(favorites: &mut Vec<String>, id: &str) {
    match favorites.iter().position(|f| f == id) {
        Some(i) => {
            favorites.remove(i);
        }
        None => favorites.push(id.to_string()),
    }
}

/// Parses free-text hero override lines: `id <sep> url`, one per line,
/// where the separator is the earliest of `|`, tab, `,`, `:` and the url
/// must look like an image file. Returns accepted pairs and the count of
/// lines that didn't qualify.
pub fn parse_hero_lines(raw: &str) -> (Vec<(String, String)>, usize) {
    let mut accepted = Vec::new();
    let mut ignored = 0;

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(split_at) = line.find(['|', '\t', ',', ':']) else {
            ignored += 1;
            continue;
        };
        let id = line[..split_at].trim();
        let url = line[split_at + 1..].trim();
        // A pasted bare URL splits at its scheme colon; the `//` giveaway
        // means the left side was never an id.
        if url.starts_with("//") || id.contains('/') {
            ignored += 1;
            continue;
        }
        if !id.is_empty() && is_image_url(url) {
            accepted.push((id.to_string(), url.to_string()));
        } else {
            ignored += 1;
        }
    }

    (accepted, ignored)
}

fn is_image_url(url: &str) -> bool {
    let path = url.split('?').next().unwrap_or("").to_ascii_lowercase();
    [".png", ".jpg", ".jpeg", ".webp", ".gif"]
        .iter()
        .any(|ext| path.ends_with(ext))
}

/// Column order for the CSV export; the names match the import vocabulary
/// so an exported catalog re-imports cleanly.
pub const EXPORT_HEADERS: [&str; 17] = [
    "id",
    "region",
    "title",
    "beds",
    "baths",
    "sqft",
    "price",
    "monthlyIncomeMin",
    "monthlyIncomeMax",
    "annualIncomeMin",
    "annualIncomeMax",
    "roiNotes",
    "vibeTitle",
    "vibeBlurb",
    "mapUrl",
    "redfinUrl",
    "homeImageUrl",
];

pub fn export_rows(homes: &[Home]) -> Vec<Vec<String>> {
    homes
        .iter()
        .map(|h| {
            vec![
                h.id.clone(),
                h.region.clone(),
                h.title.clone(),
                number_cell(h.beds),
                number_cell(h.baths),
                number_cell(h.sqft),
                number_cell(h.price),
                number_cell(h.monthly_income_min),
                number_cell(h.monthly_income_max),
                number_cell(h.annual_income_min),
                number_cell(h.annual_income_max),
                h.roi_notes.clone().unwrap_or_default(),
                h.vibe_title.clone().unwrap_or_default(),
                h.vibe_blurb.clone().unwrap_or_default(),
                h.map_url.clone().unwrap_or_default(),
                h.redfin_url.clone().unwrap_or_default(),
                h.home_image_url.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

fn number_cell(n: Option<f64>) -> String {
    match n {
        None => String::new(),
        Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Some(n) => format!("{n}"),
    }
}
