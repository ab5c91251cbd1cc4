use crate::domain::home::Home;
use crate::templates::components::star_rating;
use maud::{html, Markup};

/// Everything one card needs, resolved ahead of rendering.
pub struct CardVm {
    pub home: Home,
    pub hero_url: String,
    pub rating: u8,
    pub is_favorite: bool,
}

pub fn home_card(vm: &CardVm) -> Markup {
    let h = &vm.home;
    html! {
        article class="pp-card" {
            div class="pp-hero" {
                img src=(vm.hero_url) alt=(h.title) loading="lazy";
                div class="pp-hero-actions" {
                    form action="/favorite" method="post" {
                        input type="hidden" name="id" value=(h.id);
                        button
                            class=(if vm.is_favorite { "pp-like is-on" } else { "pp-like" })
                            type="submit"
                        {
                            @if vm.is_favorite { "♥" } @else { "♡" }
                        }
                    }
                }
            }

            div class="pp-card-body" {
                div class="pp-card-title" { (h.title) }

                div class="pp-stats" {
                    div class="pp-stat" {
                        div class="pp-stat-label" { "PRICE" }
                        div class="pp-stat-value" { (format_money(h.price)) }
                    }
                    div class="pp-stat" {
                        div class="pp-stat-label" { "MONTHLY" }
                        div class="pp-stat-value" {
                            (format_range(h.monthly_income_min, h.monthly_income_max))
                        }
                    }
                    div class="pp-stat" {
                        div class="pp-stat-label" { "ANNUAL" }
                        div class="pp-stat-value" {
                            (format_range(h.annual_income_min, h.annual_income_max))
                        }
                    }
                }

                @if let Some(notes) = &h.roi_notes {
                    div class="pp-roi" { strong { "ROI Notes: " } (notes) }
                }

                @if h.vibe_title.is_some() || h.vibe_blurb.is_some() {
                    div class="pp-vibe" {
                        @if let Some(t) = &h.vibe_title { div class="pp-vibe-title" { (t) } }
                        @if let Some(b) = &h.vibe_blurb { div class="pp-vibe-blurb" { (b) } }
                        (star_rating(&h.id, vm.rating))
                    }
                }

                div class="pp-actions" {
                    @if let Some(url) = &h.map_url {
                        a href=(url) target="_blank" rel="noreferrer" { "Open in Maps" }
                    }
                    @if let Some(url) = &h.redfin_url {
                        a href=(url) target="_blank" rel="noreferrer" { "Open in Redfin" }
                    }
                }
            }
        }
    }
}

/// Money for card stats: $X.XXM above a million, thousands-separated above
/// a thousand, bare below that, em-dash for absent.
pub fn format_money(n: Option<f64>) -> String {
    let Some(n) = n.filter(|v| v.is_finite()) else {
        return "—".to_string();
    };
    let abs = n.abs();
    if abs >= 1_000_000.0 {
        format!("${:.2}M", n / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${}", thousands(n.round() as i64))
    } else if n.fract() == 0.0 {
        format!("${}", n as i64)
    } else {
        format!("${n}")
    }
}

pub fn format_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (None, None) => "—".to_string(),
        (Some(min), Some(max)) => format!("{}–{}", format_money(Some(min)), format_money(Some(max))),
        (min, max) => format_money(min.or(max)),
    }
}

fn thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
