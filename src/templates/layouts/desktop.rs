use crate::state::Theme;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, theme: Theme, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html data-theme=(theme.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                div class="pp-page" {
                    header class="pp-top" {
                        div {
                            h1 class="pp-title" { "Property Portfolio" }
                            p class="pp-subtitle" { "A family space for vibes, math, and decisions." }
                        }
                        div class="pp-top-right" {
                            a class="pp-btn" href="/" { "Catalog" }
                            a class="pp-btn" href="/import" { "Import" }
                            a class="pp-btn" href="/export.csv" { "Export CSV" }
                            form action="/theme" method="post" {
                                button class="pp-btn" type="submit" {
                                    @if theme == Theme::Dark { "Light Mode" } @else { "Dark Mode" }
                                }
                            }
                        }
                    }
                    (content)
                }
            }
        }
    }
}
