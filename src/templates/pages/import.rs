use crate::state::Theme;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ImportVm {
    pub theme: Theme,
    /// Outcome of the action that just ran, if any.
    pub message: Option<String>,
    pub default_fetch_url: String,
}

pub fn import_page(vm: &ImportVm) -> Markup {
    desktop_layout(
        "Import · Property Portfolio",
        vm.theme,
        html! {
            main class="pp-import" {
                h2 { "Import & maintenance" }

                @if let Some(message) = &vm.message {
                    div class="pp-flash" { (message) }
                }

                section {
                    h3 { "Replace catalog from JSON" }
                    p class="pp-hint" {
                        "Paste a JSON array of homes. Replaces the whole catalog; "
                        "a parse error leaves it untouched."
                    }
                    form action="/import/json" method="post" {
                        textarea name="payload" placeholder="[{\"id\": \"...\", \"title\": \"...\"}]" {}
                        p { button class="pp-btn pp-btn-primary" type="submit" { "Apply JSON" } }
                    }
                }

                section {
                    h3 { "Merge rows from CSV or a spreadsheet paste" }
                    p class="pp-hint" {
                        "First line is the header (id, title, region, price, ...). "
                        "Rows merge by id; a row without id and title is skipped."
                    }
                    form action="/import/csv" method="post" {
                        textarea name="payload" placeholder="id,title,region,price" {}
                        p { button class="pp-btn pp-btn-primary" type="submit" { "Import rows" } }
                    }
                }

                section {
                    h3 { "Hero image overrides" }
                    p class="pp-hint" {
                        "One per line: id | image-url. The url must end in "
                        ".png/.jpg/.jpeg/.webp/.gif (query string allowed)."
                    }
                    form action="/import/heroes" method="post" {
                        textarea name="payload" placeholder="bee-creek-3507 | https://.../front.jpg" {}
                        p { button class="pp-btn pp-btn-primary" type="submit" { "Apply overrides" } }
                    }
                }

                section {
                    h3 { "Fetch catalog" }
                    p class="pp-hint" { "One GET of a static JSON document. No retry." }
                    form action="/fetch" method="post" {
                        input type="text" name="url" value=(vm.default_fetch_url);
                        p { button class="pp-btn pp-btn-primary" type="submit" { "Fetch" } }
                    }
                }

                section {
                    h3 { "Reset" }
                    form action="/reset" method="post" {
                        button class="pp-btn" type="submit" { "Restore default catalog" }
                    }
                }
            }
        },
    )
}
