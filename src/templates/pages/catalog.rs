use crate::state::Theme;
use crate::templates::components::home_card::{home_card, CardVm};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CatalogVm {
    pub regions: Vec<String>,
    pub region_filter: String,
    pub theme: Theme,
    pub sections: Vec<RegionVm>,
}

pub struct RegionVm {
    pub name: String,
    pub collapsed: bool,
    pub cards: Vec<CardVm>,
}

pub fn catalog_page(vm: &CatalogVm) -> Markup {
    desktop_layout(
        "Property Portfolio",
        vm.theme,
        html! {
            main {
                form action="/region" method="post" {
                    label for="region" class="pp-hint" { "Region " }
                    select name="region" id="region" onchange="this.form.submit()" {
                        @for r in &vm.regions {
                            option value=(r) selected[*r == vm.region_filter] { (r) }
                        }
                    }
                    noscript { button class="pp-btn" type="submit" { "Apply" } }
                }

                @if vm.sections.is_empty() {
                    p class="pp-hint" { "No homes yet. Import some from the Import page." }
                }

                @for section in &vm.sections {
                    section class="pp-region" {
                        div class="pp-region-head" {
                            form action="/collapse" method="post" {
                                input type="hidden" name="region" value=(section.name);
                                button class="pp-fold" type="submit" {
                                    @if section.collapsed { "▸" } @else { "▾" }
                                }
                            }
                            h2 { (section.name) }
                        }

                        @if !section.collapsed {
                            div class="pp-grid" {
                                @for card in &section.cards {
                                    (home_card(card))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
