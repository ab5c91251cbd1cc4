use maud::{html, Markup};

/// Five-star rating widget: each star is a submit button carrying its
/// value, plus a clear control once something is rated. `value` of 0 means
/// unrated.
pub fn star_rating(home_id: &str, value: u8) -> Markup {
    html! {
        form class="pp-stars" action="/rating" method="post" {
            input type="hidden" name="id" value=(home_id);
            @for star in 1..=5u8 {
                button
                    type="submit"
                    name="value"
                    value=(star)
                    class=(if star <= value { "is-filled" } else { "" })
                    aria-label=(format!("Rate {star} of 5"))
                {
                    @if star <= value { "★" } @else { "☆" }
                }
            }
            @if value > 0 {
                button class="pp-star-clear" type="submit" name="value" value="0" {
                    "clear"
                }
            }
        }
    }
}
