use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::state::Theme;
use crate::templates::desktop_layout;
use astra::Response;
use maud::html;

pub type ResultResp = Result<Response, ServerError>;

/// Renders a ServerError as an error page in the app's own layout. These
/// pages render without touching the DB, so the theme defaults to light.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => error_page(404, "That page doesn't exist."),
        ServerError::BadRequest(msg) => error_page(400, &msg),
        ServerError::DbError(msg) => error_page(500, &msg),
        ServerError::InternalError => error_page(500, "Something went wrong on our side."),
    }
}

fn error_page(status: u16, message: &str) -> Response {
    let markup = desktop_layout(
        &format!("Error {status} · Property Portfolio"),
        Theme::Light,
        html! {
            main {
                section class="pp-flash" {
                    h2 { "Error " (status) }
                    p { (message) }
                    @if status == 404 {
                        p class="pp-hint" {
                            "Try the " a href="/" { "catalog" }
                            " or the " a href="/import" { "import page" } "."
                        }
                    }
                }
            }
        },
    );
    html_with_status(status, markup)
}
