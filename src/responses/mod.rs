pub mod assets;
pub mod errors;
pub mod html;
pub mod redirect;

pub use assets::{css_response, csv_response, json_response};
pub use errors::{error_to_response, ResultResp};
pub use html::html_response;
pub use redirect::see_other;
