use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 303 back to a GET page after a state-changing POST.
pub fn see_other(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}
