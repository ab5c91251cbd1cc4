use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

pub fn css_response(css: &'static str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS.as_ref())
        .body(Body::from(css.to_string()))
        .unwrap();

    Ok(resp)
}

pub fn json_response(json: &'static str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(json.to_string()))
        .unwrap();

    Ok(resp)
}

/// A CSV download with a filename the browser will keep.
pub fn csv_response(filename: &str, body: String) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSV.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}
