// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;
    raw_response(status, mime::APPLICATION_JSON.as_ref(), body)
}

/// `{"error": message}` with the given status.
pub fn json_error(status: u16, message: &str) -> ResultResp {
    json_response(status, &ErrorBody { error: message })
}

/// Passes a body through as-is.
pub fn raw_response(status: u16, content_type: &str, body: Vec<u8>) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
