use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let message = match &err {
        ServerError::NotFound => "Not Found",
        ServerError::InternalError => "Internal Server Error",
    };
    let status = err.status();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
