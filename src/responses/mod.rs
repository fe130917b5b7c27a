pub mod errors;
pub mod html;
pub mod json;

pub use errors::{html_error_response, ResultResp};

// Normal HTML response
pub use html::{css_response, html_response, html_response_with_status, see_other};
pub use json::{json_error, json_response, raw_response};
