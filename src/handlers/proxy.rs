// handlers/proxy.rs
use crate::responses::{json_error, raw_response, ResultResp};
use crate::state::AppState;
use percent_encoding::percent_decode_str;

pub const PROXY_PREFIX: &str = "/api/properties/";

/// `GET /api/properties/{id}`: forwards to the upstream API with the server-held token.
pub fn property_proxy(path: &str, state: &AppState) -> ResultResp {
    let Some(property_id) = proxy_property_id(path) else {
        return json_error(404, "Not Found");
    };

    match state.upstream.forward(&property_id) {
        Ok(resp) => raw_response(resp.status, &resp.content_type, resp.body),
        Err(e) => {
            tracing::error!(property_id = %property_id, error = %e, "property proxy failed");
            json_error(500, e.public_message())
        }
    }
}

/// Single decoded path segment after the prefix.
fn proxy_property_id(path: &str) -> Option<String> {
    let raw = path.strip_prefix(PROXY_PREFIX)?;
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    let id = percent_decode_str(raw).decode_utf8().ok()?;
    if id.trim().is_empty() {
        None
    } else {
        Some(id.into_owned())
    }
}
