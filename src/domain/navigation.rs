// src/domain/navigation.rs

use crate::domain::normalize::URI_COMPONENT;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use std::collections::HashMap;

pub const DETAILS_PATH: &str = "/details";

/// Decoded query parameters. Later duplicates overwrite earlier ones.
pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Where a successful search sends the user.
pub fn details_url(property_code: &str) -> String {
    format!(
        "{}?property_id={}",
        DETAILS_PATH,
        utf8_percent_encode(property_code, URI_COMPONENT)
    )
}

/// Reads `property_id` out of an old hash-routed URL fragment,
/// e.g. `#/?property_id=CB156` or `#property_id=CB156`.
pub fn property_id_from_hash(hash: &str) -> Option<String> {
    let trimmed = hash.trim_start_matches('#').trim_start_matches('/');
    let query = match trimmed.split_once('?') {
        Some((_, q)) => q,
        None => trimmed,
    };

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "property_id")
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Property id for the details view: `property_id`, `id`, `/details/<id>`,
/// then a forwarded legacy hash.
pub fn resolve_property_id(path: &str, params: &HashMap<String, String>) -> Option<String> {
    let from_query = ["property_id", "id"]
        .iter()
        .filter_map(|k| params.get(*k))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string);

    from_query
        .or_else(|| id_from_path(path))
        .or_else(|| {
            params
                .get("legacy_hash")
                .and_then(|h| property_id_from_hash(h))
        })
}

fn id_from_path(path: &str) -> Option<String> {
    let rest = path.strip_prefix(DETAILS_PATH)?.strip_prefix('/')?;
    let segment = rest.trim_end_matches('/').rsplit('/').next()?;
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let id = decoded.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
