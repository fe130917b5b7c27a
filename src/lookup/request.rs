// src/lookup/request.rs
use crate::config::LookupConfig;
use crate::domain::normalize::URI_COMPONENT;
use crate::endpoint::{is_absolute, join_endpoint};
use percent_encoding::utf8_percent_encode;
use url::Url;

/// URL a lookup for `property_id` goes to. Also what we log when a lookup misses.
pub fn build_api_url(config: &LookupConfig, property_id: &str) -> String {
    let path = format!(
        "{}/{}",
        join_endpoint(&config.base_url, &config.endpoint),
        utf8_percent_encode(property_id, URI_COMPONENT)
    );
    let expand = config.expand.as_str();

    if is_absolute(&path) {
        if let Ok(mut url) = Url::parse(&path) {
            if !expand.is_empty() {
                url.query_pairs_mut().append_pair("expand", expand);
            }
            return url.into();
        }
    }

    if expand.is_empty() {
        path
    } else {
        format!("{path}?expand={}", utf8_percent_encode(expand, URI_COMPONENT))
    }
}

/// Resolves a relative lookup URL against the app's own origin.
pub fn resolve_against(origin: &str, url: &str) -> Result<Url, url::ParseError> {
    if is_absolute(url) {
        Url::parse(url)
    } else {
        Url::parse(origin)?.join(url)
    }
}
