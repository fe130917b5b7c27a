// client.rs
use crate::config::UpstreamConfig;
use crate::endpoint::join_endpoint;
use crate::upstream::UpstreamError;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// What the upstream answered, passed back to the browser untouched.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// One GET against the upstream property endpoint with the bearer token attached.
    pub fn forward(&self, property_id: &str) -> Result<UpstreamResponse, UpstreamError> {
        let (base, endpoint, token) = self
            .config
            .required()
            .ok_or(UpstreamError::NotConfigured)?;

        let url = build_upstream_url(base, endpoint, self.config.expand.as_deref(), property_id)?;
        tracing::debug!(%url, "forwarding property request");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token)
            .send()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or("application/json")
            .to_string();

        let body = resp
            .bytes()
            .map_err(|e| UpstreamError::Network(e.to_string()))?
            .to_vec();

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

/// `<base><endpoint>/<encoded id>[?expand=..]`
pub fn build_upstream_url(
    base: &str,
    endpoint: &str,
    expand: Option<&str>,
    property_id: &str,
) -> Result<Url, UpstreamError> {
    let joined = join_endpoint(base, endpoint);
    let mut url = Url::parse(&joined).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| UpstreamError::InvalidUrl(format!("{joined} cannot take a path")))?
        .pop_if_empty()
        .push(property_id);

    if let Some(expand) = expand.filter(|e| !e.is_empty()) {
        url.query_pairs_mut().append_pair("expand", expand);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_and_encodes() {
        let url = build_upstream_url(
            "https://api.example.com/v1/",
            "properties/",
            Some("images"),
            "CB 156",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/properties/CB%20156?expand=images"
        );
    }

    #[test]
    fn url_without_expand() {
        let url = build_upstream_url("https://api.example.com", "/p", None, "A1").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/p/A1");

        let url = build_upstream_url("https://api.example.com", "/p", Some(""), "A1").unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn slash_in_id_stays_in_one_segment() {
        let url = build_upstream_url("https://api.example.com", "/p", None, "a/b").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/p/a%2Fb");
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = build_upstream_url("/api", "/p", None, "A1").unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidUrl(_)));
    }

    #[test]
    fn forward_without_settings_fails_before_any_request() {
        let client = UpstreamClient::new(UpstreamConfig::default()).unwrap();
        assert!(matches!(
            client.forward("CB156"),
            Err(UpstreamError::NotConfigured)
        ));
    }
}
