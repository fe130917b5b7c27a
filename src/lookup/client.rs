// src/lookup/client.rs
use crate::config::{AppConfig, LookupConfig};
use crate::endpoint::is_absolute;
use crate::domain::{normalize, unwrap_envelope, PropertyData};
use crate::lookup::request::{build_api_url, resolve_against};
use crate::lookup::LookupError;
use crate::upstream::UpstreamClient;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

/// Anything that can hand back the raw upstream body for a property code.
/// `Ok(None)` means "no such property".
pub trait PropertySource: Send + Sync {
    fn fetch_raw(&self, property_id: &str) -> Result<Option<Value>, LookupError>;

    /// Where the lookup is sent, for logs.
    fn describe(&self, property_id: &str) -> String {
        property_id.to_string()
    }
}

/// Looks a property up and normalizes whatever came back.
pub fn fetch_property_by_id(
    source: &dyn PropertySource,
    property_id: &str,
) -> Result<Option<PropertyData>, LookupError> {
    let body = source.fetch_raw(property_id)?;
    Ok(body.map(|b| normalize(unwrap_envelope(&b))))
}

/// A relative lookup base names this server's own proxy route; those lookups
/// call the upstream in-process. Absolute bases are fetched over HTTP.
pub fn property_source(config: &AppConfig) -> Result<Box<dyn PropertySource>, LookupError> {
    if is_absolute(&config.lookup.base_url) {
        let source = HttpPropertySource::new(config.lookup.clone(), config.public_origin.clone())?;
        return Ok(Box::new(source));
    }

    let upstream = UpstreamClient::new(config.upstream.clone())?;
    Ok(Box::new(UpstreamPropertySource::new(upstream, config.lookup.clone())))
}

/// Lookups through the upstream client the proxy route uses, without the HTTP hop.
pub struct UpstreamPropertySource {
    upstream: UpstreamClient,
    config: LookupConfig,
}

impl UpstreamPropertySource {
    pub fn new(upstream: UpstreamClient, config: LookupConfig) -> Self {
        Self { upstream, config }
    }
}

impl PropertySource for UpstreamPropertySource {
    fn fetch_raw(&self, property_id: &str) -> Result<Option<Value>, LookupError> {
        let resp = self.upstream.forward(property_id)?;

        if !(200..300).contains(&resp.status) {
            tracing::info!(status = resp.status, property_id, "property not found upstream");
            return Ok(None);
        }

        let data: Value = serde_json::from_slice(&resp.body)
            .map_err(|e| LookupError::JsonParse(e.to_string()))?;

        Ok(Some(data))
    }

    fn describe(&self, property_id: &str) -> String {
        build_api_url(&self.config, property_id)
    }
}

/// Lookups over HTTP against an absolute lookup base.
pub struct HttpPropertySource {
    client: Client,
    config: LookupConfig,
    origin: String,
}

impl HttpPropertySource {
    pub fn new(config: LookupConfig, origin: impl Into<String>) -> Result<Self, LookupError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            client,
            config,
            origin: origin.into(),
        })
    }
}

impl PropertySource for HttpPropertySource {
    fn fetch_raw(&self, property_id: &str) -> Result<Option<Value>, LookupError> {
        let request_url = build_api_url(&self.config, property_id);
        let url = resolve_against(&self.origin, &request_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{request_url}: {e}")))?;

        tracing::debug!(%url, "property lookup");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            tracing::info!(status = resp.status().as_u16(), url = %request_url, "property not found");
            return Ok(None);
        }

        let text = resp
            .text()
            .map_err(|e| LookupError::Network(e.to_string()))?;
        let data: Value =
            serde_json::from_str(&text).map_err(|e| LookupError::JsonParse(e.to_string()))?;

        Ok(Some(data))
    }

    fn describe(&self, property_id: &str) -> String {
        build_api_url(&self.config, property_id)
    }
}
