// state.rs
use crate::config::AppConfig;
use crate::lookup::{property_source, LookupError, PropertySource};
use crate::upstream::UpstreamClient;

/// Shared by every worker; handed to the router by reference.
pub struct AppState {
    pub upstream: UpstreamClient,
    pub properties: Box<dyn PropertySource>,
    /// Used to build absolute share links.
    pub public_origin: String,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        Ok(Self {
            upstream: UpstreamClient::new(config.upstream.clone())?,
            properties: property_source(config)?,
            public_origin: config.public_origin.clone(),
        })
    }
}
