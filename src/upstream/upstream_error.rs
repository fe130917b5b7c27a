use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum UpstreamError {
    /// Base URL, endpoint or token missing. Which one is never reported to clients.
    NotConfigured,
    InvalidUrl(String),
    Network(String),
}

impl UpstreamError {
    /// Message safe to hand back to the browser.
    pub fn public_message(&self) -> &'static str {
        match self {
            UpstreamError::NotConfigured => "Server API is not fully configured",
            UpstreamError::InvalidUrl(_) | UpstreamError::Network(_) => "Failed to fetch property",
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::NotConfigured => write!(f, "Upstream API settings incomplete"),
            UpstreamError::InvalidUrl(msg) => write!(f, "Invalid upstream URL: {msg}"),
            UpstreamError::Network(msg) => write!(f, "Network error: {msg}"),
        }
    }
}

impl Error for UpstreamError {}
