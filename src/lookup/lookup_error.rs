use crate::upstream::UpstreamError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LookupError {
    InvalidUrl(String),
    Network(String),
    JsonParse(String),
    Upstream(UpstreamError),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::InvalidUrl(msg) => write!(f, "Invalid lookup URL: {msg}"),
            LookupError::Network(msg) => write!(f, "Network error: {msg}"),
            LookupError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            LookupError::Upstream(e) => write!(f, "Upstream error: {e}"),
        }
    }
}

impl Error for LookupError {}

impl From<UpstreamError> for LookupError {
    fn from(e: UpstreamError) -> Self {
        LookupError::Upstream(e)
    }
}
