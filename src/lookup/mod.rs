mod client;
mod lookup_error;
mod request;

pub use client::{
    fetch_property_by_id, property_source, HttpPropertySource, PropertySource, UpstreamPropertySource,
};
pub use lookup_error::LookupError;
pub use request::{build_api_url, resolve_against};
