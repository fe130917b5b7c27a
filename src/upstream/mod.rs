mod client;
mod upstream_error;

pub use client::UpstreamClient;
pub use upstream_error::UpstreamError;
