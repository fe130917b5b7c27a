pub mod details;
pub mod proxy;
pub mod search;

pub use details::details;
pub use proxy::{property_proxy, PROXY_PREFIX};
pub use search::search;
