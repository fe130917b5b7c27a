// src/endpoint.rs

/// `base` without its trailing slash + `endpoint` with exactly one leading
/// slash and no trailing slash.
pub fn join_endpoint(base: &str, endpoint: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let endpoint = endpoint.strip_suffix('/').unwrap_or(endpoint);

    if endpoint.is_empty() || endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

pub fn is_absolute(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
