// src/domain/images.rs

use crate::domain::aliases;
use crate::domain::coerce::{first_truthy, non_empty_str};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Gallery URLs in display order: featured image, image list, single image.
/// Duplicates keep their first position.
pub fn extract_images(raw: &Map<String, Value>) -> Vec<String> {
    let mut urls: Vec<&str> = Vec::new();

    if let Some(featured) = raw.get("featured_image").and_then(Value::as_object) {
        if let Some(u) = non_empty_str(first_truthy(featured, aliases::FEATURED_IMAGE_URL)) {
            urls.push(u);
        }
    }

    if let Some(Value::Array(items)) = first_truthy(raw, aliases::IMAGE_LISTS) {
        for item in items {
            match item {
                Value::String(s) if !s.is_empty() => urls.push(s),
                Value::Object(obj) => {
                    if let Some(u) = non_empty_str(first_truthy(obj, aliases::IMAGE_ITEM_URL)) {
                        urls.push(u);
                    }
                }
                _ => {}
            }
        }
    }

    match first_truthy(raw, aliases::SINGLE_IMAGE) {
        Some(Value::String(s)) => urls.push(s),
        Some(Value::Object(obj)) => {
            if let Some(u) = non_empty_str(first_truthy(obj, aliases::SINGLE_IMAGE_URL)) {
                urls.push(u);
            }
        }
        _ => {}
    }

    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|u| seen.insert(*u))
        .map(str::to_string)
        .collect()
}
