// src/domain/normalize.rs

use crate::domain::aliases;
use crate::domain::coerce::{
    first_field, first_truthy, is_present, to_count, to_number, to_text, truthy,
};
use crate::domain::images::extract_images;
use crate::domain::property::{Attribute, BeAware, Contact, Location, Notice, PropertyData};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{Map, Value};

const MAP_EMBED_BASE: &str = "https://www.google.com/maps";

/// Characters `encodeURIComponent` leaves alone.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Picks the record out of an upstream body: `data`, then `property`, then the body itself.
pub fn unwrap_envelope(body: &Value) -> &Value {
    body.as_object()
        .and_then(|obj| first_truthy(obj, aliases::ENVELOPE))
        .unwrap_or(body)
}

/// Maps an arbitrary upstream record onto a fully populated [`PropertyData`].
/// Never fails; anything missing or malformed falls back to that field's default.
pub fn normalize(raw: &Value) -> PropertyData {
    let empty = Map::new();
    let raw = raw.as_object().unwrap_or(&empty);
    let location = raw.get("location").and_then(Value::as_object).unwrap_or(&empty);

    let text = |keys: &[&str]| to_text(first_field(raw, keys));
    let count = |keys: &[&str]| to_count(first_field(raw, keys));

    let id = text(aliases::ID);
    let address = or_else(first_field(raw, aliases::ADDRESS), location.get("address"));
    let address = to_text(address);

    let latitude = to_number(or_else(
        first_field(raw, aliases::LATITUDE),
        or_else(location.get("lat"), location.get("latitude")),
    ));
    let longitude = to_number(or_else(
        first_field(raw, aliases::LONGITUDE),
        or_else(location.get("lng"), location.get("longitude")),
    ));
    let explicit_map = to_text(or_else(
        first_field(raw, aliases::MAP_URL),
        location.get("mapUrl"),
    ));

    // A present but non-object `contact` yields empty fields, not the top-level ones.
    let contact_src = match raw.get("contact").filter(|v| truthy(v)) {
        Some(contact) => contact.as_object().unwrap_or(&empty),
        None => raw,
    };

    PropertyData {
        id: if id.is_empty() { "UNKNOWN".to_string() } else { id },
        name: first_field(raw, aliases::NAME)
            .map(|v| to_text(Some(v)))
            .unwrap_or_else(|| "Property".to_string()),
        suburb: suburb(raw),
        price: price(raw),
        property_type: text(aliases::PROPERTY_TYPE),
        size: text(aliases::SIZE),
        year_built: text(aliases::YEAR_BUILT),
        parking: text(aliases::PARKING),
        sleeps: count(aliases::SLEEPS),
        bathrooms: count(aliases::BATHROOMS),
        bedrooms: count(aliases::BEDROOMS),
        description: text(aliases::DESCRIPTION),
        be_aware: be_aware(first_field(raw, aliases::BE_AWARE)),
        features: string_list(first_field(raw, aliases::FEATURES)),
        amenities: string_list(first_field(raw, aliases::AMENITIES)),
        attributes: attributes(first_field(raw, aliases::ATTRIBUTES)),
        images: extract_images(raw),
        location: Location {
            latitude,
            longitude,
            map_url: map_url(&explicit_map, latitude, longitude, &address),
        },
        contact: Contact {
            agent: to_text(first_field(contact_src, aliases::CONTACT_AGENT)),
            phone: to_text(first_field(contact_src, aliases::CONTACT_PHONE)),
            email: to_text(first_field(contact_src, aliases::CONTACT_EMAIL)),
            office_hours: to_text(first_field(contact_src, aliases::CONTACT_OFFICE_HOURS)),
        },
        property_url: non_empty(text(aliases::PROPERTY_URL)),
        three_dimensional_tour_url: non_empty(text(aliases::TOUR_URL)),
        address,
    }
}

/// Map embed URL: explicit URL, else coordinates, else the address, else empty.
pub fn map_url(explicit: &str, latitude: f64, longitude: f64, address: &str) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    if latitude != 0.0 && longitude != 0.0 {
        return format!("{}?q={},{}&z=15&output=embed", MAP_EMBED_BASE, latitude, longitude);
    }
    if !address.is_empty() {
        let q = utf8_percent_encode(address, URI_COMPONENT);
        return format!("{}?q={}&z=15&output=embed", MAP_EMBED_BASE, q);
    }
    String::new()
}

// `a ?? b`: only absent/null falls through.
fn or_else<'a>(a: Option<&'a Value>, b: Option<&'a Value>) -> Option<&'a Value> {
    match a {
        Some(v) if !v.is_null() => Some(v),
        _ => b.filter(|v| !v.is_null()),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn suburb(raw: &Map<String, Value>) -> String {
    let from_object = raw
        .get("suburb")
        .and_then(Value::as_object)
        .and_then(|o| o.get("name"))
        .filter(|v| truthy(v));

    match from_object {
        Some(name) => to_text(Some(name)),
        None => to_text(first_field(raw, aliases::SUBURB)),
    }
}

fn price(raw: &Map<String, Value>) -> String {
    if let Some(v) = first_field(raw, aliases::PRICE) {
        return to_text(Some(v));
    }
    raw.get("price_category")
        .and_then(Value::as_object)
        .and_then(|cat| first_truthy(cat, aliases::PRICE_CATEGORY_TEXT))
        .map(|v| to_text(Some(v)))
        .unwrap_or_default()
}

fn be_aware(field: Option<&Value>) -> BeAware {
    match field {
        Some(Value::Array(items)) => BeAware::Notices(
            items
                .iter()
                .map(|item| {
                    let obj = item.as_object();
                    let pick = |keys: &[&str]| {
                        to_text(obj.and_then(|o| first_truthy(o, keys)))
                    };
                    Notice {
                        title: pick(aliases::NOTICE_TITLE),
                        description: pick(aliases::NOTICE_TEXT),
                    }
                })
                .collect(),
        ),
        other => BeAware::Text(to_text(other)),
    }
}

fn string_list(field: Option<&Value>) -> Vec<String> {
    match field {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|v| is_present(v))
            .map(|v| to_text(Some(v)))
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn attributes(field: Option<&Value>) -> Option<Vec<Attribute>> {
    let items = field?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_object)
            .map(|a| Attribute {
                id: to_count(a.get("id")),
                name: to_text(a.get("name")),
                slug: to_text(a.get("slug")),
                featured: to_count(a.get("featured")),
            })
            .collect(),
    )
}
