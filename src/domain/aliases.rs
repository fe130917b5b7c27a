// src/domain/aliases.rs
//
// Target field -> candidate upstream keys, in priority order.
// Lookups through `first_field` are case-insensitive, so only one spelling
// per key is needed there. Lists read with exact keys keep every spelling.

pub const ID: &[&str] = &[
    "id",
    "code",
    "property_id",
    "propertyId",
    "PropertyID",
    "PropertyCode",
    "property_code",
];
pub const NAME: &[&str] = &["name", "title", "PropertyName", "property_name"];
pub const ADDRESS: &[&str] = &["address", "Address", "address1", "addressLine1", "fullAddress"];
pub const SUBURB: &[&str] = &["suburb", "area", "Area", "neighborhood", "city"];
pub const PRICE: &[&str] = &["price", "rate"];
pub const PRICE_CATEGORY_TEXT: &[&str] = &["pricetext", "fromtext"];

pub const SLEEPS: &[&str] = &["sleeps", "guests"];
pub const BATHROOMS: &[&str] = &["bathrooms", "baths"];
pub const BEDROOMS: &[&str] = &["bedrooms", "beds"];

pub const PROPERTY_TYPE: &[&str] = &["propertyType", "type"];
pub const SIZE: &[&str] = &["size", "areaSize"];
pub const YEAR_BUILT: &[&str] = &["yearBuilt", "year"];
pub const PARKING: &[&str] = &["parking"];
pub const DESCRIPTION: &[&str] = &["description", "details"];
pub const BE_AWARE: &[&str] = &["be_aware", "beAware", "important_note", "importantNote"];
pub const FEATURES: &[&str] = &["features"];
pub const AMENITIES: &[&str] = &["amenities"];
pub const ATTRIBUTES: &[&str] = &["attributes"];

pub const LATITUDE: &[&str] = &["latitude", "lat"];
pub const LONGITUDE: &[&str] = &["longitude", "lng"];
pub const MAP_URL: &[&str] = &["mapUrl"];

pub const CONTACT_AGENT: &[&str] = &["agent"];
pub const CONTACT_PHONE: &[&str] = &["phone"];
pub const CONTACT_EMAIL: &[&str] = &["email"];
pub const CONTACT_OFFICE_HOURS: &[&str] = &["officeHours"];

pub const PROPERTY_URL: &[&str] = &[
    "property_url",
    "propertyUrl",
    "website_url",
    "websiteUrl",
    "url",
    "link",
];
pub const TOUR_URL: &[&str] = &["three_dimensional_tour_url", "threeDVirtualTourUrl"];

pub const NOTICE_TITLE: &[&str] = &["title", "name"];
pub const NOTICE_TEXT: &[&str] = &["description", "text"];

// Image sources (exact keys).
pub const FEATURED_IMAGE_URL: &[&str] = &["image_url", "url"];
pub const IMAGE_LISTS: &[&str] = &[
    "images",
    "Images",
    "photos",
    "Photos",
    "gallery",
    "Gallery",
    "imageUrls",
    "image_urls",
];
pub const IMAGE_ITEM_URL: &[&str] = &[
    "image_url",
    "url",
    "URL",
    "src",
    "href",
    "imageUrl",
    "ImageUrl",
    "photoUrl",
];
pub const SINGLE_IMAGE: &[&str] = &["image", "Image", "coverImage"];
pub const SINGLE_IMAGE_URL: &[&str] = &["url", "src"];

/// Envelope keys the upstream may wrap the record in.
pub const ENVELOPE: &[&str] = &["data", "property"];
