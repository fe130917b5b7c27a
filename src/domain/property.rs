// src/domain/property.rs

/// The display record for a single property.
/// Every field always holds a usable value, whatever the upstream sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyData {
    pub id: String,
    pub name: String,
    pub address: String,
    pub suburb: String,
    pub price: String,
    pub property_type: String,
    pub size: String,
    pub year_built: String,
    pub parking: String,

    pub sleeps: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,

    /// Raw HTML as supplied upstream.
    pub description: String,
    pub be_aware: BeAware,

    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub attributes: Option<Vec<Attribute>>,
    pub images: Vec<String>,

    pub location: Location,
    pub contact: Contact,

    pub property_url: Option<String>,
    pub three_dimensional_tour_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub featured: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub map_url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contact {
    pub agent: String,
    pub phone: String,
    pub email: String,
    pub office_hours: String,
}

/// "Be aware" notes arrive either as a list of titled notices or as one string.
#[derive(Debug, Clone, PartialEq)]
pub enum BeAware {
    Notices(Vec<Notice>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Default for BeAware {
    fn default() -> Self {
        BeAware::Text(String::new())
    }
}

impl BeAware {
    pub fn is_empty(&self) -> bool {
        match self {
            BeAware::Notices(items) => items.is_empty(),
            BeAware::Text(text) => text.trim().is_empty(),
        }
    }
}

impl Default for PropertyData {
    fn default() -> Self {
        Self {
            id: "UNKNOWN".to_string(),
            name: "Property".to_string(),
            address: String::new(),
            suburb: String::new(),
            price: String::new(),
            property_type: String::new(),
            size: String::new(),
            year_built: String::new(),
            parking: String::new(),
            sleeps: 0,
            bedrooms: 0,
            bathrooms: 0,
            description: String::new(),
            be_aware: BeAware::default(),
            features: Vec::new(),
            amenities: Vec::new(),
            attributes: None,
            images: Vec::new(),
            location: Location::default(),
            contact: Contact::default(),
            property_url: None,
            three_dimensional_tour_url: None,
        }
    }
}

impl PropertyData {
    /// Attribute names joined for a single-line display.
    pub fn attribute_names(&self) -> Option<String> {
        let attrs = self.attributes.as_ref()?;
        let names: Vec<&str> = attrs
            .iter()
            .map(|a| a.name.as_str())
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        }
    }

    pub fn bedroom_label(&self) -> String {
        if self.bedrooms == 1 {
            "1 bedroom".to_string()
        } else {
            format!("{} bedrooms", self.bedrooms)
        }
    }
}
