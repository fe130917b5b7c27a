// templates/pages/details.rs

use crate::domain::{BeAware, PropertyData};
use crate::templates::{
    components::{
        count_row, description_block, gallery, lookup_message, map_frame,
        section_card, share_links, text_row, DescriptionView,
    },
    desktop_layout,
};
use maud::{html, Markup, PreEscaped};

pub struct DetailsVm<'a> {
    pub property: &'a PropertyData,
    pub description: DescriptionView,
    /// Absolute link back to this page, used by the share buttons.
    pub page_url: String,
}

impl<'a> DetailsVm<'a> {
    pub fn new(property: &'a PropertyData, page_url: String) -> Self {
        Self {
            description: DescriptionView::from_html(&property.description),
            property,
            page_url,
        }
    }
}

pub fn details_page(vm: &DetailsVm) -> Markup {
    let p = vm.property;

    desktop_layout(
        &format!("{} - {}", p.id, p.name),
        html! {
            div class="details-container" {
                div class="details-header" {
                    h2 class="property-title" {
                        "Property Details: " span { (p.id) " - " (p.name) }
                    }
                    a href="/" class="back-button" { "Back to Search" }
                }

                (gallery(&p.name, &p.images))

                div class="property-info" {
                    div class="info-row" {
                        span class="label" { "Id:" }
                        span class="value" { (p.id) }
                        (share_links(p, &vm.page_url))
                    }
                    (text_row("Name", &p.name))
                    (text_row("Address", &p.address))
                    (text_row("Suburb", &p.suburb))
                    (count_row("Sleeps", p.sleeps))
                    (count_row("Bedrooms", p.bedrooms))
                    (count_row("Bathrooms", p.bathrooms))
                    (text_row("Price", &p.price))
                    (text_row("Property Type", &p.property_type))
                    (text_row("Size", &p.size))
                    (text_row("Year Built", &p.year_built))
                    (text_row("Parking", &p.parking))
                }

                @if let Some(names) = p.attribute_names() {
                    (section_card("Attributes", html! { p class="attributes-list" { (names) } }))
                }
                @if !p.features.is_empty() {
                    (section_card("Features", bullet_list(&p.features)))
                }
                @if !p.amenities.is_empty() {
                    (section_card("Amenities", bullet_list(&p.amenities)))
                }

                @if !vm.description.is_empty() {
                    (section_card("Description", description_block(&vm.description)))
                }

                div class="property-summary" {
                    (p.name) ", " (p.suburb) ", " (p.bedroom_label()) ", " (p.id)
                }

                @if !p.be_aware.is_empty() {
                    (section_card("Be Aware", be_aware_block(&p.be_aware)))
                }

                @if p.property_url.is_some() || p.three_dimensional_tour_url.is_some() {
                    div class="external-links" {
                        @if let Some(url) = &p.three_dimensional_tour_url {
                            a href=(url) target="_blank" rel="noopener noreferrer" { "3D Virtual Tour" }
                        }
                        @if let Some(url) = &p.property_url {
                            a href=(url) target="_blank" rel="noopener noreferrer" { "View on website" }
                        }
                    }
                }

                @if !p.contact.agent.is_empty() || !p.contact.phone.is_empty() || !p.contact.email.is_empty() {
                    (section_card("Contact", html! {
                        (text_row("Agent", &p.contact.agent))
                        (text_row("Phone", &p.contact.phone))
                        (text_row("Email", &p.contact.email))
                        (text_row("Office Hours", &p.contact.office_hours))
                    }))
                }

                (map_frame(&p.name, &p.location.map_url))
            }
        },
    )
}

fn bullet_list(items: &[String]) -> Markup {
    html! {
        ul class="bullet-list" {
            @for item in items {
                li { (item) }
            }
        }
    }
}

fn be_aware_block(be_aware: &BeAware) -> Markup {
    html! {
        div class="be-aware" {
            @match be_aware {
                BeAware::Notices(notices) => {
                    @for notice in notices {
                        div class="policy-item" {
                            span class="policy-title" { (notice.title) }
                            " "
                            span class="policy-description" { (notice.description) }
                        }
                    }
                }
                BeAware::Text(text) => {
                    div class="be-aware-text" { (text) }
                }
            }
        }
    }
}

pub fn not_found_page(property_id: &str) -> Markup {
    desktop_layout(
        "Property not found",
        lookup_message(
            "Property not found",
            &format!("We could not find a property with code {property_id}."),
        ),
    )
}

pub fn load_failed_page() -> Markup {
    desktop_layout(
        "Error",
        lookup_message("Failed to load property data", "Please try again in a moment."),
    )
}

/// Old links carried the code in the URL fragment, which never reaches the server.
/// The script hands the fragment back as `legacy_hash`.
pub fn missing_id_page() -> Markup {
    desktop_layout(
        "Property not found",
        html! {
            script {
                (PreEscaped(r#"if (location.hash && location.hash.indexOf('property_id') !== -1) {
  location.replace('/details?legacy_hash=' + encodeURIComponent(location.hash));
}"#))
            }
            (lookup_message("Property not found", "No property code was given."))
        },
    )
}
