use crate::domain::normalize::URI_COMPONENT;
use crate::domain::PropertyData;
use maud::{html, Markup};
use percent_encoding::utf8_percent_encode;

pub fn whatsapp_url(property: &PropertyData, page_url: &str) -> String {
    let message = format!(
        "Check out this property: {} - {}\n{}\nPrice: {}\n{}",
        property.name, property.id, property.address, property.price, page_url
    );
    format!(
        "https://wa.me/?text={}",
        utf8_percent_encode(&message, URI_COMPONENT)
    )
}

pub fn share_links(property: &PropertyData, page_url: &str) -> Markup {
    html! {
        div class="share-section" {
            span class="share-label" { "Share:" }
            a class="share-button whatsapp-button"
                href=(whatsapp_url(property, page_url))
                target="_blank"
                rel="noopener noreferrer"
                title="Share on WhatsApp" { "WhatsApp" }
            a class="share-button" href=(page_url) title="Link to this property" { "Link" }
        }
    }
}
