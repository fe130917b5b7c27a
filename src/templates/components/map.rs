use maud::{html, Markup};

pub fn map_frame(name: &str, map_url: &str) -> Markup {
    html! {
        @if !map_url.trim().is_empty() {
            div class="map-container" {
                iframe
                    src=(map_url)
                    class="map-iframe"
                    allowfullscreen
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    title=(format!("Map showing location of {name}")) {}
            }
        }
    }
}
