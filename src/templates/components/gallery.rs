use maud::{html, Markup};

/// Main slides plus a thumbnail strip; thumbnails jump to their slide by anchor.
pub fn gallery(name: &str, images: &[String]) -> Markup {
    let images: Vec<&String> = images.iter().filter(|u| !u.trim().is_empty()).collect();

    html! {
        @if !images.is_empty() {
            div class="image-slider" {
                div class="main-slides" {
                    @for (index, src) in images.iter().enumerate() {
                        div class="slide" id=(format!("image-{}", index + 1)) {
                            img src=(src) alt=(format!("{name} - Image {}", index + 1)) loading="lazy";
                        }
                    }
                }
                div class="thumbs" {
                    @for (index, src) in images.iter().enumerate() {
                        a class="thumbnail" href=(format!("#image-{}", index + 1)) {
                            img src=(src) alt=(format!("{name} thumbnail {}", index + 1)) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}
