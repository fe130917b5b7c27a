use maud::{html, Markup};

pub mod card;
pub mod description;
pub mod error;
pub mod gallery;
pub mod info;
pub mod map;
pub mod popup;
pub mod share;

pub use card::section_card;
pub use description::{description_block, DescriptionView};
pub use error::{error_page, lookup_message};
pub use gallery::gallery;
pub use info::{count_row, info_row, text_row};
pub use map::map_frame;
pub use popup::popup;
pub use share::share_links;

pub fn button(label: &str) -> Markup {
    html! {
        button type="submit" class="submit-button" {
            span class="btn-text" { (label) }
            span class="spinner" aria-hidden="true" {}
        }
    }
}
