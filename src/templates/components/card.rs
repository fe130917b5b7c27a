use maud::{html, Markup};

/// Titled block on the details page.
pub fn section_card(title: &str, body: Markup) -> Markup {
    html! {
        section class="section" {
            h3 class="section-title" { (title) ":" }
            div class="section-body" {
                (body)
            }
        }
    }
}
