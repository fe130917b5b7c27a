use maud::{html, Markup};

/// Modal shown over the search page. "OK" simply reloads the empty form.
pub fn popup(title: &str, message: &str) -> Markup {
    html! {
        div class="popup-overlay" role="alertdialog" aria-labelledby="popup-title" {
            div class="popup-container" {
                h3 id="popup-title" class="popup-title" { (title) }
                p class="popup-message" { (message) }
                a href="/" class="popup-button" { "OK" }
            }
        }
    }
}
