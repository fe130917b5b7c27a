use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Basic error page body for any status.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            div class="error-box" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" class="back-button" { "← Back to Search" } }
            }
        },
    )
}

/// Lookup outcome shown in place of the details view.
pub fn lookup_message(title: &str, message: &str) -> Markup {
    html! {
        div class="error-box" {
            h2 { (title) }
            p { (message) }
            a href="/" class="back-button" { "Back to Search" }
        }
    }
}
