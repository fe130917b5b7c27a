use maud::{html, Markup};

pub fn info_row(label: &str, value: &str) -> Markup {
    html! {
        div class="info-row" {
            span class="label" { (label) ":" }
            span class="value" { (value) }
        }
    }
}

/// Row only when there is something to show.
pub fn text_row(label: &str, value: &str) -> Markup {
    html! {
        @if !value.trim().is_empty() {
            (info_row(label, value))
        }
    }
}

/// Row only for positive counts.
pub fn count_row(label: &str, value: i64) -> Markup {
    html! {
        @if value > 0 {
            (info_row(label, &value.to_string()))
        }
    }
}
