use crate::domain::{segment, split_location};
use maud::{html, Markup, PreEscaped};

/// Description pieces in render order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescriptionView {
    pub body: String,
    pub location: Option<String>,
    pub groups: Vec<String>,
}

impl DescriptionView {
    pub fn from_html(html: &str) -> Self {
        let segmented = segment(html);
        let split = split_location(&segmented.remainder);
        Self {
            body: split.body,
            location: split.location,
            groups: segmented.groups,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty() && self.location.is_none() && self.groups.is_empty()
    }
}

// Upstream description HTML is rendered as-is.
pub fn description_block(view: &DescriptionView) -> Markup {
    html! {
        div class="description" {
            @if !view.body.trim().is_empty() {
                div class="description-body" { (PreEscaped(&view.body)) }
            }
            @if let Some(location) = &view.location {
                div class="description-location" { (PreEscaped(location)) }
            }
            @if !view.groups.is_empty() {
                div class="description-groups" {
                    @for group in &view.groups {
                        div class="description-group" { (PreEscaped(group)) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_location_are_separated() {
        let view = DescriptionView::from_html(
            "<p>Intro</p><ul><li>A</li></ul><p>Welcome</p><p>LOCATION</p><p>By the sea</p>",
        );
        assert_eq!(view.groups, vec!["<p>Intro</p><ul><li>A</li></ul>"]);
        assert_eq!(view.body, "<p>Welcome</p>");
        assert_eq!(view.location.as_deref(), Some("<p>LOCATION</p><p>By the sea</p>"));
    }

    #[test]
    fn plain_description_passes_through() {
        let view = DescriptionView::from_html("<p>Just text</p>");
        assert_eq!(view.body, "<p>Just text</p>");
        assert!(view.location.is_none());
        assert!(view.groups.is_empty());

        let html = description_block(&view).into_string();
        assert!(html.contains("<p>Just text</p>"));
    }

    #[test]
    fn blank_description_is_empty() {
        assert!(DescriptionView::from_html("  ").is_empty());
    }
}
