// src/domain/description.rs
//
// Splits a rich-text description into paragraph + bullet-list groups
// and a remainder, and optionally peels a "location" section off the remainder.

use scraper::{ElementRef, Html};

pub const LOCATION_MARKER: &str = "LOCATION";

/// One top-level element of a description fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Lowercase tag name.
    pub tag: String,
    /// Serialized outer HTML.
    pub html: String,
    /// Concatenated text content.
    pub text: String,
}

impl Block {
    fn is_list(&self) -> bool {
        self.tag == "ul"
    }

    fn is_paragraph(&self) -> bool {
        self.tag == "p"
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentedDescription {
    /// Each group is an intro paragraph (when one exists) followed by its list,
    /// ordered by the position of the list.
    pub groups: Vec<String>,
    /// Every element not claimed by a group, in document order.
    pub remainder: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationSplit {
    pub body: String,
    pub location: Option<String>,
}

/// Flat list of top-level elements. Bare text between elements is dropped.
pub fn parse_blocks(html: &str) -> Vec<Block> {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .map(|el| Block {
            tag: el.value().name().to_ascii_lowercase(),
            html: el.html(),
            text: el.text().collect(),
        })
        .collect()
}

pub fn segment(html: &str) -> SegmentedDescription {
    if html.trim().is_empty() {
        return SegmentedDescription::default();
    }

    let blocks = parse_blocks(html);
    if !blocks.iter().any(Block::is_list) {
        return SegmentedDescription {
            groups: Vec::new(),
            remainder: html.to_string(),
        };
    }

    group_blocks(&blocks)
}

/// Pairs every list with the nearest unclaimed paragraph before it.
pub fn group_blocks(blocks: &[Block]) -> SegmentedDescription {
    let mut consumed = vec![false; blocks.len()];
    let mut groups = Vec::new();

    for i in 0..blocks.len() {
        if consumed[i] || !blocks[i].is_list() {
            continue;
        }

        let intro = (0..i)
            .rev()
            .find(|&j| !consumed[j] && blocks[j].is_paragraph());
        let start = intro.unwrap_or(i);

        let mut group = String::new();
        for k in start..=i {
            if !consumed[k] {
                group.push_str(&blocks[k].html);
                consumed[k] = true;
            }
        }
        groups.push(group);
    }

    let remainder: String = blocks
        .iter()
        .zip(&consumed)
        .filter(|&(_, &used)| !used)
        .map(|(b, _)| b.html.as_str())
        .collect();

    SegmentedDescription { groups, remainder }
}

/// Splits at the first paragraph mentioning the location marker.
/// The marker paragraph and everything after it form the location block.
pub fn split_location(html: &str) -> LocationSplit {
    if html.trim().is_empty() {
        return LocationSplit::default();
    }

    let blocks = parse_blocks(html);
    let marker = blocks
        .iter()
        .position(|b| b.is_paragraph() && b.text.to_ascii_uppercase().contains(LOCATION_MARKER));

    match marker {
        None => LocationSplit {
            body: html.to_string(),
            location: None,
        },
        Some(at) => LocationSplit {
            body: concat(&blocks[..at]),
            location: Some(concat(&blocks[at..])),
        },
    }
}

fn concat(blocks: &[Block]) -> String {
    blocks.iter().map(|b| b.html.as_str()).collect()
}
