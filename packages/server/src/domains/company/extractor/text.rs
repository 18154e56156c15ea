//! HTML to plain text flattening.

use scraper::{ElementRef, Html, Node};

/// Elements whose text never reaches the reader
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Flatten a document into one text blob.
///
/// Each text node is trimmed, empty ones are dropped and the rest are joined
/// with a single space, so block boundaries always become word boundaries.
pub fn page_text(document: &Html) -> String {
    let mut parts = Vec::new();
    collect_text(document, &mut parts);
    parts.join(" ")
}

fn collect_text(document: &Html, parts: &mut Vec<String>) {
    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let mut hidden = false;
        let mut in_noscript = false;
        for ancestor in node.ancestors() {
            if let Some(el) = ancestor.value().as_element() {
                if HIDDEN_ELEMENTS.contains(&el.name()) {
                    hidden = true;
                    break;
                }
                in_noscript |= el.name() == "noscript";
            }
        }
        if hidden {
            continue;
        }

        // The parser runs with scripting on, so <noscript> holds raw markup
        if in_noscript {
            collect_text(&Html::parse_fragment(text), parts);
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }
}

/// Visible text of one element, trimmed pieces concatenated without a separator.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}
