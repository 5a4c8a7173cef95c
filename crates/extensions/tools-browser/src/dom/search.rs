//! Query matching over the node model.

use super::node::Element;

/// Whether the subtree rooted at `element` contains `query`.
///
/// The match is a case-insensitive substring test against the element's own
/// text content and attribute values, then recursively against its shadow
/// subtree, its same-origin frame document, and its ordinary element
/// children. `script`, `style`, and `svg` subtrees never match.
pub fn contains_query(element: &Element, query: &str) -> bool {
    let needle = query.to_lowercase();
    subtree_matches(element, &needle)
}

fn subtree_matches(element: &Element, needle: &str) -> bool {
    if element.is_skip_tag() {
        return false;
    }

    if self_matches(element, needle) {
        return true;
    }

    if element.shadow.iter().any(|child| subtree_matches(child, needle)) {
        return true;
    }

    // Cross-origin frames were dropped at snapshot time, so absence here
    // already means "no content available".
    if let Some(frame_body) = element.frame_body() {
        if subtree_matches(frame_body, needle) {
            return true;
        }
    }

    element
        .child_elements()
        .any(|child| subtree_matches(child, needle))
}

fn self_matches(element: &Element, needle: &str) -> bool {
    if element.text_content().to_lowercase().contains(needle) {
        return true;
    }

    element
        .attributes
        .iter()
        .any(|attr| attr.value.to_lowercase().contains(needle))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
