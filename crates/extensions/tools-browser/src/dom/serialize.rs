//! Depth-first pseudo-HTML rendering of snapshotted subtrees.
//!
//! One traversal serves two modes. With a query, non-matching branches
//! collapse to a `[...]` placeholder (or vanish when no sibling matches
//! either); without one, every reachable node is rendered. Output is a
//! diagnostic view, not re-parsable markup: attribute values are emitted
//! verbatim, unescaped.

use super::node::{Element, Node};
use super::search::contains_query;

/// Indentation unit, one per depth level.
const INDENT: &str = "  ";

/// Marker emitted in place of an elided subtree.
const PLACEHOLDER: &str = "[...]";

/// Pruned rendering of the document body for a search query.
///
/// Never fails: when nothing matches, the result is a fully pruned skeleton.
pub fn search_tree(body: &Element, query: &str) -> String {
    serialize(body, Some(query), 0)
}

/// Full rendering of the subtree rooted at `root`.
pub fn print_subtree(root: &Element) -> String {
    serialize(root, None, 0)
}

/// Render `element` at `depth`. `query = None` selects full mode; `Some`
/// selects pruning mode.
pub fn serialize(element: &Element, query: Option<&str>, depth: usize) -> String {
    // Pruned output never shows skip-tag elements; full mode renders them
    // like any other explicit target.
    if query.is_some() && element.is_skip_tag() {
        return String::new();
    }

    let indent = INDENT.repeat(depth);
    let open_tag = format!("{indent}<{}{}>", element.tag, render_attributes(element));

    if let Some(query) = query {
        if !contains_query(element, query) {
            // An empty body stays a bare tag pair rather than advertising
            // elided content that does not exist.
            if element.tag == "body" && !element.has_element_children() {
                return format!("{open_tag}\n{indent}</{}>", element.tag);
            }
            return format!(
                "{open_tag}\n{indent}{INDENT}{PLACEHOLDER}\n{indent}</{}>",
                element.tag
            );
        }
    }

    // Pure-text elements (including childless ones) render inline. The gate
    // requires no shadow tree and no accessible frame document, since either
    // would otherwise become unreachable.
    if element.shadow.is_empty() && element.frame_body().is_none() && !element.has_element_children()
    {
        let text = element.text_content();
        return format!("{open_tag}{}</{}>", text.trim(), element.tag);
    }

    // In pruning mode a non-matching child earns a placeholder only when a
    // sibling subtree does match; with no matching sibling the whole group is
    // irrelevant and the child is dropped silently.
    let any_child_match = match query {
        Some(query) => element
            .child_elements()
            .any(|child| contains_query(child, query)),
        None => false,
    };

    let mut content = String::new();
    let mut push_block = |block: String| {
        if !block.is_empty() {
            content.push('\n');
            content.push_str(&block);
        }
    };

    for node in &element.nodes {
        match node {
            Node::Text { text } => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    push_block(format!("{indent}{INDENT}{trimmed}"));
                }
            }
            Node::Element(child) => match query {
                None => push_block(serialize(child, None, depth + 1)),
                Some(query) => {
                    if child.is_skip_tag() {
                        continue;
                    }
                    if contains_query(child, query) {
                        push_block(serialize(child, Some(query), depth + 1));
                    } else if any_child_match {
                        push_block(format!("{indent}{INDENT}{PLACEHOLDER}"));
                    }
                }
            },
        }
    }

    for child in &element.shadow {
        match query {
            None => push_block(serialize(child, None, depth + 1)),
            Some(query) => {
                if contains_query(child, query) {
                    push_block(serialize(child, Some(query), depth + 1));
                }
            }
        }
    }

    if let Some(frame_body) = element.frame_body() {
        match query {
            None => push_block(serialize(frame_body, None, depth + 1)),
            Some(query) => {
                if contains_query(frame_body, query) {
                    push_block(serialize(frame_body, Some(query), depth + 1));
                }
            }
        }
    }

    let close_tag = format!("{indent}</{}>", element.tag);
    if content.is_empty() {
        format!("{open_tag}\n{close_tag}")
    } else {
        format!("{open_tag}{content}\n{close_tag}")
    }
}

fn render_attributes(element: &Element) -> String {
    let mut out = String::new();
    for attr in &element.attributes {
        out.push_str(&format!(" {}=\"{}\"", attr.name, attr.value));
    }
    out
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod tests;
