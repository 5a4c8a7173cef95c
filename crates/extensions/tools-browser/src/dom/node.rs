//! Immutable node model deserialized from the in-page snapshot script.

use serde::Deserialize;

/// Tags whose contents are never considered for matching or pruned rendering.
const SKIP_TAGS: [&str; 3] = ["script", "style", "svg"];

/// A single node of the snapshotted tree: an element or a text run.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A text node payload.
    Text {
        text: String,
    },
    Element(Element),
}

/// One name/value attribute pair, in the element's own attribute order.
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element of the snapshotted tree.
///
/// `frame` is populated only for embedded-frame elements whose document was
/// same-origin at snapshot time; a cross-origin frame (or a non-frame
/// element) carries `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    /// Tag name, lowercase.
    pub tag: String,

    /// Attributes in document order.
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Child nodes in document order.
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Top-level elements of an attached shadow subtree, in shadow order.
    #[serde(default)]
    pub shadow: Vec<Element>,

    /// Body of the embedded document, when accessible.
    #[serde(default)]
    pub frame: Option<Box<Element>>,
}

impl Element {
    /// Whether this element's contents are excluded from matching and pruned
    /// rendering.
    pub fn is_skip_tag(&self) -> bool {
        SKIP_TAGS.contains(&self.tag.as_str())
    }

    /// Element children in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text { .. } => None,
        })
    }

    /// Whether any child node is an element.
    pub fn has_element_children(&self) -> bool {
        self.child_elements().next().is_some()
    }

    /// Concatenated descendant text of the light tree.
    ///
    /// Skip-tag subtrees contribute nothing, so a `script` body can never
    /// satisfy a query through its enclosing elements.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.nodes {
            match node {
                Node::Text { text } => out.push_str(text),
                Node::Element(el) if !el.is_skip_tag() => el.collect_text(out),
                Node::Element(_) => {}
            }
        }
    }

    /// The embedded document body, if this is a frame element with
    /// same-origin content.
    pub fn frame_body(&self) -> Option<&Element> {
        self.frame.as_deref()
    }
}
