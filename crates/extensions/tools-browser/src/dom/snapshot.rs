//! In-page snapshot script and its deserialization.
//!
//! The live tree stays owned by the page; what the Rust side works on is a
//! one-shot JSON capture produced by a script evaluated in the page. The
//! script walks light children, attached shadow roots, and iframe documents,
//! and swallows the cross-origin access error so a denied frame simply has no
//! `frame` field.

use serde_json::Value;

use super::node::Element;
use crate::cdp::{CdpError, PageSession};

/// Recursive element capture, shared by both entry points.
const SNAPSHOT_FN: &str = r#"
function snap(el) {
    const out = { tag: el.tagName.toLowerCase(), attributes: [], nodes: [], shadow: [] };
    for (const attr of el.attributes) {
        out.attributes.push({ name: attr.name, value: attr.value });
    }
    for (const child of el.childNodes) {
        if (child.nodeType === Node.TEXT_NODE) {
            if (child.textContent) {
                out.nodes.push({ text: child.textContent });
            }
        } else if (child.nodeType === Node.ELEMENT_NODE) {
            out.nodes.push(snap(child));
        }
    }
    if (el.shadowRoot) {
        for (const child of el.shadowRoot.children) {
            out.shadow.push(snap(child));
        }
    }
    if (el.tagName.toLowerCase() === 'iframe') {
        try {
            const doc = el.contentDocument;
            if (doc && doc.body) {
                out.frame = snap(doc.body);
            }
        } catch (e) {
            // Cross-origin frame; leave the field absent.
        }
    }
    return out;
}
"#;

/// Snapshot the document body of the page. `None` when the document has no
/// body.
pub(crate) async fn capture_body(page: &PageSession) -> Result<Option<Element>, CdpError> {
    let value = page.evaluate(&expression("document.body")).await?;
    parse(value)
}

/// Snapshot the first element matching `selector`, in document order. `None`
/// when the selector resolves to nothing.
pub(crate) async fn capture_selector(
    page: &PageSession,
    selector: &str,
) -> Result<Option<Element>, CdpError> {
    let root = format!("document.querySelector('{}')", escape_selector(selector));
    let value = page.evaluate(&expression(&root)).await?;
    parse(value)
}

fn expression(root: &str) -> String {
    format!("(() => {{ {SNAPSHOT_FN} const root = {root}; return root ? snap(root) : null; }})()")
}

fn escape_selector(selector: &str) -> String {
    selector.replace('\\', "\\\\").replace('\'', "\\'")
}

fn parse(value: Value) -> Result<Option<Element>, CdpError> {
    if value.is_null() {
        return Ok(None);
    }
    let element: Element = serde_json::from_value(value)?;
    Ok(Some(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Node;

    #[test]
    fn test_parse_null_is_none() {
        assert!(parse(Value::Null).unwrap().is_none());
    }

    #[test]
    fn test_parse_nested_capture() {
        let value = serde_json::json!({
            "tag": "body",
            "attributes": [],
            "nodes": [
                {
                    "tag": "div",
                    "attributes": [{ "name": "class", "value": "c" }],
                    "nodes": [{ "text": "hello" }],
                    "shadow": []
                }
            ],
            "shadow": []
        });
        let body = parse(value).unwrap().unwrap();
        assert_eq!(body.tag, "body");
        let div = body.child_elements().next().unwrap();
        assert_eq!(div.attributes[0].name, "class");
        assert!(matches!(&div.nodes[0], Node::Text { text } if text == "hello"));
    }

    #[test]
    fn test_parse_frame_and_shadow() {
        let value = serde_json::json!({
            "tag": "iframe",
            "attributes": [{ "name": "src", "value": "/inner" }],
            "nodes": [],
            "shadow": [{ "tag": "span", "nodes": [{ "text": "s" }] }],
            "frame": { "tag": "body", "nodes": [{ "text": "inner" }] }
        });
        let el = parse(value).unwrap().unwrap();
        assert_eq!(el.shadow.len(), 1);
        assert_eq!(el.frame_body().unwrap().tag, "body");
    }

    #[test]
    fn test_parse_denied_frame_is_absent() {
        let value = serde_json::json!({ "tag": "iframe", "attributes": [], "nodes": [] });
        let el = parse(value).unwrap().unwrap();
        assert!(el.frame_body().is_none());
    }

    #[test]
    fn test_escape_selector() {
        assert_eq!(escape_selector("a[name='x']"), "a[name=\\'x\\']");
        assert_eq!(escape_selector(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_expression_embeds_root() {
        let expr = expression("document.body");
        assert!(expr.contains("document.body"));
        assert!(expr.contains("function snap"));
    }

    #[test]
    fn test_malformed_capture_is_error() {
        let value = serde_json::json!({ "nodes": [] });
        assert!(parse(value).is_err());
    }
}
