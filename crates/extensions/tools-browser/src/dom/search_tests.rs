use super::contains_query;
use crate::dom::node::{Attribute, Element, Node};

fn text(s: &str) -> Node {
    Node::Text { text: s.to_string() }
}

fn el(tag: &str, nodes: Vec<Node>) -> Element {
    Element {
        tag: tag.to_string(),
        attributes: vec![],
        nodes,
        shadow: vec![],
        frame: None,
    }
}

fn el_attrs(tag: &str, attrs: &[(&str, &str)], nodes: Vec<Node>) -> Element {
    Element {
        attributes: attrs
            .iter()
            .map(|(name, value)| Attribute {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect(),
        ..el(tag, nodes)
    }
}

#[test]
fn test_matches_own_text() {
    let tree = el("p", vec![text("Accept all cookies")]);
    assert!(contains_query(&tree, "cookies"));
    assert!(!contains_query(&tree, "reject"));
}

#[test]
fn test_matches_descendant_text() {
    let tree = el(
        "div",
        vec![Node::Element(el(
            "section",
            vec![Node::Element(el("p", vec![text("deep content")]))],
        ))],
    );
    assert!(contains_query(&tree, "deep content"));
}

#[test]
fn test_matches_attribute_value() {
    let tree = el_attrs("button", &[("aria-label", "Close dialog")], vec![]);
    assert!(contains_query(&tree, "close dialog"));
}

#[test]
fn test_matches_descendant_attribute() {
    let tree = el(
        "div",
        vec![Node::Element(el_attrs("input", &[("placeholder", "Search here")], vec![]))],
    );
    assert!(contains_query(&tree, "search here"));
}

#[test]
fn test_case_insensitive_both_ways() {
    let tree = el("p", vec![text("Option 1 is here")]);
    assert!(contains_query(&tree, "OPTION 1"));
    let upper = el("p", vec![text("OPTION 1 IS HERE")]);
    assert!(contains_query(&upper, "option 1"));
}

#[test]
fn test_matches_through_shadow() {
    let mut host = el("my-widget", vec![]);
    host.shadow = vec![el("span", vec![text("shadow needle")])];
    assert!(contains_query(&host, "needle"));
}

#[test]
fn test_matches_through_frame() {
    let mut iframe = el_attrs("iframe", &[("src", "/inner")], vec![]);
    iframe.frame = Some(Box::new(el("body", vec![Node::Element(el("p", vec![text("framed")]))])));
    assert!(contains_query(&iframe, "framed"));
}

#[test]
fn test_denied_frame_never_matches() {
    // Cross-origin frames carry no frame body after the snapshot.
    let iframe = el_attrs("iframe", &[("src", "https://other.example")], vec![]);
    assert!(!contains_query(&iframe, "anything"));
}

#[test]
fn test_script_content_never_matches() {
    let tree = el(
        "div",
        vec![Node::Element(el("script", vec![text("var secret = 'needle';")]))],
    );
    assert!(!contains_query(&tree, "needle"));
    assert!(!contains_query(&tree, "secret"));
}

#[test]
fn test_skip_tag_as_root_never_matches() {
    let script = el("script", vec![text("needle")]);
    assert!(!contains_query(&script, "needle"));
    let style = el("style", vec![text(".a { color: red }")]);
    assert!(!contains_query(&style, "color"));
}

#[test]
fn test_svg_subtree_never_matches() {
    let tree = el(
        "div",
        vec![Node::Element(el(
            "svg",
            vec![Node::Element(el_attrs("title", &[], vec![text("icon label")]))],
        ))],
    );
    assert!(!contains_query(&tree, "icon label"));
}

#[test]
fn test_short_circuits_on_first_match() {
    // Both branches match; presence is all that is reported.
    let tree = el(
        "div",
        vec![
            Node::Element(el("p", vec![text("target a")])),
            Node::Element(el("p", vec![text("target b")])),
        ],
    );
    assert!(contains_query(&tree, "target"));
}

#[test]
fn test_no_match_anywhere() {
    let mut host = el_attrs("div", &[("id", "root")], vec![Node::Element(el("p", vec![text("abc")]))]);
    host.shadow = vec![el("span", vec![text("def")])];
    assert!(!contains_query(&host, "ghi"));
}
