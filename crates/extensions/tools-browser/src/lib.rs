//! Browser control tools for pageprobe.
//!
//! Drives a single shared Chrome page via the Chrome DevTools Protocol (CDP)
//! and exposes it as a set of tools an external dispatch layer can register.
//! Pure Rust, zero Node.js dependencies.
//!
//! ```text
//! ┌─────────────────┐    WebSocket     ┌──────────────────┐
//! │  Rust Backend   │ ◄──────────────► │  Chrome/Chromium │
//! │  (this crate)   │       CDP        │                  │
//! └─────────────────┘                  └──────────────────┘
//! ```
//!
//! Chrome is launched lazily with a persistent profile the first time a tool
//! needs the page; an already-running instance with remote debugging enabled
//! is reused instead.
//!
//! ## Tools
//!
//! - `navigate` - Navigate the page to a URL
//! - `click` - Click an element by CSS selector
//! - `select` - Choose a value in a `<select>` element
//! - `evaluate` - Execute JavaScript on the page
//! - `screenshot` - Capture the viewport as base64 PNG
//! - `search_html` - Pruned pseudo-HTML of subtrees matching a query
//! - `print_element` - Full pseudo-HTML of one element's subtree
//!
//! ## DOM search and printing
//!
//! The [`dom`] module holds the heart of the crate: a read-only node model
//! snapshotted from the live page, a case-insensitive query matcher that
//! descends through shadow trees and same-origin iframes, and a serializer
//! that renders either the full subtree or a pruned view in which
//! non-matching branches collapse to a `[...]` placeholder.

pub mod cdp;
pub mod dom;
pub mod manager;
mod tools;

pub use cdp::{CdpClient, CdpError, PageSession};
pub use dom::{print_subtree, search_tree, Attribute, Element, Node};
pub use manager::{BrowserError, BrowserManager, BrowserManagerConfig};
pub use tools::*;
