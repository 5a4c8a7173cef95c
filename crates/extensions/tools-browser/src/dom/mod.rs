//! Read-only DOM views with query matching and pseudo-HTML serialization.
//!
//! The node model is an immutable snapshot of the live page tree, captured by
//! an in-page script ([`snapshot`]) and deserialized here. Every traversal is
//! call-scoped and pure: nothing in this module mutates the tree or performs
//! I/O.

mod node;
mod search;
mod serialize;
pub(crate) mod snapshot;

pub use node::{Attribute, Element, Node};
pub use search::contains_query;
pub use serialize::{print_subtree, search_tree, serialize};
