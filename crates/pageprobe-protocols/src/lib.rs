//! # Pageprobe Protocols
//!
//! Interface definitions consumed by the tool-dispatch layer that fronts
//! pageprobe's browser tools. Contains only protocol types - no
//! implementations.
//!
//! ## Core Types
//!
//! - [`Tool`] - Trait implemented by every executable tool
//! - [`ToolDefinition`] - Name, description, and JSON-schema parameters
//! - [`ToolResult`] - The content-and-error-flag envelope returned to callers
//! - [`ToolError`] - Caller-visible error taxonomy

pub mod error;
pub mod tool;
pub mod types;

pub use error::ToolError;
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use types::Metadata;
