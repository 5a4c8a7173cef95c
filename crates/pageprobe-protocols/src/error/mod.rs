//! Protocol error types.

mod tool;

pub use tool::ToolError;
