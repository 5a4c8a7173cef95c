//! Tool protocol: definitions, results, execution context, and the core trait.

mod context;
mod definition;
mod result;
mod traits;

pub use context::ToolContext;
pub use definition::ToolDefinition;
pub use result::ToolResult;
pub use traits::Tool;
