//! Tool trait definition.

use async_trait::async_trait;

use super::{ToolContext, ToolDefinition, ToolResult};
use crate::error::ToolError;

/// Core trait for tools.
///
/// Tools are executable units the dispatch layer maps onto named tool
/// invocations.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool definition.
    fn definition(&self) -> &ToolDefinition;

    /// Execute the tool with the given parameters.
    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError>;

    /// Validate the parameters before execution.
    fn validate(&self, params: &serde_json::Value) -> Result<(), ToolError> {
        let definition = self.definition();
        if let Some(schema) = &definition.parameters_schema {
            if schema.get("type") == Some(&serde_json::json!("object")) && !params.is_object() {
                return Err(ToolError::ValidationFailed(
                    "Parameters must be an object".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTool {
        definition: ToolDefinition,
    }

    impl MockTool {
        fn new() -> Self {
            Self {
                definition: ToolDefinition::new("mock_tool", "Mock Tool", "A mock tool"),
            }
        }

        fn with_schema(schema: serde_json::Value) -> Self {
            Self {
                definition: ToolDefinition::new("mock_tool", "Mock Tool", "A mock tool")
                    .with_parameters_schema(schema),
            }
        }
    }

    #[async_trait]
    impl Tool for MockTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            _params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success("executed"))
        }
    }

    #[test]
    fn test_tool_definition() {
        let tool = MockTool::new();
        assert_eq!(tool.definition().id, "mock_tool");
    }

    #[test]
    fn test_tool_validate_no_schema() {
        let tool = MockTool::new();
        assert!(tool.validate(&serde_json::json!({"key": "value"})).is_ok());
    }

    #[test]
    fn test_tool_validate_object_schema_with_non_object() {
        let tool = MockTool::with_schema(serde_json::json!({"type": "object"}));
        let result = tool.validate(&serde_json::json!("not an object"));
        assert!(matches!(result, Err(ToolError::ValidationFailed(_))));
    }

    #[test]
    fn test_tool_validate_object_schema_with_object() {
        let tool = MockTool::with_schema(serde_json::json!({"type": "object"}));
        assert!(tool.validate(&serde_json::json!({})).is_ok());
    }

    #[tokio::test]
    async fn test_tool_execute() {
        let tool = MockTool::new();
        let result = tool
            .execute(serde_json::json!({}), ToolContext::new("session-1"))
            .await
            .unwrap();
        assert_eq!(result.content, "executed");
    }
}
