//! Browser control tools.
//!
//! Each tool is a thin parameter-parsing shell around a [`BrowserManager`]
//! operation. The manager owns the shared page, so navigation state carries
//! from one tool call to the next.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use pageprobe_protocols::error::ToolError;
use pageprobe_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::manager::BrowserManager;

// ============================================================================
// Navigate Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NavigateParams {
    pub url: String,
}

/// Navigate to URL tool.
pub struct NavigateTool {
    definition: ToolDefinition,
    manager: Arc<BrowserManager>,
}

impl NavigateTool {
    pub fn new(manager: Arc<BrowserManager>) -> Self {
        let definition = ToolDefinition::new(
            "navigate",
            "Navigate",
            "Navigate the browser to a URL. The browser is launched on first use.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string", "description": "URL to navigate to" }
            },
            "required": ["url"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for NavigateTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: NavigateParams = serde_json::from_value(params)
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid params: {}", e)))?;

        self.manager
            .navigate(&params.url)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!("Navigated to {}", params.url);
        Ok(ToolResult::success(format!("Navigated to {}", params.url)))
    }
}

// ============================================================================
// Click Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ClickParams {
    pub selector: String,
}

/// Click element tool.
pub struct ClickTool {
    definition: ToolDefinition,
    manager: Arc<BrowserManager>,
}

impl ClickTool {
    pub fn new(manager: Arc<BrowserManager>) -> Self {
        let definition = ToolDefinition::new(
            "click",
            "Click",
            "Click an element on the page using a CSS selector",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "selector": { "type": "string", "description": "CSS selector for element to click" }
            },
            "required": ["selector"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for ClickTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ClickParams = serde_json::from_value(params)
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid params: {}", e)))?;

        self.manager
            .click_selector(&params.selector)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!("Clicked {}", params.selector);
        Ok(ToolResult::success(format!("Clicked: {}", params.selector)))
    }
}

// ============================================================================
// Select Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectParams {
    pub selector: String,
    pub value: String,
}

/// Select an option in a dropdown tool.
pub struct SelectTool {
    definition: ToolDefinition,
    manager: Arc<BrowserManager>,
}

impl SelectTool {
    pub fn new(manager: Arc<BrowserManager>) -> Self {
        let definition = ToolDefinition::new(
            "select",
            "Select",
            "Select a value in a <select> element using a CSS selector",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "selector": { "type": "string", "description": "CSS selector for element to select" },
                "value": { "type": "string", "description": "Value to select" }
            },
            "required": ["selector", "value"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for SelectTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: SelectParams = serde_json::from_value(params)
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid params: {}", e)))?;

        self.manager
            .select_option(&params.selector, &params.value)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!("Selected {} in {}", params.value, params.selector);
        Ok(ToolResult::success(format!(
            "Selected {} with: {}",
            params.selector, params.value
        )))
    }
}

// ============================================================================
// Evaluate Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct EvaluateParams {
    pub script: String,
}

/// Execute JavaScript tool.
pub struct EvaluateTool {
    definition: ToolDefinition,
    manager: Arc<BrowserManager>,
}

impl EvaluateTool {
    pub fn new(manager: Arc<BrowserManager>) -> Self {
        let definition = ToolDefinition::new(
            "evaluate",
            "Evaluate",
            "Execute JavaScript in the browser console and return the result",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "script": { "type": "string", "description": "JavaScript code to execute" }
            },
            "required": ["script"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for EvaluateTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: EvaluateParams = serde_json::from_value(params)
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid params: {}", e)))?;

        let result = self
            .manager
            .evaluate(&params.script)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!("Executed JavaScript");
        Ok(ToolResult::success(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        ))
    }
}

// ============================================================================
// Screenshot Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ScreenshotParams {
    pub name: String,
    #[serde(default = "default_screenshot_width")]
    pub width: u32,
    #[serde(default = "default_screenshot_height")]
    pub height: u32,
}

fn default_screenshot_width() -> u32 {
    800
}

fn default_screenshot_height() -> u32 {
    600
}

/// Take screenshot tool.
pub struct ScreenshotTool {
    definition: ToolDefinition,
    manager: Arc<BrowserManager>,
}

impl ScreenshotTool {
    pub fn new(manager: Arc<BrowserManager>) -> Self {
        let definition = ToolDefinition::new(
            "screenshot",
            "Screenshot",
            "Take a screenshot of the current page",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Name for the screenshot" },
                "width": { "type": "number", "description": "Width in pixels (default: 800)" },
                "height": { "type": "number", "description": "Height in pixels (default: 600)" }
            },
            "required": ["name"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for ScreenshotTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ScreenshotParams = serde_json::from_value(params)
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid params: {}", e)))?;

        let base64 = self
            .manager
            .screenshot(params.width, params.height)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!("Screenshot '{}' taken", params.name);
        Ok(ToolResult::success(format!(
            "Screenshot '{}' taken at {}x{}",
            params.name, params.width, params.height
        ))
        .with_metadata("base64", serde_json::json!(base64)))
    }
}

// ============================================================================
// Search HTML Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchHtmlParams {
    pub query: String,
}

/// Search the page HTML tool.
///
/// Returns an indented pseudo-HTML tree where branches without a match are
/// collapsed to `[...]` placeholders.
pub struct SearchHtmlTool {
    definition: ToolDefinition,
    manager: Arc<BrowserManager>,
}

impl SearchHtmlTool {
    pub fn new(manager: Arc<BrowserManager>) -> Self {
        let definition = ToolDefinition::new(
            "search_html",
            "Search HTML",
            "Search the page for text and return a pruned HTML outline of where it occurs. \
             Matching is a case-insensitive substring test over text and attribute values, \
             including shadow DOM and same-origin iframes.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "Text to search for" }
            },
            "required": ["query"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for SearchHtmlTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: SearchHtmlParams = serde_json::from_value(params)
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid params: {}", e)))?;

        let tree = self
            .manager
            .search_html(&params.query)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!("Searched page for '{}'", params.query);
        Ok(ToolResult::success(tree))
    }
}

// ============================================================================
// Print Element Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PrintElementParams {
    pub selector: String,
}

/// Print element subtree tool.
pub struct PrintElementTool {
    definition: ToolDefinition,
    manager: Arc<BrowserManager>,
}

impl PrintElementTool {
    pub fn new(manager: Arc<BrowserManager>) -> Self {
        let definition = ToolDefinition::new(
            "print_element",
            "Print Element",
            "Print the full subtree of the first element matching a CSS selector, \
             as an indented HTML outline",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "selector": { "type": "string", "description": "CSS selector for element to print" }
            },
            "required": ["selector"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for PrintElementTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: PrintElementParams = serde_json::from_value(params)
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid params: {}", e)))?;

        let tree = self
            .manager
            .print_element(&params.selector)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!("Printed subtree of {}", params.selector);
        Ok(ToolResult::success(tree))
    }
}

/// Build the full tool set over a shared manager.
pub fn default_tools(manager: Arc<BrowserManager>) -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(NavigateTool::new(manager.clone())),
        Box::new(ClickTool::new(manager.clone())),
        Box::new(SelectTool::new(manager.clone())),
        Box::new(EvaluateTool::new(manager.clone())),
        Box::new(ScreenshotTool::new(manager.clone())),
        Box::new(SearchHtmlTool::new(manager.clone())),
        Box::new(PrintElementTool::new(manager)),
    ]
}
