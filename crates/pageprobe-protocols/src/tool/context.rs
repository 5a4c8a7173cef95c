//! Tool execution context.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Context for tool execution.
///
/// Carried through every tool invocation by the dispatch layer. Browser tools
/// mostly ignore it, but it is the place for per-session data a caller wants
/// to thread through.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    /// Session ID for the current session.
    pub session_id: String,

    /// Additional context data.
    pub data: HashMap<String, serde_json::Value>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            data: HashMap::new(),
        }
    }

    /// Get a value from the context data.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Set a value in the context data.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) {
        if let Ok(v) = serde_json::to_value(value) {
            self.data.insert(key.into(), v);
        }
    }
}
