//! Shared protocol types.

use std::collections::HashMap;

/// Arbitrary metadata attached to definitions and results.
pub type Metadata = HashMap<String, serde_json::Value>;
