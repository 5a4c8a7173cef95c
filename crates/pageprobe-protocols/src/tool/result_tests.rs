use super::*;

#[test]
fn test_result_success() {
    let result = ToolResult::success("<body>\n</body>");
    assert!(result.success);
    assert_eq!(result.content, "<body>\n</body>");
    assert!(result.error.is_none());
}

#[test]
fn test_result_error() {
    let result = ToolResult::error("Element not found: .missing");
    assert!(!result.success);
    assert!(result.content.is_empty());
    assert_eq!(result.error.as_deref(), Some("Element not found: .missing"));
}

#[test]
fn test_result_with_metadata() {
    let result = ToolResult::success("Screenshot 'home' taken at 1280x720")
        .with_metadata("base64", serde_json::json!("iVBORw0KGgo="));
    assert_eq!(
        result.metadata.get("base64"),
        Some(&serde_json::json!("iVBORw0KGgo="))
    );
}

#[test]
fn test_result_serialize_skips_absent_error() {
    let result = ToolResult::success("ok");
    let json = serde_json::to_string(&result).unwrap();
    assert!(!json.contains("\"error\""));
}

#[test]
fn test_result_roundtrip() {
    let result = ToolResult::error("boom");
    let json = serde_json::to_string(&result).unwrap();
    let back: ToolResult = serde_json::from_str(&json).unwrap();
    assert!(!back.success);
    assert_eq!(back.error.as_deref(), Some("boom"));
}
