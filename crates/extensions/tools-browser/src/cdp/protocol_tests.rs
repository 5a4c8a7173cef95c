use super::*;

#[test]
fn test_cdp_request_serialize() {
    let req = CdpRequest {
        id: 1,
        method: "Page.navigate".to_string(),
        params: Some(serde_json::json!({"url": "https://example.com"})),
        session_id: None,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("Page.navigate"));
    assert!(json.contains("example.com"));
    // Absent optionals stay off the wire.
    assert!(!json.contains("sessionId"));
}

#[test]
fn test_cdp_request_session_id_renamed() {
    let req = CdpRequest {
        id: 7,
        method: "Runtime.evaluate".to_string(),
        params: None,
        session_id: Some("SID".to_string()),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("\"sessionId\":\"SID\""));
    assert!(!json.contains("params"));
}

#[test]
fn test_cdp_response_deserialize() {
    let json = r#"{"id": 1, "result": {"frameId": "abc"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, Some(1));
    assert!(resp.result.is_some());
    assert!(resp.error.is_none());
}

#[test]
fn test_cdp_event_deserialize() {
    let json = r#"{"method": "Page.loadEventFired", "params": {"timestamp": 1.0}, "sessionId": "SID"}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, None);
    assert_eq!(resp.method.as_deref(), Some("Page.loadEventFired"));
    assert_eq!(resp.session_id.as_deref(), Some("SID"));
}

#[test]
fn test_cdp_error_response_deserialize() {
    let json = r#"{"id": 3, "error": {"code": -32000, "message": "No node found"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    let error = resp.error.unwrap();
    assert_eq!(error.code, -32000);
    assert_eq!(error.message, "No node found");
}

#[test]
fn test_page_info_deserialize() {
    let json = r#"{
        "id": "page123",
        "type": "page",
        "title": "Test",
        "url": "https://example.com",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/page/page123"
    }"#;
    let info: PageInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.id, "page123");
    assert_eq!(info.page_type, "page");
}

#[test]
fn test_browser_version_deserialize() {
    let json = r#"{
        "Browser": "Chrome/120.0.0.0",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/browser/abc"
    }"#;
    let version: BrowserVersion = serde_json::from_str(json).unwrap();
    assert_eq!(version.browser, "Chrome/120.0.0.0");
    assert!(version.web_socket_debugger_url.starts_with("ws://"));
}

#[test]
fn test_mouse_button_serialize() {
    let btn = MouseButton::Left;
    let json = serde_json::to_string(&btn).unwrap();
    assert_eq!(json, "\"left\"");
}

#[test]
fn test_mouse_event_type_serialize() {
    let evt = MouseEventType::MousePressed;
    let json = serde_json::to_string(&evt).unwrap();
    assert_eq!(json, "\"mousePressed\"");
}

#[test]
fn test_screenshot_format_serialize() {
    let fmt = ScreenshotFormat::Png;
    let json = serde_json::to_string(&fmt).unwrap();
    assert_eq!(json, "\"png\"");
}
