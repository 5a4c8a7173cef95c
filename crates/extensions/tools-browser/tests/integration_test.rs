//! Integration tests for browser tools.
//!
//! These tests require Chrome to be installed on the system and are ignored
//! by default. Run with:
//! cargo test -p pageprobe-tools-browser --test integration_test -- --ignored --nocapture

use pageprobe_tools_browser::manager::{BrowserManager, BrowserManagerConfig};

/// Test helper to create a manager with test-specific config.
fn test_config() -> BrowserManagerConfig {
    BrowserManagerConfig {
        debug_port: 9333, // Use different port to avoid conflicts
        viewport_width: 1280,
        viewport_height: 720,
        profile_dir: Some(std::path::PathBuf::from("/tmp/pageprobe-test-profile")),
        headless: true, // Use headless for CI
    }
}

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_chrome_detection() {
    let chrome_path = BrowserManager::find_chrome();
    assert!(chrome_path.is_some(), "Chrome should be installed on the system");

    let path = chrome_path.unwrap();
    println!("Found Chrome at: {}", path.display());
    assert!(path.exists(), "Chrome path should exist");
}

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_connect_and_disconnect() {
    let manager = BrowserManager::new(test_config());

    // Connect (should auto-launch Chrome)
    let result = manager.connect().await;
    assert!(result.is_ok(), "Connection should succeed: {:?}", result.err());

    let result = manager.close().await;
    assert!(result.is_ok(), "Close should succeed");

    let result = manager.shutdown_chrome().await;
    assert!(result.is_ok(), "Shutdown should succeed");
}

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_navigate_and_search() {
    let manager = BrowserManager::new(test_config());

    let result = manager.navigate("https://example.com").await;
    assert!(result.is_ok(), "Navigate should succeed: {:?}", result.err());

    // example.com has "Example Domain" in its h1
    let tree = manager.search_html("Example Domain").await.unwrap();
    assert!(tree.starts_with("<body>"));
    assert!(tree.contains("Example Domain"));

    // A query that matches nothing leaves a fully pruned skeleton
    let tree = manager.search_html("no such text anywhere").await.unwrap();
    assert!(tree.contains("[...]"));

    manager.shutdown_chrome().await.unwrap();
}

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_print_element() {
    let manager = BrowserManager::new(test_config());

    manager.navigate("https://example.com").await.unwrap();

    let tree = manager.print_element("h1").await.unwrap();
    assert_eq!(tree, "<h1>Example Domain</h1>");

    let missing = manager.print_element("#does-not-exist").await;
    assert!(missing.is_err());

    manager.shutdown_chrome().await.unwrap();
}

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_evaluate_and_screenshot() {
    let manager = BrowserManager::new(test_config());

    manager.navigate("https://example.com").await.unwrap();

    let title = manager.evaluate("document.title").await.unwrap();
    assert_eq!(title.as_str(), Some("Example Domain"));

    let base64 = manager.screenshot(800, 600).await.unwrap();
    assert!(!base64.is_empty());

    manager.shutdown_chrome().await.unwrap();
}
