//! Browser instance manager.
//!
//! This module provides a unified browser manager interface using CDP.
//! It automatically launches Chrome with a persistent profile and keeps a
//! single shared page that all tools operate on.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;

use thiserror::Error;
use tokio::process::{Child, Command};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cdp::{CdpClient, CdpError, PageSession, ScreenshotFormat};
use crate::dom::{self, print_subtree, search_tree};

/// Browser manager errors.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Action failed: {0}")]
    ActionFailed(String),

    #[error("Browser not connected")]
    NotConnected,

    #[error("Chrome not found. Please install Google Chrome.")]
    ChromeNotFound,

    #[error("Failed to launch Chrome: {0}")]
    LaunchFailed(String),
}

impl From<CdpError> for BrowserError {
    fn from(e: CdpError) -> Self {
        match e {
            CdpError::ConnectionFailed(msg) => BrowserError::ConnectionFailed(msg),
            CdpError::ChromeNotAvailable(msg) => BrowserError::ConnectionFailed(msg),
            CdpError::NavigationFailed(msg) => BrowserError::NavigationFailed(msg),
            CdpError::ElementNotFound(msg) => BrowserError::ElementNotFound(msg),
            CdpError::JavaScript(msg) => BrowserError::ActionFailed(format!("JS error: {}", msg)),
            CdpError::Timeout(msg) => BrowserError::ActionFailed(format!("Timeout: {}", msg)),
            CdpError::SessionClosed => BrowserError::NotConnected,
            _ => BrowserError::ActionFailed(e.to_string()),
        }
    }
}

/// Browser configuration.
#[derive(Debug, Clone)]
pub struct BrowserManagerConfig {
    /// Chrome debugging port.
    pub debug_port: u16,
    /// Default viewport width.
    pub viewport_width: u32,
    /// Default viewport height.
    pub viewport_height: u32,
    /// Profile directory for persistent login state.
    /// Default: ~/.pageprobe/browser-profile
    pub profile_dir: Option<PathBuf>,
    /// Whether to run Chrome in headless mode.
    pub headless: bool,
}

impl Default for BrowserManagerConfig {
    fn default() -> Self {
        Self {
            debug_port: 9222,
            viewport_width: 1280,
            viewport_height: 720,
            profile_dir: None,
            headless: false,
        }
    }
}

impl BrowserManagerConfig {
    /// Get the profile directory, creating default if not specified.
    pub fn get_profile_dir(&self) -> PathBuf {
        self.profile_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".pageprobe")
                .join("browser-profile")
        })
    }

    /// Get the CDP endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("http://localhost:{}", self.debug_port)
    }
}

/// Manages the browser connection and the shared page.
///
/// Key features:
/// - Automatically launches Chrome if not running
/// - Uses persistent profile for login state preservation
/// - Lazily connects on first use
/// - All tools act on one shared page, so navigation state carries across
///   tool calls
pub struct BrowserManager {
    config: BrowserManagerConfig,
    client: RwLock<Option<Arc<CdpClient>>>,
    page: RwLock<Option<Arc<PageSession>>>,
    /// Chrome process handle (if we launched it).
    chrome_process: RwLock<Option<Child>>,
}

impl BrowserManager {
    /// Create a new browser manager.
    ///
    /// Note: The browser is NOT connected here. It will be lazily connected
    /// on first use (when a tool requires the browser).
    pub fn new(config: BrowserManagerConfig) -> Self {
        Self {
            config,
            client: RwLock::new(None),
            page: RwLock::new(None),
            chrome_process: RwLock::new(None),
        }
    }

    /// Find Chrome executable path.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            let paths = [
                "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
                "/Applications/Chromium.app/Contents/MacOS/Chromium",
                "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "linux")]
        {
            let paths = [
                "/usr/bin/google-chrome",
                "/usr/bin/google-chrome-stable",
                "/usr/bin/chromium",
                "/usr/bin/chromium-browser",
                "/snap/bin/chromium",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "windows")]
        {
            let paths = [
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        None
    }

    /// Check if Chrome is already running on the debug port.
    async fn is_chrome_running(&self) -> bool {
        reqwest::get(&format!("{}/json/version", self.config.endpoint()))
            .await
            .is_ok()
    }

    /// Launch Chrome with remote debugging enabled.
    async fn launch_chrome(&self) -> Result<Child, BrowserError> {
        let chrome_path = Self::find_chrome().ok_or(BrowserError::ChromeNotFound)?;
        let profile_dir = self.config.get_profile_dir();

        // Ensure profile directory exists
        if let Err(e) = std::fs::create_dir_all(&profile_dir) {
            warn!("Failed to create profile directory: {}", e);
        }

        info!("Launching Chrome with profile at: {}", profile_dir.display());

        let mut cmd = Command::new(&chrome_path);
        cmd.arg(format!("--remote-debugging-port={}", self.config.debug_port))
            .arg(format!("--user-data-dir={}", profile_dir.display()))
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-background-networking")
            .arg("--disable-sync")
            .arg("--disable-translate")
            .arg("--metrics-recording-only")
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        if self.config.headless {
            cmd.arg("--headless=new");
        }

        let child = cmd
            .spawn()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        info!("Chrome launched with PID: {:?}", child.id());
        Ok(child)
    }

    /// Connect to the browser, launching it if necessary.
    pub async fn connect(&self) -> Result<(), BrowserError> {
        if self.client.read().await.is_some() {
            return Ok(());
        }

        // Check if Chrome is already running
        if !self.is_chrome_running().await {
            info!(
                "Chrome not running on port {}, launching...",
                self.config.debug_port
            );

            let child = self.launch_chrome().await?;
            *self.chrome_process.write().await = Some(child);

            // Wait for Chrome to start accepting connections
            let mut attempts = 0;
            let max_attempts = 30; // 30 * 200ms = 6 seconds
            while attempts < max_attempts {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                if self.is_chrome_running().await {
                    break;
                }
                attempts += 1;
            }

            if attempts >= max_attempts {
                return Err(BrowserError::LaunchFailed(
                    "Chrome failed to start within timeout".to_string(),
                ));
            }
        } else {
            info!("Chrome already running on port {}", self.config.debug_port);
        }

        // Connect to Chrome
        let client = CdpClient::connect(&self.config.endpoint()).await?;
        *self.client.write().await = Some(Arc::new(client));

        info!("Connected to Chrome at {}", self.config.endpoint());
        Ok(())
    }

    /// Get the CDP client.
    async fn client(&self) -> Result<Arc<CdpClient>, BrowserError> {
        self.client
            .read()
            .await
            .clone()
            .ok_or(BrowserError::NotConnected)
    }

    /// Get the shared page, connecting and creating it on first use.
    async fn page(&self) -> Result<Arc<PageSession>, BrowserError> {
        if let Some(page) = self.page.read().await.clone() {
            return Ok(page);
        }

        self.connect().await?;
        let client = self.client().await?;

        let mut page_slot = self.page.write().await;
        // Another caller may have raced us here.
        if let Some(page) = page_slot.clone() {
            return Ok(page);
        }

        let session = client.new_page(None).await?;
        session
            .set_viewport(self.config.viewport_width, self.config.viewport_height)
            .await?;

        let page = Arc::new(session);
        *page_slot = Some(page.clone());

        debug!("Created shared page {}", page.target_id());
        Ok(page)
    }

    /// Close the browser connection.
    /// Note: This does NOT close Chrome itself, only disconnects.
    pub async fn close(&self) -> Result<(), BrowserError> {
        let page = self.page.write().await.take();
        if let (Some(page), Some(client)) = (page, self.client.read().await.clone()) {
            let _ = client.close_page(page.target_id()).await;
        }

        let _ = self.client.write().await.take();

        info!("Browser connection closed");
        Ok(())
    }

    /// Shutdown Chrome if we launched it.
    pub async fn shutdown_chrome(&self) -> Result<(), BrowserError> {
        self.close().await?;

        if let Some(mut child) = self.chrome_process.write().await.take() {
            info!("Shutting down Chrome...");
            let _ = child.kill().await;
        }

        Ok(())
    }

    /// Navigate the shared page to URL.
    pub async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        let page = self.page().await?;
        page.navigate(url).await?;
        debug!("Navigated to {}", url);
        Ok(())
    }

    /// Click on selector.
    pub async fn click_selector(&self, selector: &str) -> Result<(), BrowserError> {
        let page = self.page().await?;
        page.click_selector(selector).await?;
        Ok(())
    }

    /// Select a value in a `<select>` element.
    pub async fn select_option(&self, selector: &str, value: &str) -> Result<(), BrowserError> {
        let page = self.page().await?;
        page.select_option(selector, value).await?;
        Ok(())
    }

    /// Execute JavaScript.
    pub async fn evaluate(&self, script: &str) -> Result<serde_json::Value, BrowserError> {
        let page = self.page().await?;
        Ok(page.evaluate(script).await?)
    }

    /// Take a PNG screenshot at the given viewport size (returns base64).
    pub async fn screenshot(&self, width: u32, height: u32) -> Result<String, BrowserError> {
        let page = self.page().await?;
        page.set_viewport(width, height).await?;
        Ok(page.screenshot(ScreenshotFormat::Png).await?)
    }

    /// Search the page for a query and return the pruned tree rendering.
    ///
    /// Returns an empty string when the document has no body.
    pub async fn search_html(&self, query: &str) -> Result<String, BrowserError> {
        let page = self.page().await?;
        let body = dom::snapshot::capture_body(&page).await?;
        match body {
            Some(body) => Ok(search_tree(&body, query)),
            None => Ok(String::new()),
        }
    }

    /// Render the full subtree of the first element matching `selector`.
    pub async fn print_element(&self, selector: &str) -> Result<String, BrowserError> {
        let page = self.page().await?;
        let element = dom::snapshot::capture_selector(&page, selector)
            .await?
            .ok_or_else(|| BrowserError::ElementNotFound(selector.to_string()))?;
        Ok(print_subtree(&element))
    }
}
