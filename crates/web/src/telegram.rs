//! `window.Telegram.WebApp` bridge
//!
//! Telegram injects the WebApp object before the page loads. Everything
//! here goes through `document::eval`, so calls are fire-and-forget.

use dioxus::prelude::*;
use officetrack_core::host::{HostBridge, InitDataUnsafe};

const READ_INIT_DATA_JS: &str = r"
const app = window.Telegram && window.Telegram.WebApp;
if (!app) { return null; }
return app.initData || '';
";

/// Telegram host, as seen from inside the WebView
#[derive(Debug, Clone)]
pub struct WebAppBridge {
    init: InitDataUnsafe,
}

impl WebAppBridge {
    /// Probe for the WebApp object
    ///
    /// Returns `None` in a plain browser. A host whose init data cannot be
    /// parsed is still a host, just without a user.
    pub async fn detect() -> Option<Self> {
        let raw = match document::eval(READ_INIT_DATA_JS)
            .join::<Option<String>>()
            .await
        {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to probe Telegram WebApp: {:?}", e);
                return None;
            }
        };

        let init = InitDataUnsafe::from_init_data(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring malformed Telegram init data");
            InitDataUnsafe::default()
        });
        Some(Self { init })
    }
}

impl HostBridge for WebAppBridge {
    fn ready(&self) {
        call_web_app("ready");
    }

    fn expand(&self) {
        call_web_app("expand");
    }

    fn close(&self) {
        call_web_app("close");
    }

    fn init_data(&self) -> &InitDataUnsafe {
        &self.init
    }
}

fn call_web_app(method: &str) {
    let _ = document::eval(&format!(
        "window.Telegram && window.Telegram.WebApp && window.Telegram.WebApp.{method}();"
    ));
}

/// Close the Mini App when running inside Telegram
pub fn close_web_app() {
    call_web_app("close");
}

/// Blocking browser alert
pub fn alert(message: &str) {
    let _ = document::eval(&format!("alert({});", js_string(message)));
}

/// Open `url` in a new tab
pub fn open_link(url: &str) {
    let _ = document::eval(&format!("window.open({}, '_blank');", js_string(url)));
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
