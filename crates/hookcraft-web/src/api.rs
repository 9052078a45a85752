//! Browser transport for the actor, routed through the hookcraft server

use gloo_net::http::Request;
use hookcraft_core::actor::{decode_response, ActorClient, ActorMethod, ActorTransport};
use hookcraft_core::ActorError;
use leptos::web_sys::window;
use serde_json::Value;

/// Proxy prefix served by the Axum router
pub const ACTOR_PROXY: &str = "/api/actor";

#[derive(Debug, Clone)]
pub struct BrowserTransport {
    base: String,
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self {
            base: ACTOR_PROXY.to_string(),
        }
    }
}

impl ActorTransport for BrowserTransport {
    async fn call(&self, method: ActorMethod, args: Value) -> Result<Value, ActorError> {
        let url = format!("{}/{}", self.base, method.as_str());

        let response = Request::post(&url)
            .json(&args)
            .map_err(|e| ActorError::transport(format!("Failed to encode request: {}", e)))?
            .send()
            .await
            .map_err(|e| ActorError::transport(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ActorError::transport(format!("Failed to read response: {}", e)))?;

        decode_response(status, &body)
    }
}

pub type WebClient = ActorClient<BrowserTransport>;

pub fn client() -> WebClient {
    ActorClient::new(BrowserTransport::default())
}

/// Origin of the current page, used for Stripe return URLs
pub fn origin() -> Result<String, String> {
    let window = window().ok_or("No window available")?;
    window
        .location()
        .origin()
        .map_err(|_| "Could not read page origin".to_string())
}

/// Leave the app for an external URL (Stripe checkout)
pub fn redirect(url: &str) -> Result<(), String> {
    let window = window().ok_or("No window available")?;
    window
        .location()
        .set_href(url)
        .map_err(|_| format!("Could not navigate to {}", url))
}

/// Best effort; the clipboard API may be unavailable on insecure origins
pub fn copy_to_clipboard(text: &str) -> bool {
    match window() {
        Some(window) => {
            let _ = window.navigator().clipboard().write_text(text);
            true
        }
        None => false,
    }
}
