//! reqwest transport for native callers (CLI and server proxy)

use crate::actor::{decode_response, ActorMethod, ActorTransport};
use crate::error::ActorError;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ActorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ActorError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, method: ActorMethod) -> String {
        format!("{}/{}", self.base_url, method.as_str())
    }

    /// Send a raw JSON body and return status and body untouched.
    ///
    /// Used by the server proxy, which passes the upstream response through.
    pub async fn forward(&self, method: ActorMethod, body: String) -> Result<(u16, String), ActorError> {
        let url = self.endpoint(method);
        debug!(%url, "Forwarding actor call");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ActorError::transport(format!("{} unreachable: {}", url, e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ActorError::transport(format!("Failed to read response from {}: {}", url, e)))?;

        Ok((status, text))
    }
}

impl ActorTransport for HttpTransport {
    async fn call(&self, method: ActorMethod, args: Value) -> Result<Value, ActorError> {
        let (status, body) = self.forward(method, args.to_string()).await?;
        decode_response(status, &body)
    }
}
