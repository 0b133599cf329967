// File: crates/dash-client/src/transport.rs
// Summary: HTTP seam: a JSON POST `Transport` trait with a reqwest implementation.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::TransportError;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn post(url: impl Into<String>) -> Self {
        Self { url: url.into(), headers: Vec::new(), body: None }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status plus decoded body. A body that is not JSON is kept as a JSON string.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    pub fn ok(body: Value) -> Self { Self { status: 200, body } }

    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self { Self::default() }

    pub fn with_client(client: reqwest::Client) -> Self { Self { client } }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!(url = %request.url, status, bytes = text.len(), "POST completed");

        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(HttpResponse { status, body })
    }
}
