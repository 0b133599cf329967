// File: crates/dash-client/src/graphql.rs
// Summary: Authenticated GraphQL execution with session-expiry detection.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::auth::AuthContext;
use crate::error::{is_session_expiry, FetchError, FetchResult};
use crate::transport::{HttpRequest, Transport};

pub struct GraphQlClient {
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self { endpoint: endpoint.into(), transport }
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }

    /// POST `{query, variables}` and return the `data` member.
    ///
    /// HTTP 401 and errors carrying a session-expiry marker run the context's
    /// expiry action and yield `SessionExpired`.
    pub async fn execute(&self, ctx: &AuthContext, query: &str, variables: Value) -> FetchResult<Value> {
        let request = HttpRequest::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", ctx.bearer())
            .json(json!({ "query": query, "variables": variables }));
        debug!(endpoint = %self.endpoint, query_len = query.len(), "graphql request");

        let response = self
            .transport
            .post_json(request)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if response.status == 401 {
            warn!("graphql endpoint answered 401; session expired");
            ctx.expire();
            return Err(FetchError::SessionExpired("HTTP 401 Unauthorized".into()));
        }

        if let Some(first) = response.body.get("errors").and_then(Value::as_array).and_then(|e| e.first()) {
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown GraphQL error")
                .to_string();
            if is_session_expiry(&message) {
                warn!(%message, "session expired");
                ctx.expire();
                return Err(FetchError::SessionExpired(message));
            }
            return Err(FetchError::GraphQl(message));
        }

        if !response.is_success() {
            return Err(FetchError::Network(format!("HTTP {}", response.status)));
        }

        match response.body.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(FetchError::InvalidShape("response has no data member".into())),
        }
    }

    /// `execute` and decode `data` into `D`.
    pub async fn query<D: DeserializeOwned>(&self, ctx: &AuthContext, query: &str, variables: Value) -> FetchResult<D> {
        let data = self.execute(ctx, query, variables).await?;
        serde_json::from_value(data).map_err(|e| FetchError::InvalidShape(e.to_string()))
    }
}
