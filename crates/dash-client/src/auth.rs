// File: crates/dash-client/src/auth.rs
// Summary: Credential exchange against the sign-in endpoint and the per-session auth context.

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::AuthError;
use crate::store::TokenStore;
use crate::transport::{HttpRequest, Transport};

/// Login identifier (username or email) and password.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// `Basic base64(username:password)`.
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", self.username, self.password)))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("username", &self.username).field("password", &"<redacted>").finish()
    }
}

type ExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Bearer token plus the action to run when the server reports the session as
/// expired. Passed explicitly to every fetch.
#[derive(Clone)]
pub struct AuthContext {
    token: String,
    on_expired: ExpiredHook,
}

impl AuthContext {
    pub fn new(token: impl Into<String>, on_expired: impl Fn() + Send + Sync + 'static) -> Self {
        Self { token: token.into(), on_expired: Arc::new(on_expired) }
    }

    /// Context for the token held by `store`, if any. Expiry clears the store.
    pub fn from_store(store: Arc<dyn TokenStore>) -> Result<Option<Self>, crate::error::StoreError> {
        let Some(token) = store.get()? else { return Ok(None) };
        Ok(Some(Self::new(token, move || {
            if let Err(e) = store.clear() {
                warn!(error = %e, "failed to clear expired session token");
            }
        })))
    }

    pub fn token(&self) -> &str { &self.token }

    pub fn bearer(&self) -> String { format!("Bearer {}", self.token) }

    /// Run the session-expired action.
    pub fn expire(&self) {
        (self.on_expired)();
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext").field("token", &"<redacted>").finish_non_exhaustive()
    }
}

pub struct SigninClient {
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl SigninClient {
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self { endpoint: endpoint.into(), transport }
    }

    /// Exchange `credentials` for a session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let request = HttpRequest::post(&self.endpoint)
            .header("Authorization", credentials.basic_auth_header())
            .header("Cache-Control", "no-store")
            .header("Pragma", "no-cache");
        let response = self
            .transport
            .post_json(request)
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !response.is_success() {
            let has_error_field = response.body.as_object().is_some_and(|m| m.contains_key("error"));
            if !has_error_field {
                warn!(status = response.status, "sign-in endpoint answered without a token");
                return Err(AuthError::Rejected(format!("HTTP {}", response.status)));
            }
        }
        parse_signin_response(&response.body)
    }

    /// Log in and persist the token under the store's token key.
    pub async fn login_and_store(&self, credentials: &Credentials, store: &dyn TokenStore) -> Result<String, AuthError> {
        let token = self.login(credentials).await?;
        store.set(&token)?;
        info!(user = %credentials.username, "signed in");
        Ok(token)
    }
}

/// The endpoint answers with a bare JSON string (the token) or `{"error": ...}`.
pub fn parse_signin_response(body: &Value) -> Result<String, AuthError> {
    match body {
        Value::String(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        Value::Object(map) => match map.get("error") {
            Some(Value::String(msg)) => Err(AuthError::Rejected(msg.clone())),
            Some(other) => Err(AuthError::Rejected(other.to_string())),
            None => Err(AuthError::InvalidShape("object without token or error".into())),
        },
        other => Err(AuthError::InvalidShape(format!("expected a token string, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn basic_header_encodes_user_and_password() {
        let c = Credentials::new("alice", "s3cret");
        assert_eq!(c.basic_auth_header(), "Basic YWxpY2U6czNjcmV0");
        assert!(!format!("{c:?}").contains("s3cret"));
    }

    #[test]
    fn signin_body_shapes() {
        assert_eq!(parse_signin_response(&json!("eyJ.token")).unwrap(), "eyJ.token");
        assert!(matches!(
            parse_signin_response(&json!({"error": "User does not exist or password incorrect"})),
            Err(AuthError::Rejected(m)) if m.contains("password incorrect")
        ));
        assert!(matches!(parse_signin_response(&json!("")), Err(AuthError::InvalidShape(_))));
        assert!(matches!(parse_signin_response(&json!([1, 2])), Err(AuthError::InvalidShape(_))));
    }

    #[test]
    fn expire_runs_the_hook_and_debug_hides_token() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let ctx = AuthContext::new("tok-123", move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        ctx.expire();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.bearer(), "Bearer tok-123");
        assert!(!format!("{ctx:?}").contains("tok-123"));
    }
}
