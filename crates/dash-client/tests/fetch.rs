// File: crates/dash-client/tests/fetch.rs
// Purpose: Fetch wrappers and sign-in against an in-memory transport with canned responses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dash_client::{
    AuthContext, AuthError, Credentials, DashboardApi, FetchError, GraphQlClient, HttpRequest, HttpResponse,
    MemoryTokenStore, SigninClient, TokenStore, Transport, TransportError,
};
use serde_json::{json, Value};

/// Replays queued responses and records every request it sees.
#[derive(Default)]
struct FakeTransport {
    responses: Mutex<Vec<Result<HttpResponse, String>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    fn replying(responses: Vec<Result<HttpResponse, String>>) -> Arc<Self> {
        let mut responses = responses;
        responses.reverse();
        Arc::new(Self { responses: Mutex::new(responses), seen: Mutex::default() })
    }

    fn data(data: Value) -> Arc<Self> {
        Self::replying(vec![Ok(HttpResponse::ok(json!({ "data": data })))])
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        match self.responses.lock().unwrap().pop() {
            Some(Ok(r)) => Ok(r),
            Some(Err(e)) => Err(TransportError(e)),
            None => Err(TransportError("no canned response left".into())),
        }
    }
}

fn api(transport: Arc<FakeTransport>) -> DashboardApi {
    DashboardApi::new(GraphQlClient::new("https://example.test/graphql", transport))
}

fn ctx() -> (AuthContext, Arc<AtomicUsize>) {
    let expired = Arc::new(AtomicUsize::new(0));
    let hook = expired.clone();
    let ctx = AuthContext::new("tok", move || {
        hook.fetch_add(1, Ordering::SeqCst);
    });
    (ctx, expired)
}

#[tokio::test]
async fn progress_returns_window_and_ascending_records() {
    let transport = FakeTransport::data(json!({
        "event": [{ "object": { "events": [{ "startAt": "2024-01-01T00:00:00+00:00", "endAt": null }] } }],
        "transaction": [
            { "amount": 2000, "object": { "name": "ascii-art" }, "createdAt": "2024-01-03T00:00:00+00:00" },
            { "amount": 1000, "object": { "name": "go-reloaded" }, "createdAt": "2024-01-02T00:00:00.123456+00:00" }
        ]
    }));
    let (ctx, _) = ctx();
    let data = api(transport.clone()).progress(&ctx, "Module").await.unwrap();

    assert_eq!(data.window.start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    assert_eq!(data.window.end, None);
    let names: Vec<_> = data.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["go-reloaded", "ascii-art"]);

    let sent = &transport.requests()[0];
    assert_eq!(sent.header_value("authorization"), Some("Bearer tok"));
    let body = sent.body.as_ref().unwrap();
    assert_eq!(body["variables"]["name"], "Module");
    assert!(body["query"].as_str().unwrap().contains("$name"));
}

#[tokio::test]
async fn progress_without_event_window_is_invalid_shape() {
    let transport = FakeTransport::data(json!({ "event": [], "transaction": [] }));
    let (ctx, _) = ctx();
    let err = api(transport).progress(&ctx, "Module").await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidShape(_)));
}

#[tokio::test]
async fn skills_are_returned_raw_for_aggregation() {
    let transport = FakeTransport::data(json!({
        "user": [{ "transactions": [
            { "type": "skill_go", "amount": 10 },
            { "type": "skill_go", "amount": 30 },
            { "type": "skill_js", "amount": 5 }
        ] }]
    }));
    let (ctx, _) = ctx();
    let skills = api(transport).skills(&ctx).await.unwrap();
    assert_eq!(skills.len(), 3);
    let agg = dash_core::max_per_category(&skills);
    assert_eq!(agg.get("skill_go"), Some(30.0));
}

#[tokio::test]
async fn profile_level_and_audits_cards() {
    let (ctx, _) = ctx();

    let profile = api(FakeTransport::data(json!({ "user": [{ "firstName": "Ada", "lastName": "Lovelace" }] })))
        .profile(&ctx)
        .await
        .unwrap();
    assert_eq!(profile.display_name(), "Ada Lovelace");

    let level = api(FakeTransport::data(json!({ "transaction": [{ "amount": 23 }] })))
        .level(&ctx, "Module")
        .await
        .unwrap();
    assert_eq!(level.level, 23.0);
    assert_eq!(level.rank, "Apprentice developer");

    let audits = api(FakeTransport::data(json!({ "user": [{
        "auditRatio": 1.25,
        "audits_aggregate": { "aggregate": { "count": 9 } },
        "failed_audits": { "aggregate": { "count": 3 } }
    }] })))
    .audits(&ctx)
    .await
    .unwrap();
    assert_eq!(audits.total, 12);
    assert_eq!(audits.succeeded_pct, 75.0);
    assert_eq!(audits.ratio, 1.25);
}

#[tokio::test]
async fn transactions_are_newest_first() {
    let transport = FakeTransport::data(json!({ "user": [{ "transactions": [
        { "amount": 5000, "object": { "name": "old" }, "createdAt": "2023-11-01T10:00:00+00:00" },
        { "amount": 9000, "object": { "name": "new" }, "createdAt": "2024-02-01T10:00:00+00:00" }
    ] }] }));
    let (ctx, _) = ctx();
    let records = api(transport).transactions(&ctx).await.unwrap();
    assert_eq!(records[0].name, "new");
    assert_eq!(records[1].name, "old");
}

#[tokio::test]
async fn expiry_marker_triggers_session_expired() {
    let transport = FakeTransport::replying(vec![Ok(HttpResponse::ok(json!({
        "errors": [{ "message": "Could not verify JWT: JWTExpired" }]
    })))]);
    let (ctx, expired) = ctx();
    let err = api(transport).profile(&ctx).await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(expired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn http_401_triggers_session_expired() {
    let transport = FakeTransport::replying(vec![Ok(HttpResponse { status: 401, body: json!({}) })]);
    let (ctx, expired) = ctx();
    let err = api(transport).skills(&ctx).await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(expired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn other_errors_keep_their_kind() {
    let (ctx, expired) = ctx();

    let gql = FakeTransport::replying(vec![Ok(HttpResponse::ok(json!({
        "errors": [{ "message": "field 'usr' not found in type: 'query_root'" }]
    })))]);
    assert!(matches!(api(gql).profile(&ctx).await, Err(FetchError::GraphQl(m)) if m.contains("usr")));

    let down = FakeTransport::replying(vec![Err("connection refused".into())]);
    assert!(matches!(api(down).profile(&ctx).await, Err(FetchError::Network(_))));

    let no_data = FakeTransport::replying(vec![Ok(HttpResponse::ok(json!({ "data": null })))]);
    assert!(matches!(api(no_data).profile(&ctx).await, Err(FetchError::InvalidShape(_))));

    let wrong = FakeTransport::data(json!({ "user": "nope" }));
    assert!(matches!(api(wrong).skills(&ctx).await, Err(FetchError::InvalidShape(_))));

    assert_eq!(expired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn expiry_through_store_context_clears_token() {
    let store = Arc::new(MemoryTokenStore::with_token("stale"));
    let ctx = AuthContext::from_store(store.clone()).unwrap().expect("token present");
    let transport = FakeTransport::replying(vec![Ok(HttpResponse::ok(json!({
        "errors": [{ "message": "JWTInvalid" }]
    })))]);
    let err = api(transport).audits(&ctx).await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn signin_sends_basic_auth_and_stores_token() {
    let transport = FakeTransport::replying(vec![Ok(HttpResponse::ok(json!("eyJhbGciOi.payload.sig")))]);
    let client = SigninClient::new("https://example.test/signin", transport.clone());
    let store = MemoryTokenStore::new();

    let token = client.login_and_store(&Credentials::new("alice", "s3cret"), &store).await.unwrap();
    assert_eq!(token, "eyJhbGciOi.payload.sig");
    assert_eq!(store.get().unwrap().as_deref(), Some("eyJhbGciOi.payload.sig"));

    let sent = &transport.requests()[0];
    assert_eq!(sent.header_value("Authorization"), Some("Basic YWxpY2U6czNjcmV0"));
    assert_eq!(sent.header_value("Cache-Control"), Some("no-store"));
    assert_eq!(sent.header_value("Pragma"), Some("no-cache"));
}

#[tokio::test]
async fn signin_rejection_leaves_store_untouched() {
    let transport = FakeTransport::replying(vec![Ok(HttpResponse {
        status: 403,
        body: json!({ "error": "User does not exist or password incorrect" }),
    })]);
    let client = SigninClient::new("https://example.test/signin", transport);
    let store = MemoryTokenStore::new();
    let err = client.login_and_store(&Credentials::new("bob", "x"), &store).await.unwrap_err();
    assert!(matches!(err, AuthError::Rejected(_)));
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn signin_error_page_is_not_stored_as_a_token() {
    let transport = FakeTransport::replying(vec![Ok(HttpResponse {
        status: 502,
        body: Value::String("<html>502 Bad Gateway</html>".into()),
    })]);
    let client = SigninClient::new("https://example.test/signin", transport);
    let store = MemoryTokenStore::new();
    let err = client.login_and_store(&Credentials::new("alice", "s3cret"), &store).await.unwrap_err();
    assert!(matches!(&err, AuthError::Rejected(m) if m.contains("502")), "{err}");
    assert_eq!(store.get().unwrap(), None);
}
