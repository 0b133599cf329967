// File: crates/dash-client/src/lib.rs
// Summary: Client crate entry point; authentication, token persistence and GraphQL fetch wrappers.

pub mod auth;
pub mod error;
pub mod fetch;
pub mod graphql;
pub mod model;
pub mod queries;
pub mod store;
pub mod transport;

pub use auth::{AuthContext, Credentials, SigninClient};
pub use error::{is_session_expiry, AuthError, FetchError, FetchResult, StoreError, TransportError};
pub use fetch::{DashboardApi, EventWindow, LevelInfo, Profile, ProgressData};
pub use graphql::GraphQlClient;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};

pub const DEFAULT_SIGNIN_ENDPOINT: &str = "https://learn.zone01oujda.ma/api/auth/signin";
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://learn.zone01oujda.ma/api/graphql-engine/v1/graphql";
