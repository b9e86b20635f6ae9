//! Session store: the single source of truth for "who is logged in"
//!
//! The invariant maintained here: `authenticated` is true if and only if a
//! token is present AND the last verification or login call succeeded, and
//! `user` is populated exactly when `authenticated` is true.

use crate::storage::{KvStore, TOKEN_KEY};
use lms_client::ApiClient;
use lms_core::Error;
use lms_core::types::UserProfile;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Snapshot of the session at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Bearer token attached to outgoing requests
    pub token: Option<String>,
    /// Identity of the logged-in user
    pub user: Option<UserProfile>,
    /// Whether the session is currently authenticated
    pub authenticated: bool,
    /// True only during the initial restore
    pub loading: bool,
}

impl SessionState {
    const fn anonymous(loading: bool) -> Self {
        Self {
            token: None,
            user: None,
            authenticated: false,
            loading,
        }
    }
}

/// Result of a login attempt. Failures are returned, never raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Whether the session is now authenticated
    pub success: bool,
    /// Human-readable rejection message, owned by the login view
    pub message: Option<String>,
}

impl LoginOutcome {
    const fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    fn rejected(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
        }
    }
}

/// Shared, thread-safe session store
#[derive(Clone)]
pub struct SessionStore {
    client: ApiClient,
    store: Arc<dyn KvStore>,
    state: Arc<RwLock<SessionState>>,
    restored: Arc<AtomicBool>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store in the pre-restore state (`loading = true`).
    pub fn new(client: ApiClient, store: Arc<dyn KvStore>) -> Self {
        Self {
            client,
            store,
            state: Arc::new(RwLock::new(SessionState::anonymous(true))),
            restored: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current session snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .map_or_else(|_| SessionState::anonymous(false), |state| state.clone())
    }

    /// The current bearer token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.read().ok().and_then(|state| state.token.clone())
    }

    /// Verify the persisted token (if any) against the identity endpoint.
    ///
    /// Runs exactly once per process, at startup. Without a persisted token
    /// this resolves locally; no network call is made. Verification
    /// failures are silent: the persisted token is cleared and the session
    /// ends up anonymous, exactly as if the user had never logged in.
    pub async fn restore(&self) {
        if self.restored.swap(true, Ordering::SeqCst) {
            return;
        }

        let Some(token) = self.store.get(TOKEN_KEY) else {
            self.write_state(SessionState::anonymous(false));
            return;
        };

        match self.client.me(&token).await {
            Ok(user) => {
                info!("session restored for {}", user.email);
                self.write_state(SessionState {
                    token: Some(token),
                    user: Some(user),
                    authenticated: true,
                    loading: false,
                });
            }
            Err(err) => {
                debug!("session restore failed, clearing token: {err}");
                self.store.remove(TOKEN_KEY);
                self.write_state(SessionState::anonymous(false));
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// All failure paths are returned in the outcome; session state is only
    /// mutated on success.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        match self.client.login(email, password).await {
            Ok(data) => {
                let (token, user) = data.into_profile();
                self.store.set(TOKEN_KEY, &token);
                info!("login succeeded for {}", user.email);
                self.write_state(SessionState {
                    token: Some(token),
                    user: Some(user),
                    authenticated: true,
                    loading: false,
                });
                LoginOutcome::ok()
            }
            Err(err @ (Error::Network(_) | Error::Timeout { .. } | Error::Io(_))) => {
                debug!("login transport failure: {err}");
                LoginOutcome::rejected(
                    "Network error: Unable to connect to the server".to_string(),
                )
            }
            Err(err) => {
                debug!("login rejected: {err}");
                LoginOutcome::rejected(err.user_message())
            }
        }
    }

    /// Drop the session: local-only, synchronous, idempotent.
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.write_state(SessionState::anonymous(false));
    }

    /// Uniform reaction to an HTTP 401 on any authenticated call: clear the
    /// persisted token and reset to anonymous. Identical to [`Self::logout`];
    /// the separate name keeps call sites honest about why.
    pub fn invalidate(&self) {
        info!("session invalidated by an unauthorized response");
        self.logout();
    }

    fn write_state(&self, next: SessionState) {
        if let Ok(mut state) = self.state.write() {
            *state = next;
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_with(token: Option<&str>) -> Arc<MemoryStore> {
        Arc::new(token.map_or_else(MemoryStore::new, MemoryStore::with_token))
    }

    fn me_success() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "admin@example.com",
                "role": "admin",
                "avatar": "https://cdn.example/ada.jpg"
            }
        }))
    }

    /// Invariant check: authenticated ⇔ token present ⇔ user present.
    fn assert_invariant(state: &SessionState) {
        assert_eq!(state.authenticated, state.token.is_some());
        assert_eq!(state.authenticated, state.user.is_some());
    }

    #[tokio::test]
    async fn restore_without_token_skips_the_network_entirely() {
        // No mock server at all: any network call would fail loudly.
        let client = ApiClient::new("http://127.0.0.1:9");
        let session = SessionStore::new(client, store_with(None));

        assert!(session.snapshot().loading);
        session.restore().await;

        let state = session.snapshot();
        assert!(!state.loading);
        assert!(!state.authenticated);
        assert_invariant(&state);
    }

    #[tokio::test]
    async fn restore_with_valid_token_populates_identity() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .and(header("Authorization", "Bearer stored-token"))
            .respond_with(me_success())
            .expect(1)
            .mount(&server)
            .await;

        let session = SessionStore::new(
            ApiClient::new(server.uri()),
            store_with(Some("stored-token")),
        );
        session.restore().await;

        let state = session.snapshot();
        assert!(state.authenticated);
        assert!(!state.loading);
        assert_eq!(state.user.as_ref().unwrap().full_name(), "Ada Lovelace");
        assert_invariant(&state);
    }

    #[tokio::test]
    async fn restore_failure_is_silent_and_clears_the_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Unauthorized: token expired"
            })))
            .mount(&server)
            .await;

        let store = store_with(Some("stale-token"));
        let session = SessionStore::new(ApiClient::new(server.uri()), Arc::clone(&store) as Arc<dyn KvStore>);
        session.restore().await;

        let state = session.snapshot();
        assert!(!state.authenticated);
        assert!(!state.loading);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_invariant(&state);
    }

    #[tokio::test]
    async fn restore_runs_exactly_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(me_success())
            .expect(1)
            .mount(&server)
            .await;

        let session = SessionStore::new(
            ApiClient::new(server.uri()),
            store_with(Some("stored-token")),
        );
        session.restore().await;
        session.restore().await; // must not hit the endpoint again

        assert!(session.snapshot().authenticated);
    }

    #[tokio::test]
    async fn login_success_persists_token_and_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "token": "fresh-token",
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "admin@example.com",
                    "role": "admin"
                }
            })))
            .mount(&server)
            .await;

        let store = store_with(None);
        let session = SessionStore::new(ApiClient::new(server.uri()), Arc::clone(&store) as Arc<dyn KvStore>);

        let outcome = session.login("admin@example.com", "hunter22").await;
        assert_eq!(outcome, LoginOutcome::ok());

        let state = session.snapshot();
        assert!(state.authenticated);
        assert_eq!(state.token.as_deref(), Some("fresh-token"));
        assert_eq!(store.get(TOKEN_KEY), Some("fresh-token".to_string()));
        assert_invariant(&state);
    }

    #[tokio::test]
    async fn login_rejection_returns_message_without_touching_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Unauthorized: Invalid credentials"
            })))
            .mount(&server)
            .await;

        let store = store_with(None);
        let session = SessionStore::new(ApiClient::new(server.uri()), Arc::clone(&store) as Arc<dyn KvStore>);
        session.restore().await; // settle into anonymous first
        let before = session.snapshot();

        let outcome = session.login("a@b.com", "wrongpass").await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Unauthorized: Invalid credentials")
        );
        assert_eq!(session.snapshot(), before);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn login_network_failure_is_a_distinct_outcome() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let session = SessionStore::new(client, store_with(None));

        let outcome = session.login("a@b.com", "pass123").await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Network error: Unable to connect to the server")
        );
        assert!(!session.snapshot().authenticated);
    }

    #[tokio::test]
    async fn logout_is_local_and_idempotent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(me_success())
            .mount(&server)
            .await;

        let store = store_with(Some("stored-token"));
        let session = SessionStore::new(ApiClient::new(server.uri()), Arc::clone(&store) as Arc<dyn KvStore>);
        session.restore().await;
        assert!(session.snapshot().authenticated);

        session.logout();
        let after_first = session.snapshot();
        assert!(!after_first.authenticated);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_invariant(&after_first);

        // Logging out while already logged out changes nothing.
        session.logout();
        assert_eq!(session.snapshot(), after_first);
    }

    #[tokio::test]
    async fn invalidate_matches_the_logout_contract() {
        let store = store_with(Some("some-token"));
        let session = SessionStore::new(ApiClient::new("http://127.0.0.1:9"), Arc::clone(&store) as Arc<dyn KvStore>);

        session.invalidate();
        assert!(!session.snapshot().authenticated);
        assert_eq!(store.get(TOKEN_KEY), None);
    }
}
