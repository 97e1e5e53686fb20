//! Session manager.
//!
//! Owns the current session (user + token), keeps it in sync with durable
//! storage and publishes every change on a watch channel. The employee
//! service only ever reads the token through [`TokenProvider`].

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use futures::stream::BoxStream;
use serde_json::json;
use shared::client::{AuthPayload, LoginInput, SignupInput};
use shared::models::User;
use shared::validation;
use tokio::sync::{Mutex, watch};

use crate::error::{ClientError, ClientResult};
use crate::store::{CURRENT_USER_KEY, SessionStore, TOKEN_KEY};
use crate::types::{ClientStatus, SessionData};

use super::graphql::{GraphqlTransport, extract};
use super::operations::{LOGIN, Operation, SIGNUP};

/// Source of the bearer token attached to data requests.
///
/// Implemented by [`SessionManager`] and by any `Fn() -> Option<String>`.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Stream of session snapshots returned by [`SessionManager::session_changes`].
///
/// Yields the current value first, then every later change. A slow
/// subscriber may skip intermediate values but always ends on the latest.
/// Dropping the stream unsubscribes.
pub struct SessionStream {
    inner: BoxStream<'static, Option<User>>,
}

impl Stream for SessionStream {
    type Item = Option<User>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Session manager
pub struct SessionManager {
    transport: Arc<dyn GraphqlTransport>,
    store: Arc<dyn SessionStore>,
    state: watch::Sender<Option<SessionData>>,
    // Serializes store + state updates so both always change together
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("store", &self.store)
            .field("status", &self.status())
            .finish()
    }
}

impl SessionManager {
    /// Creates a manager and restores any session left in `store`.
    ///
    /// Restoration never fails: missing or malformed entries leave the
    /// manager logged out.
    pub fn new(transport: Arc<dyn GraphqlTransport>, store: Arc<dyn SessionStore>) -> Self {
        let restored = restore(store.as_ref());
        let (state, _) = watch::channel(restored);
        Self {
            transport,
            store,
            state,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the current user, if logged in. No I/O.
    pub fn current_session(&self) -> Option<User> {
        self.state.borrow().as_ref().map(|s| s.user().clone())
    }

    /// Subscribes to session changes.
    pub fn session_changes(&self) -> SessionStream {
        let rx = self.state.subscribe();
        let inner = futures::stream::unfold((rx, true), |(mut rx, first)| async move {
            if !first && rx.changed().await.is_err() {
                return None;
            }
            let user = rx.borrow_and_update().as_ref().map(|s| s.user().clone());
            Some((user, (rx, false)))
        });
        SessionStream {
            inner: Box::pin(inner),
        }
    }

    /// Checks if a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Returns the current user, or `Unauthorized` when logged out.
    ///
    /// Guard for screens that must not be reachable without a session.
    pub fn require_user(&self) -> ClientResult<User> {
        self.current_session().ok_or(ClientError::Unauthorized)
    }

    /// Returns the client status.
    pub fn status(&self) -> ClientStatus {
        let state = self.state.borrow();
        ClientStatus {
            is_authenticated: state.is_some(),
            username: state.as_ref().map(|s| s.user().username.clone()),
        }
    }

    /// Logs in with username and password.
    ///
    /// On failure the previous session, if any, is left as it was.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<User> {
        let input = LoginInput::new(username, password);
        validation::check(&input)?;

        tracing::info!(username = %username, "Login attempt");
        let payload = self
            .authenticate(&LOGIN, json!({ "input": input }))
            .await
            .inspect_err(|e| tracing::warn!(username = %username, "Login failed: {}", e))?;

        self.establish(payload).await
    }

    /// Creates an account and logs it in.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> ClientResult<User> {
        let input = SignupInput::new(username, email, password);
        validation::check(&input)?;

        tracing::info!(username = %username, "Signup attempt");
        let payload = self
            .authenticate(&SIGNUP, json!({ "input": input }))
            .await
            .inspect_err(|e| tracing::warn!(username = %username, "Signup failed: {}", e))?;

        self.establish(payload).await
    }

    /// Logs out. Never fails.
    ///
    /// A storage failure is logged; the in-memory session is cleared anyway.
    pub async fn logout(&self) {
        let _guard = self.write_lock.lock().await;
        if let Err(e) = self.store.remove_entries(&[CURRENT_USER_KEY, TOKEN_KEY]) {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        let previous = self.state.send_replace(None);
        match previous {
            Some(s) => tracing::info!(username = %s.user().username, "Logged out"),
            None => tracing::debug!("Logout without an active session"),
        }
    }

    async fn authenticate(
        &self,
        op: &Operation,
        variables: serde_json::Value,
    ) -> ClientResult<AuthPayload> {
        // login/signup never carry the old token
        let response = self
            .transport
            .execute(&op.request(variables), None)
            .await?;
        extract::<AuthPayload>(response, op.field)
            .map_err(ClientError::into_auth)?
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", op.field)))
    }

    /// Persist then publish; nothing changes if persisting fails.
    async fn establish(&self, payload: AuthPayload) -> ClientResult<User> {
        let AuthPayload { user, token } = payload;
        let session = SessionData::new(token, user)
            .ok_or_else(|| ClientError::InvalidResponse("Server returned an empty token".into()))?;
        let user_json = serde_json::to_string(session.user())?;

        let _guard = self.write_lock.lock().await;
        self.store
            .set_entries(&[(CURRENT_USER_KEY, user_json.as_str()), (TOKEN_KEY, session.token())])?;

        let user = session.user().clone();
        self.state.send_replace(Some(session));
        tracing::info!(username = %user.username, user_id = %user.id, "Session established");
        Ok(user)
    }
}

impl TokenProvider for SessionManager {
    fn token(&self) -> Option<String> {
        self.state.borrow().as_ref().map(|s| s.token().to_string())
    }
}

/// Read a previous session from storage.
///
/// Anything unusable is purged so the next start is clean.
fn restore(store: &dyn SessionStore) -> Option<SessionData> {
    match load_stored(store) {
        Ok(Some(session)) => {
            tracing::info!(username = %session.user().username, "Session restored from storage");
            Some(session)
        }
        Ok(None) => None,
        Err(ClientError::MalformedSession(e)) => {
            tracing::warn!("Ignoring stored session: {}", e);
            if let Err(e) = store.remove_entries(&[CURRENT_USER_KEY, TOKEN_KEY]) {
                tracing::warn!("Failed to purge stored session: {}", e);
            }
            None
        }
        // Unreadable is not malformed; keep the entries for the next start
        Err(e) => {
            tracing::warn!("Stored session unavailable, starting logged out: {}", e);
            None
        }
    }
}

/// Only `InvalidData` means the stored entries themselves are bad.
fn read_entry(store: &dyn SessionStore, key: &str) -> ClientResult<Option<String>> {
    store.get(key).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => ClientError::MalformedSession(e.to_string()),
        _ => ClientError::Storage(e),
    })
}

fn load_stored(store: &dyn SessionStore) -> ClientResult<Option<SessionData>> {
    let user_json = read_entry(store, CURRENT_USER_KEY)?;
    let token = read_entry(store, TOKEN_KEY)?;

    match (user_json, token) {
        (None, None) => Ok(None),
        (Some(user_json), Some(token)) => {
            let user: User = serde_json::from_str(&user_json)
                .map_err(|e| ClientError::MalformedSession(format!("currentUser: {}", e)))?;
            SessionData::new(token, user)
                .map(Some)
                .ok_or_else(|| ClientError::MalformedSession("empty token".into()))
        }
        _ => Err(ClientError::MalformedSession(
            "currentUser and token must be stored together".into(),
        )),
    }
}
