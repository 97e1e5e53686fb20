// staffhub-client/tests/session_integration.rs
// 会话集成测试

mod common;

use std::sync::Arc;

use common::{StubServer, TOKEN, alice, dead_endpoint};
use futures::StreamExt;
use staffhub_client::error::NETWORK_ERROR_MESSAGE;
use staffhub_client::store::{CURRENT_USER_KEY, TOKEN_KEY};
use staffhub_client::{
    ClientConfig, ClientError, FileSessionStore, MemorySessionStore, NetworkGraphqlClient,
    SessionStore, StaffHub, TokenProvider,
};
use tempfile::TempDir;

fn file_hub(endpoint: &str, dir: &TempDir) -> StaffHub {
    let config = ClientConfig::new(endpoint).with_data_dir(dir.path());
    StaffHub::connect(&config).unwrap()
}

#[tokio::test]
async fn test_login_sets_session_and_bearer_header() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    let hub = file_hub(&server.endpoint, &dir);

    let user = hub.session().login("alice", "secret1").await.unwrap();
    assert_eq!(user, alice());
    assert_eq!(hub.session().current_session(), Some(alice()));

    hub.employees().fetch_all().await.unwrap();
    let last = server.last_request();
    assert_eq!(last.operation, "GetAllEmployees");
    assert_eq!(last.authorization.as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn test_login_request_carries_no_authorization() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    let hub = file_hub(&server.endpoint, &dir);

    hub.session().login("alice", "secret1").await.unwrap();
    hub.session().login("alice", "secret1").await.unwrap();

    for req in server.requests() {
        assert_eq!(req.operation, "Login");
        assert!(req.authorization.is_none());
    }
}

#[tokio::test]
async fn test_login_persists_pair_and_restores() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();

    {
        let hub = file_hub(&server.endpoint, &dir);
        hub.session().login("alice", "secret1").await.unwrap();
    }

    let store = FileSessionStore::new(dir.path(), "session.json");
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some(TOKEN));
    let stored_user: staffhub_client::User =
        serde_json::from_str(&store.get(CURRENT_USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored_user, alice());

    // fresh process, same storage
    let hub = file_hub(&server.endpoint, &dir);
    assert_eq!(hub.session().current_session(), Some(alice()));
    assert_eq!(hub.session().token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn test_logout_clears_memory_and_storage() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    let hub = file_hub(&server.endpoint, &dir);

    for _ in 0..3 {
        hub.session().login("alice", "secret1").await.unwrap();
        hub.session().logout().await;

        assert!(hub.session().current_session().is_none());
        let store = FileSessionStore::new(dir.path(), "session.json");
        assert!(store.get(CURRENT_USER_KEY).unwrap().is_none());
        assert!(store.get(TOKEN_KEY).unwrap().is_none());
    }

    // logout when already logged out is harmless
    hub.session().logout().await;
    assert!(!hub.session().is_authenticated());
}

#[tokio::test]
async fn test_invalid_credentials() {
    let server = StubServer::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let transport = Arc::new(NetworkGraphqlClient::new(&server.endpoint, None).unwrap());
    let hub = StaffHub::from_parts(transport, store.clone());

    let err = hub.session().login("alice", "wrong-password").await.unwrap_err();
    assert!(matches!(&err, ClientError::Auth(m) if m == "Invalid username or password"));
    assert!(!err.is_network());
    assert_eq!(err.user_message(), "Invalid username or password");
    assert!(hub.session().current_session().is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_signup_establishes_session() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    let hub = file_hub(&server.endpoint, &dir);

    let user = hub
        .session()
        .signup("bob", "bob@example.com", "hunter22")
        .await
        .unwrap();
    assert_eq!(user.username, "bob");
    assert_eq!(hub.session().current_session(), Some(user));

    hub.employees().fetch_all().await.unwrap();
    assert_eq!(
        server.last_request().authorization.as_deref(),
        Some("Bearer def")
    );
}

#[tokio::test]
async fn test_duplicate_signup_keeps_previous_session() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    let hub = file_hub(&server.endpoint, &dir);
    hub.session().login("alice", "secret1").await.unwrap();

    let err = hub
        .session()
        .signup("alice", "alice2@example.com", "secret1")
        .await
        .unwrap_err();
    assert!(matches!(&err, ClientError::Auth(m) if m == "Username already exists"));
    assert_eq!(hub.session().current_session(), Some(alice()));
}

#[tokio::test]
async fn test_network_unavailable() {
    let endpoint = dead_endpoint().await;
    let dir = TempDir::new().unwrap();
    let hub = file_hub(&endpoint, &dir);

    let err = hub.session().login("alice", "secret1").await.unwrap_err();
    assert!(err.is_network(), "unexpected: {err:?}");
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    assert!(hub.session().current_session().is_none());
}

#[tokio::test]
async fn test_malformed_stored_user_at_startup() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    FileSessionStore::new(dir.path(), "session.json")
        .set_entries(&[(CURRENT_USER_KEY, "{\"id\": 1, oops"), (TOKEN_KEY, TOKEN)])
        .unwrap();

    let hub = file_hub(&server.endpoint, &dir);
    assert!(hub.session().current_session().is_none());

    // data calls go out without a credential
    let _ = hub.employees().fetch_all().await;
    assert!(server.last_request().authorization.is_none());
}

#[tokio::test]
async fn test_corrupt_session_file_at_startup() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.json"), "garbage").unwrap();

    let hub = file_hub(&server.endpoint, &dir);
    assert!(hub.session().current_session().is_none());

    // still usable afterwards
    hub.session().login("alice", "secret1").await.unwrap();
    assert_eq!(hub.session().current_session(), Some(alice()));
}

#[tokio::test]
async fn test_session_changes_follow_login_and_logout() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    let hub = file_hub(&server.endpoint, &dir);

    let mut first = hub.session().session_changes();
    assert_eq!(first.next().await, Some(None));

    hub.session().login("alice", "secret1").await.unwrap();
    assert_eq!(first.next().await, Some(Some(alice())));

    // subscribers are independent; a new one starts at the current value
    let mut second = hub.session().session_changes();
    assert_eq!(second.next().await, Some(Some(alice())));

    hub.session().logout().await;
    assert_eq!(first.next().await, Some(None));
    assert_eq!(second.next().await, Some(None));

    drop(first);
    hub.session().login("alice", "secret1").await.unwrap();
    assert_eq!(second.next().await, Some(Some(alice())));
}

#[tokio::test]
async fn test_failed_login_emits_nothing() {
    let server = StubServer::start().await;
    let dir = TempDir::new().unwrap();
    let hub = file_hub(&server.endpoint, &dir);

    let mut changes = hub.session().session_changes();
    assert_eq!(changes.next().await, Some(None));

    hub.session().login("alice", "bad-password").await.unwrap_err();
    let next = tokio::time::timeout(std::time::Duration::from_millis(50), changes.next()).await;
    assert!(next.is_err(), "no change expected after a failed login");
}
