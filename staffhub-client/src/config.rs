//! Client configuration

use std::path::PathBuf;

use crate::client::NetworkGraphqlClient;
use crate::error::{ClientError, ClientResult};
use crate::store::FileSessionStore;

/// Default GraphQL endpoint for a locally running backend
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Default name of the session file inside `data_dir`
pub const DEFAULT_SESSION_FILE: &str = "session.json";

/// Client configuration for connecting to the StaffHub GraphQL API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint URL (e.g., "https://api.example.com/graphql")
    pub endpoint: String,

    /// Request timeout in seconds; `None` waits for the server indefinitely
    pub timeout: Option<u64>,

    /// Directory holding the persisted session
    pub data_dir: PathBuf,

    /// Session file name inside `data_dir`
    pub session_file: String,
}

impl ClientConfig {
    /// Create a new client configuration for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
            data_dir: PathBuf::from("staffhub_data"),
            session_file: DEFAULT_SESSION_FILE.to_string(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// - `STAFFHUB_GRAPHQL_URL`: endpoint (default [`DEFAULT_ENDPOINT`])
    /// - `STAFFHUB_DATA_DIR`: session directory (default `staffhub_data`)
    /// - `STAFFHUB_TIMEOUT_SECS`: request timeout, unset means none
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("STAFFHUB_GRAPHQL_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        );
        if let Ok(dir) = std::env::var("STAFFHUB_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.timeout = std::env::var("STAFFHUB_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok());
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the session directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the session file name
    pub fn with_session_file(mut self, name: impl Into<String>) -> Self {
        self.session_file = name.into();
        self
    }

    /// Full path of the session file
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(&self.session_file)
    }

    /// Reject configurations that can never work
    pub fn validate(&self) -> ClientResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.session_file.trim().is_empty() {
            return Err(ClientError::Config("session_file must not be empty".into()));
        }
        if self.timeout == Some(0) {
            return Err(ClientError::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Create the GraphQL transport from this configuration
    pub fn build_transport(&self) -> ClientResult<NetworkGraphqlClient> {
        self.validate()?;
        NetworkGraphqlClient::new(&self.endpoint, self.timeout)
    }

    /// Create the file-backed session store from this configuration
    pub fn build_store(&self) -> FileSessionStore {
        FileSessionStore::new(&self.data_dir, &self.session_file)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
