//! Wiring of the client components.
//!
//! The session manager and employee service are plain values with
//! explicit dependencies; `StaffHub` just builds them in the right order.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::store::SessionStore;

use super::employee::EmployeeService;
use super::graphql::GraphqlTransport;
use super::session::SessionManager;

/// Session manager and employee service sharing one transport.
///
/// # Example
///
/// ```no_run
/// use staffhub_client::{ClientConfig, StaffHub};
///
/// # async fn example() -> Result<(), staffhub_client::ClientError> {
/// let hub = StaffHub::connect(&ClientConfig::from_env())?;
/// hub.session().login("alice", "secret1").await?;
/// let employees = hub.employees().fetch_all().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StaffHub {
    session: Arc<SessionManager>,
    employees: EmployeeService,
}

impl StaffHub {
    /// Builds the network transport and file store described by `config`
    /// and restores any persisted session.
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let transport = Arc::new(config.build_transport()?);
        let store = Arc::new(config.build_store());
        tracing::info!(
            endpoint = %config.endpoint,
            session_file = %config.session_path().display(),
            "StaffHub client ready"
        );
        Ok(Self::from_parts(transport, store))
    }

    /// Assembles the client from existing parts.
    pub fn from_parts(transport: Arc<dyn GraphqlTransport>, store: Arc<dyn SessionStore>) -> Self {
        let session = Arc::new(SessionManager::new(transport.clone(), store));
        let employees = EmployeeService::new(transport, session.clone());
        Self { session, employees }
    }

    /// Returns the session manager.
    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Returns the employee service.
    pub fn employees(&self) -> &EmployeeService {
        &self.employees
    }
}
