//! Employee data access.
//!
//! Thin typed wrappers over the employee operations. Every call is a
//! single round trip with the current bearer token: no caching, no
//! retries, no coalescing of concurrent calls. Callers re-fetch after
//! mutations.

use std::sync::Arc;

use serde_json::json;
use shared::models::{Employee, EmployeeFilter, EmployeeInput, EmployeeUpdate};
use shared::validation;

use crate::error::{ClientError, ClientResult};

use super::graphql::{GraphqlTransport, extract};
use super::operations::{
    CREATE_EMPLOYEE, DELETE_EMPLOYEE, GET_ALL_EMPLOYEES, GET_EMPLOYEE_BY_ID, Operation,
    SEARCH_EMPLOYEES, UPDATE_EMPLOYEE,
};
use super::session::TokenProvider;

/// Employee service
#[derive(Clone)]
pub struct EmployeeService {
    transport: Arc<dyn GraphqlTransport>,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for EmployeeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeService").finish_non_exhaustive()
    }
}

impl EmployeeService {
    pub fn new(transport: Arc<dyn GraphqlTransport>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { transport, tokens }
    }

    /// Run `op` with the token current at call time.
    ///
    /// A missing session is not checked here; the request simply goes
    /// out without a header and the server decides.
    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        op: &Operation,
        variables: serde_json::Value,
    ) -> ClientResult<Option<T>> {
        let token = self.tokens.token();
        let response = self
            .transport
            .execute(&op.request(variables), token.as_deref())
            .await?;
        extract(response, op.field)
    }

    /// All employees, in server order.
    pub async fn fetch_all(&self) -> ClientResult<Vec<Employee>> {
        self.call(&GET_ALL_EMPLOYEES, json!({}))
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("Missing getAllEmployees data".into()))
    }

    pub async fn fetch_by_id(&self, id: &str) -> ClientResult<Employee> {
        self.call(&GET_EMPLOYEE_BY_ID, json!({ "id": id }))
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("Employee {}", id)))
    }

    /// Employees matching `filter`. An empty filter lists everything.
    pub async fn search(&self, filter: &EmployeeFilter) -> ClientResult<Vec<Employee>> {
        if filter.is_empty() {
            return self.fetch_all().await;
        }
        self.call(&SEARCH_EMPLOYEES, json!(filter))
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("Missing searchEmployees data".into()))
    }

    /// Create an employee; the server assigns id and timestamps.
    pub async fn create(&self, input: &EmployeeInput) -> ClientResult<Employee> {
        validation::check(input)?;
        let employee: Employee = self
            .call(&CREATE_EMPLOYEE, json!({ "input": input }))
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("Missing createEmployee data".into()))?;
        tracing::info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Merge the set fields of `changes` into employee `id`.
    pub async fn update(&self, id: &str, changes: &EmployeeUpdate) -> ClientResult<Employee> {
        validation::check(changes)?;
        if changes.is_empty() {
            return Err(ClientError::Validation("No fields to update".into()));
        }
        let employee = self
            .call(&UPDATE_EMPLOYEE, json!({ "id": id, "input": changes }))
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("Employee {}", id)))?;
        tracing::info!(employee_id = %id, "Employee updated");
        Ok(employee)
    }

    /// Delete employee `id`; returns the server's success flag.
    pub async fn delete(&self, id: &str) -> ClientResult<bool> {
        let deleted = self
            .call::<bool>(&DELETE_EMPLOYEE, json!({ "id": id }))
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("Employee {}", id)))?;
        tracing::info!(employee_id = %id, deleted, "Employee delete");
        Ok(deleted)
    }
}
