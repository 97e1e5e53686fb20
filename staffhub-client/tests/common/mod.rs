// staffhub-client/tests/common/mod.rs
// 测试用 GraphQL 桩服务 - axum, 随机端口

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::HeaderMap, routing::post};
use serde_json::{Value, json};
use shared::graphql::{GraphqlError, GraphqlRequest, GraphqlResponse};
use shared::models::{Employee, User};

pub const TOKEN: &str = "abc";
pub const SIGNUP_TOKEN: &str = "def";

/// Employee id the stub refuses to delete (`deleteEmployee: false`)
pub const UNDELETABLE_ID: &str = "e1";

/// One request as the stub saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub operation: String,
    pub authorization: Option<String>,
    pub variables: Value,
}

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    employees: Arc<Mutex<Vec<Employee>>>,
    next_id: Arc<Mutex<u32>>,
}

pub struct StubServer {
    pub endpoint: String,
    state: StubState,
}

impl StubServer {
    /// Start a stub seeded with [`seed_employees`]
    pub async fn start() -> Self {
        let state = StubState {
            employees: Arc::new(Mutex::new(seed_employees())),
            next_id: Arc::new(Mutex::new(100)),
            ..Default::default()
        };
        let app = Router::new()
            .route("/graphql", post(graphql))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{}/graphql", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().last().cloned().expect("no request recorded")
    }

    pub fn employee_count(&self) -> usize {
        self.state.employees.lock().unwrap().len()
    }
}

/// Endpoint on a port nothing listens on
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/graphql", addr)
}

pub fn alice() -> User {
    User {
        id: "1".into(),
        username: "alice".into(),
        email: "alice@example.com".into(),
        created_at: "2024-01-01T00:00:00Z".into(),
        updated_at: "2024-01-01T00:00:00Z".into(),
    }
}

pub fn seed_employees() -> Vec<Employee> {
    let emp = |id: &str, first: &str, department: &str, salary: f64| Employee {
        id: id.into(),
        first_name: first.into(),
        last_name: "Tester".into(),
        email: format!("{}@example.com", first.to_lowercase()),
        gender: "Other".into(),
        designation: "Software Engineer".into(),
        salary,
        date_of_joining: "2023-05-01".into(),
        department: department.into(),
        employee_photo: None,
        created_at: "2023-05-01T00:00:00Z".into(),
        updated_at: "2023-05-01T00:00:00Z".into(),
    };
    vec![
        emp("e1", "Grace", "Engineering", 150_000.0),
        emp("e2", "Linus", "Engineering", 140_000.0),
        emp("e3", "Peggy", "Sales", 90_000.0),
    ]
}

fn reply(data: Value) -> Json<Value> {
    Json(serde_json::to_value(GraphqlResponse::ok(data)).unwrap())
}

fn fail(error: GraphqlError) -> Json<Value> {
    Json(serde_json::to_value(GraphqlResponse::<Value>::error(error)).unwrap())
}

async fn graphql(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(req): Json<GraphqlRequest>,
) -> Json<Value> {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let operation = req.operation_name.clone().unwrap_or_default();
    state.requests.lock().unwrap().push(Recorded {
        operation: operation.clone(),
        authorization: authorization.clone(),
        variables: req.variables.clone(),
    });

    let vars = &req.variables;
    match operation.as_str() {
        "Login" => {
            let input = &vars["input"];
            if input["username"] == "alice" && input["password"] == "secret1" {
                reply(json!({ "login": { "user": alice(), "token": TOKEN } }))
            } else {
                fail(GraphqlError::new("Invalid username or password").with_code("UNAUTHENTICATED"))
            }
        }
        "Signup" => {
            let input = &vars["input"];
            if input["username"] == "alice" {
                return fail(GraphqlError::new("Username already exists").with_code("BAD_USER_INPUT"));
            }
            let user = User {
                id: "2".into(),
                username: input["username"].as_str().unwrap_or_default().into(),
                email: input["email"].as_str().unwrap_or_default().into(),
                created_at: "2024-02-01T00:00:00Z".into(),
                updated_at: "2024-02-01T00:00:00Z".into(),
            };
            reply(json!({ "signup": { "user": user, "token": SIGNUP_TOKEN } }))
        }
        _ if !matches!(
            authorization.as_deref(),
            Some(a) if a == format!("Bearer {TOKEN}") || a == format!("Bearer {SIGNUP_TOKEN}")
        ) =>
        {
            fail(GraphqlError::new("Not authenticated").with_code("UNAUTHENTICATED"))
        }
        "GetAllEmployees" => {
            let all = state.employees.lock().unwrap().clone();
            reply(json!({ "getAllEmployees": all }))
        }
        "GetEmployeeById" => {
            let found = state
                .employees
                .lock()
                .unwrap()
                .iter()
                .find(|e| vars["id"] == e.id.as_str())
                .cloned();
            reply(json!({ "getEmployeeById": found }))
        }
        "SearchEmployees" => {
            let department = vars["department"].as_str();
            let matching: Vec<Employee> = state
                .employees
                .lock()
                .unwrap()
                .iter()
                .filter(|e| department.is_none_or(|d| e.department == d))
                .cloned()
                .collect();
            reply(json!({ "searchEmployees": matching }))
        }
        "CreateEmployee" => {
            let mut next = state.next_id.lock().unwrap();
            *next += 1;
            let mut record = vars["input"].clone();
            record["id"] = json!(format!("e{}", *next));
            record["created_at"] = json!("2024-03-01T00:00:00Z");
            record["updated_at"] = json!("2024-03-01T00:00:00Z");
            let employee: Employee = serde_json::from_value(record).unwrap();
            state.employees.lock().unwrap().push(employee.clone());
            reply(json!({ "createEmployee": employee }))
        }
        "UpdateEmployee" => {
            let mut employees = state.employees.lock().unwrap();
            let Some(existing) = employees.iter_mut().find(|e| vars["id"] == e.id.as_str()) else {
                return fail(GraphqlError::new("Employee not found").with_code("NOT_FOUND"));
            };
            let mut merged = serde_json::to_value(&*existing).unwrap();
            if let Some(changes) = vars["input"].as_object() {
                for (k, v) in changes {
                    merged[k] = v.clone();
                }
            }
            merged["updated_at"] = json!("2024-04-01T00:00:00Z");
            *existing = serde_json::from_value(merged).unwrap();
            reply(json!({ "updateEmployee": existing.clone() }))
        }
        "DeleteEmployee" => {
            if vars["id"] == UNDELETABLE_ID {
                return reply(json!({ "deleteEmployee": false }));
            }
            let mut employees = state.employees.lock().unwrap();
            let before = employees.len();
            employees.retain(|e| vars["id"] != e.id.as_str());
            if employees.len() == before {
                fail(GraphqlError::new("Employee not found"))
            } else {
                reply(json!({ "deleteEmployee": true }))
            }
        }
        other => fail(GraphqlError::new(format!("Unknown operation {other}"))),
    }
}
