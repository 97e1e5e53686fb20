//! GraphQL documents used by the client.
//!
//! Each constant pairs with the operation name sent as `operationName`
//! and the response field the result is read from.

/// Selection set shared by every employee-returning operation
macro_rules! employee_fields {
    () => {
        "id first_name last_name email gender designation salary date_of_joining department employee_photo created_at updated_at"
    };
}

/// Selection set of the auth payload
macro_rules! auth_fields {
    () => {
        "user { id username email created_at updated_at } token"
    };
}

pub(crate) struct Operation {
    pub name: &'static str,
    pub field: &'static str,
    pub document: &'static str,
}

// ========== Auth ==========

pub(crate) const LOGIN: Operation = Operation {
    name: "Login",
    field: "login",
    document: concat!(
        "query Login($input: LoginInput!) { login(input: $input) { ",
        auth_fields!(),
        " } }"
    ),
};

pub(crate) const SIGNUP: Operation = Operation {
    name: "Signup",
    field: "signup",
    document: concat!(
        "mutation Signup($input: SignupInput!) { signup(input: $input) { ",
        auth_fields!(),
        " } }"
    ),
};

// ========== Employees ==========

pub(crate) const GET_ALL_EMPLOYEES: Operation = Operation {
    name: "GetAllEmployees",
    field: "getAllEmployees",
    document: concat!(
        "query GetAllEmployees { getAllEmployees { ",
        employee_fields!(),
        " } }"
    ),
};

pub(crate) const GET_EMPLOYEE_BY_ID: Operation = Operation {
    name: "GetEmployeeById",
    field: "getEmployeeById",
    document: concat!(
        "query GetEmployeeById($id: ID!) { getEmployeeById(id: $id) { ",
        employee_fields!(),
        " } }"
    ),
};

pub(crate) const SEARCH_EMPLOYEES: Operation = Operation {
    name: "SearchEmployees",
    field: "searchEmployees",
    document: concat!(
        "query SearchEmployees($department: String) { searchEmployees(department: $department) { ",
        employee_fields!(),
        " } }"
    ),
};

pub(crate) const CREATE_EMPLOYEE: Operation = Operation {
    name: "CreateEmployee",
    field: "createEmployee",
    document: concat!(
        "mutation CreateEmployee($input: EmployeeInput!) { createEmployee(input: $input) { ",
        employee_fields!(),
        " } }"
    ),
};

pub(crate) const UPDATE_EMPLOYEE: Operation = Operation {
    name: "UpdateEmployee",
    field: "updateEmployee",
    document: concat!(
        "mutation UpdateEmployee($id: ID!, $input: EmployeeInput!) { updateEmployee(id: $id, input: $input) { ",
        employee_fields!(),
        " } }"
    ),
};

pub(crate) const DELETE_EMPLOYEE: Operation = Operation {
    name: "DeleteEmployee",
    field: "deleteEmployee",
    document: "mutation DeleteEmployee($id: ID!) { deleteEmployee(id: $id) }",
};

impl Operation {
    pub(crate) fn request(&self, variables: serde_json::Value) -> shared::GraphqlRequest {
        shared::GraphqlRequest::new(self.name, self.document, variables)
    }
}
