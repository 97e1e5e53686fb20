//! Employee Model

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use validator::{Validate, ValidationError};

/// Departments offered by the employee form
pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "Human Resources",
    "Finance",
    "Operations",
];

/// Genders offered by the employee form
pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

/// Designations offered by the employee form
pub const DESIGNATIONS: &[&str] = &[
    "Software Engineer",
    "Senior Developer",
    "Project Manager",
    "Product Manager",
    "Marketing Manager",
    "Sales Representative",
    "HR Manager",
    "Financial Analyst",
];

/// Salary must be a finite, non-negative amount.
///
/// NaN and infinities would serialize as `null`.
fn valid_salary(salary: f64) -> Result<(), ValidationError> {
    if !salary.is_finite() {
        return Err(invalid("salary", "salary must be a finite number"));
    }
    if salary < 0.0 {
        return Err(invalid("salary", "salary must not be negative"));
    }
    Ok(())
}

fn known_gender(value: &str) -> Result<(), ValidationError> {
    one_of(value, GENDERS, "gender")
}

fn known_designation(value: &str) -> Result<(), ValidationError> {
    one_of(value, DESIGNATIONS, "designation")
}

fn known_department(value: &str) -> Result<(), ValidationError> {
    one_of(value, DEPARTMENTS, "department")
}

// Empty values are left to the length rule
fn one_of(value: &str, options: &[&str], field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() || options.contains(&value) {
        return Ok(());
    }
    Err(invalid(
        field,
        format!("{} must be one of: {}", field, options.join(", ")),
    ))
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Employee entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: String,
    pub department: String,
    #[serde(default)]
    pub employee_photo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create employee payload (`EmployeeInput!`); the server assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmployeeInput {
    #[validate(length(min = 1, max = 200, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 200, message = "last_name is required"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(
        length(min = 1, max = 200, message = "gender is required"),
        custom(function = "known_gender")
    )]
    pub gender: String,
    #[validate(
        length(min = 1, max = 200, message = "designation is required"),
        custom(function = "known_designation")
    )]
    pub designation: String,
    #[validate(custom(function = "valid_salary"))]
    pub salary: f64,
    #[validate(length(min = 1, max = 200, message = "date_of_joining is required"))]
    pub date_of_joining: String,
    #[validate(
        length(min = 1, max = 200, message = "department is required"),
        custom(function = "known_department")
    )]
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048, message = "employee_photo is too long"))]
    pub employee_photo: Option<String>,
}

/// Update employee payload; only the fields that are set are sent and merged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "first_name must not be empty"))]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "last_name must not be empty"))]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, max = 200, message = "gender must not be empty"),
        custom(function = "known_gender")
    )]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, max = 200, message = "designation must not be empty"),
        custom(function = "known_designation")
    )]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "valid_salary"))]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "date_of_joining must not be empty"))]
    pub date_of_joining: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, max = 200, message = "department must not be empty"),
        custom(function = "known_department")
    )]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048, message = "employee_photo is too long"))]
    pub employee_photo: Option<String>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Search filter for `searchEmployees`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl EmployeeFilter {
    pub fn department(department: impl Into<String>) -> Self {
        Self {
            department: Some(department.into()),
        }
    }

    /// No criteria set: equivalent to listing everything
    pub fn is_empty(&self) -> bool {
        self.department.is_none()
    }
}
