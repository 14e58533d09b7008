//! User identity and roles.
//!
//! A [`User`] is immutable for the duration of a session and replaced
//! wholesale on login/logout. The role determines how far the visibility
//! resolver widens the project and task subsets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Role of a user, determining visibility scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sees every project and every task; may pick the active project
    Admin,
    /// Sees their own project, narrowed to their department's tasks
    DeptHead,
    /// Sees their own project, narrowed to tasks assigned to them
    Employee,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::DeptHead => write!(f, "dept_head"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "dept_head" | "depthead" | "head" => Ok(Role::DeptHead),
            "employee" => Ok(Role::Employee),
            _ => Err(Error::InvalidArgument(format!(
                "Invalid role '{}'. Expected: admin, dept_head, employee",
                s
            ))),
        }
    }
}

/// An authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier; tasks reference this via `employee_id`
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Role within the organization
    pub role: Role,

    /// Department affiliation (set for department heads and employees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Uuid>,

    /// Project affiliation (set for everyone except some admins)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
}

impl User {
    /// Create a user with no department or project affiliation.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            department_id: None,
            project_id: None,
        }
    }

    /// Attach a department affiliation.
    pub fn in_department(mut self, department_id: Uuid) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Attach a project affiliation.
    pub fn in_project(mut self, project_id: Uuid) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Whether this user may switch the active project.
    pub fn can_select_project(&self) -> bool {
        self.role == Role::Admin
    }
}
