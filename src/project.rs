//! Projects and departments.
//!
//! A project is the organizational container tasks belong to; departments
//! partition a project's tasks for department-head visibility.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An organizational project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A department within a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Owning project
    pub project_id: Uuid,
}

impl Department {
    pub fn new(name: impl Into<String>, project_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            project_id,
        }
    }
}
