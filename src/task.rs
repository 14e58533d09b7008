//! Tasks and the task board.
//!
//! The board holds the FULL task collection for the organization; visibility
//! narrowing happens downstream in [`crate::visibility`]. Status is mutated
//! only through [`TaskBoard::update_status`] so that every transition can be
//! observed by the alerting layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    /// Human label, interpolated into status-change notification messages.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Overdue => write!(f, "overdue"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" | "in-progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            "overdue" => Ok(TaskStatus::Overdue),
            _ => Err(Error::InvalidArgument(format!(
                "Invalid task status '{}'. Expected: pending, in_progress, completed, overdue",
                s
            ))),
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// A unit of work, assigned to exactly one employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,

    /// Display title
    pub title: String,

    /// Owning project
    pub project_id: Uuid,

    /// Owning department
    pub department_id: Uuid,

    /// Assigned employee
    pub employee_id: Uuid,

    /// Current status
    pub status: TaskStatus,

    /// Due date
    pub deadline: DateTime<Utc>,
}

/// Outcome of a status update, reported to the change detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    /// Status actually transitioned; carries the task title for the alert message
    Changed { title: String, status: TaskStatus },
    /// Task exists but already had the requested status
    Unchanged,
    /// No task with the given id; treated as a no-op
    UnknownTask,
}

/// The full task collection for the organization
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks, in insertion order. Visibility filtering is the caller's job.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task to the board.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Apply a status mutation, reporting whether a transition occurred.
    ///
    /// Looks the task up in the full collection; an unknown id or an
    /// already-matching status is a no-op. The returned [`StatusUpdate`]
    /// tells the caller whether a status-change alert is warranted, so
    /// repeated application of the same `(id, status)` pair alerts at most
    /// once.
    pub fn update_status(&mut self, id: Uuid, status: TaskStatus) -> StatusUpdate {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if task.status != status => {
                task.status = status;
                StatusUpdate::Changed {
                    title: task.title.clone(),
                    status,
                }
            }
            Some(_) => StatusUpdate::Unchanged,
            None => StatusUpdate::UnknownTask,
        }
    }
}
