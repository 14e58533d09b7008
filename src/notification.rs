//! Notification records and the session-scoped store.
//!
//! The store owns the canonical notification log for the active session. The
//! log is append-ordered (creation order); display order is a pure reversal
//! of it, never an independent resort, so two notifications created in the
//! same instant keep their creation order. Records are immutable once created
//! except for the `read` flag, and nothing ever deletes them — "mark all
//! read" only flips flags.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::Error;

/// Kind of a notification, driving grouping and presentation accents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A task was assigned or created
    Assignment,
    /// One or more deadlines are imminent
    Deadline,
    /// A task's status changed
    Status,
    /// Engine- or host-originated notices
    System,
}

impl NotificationKind {
    /// Canonical grouping order for the notification center, regardless of
    /// arrival order.
    pub const ORDERED: [NotificationKind; 4] = [
        NotificationKind::Assignment,
        NotificationKind::Deadline,
        NotificationKind::Status,
        NotificationKind::System,
    ];

    /// Human label for the group header.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Assignment => "New Tasks",
            NotificationKind::Deadline => "Deadline Alerts",
            NotificationKind::Status => "Status Updates",
            NotificationKind::System => "System Notices",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Assignment => write!(f, "assignment"),
            NotificationKind::Deadline => write!(f, "deadline"),
            NotificationKind::Status => write!(f, "status"),
            NotificationKind::System => write!(f, "system"),
        }
    }
}

impl FromStr for NotificationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "assignment" => Ok(NotificationKind::Assignment),
            "deadline" => Ok(NotificationKind::Deadline),
            "status" => Ok(NotificationKind::Status),
            "system" => Ok(NotificationKind::System),
            _ => Err(Error::InvalidArgument(format!(
                "Invalid notification kind '{}'. Expected: assignment, deadline, status, system",
                s
            ))),
        }
    }
}

/// A durable (session-scoped), read-trackable record of a past event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id, lexicographically sortable by creation time
    pub id: Ulid,

    /// Short headline
    pub title: String,

    /// Body text
    pub message: String,

    /// Kind, for grouping
    pub kind: NotificationKind,

    /// Creation timestamp
    pub timestamp: DateTime<Utc>,

    /// Whether the user has seen this record
    pub read: bool,
}

/// One non-empty category in the grouped notification-center view
#[derive(Debug, Clone)]
pub struct NotificationGroup<'a> {
    pub kind: NotificationKind,
    pub label: &'static str,
    pub items: Vec<&'a Notification>,
}

/// Canonical, session-owned notification log
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    log: Vec<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the canonical log.
    pub fn append(&mut self, notification: Notification) {
        self.log.push(notification);
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Records in creation order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.log.iter()
    }

    /// Records in display order: newest first, a pure reversal of the log.
    pub fn iter_display(&self) -> impl Iterator<Item = &Notification> {
        self.log.iter().rev()
    }

    /// Number of records not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.log.iter().filter(|n| !n.read).count()
    }

    /// Flip every record to read. Never deletes.
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.log {
            notification.read = true;
        }
    }

    /// Group records by kind in the fixed category order.
    ///
    /// Kinds with no records are omitted; within a group, items keep their
    /// creation order.
    pub fn group_by_kind(&self) -> Vec<NotificationGroup<'_>> {
        NotificationKind::ORDERED
            .iter()
            .filter_map(|&kind| {
                let items: Vec<&Notification> =
                    self.log.iter().filter(|n| n.kind == kind).collect();
                if items.is_empty() {
                    None
                } else {
                    Some(NotificationGroup {
                        kind,
                        label: kind.label(),
                        items,
                    })
                }
            })
            .collect()
    }
}
