//! Transient toast presentation.
//!
//! A toast is a projection of a notification, not a second copy of business
//! state: it carries the source notification's id as a non-owning
//! back-reference, and dismissing or expiring a toast never touches the
//! notification itself. The tray keeps arrival order (oldest first), and
//! removing a middle toast leaves the rest in place.

use serde::Serialize;
use ulid::Ulid;

use crate::notification::{Notification, NotificationKind};
use crate::scheduler::TimerId;

/// A transient, self-expiring presentation of a notification
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    /// Id of the source notification
    pub notification_id: Ulid,

    /// Headline, copied for rendering without a store lookup
    pub title: String,

    /// Body text
    pub message: String,

    /// Kind, for the accent color
    pub kind: NotificationKind,

    /// Handle of this toast's expiry timer
    #[serde(skip)]
    pub expiry: TimerId,
}

impl Toast {
    /// Project a notification into a toast with the given expiry handle.
    pub fn of(notification: &Notification, expiry: TimerId) -> Self {
        Self {
            notification_id: notification.id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.kind,
            expiry,
        }
    }
}

/// Live toasts for the active session, in arrival order
#[derive(Debug, Clone, Default)]
pub struct ToastTray {
    toasts: Vec<Toast>,
}

impl ToastTray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast at the newest end.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Remove the toast for a notification, whether by user dismissal or by
    /// expiry. Returns its expiry handle so the caller can cancel the timer,
    /// or `None` if the toast was already gone.
    pub fn dismiss(&mut self, notification_id: Ulid) -> Option<TimerId> {
        let index = self
            .toasts
            .iter()
            .position(|t| t.notification_id == notification_id)?;
        Some(self.toasts.remove(index).expiry)
    }

    /// Drop every toast, e.g. when the owning session ends.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Toasts in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn contains(&self, notification_id: Ulid) -> bool {
        self.toasts
            .iter()
            .any(|t| t.notification_id == notification_id)
    }
}
