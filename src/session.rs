//! The session context.
//!
//! One [`Session`] exists per logged-in user and owns everything with a
//! lifetime: the notification store, the toast tray, and every timer. It
//! replaces the ambient globals of a UI tree with an explicit lifecycle:
//! [`Session::start`] arms the timers, [`Session::tick`] pumps them, and
//! [`Session::end`] tears all of them down synchronously so nothing can fire
//! on behalf of a user who is no longer authenticated.
//!
//! The session is single-threaded by construction. Timer callbacks are not
//! closures but [`Wakeup`] values drained from the scheduler and interpreted
//! here, so every state mutation happens on the caller's thread, in a
//! deterministic order.

use chrono::{DateTime, Utc};
use tracing::debug;
use ulid::Ulid;
use uuid::Uuid;

use crate::alert::Alerter;
use crate::config::EngineConfig;
use crate::deadline::{batch_message, imminent_tasks};
use crate::notification::{NotificationGroup, NotificationKind, NotificationStore};
use crate::project::{Department, Project};
use crate::scheduler::Scheduler;
use crate::task::{StatusUpdate, Task, TaskBoard, TaskStatus};
use crate::toast::{Toast, ToastTray};
use crate::user::User;
use crate::visibility;

/// Organizational data handed to the session at login.
///
/// Tasks are the FULL collection, not a pre-filtered subset; the session
/// applies visibility itself.
#[derive(Debug, Clone, Default)]
pub struct OrgData {
    pub projects: Vec<Project>,
    pub departments: Vec<Department>,
    pub tasks: Vec<Task>,
}

/// Timer payloads interpreted by the session pump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wakeup {
    /// One-shot ping simulating an externally-originated assignment
    AssignmentPing,
    /// Recurring imminent-deadline scan
    DeadlineScan,
    /// A toast's display window elapsed
    ToastExpired(Ulid),
}

/// Session-owned engine state for one authenticated user
#[derive(Debug)]
pub struct Session {
    user: User,
    projects: Vec<Project>,
    departments: Vec<Department>,
    board: TaskBoard,
    selected_project: Option<Uuid>,
    store: NotificationStore,
    tray: ToastTray,
    scheduler: Scheduler<Wakeup>,
    alerter: Alerter,
    config: EngineConfig,
    ended: bool,
}

impl Session {
    /// Start a session for `user`, arming the one-shot assignment ping and
    /// the recurring deadline scan.
    pub fn start(
        user: User,
        data: OrgData,
        config: EngineConfig,
        alerter: Alerter,
        now: DateTime<Utc>,
    ) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(now, config.assignment_ping_delay(), Wakeup::AssignmentPing);
        scheduler.schedule_repeating(now, config.scan_interval(), Wakeup::DeadlineScan);

        Self {
            user,
            projects: data.projects,
            departments: data.departments,
            board: TaskBoard::new(data.tasks),
            selected_project: None,
            store: NotificationStore::new(),
            tray: ToastTray::new(),
            scheduler,
            alerter,
            config,
            ended: false,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn tasks(&self) -> &[Task] {
        self.board.tasks()
    }

    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    pub fn tray(&self) -> &ToastTray {
        &self.tray
    }

    /// Record the admin's project choice. The resolver ignores it for other
    /// roles, so storing it unconditionally is harmless.
    pub fn select_project(&mut self, project_id: Option<Uuid>) {
        self.selected_project = project_id;
    }

    // ------------------------------------------------------------------
    // Visibility (recomputed on demand; no caching)
    // ------------------------------------------------------------------

    pub fn visible_projects(&self) -> Vec<&Project> {
        visibility::visible_projects(&self.user, &self.projects)
    }

    pub fn active_project(&self) -> Option<&Project> {
        visibility::active_project(&self.user, self.selected_project, &self.projects)
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        visibility::visible_tasks(&self.user, self.active_project(), self.board.tasks())
    }

    // ------------------------------------------------------------------
    // Alert emission
    // ------------------------------------------------------------------

    /// The single funnel every notification-worthy event goes through.
    ///
    /// Creates the record, appends it to the canonical log, surfaces a toast
    /// with an armed expiry timer, and fires the best-effort side channels.
    /// Infallible toward the caller.
    pub fn emit(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> Ulid {
        let notification = self.alerter.build(title, message, kind, now);
        let id = notification.id;
        self.store.append(notification.clone());

        let expiry =
            self.scheduler
                .schedule_once(now, self.config.toast_window(), Wakeup::ToastExpired(id));
        self.tray.push(Toast::of(&notification, expiry));

        self.alerter.dispatch(&notification);
        id
    }

    /// Dismiss a toast by user action, cancelling its expiry timer. The
    /// underlying notification is untouched.
    pub fn dismiss_toast(&mut self, notification_id: Ulid) -> bool {
        match self.tray.dismiss(notification_id) {
            Some(expiry) => {
                self.scheduler.cancel(expiry);
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        self.store.mark_all_read();
    }

    pub fn unread_count(&self) -> usize {
        self.store.unread_count()
    }

    pub fn grouped_notifications(&self) -> Vec<NotificationGroup<'_>> {
        self.store.group_by_kind()
    }

    // ------------------------------------------------------------------
    // Change detection
    // ------------------------------------------------------------------

    /// Apply a status mutation, alerting on the first actual transition.
    ///
    /// The lookup runs against the full task collection, not the visible
    /// subset, so a status pushed by another actor is still detected. Unknown
    /// ids and repeated statuses are silent no-ops.
    pub fn update_task_status(&mut self, task_id: Uuid, status: TaskStatus, now: DateTime<Utc>) {
        match self.board.update_status(task_id, status) {
            StatusUpdate::Changed { title, status } => {
                self.emit(
                    "Task Status Updated",
                    format!("Task \"{}\" is now {}.", title, status.label()),
                    NotificationKind::Status,
                    now,
                );
            }
            StatusUpdate::Unchanged => {}
            StatusUpdate::UnknownTask => {
                debug!(%task_id, "status update for unknown task ignored");
            }
        }
    }

    /// Add a task to the active project and announce it.
    ///
    /// Returns the new task's id, or `None` when there is no active project
    /// to attach it to.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        department_id: Uuid,
        employee_id: Uuid,
        deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Option<Uuid> {
        let project_id = self.active_project()?.id;
        let title = title.into();
        let task = Task {
            id: Uuid::new_v4(),
            title: title.clone(),
            project_id,
            department_id,
            employee_id,
            status: TaskStatus::default(),
            deadline,
        };
        let id = task.id;
        self.board.add(task);
        self.emit(
            "Task Added",
            format!("A new task was added: {}.", title),
            NotificationKind::Assignment,
            now,
        );
        Some(id)
    }

    // ------------------------------------------------------------------
    // Timer pump
    // ------------------------------------------------------------------

    /// Drain and handle every timer whose deadline has passed.
    ///
    /// The host calls this on its own cadence with the current time; tests
    /// call it with simulated time. After [`Session::end`] the scheduler is
    /// empty, so ticking a dead session does nothing.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        for wakeup in self.scheduler.due(now) {
            match wakeup {
                Wakeup::AssignmentPing => {
                    self.emit(
                        "New Task!",
                        "The task \"Update monthly reports\" has just been assigned to you.",
                        NotificationKind::Assignment,
                        now,
                    );
                }
                Wakeup::DeadlineScan => self.scan_deadlines(now),
                Wakeup::ToastExpired(id) => {
                    // The expiry timer is already spent; nothing to cancel.
                    self.tray.dismiss(id);
                }
            }
        }
    }

    /// One deadline scan over the currently visible subset.
    ///
    /// Batching policy: at most ONE notification per scan, carrying the
    /// count. An empty imminent set emits nothing.
    fn scan_deadlines(&mut self, now: DateTime<Utc>) {
        let window = self.config.deadline_window();
        let count = {
            let visible = self.visible_tasks();
            imminent_tasks(&visible, now, window).len()
        };
        if count == 0 {
            return;
        }
        self.emit(
            "Deadline Alert",
            batch_message(count, window),
            NotificationKind::Deadline,
            now,
        );
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// End the session: cancel every outstanding timer and clear the toast
    /// tray, so nothing scans, alerts, or lingers on behalf of this user
    /// afterwards. Idempotent; the notification log survives for hand-off to
    /// the host if it wants it.
    pub fn end(&mut self) {
        self.scheduler.cancel_all();
        self.tray.clear();
        self.ended = true;
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}
