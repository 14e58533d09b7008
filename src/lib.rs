//! hemma - Notification & Alerting Core
//!
//! This library provides the role-scoped notification engine behind the
//! Hemma work-tracking dashboard: who may see which projects and tasks, which
//! state changes and deadlines are worth surfacing, and how those events
//! become durable notification records and transient toasts.
//!
//! # Core Concepts
//!
//! - **Visibility**: pure resolvers narrowing the full project/task
//!   collections to what a user's role authorizes
//! - **Session**: explicit per-user lifecycle owning the store, the toasts,
//!   and every timer; ending it tears all of them down
//! - **Alert funnel**: one emission path producing a notification record, a
//!   toast with its own expiry, and a best-effort audible cue
//! - **Deadline scanning**: a recurring, batched check over the visible
//!   subset only
//!
//! # Module Organization
//!
//! - `alert`: alert construction, audible cue seam
//! - `config`: timing contract values loaded from `hemma.toml`
//! - `deadline`: imminent-deadline filtering and batch messages
//! - `error`: error types and result aliases
//! - `events`: JSONL notification sink for external integrations
//! - `notification`: notification records and the session store
//! - `project` / `task` / `user`: domain model
//! - `scheduler`: explicitly pumped timer wheel with cancellation handles
//! - `session`: the per-user composition layer
//! - `toast`: transient toast tray
//! - `visibility`: role-scoped visibility resolvers

pub mod alert;
pub mod config;
pub mod deadline;
pub mod error;
pub mod events;
pub mod notification;
pub mod project;
pub mod scheduler;
pub mod session;
pub mod task;
pub mod toast;
pub mod user;
pub mod visibility;

pub use error::{Error, Result};
pub use session::{OrgData, Session, Wakeup};
