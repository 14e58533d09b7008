//! Event output for external integrations.
//!
//! Every emitted notification can additionally be written as a JSON line to
//! stdout or a configured file, for hosts that mirror alerts into other
//! channels. Delivery is best-effort: the engine never fails an emission
//! because the sink did.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::notification::Notification;

pub const EVENT_SCHEMA_VERSION: &str = "hemma.notification.v1";

#[derive(Debug, Clone)]
pub enum EventDestination {
    Stdout,
    File(PathBuf),
}

impl EventDestination {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return None;
            }
            if trimmed == "-" {
                return Some(EventDestination::Stdout);
            }
            Some(EventDestination::File(PathBuf::from(trimmed)))
        })
    }

    pub fn open(&self) -> Result<NotificationSink> {
        match self {
            EventDestination::Stdout => Ok(NotificationSink::stdout()),
            EventDestination::File(path) => NotificationSink::file(path),
        }
    }
}

/// Envelope written for each created notification.
#[derive(Debug, Clone, Serialize)]
struct NotificationEvent<'a> {
    schema_version: &'static str,
    event: &'static str,
    #[serde(flatten)]
    notification: &'a Notification,
}

/// Sink that writes one JSON line per notification.
pub struct NotificationSink {
    writer: Box<dyn Write + Send>,
}

impl NotificationSink {
    /// Emit events to stdout.
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(std::io::stdout()),
        }
    }

    /// Emit events to a file, creating it if necessary.
    pub fn file(path: &Path) -> Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            writer: Box::new(file),
        })
    }

    /// Write a single notification as JSONL.
    pub fn emit(&mut self, notification: &Notification) -> Result<()> {
        let event = NotificationEvent {
            schema_version: EVENT_SCHEMA_VERSION,
            event: "notification_created",
            notification,
        };
        let serialized = serde_json::to_vec(&event)?;
        self.writer.write_all(&serialized)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for NotificationSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationSink").finish_non_exhaustive()
    }
}
