//! Alert construction and side channels.
//!
//! The [`Alerter`] is the single funnel every notification-worthy event goes
//! through. It builds the record, mirrors it to the optional JSONL sink, and
//! rings the audible cue. Both side channels are best-effort: a failed sink
//! write or a dead audio path is logged and swallowed, and can never delay or
//! fail the notification itself.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use tracing::warn;
use ulid::Ulid;

use crate::events::NotificationSink;
use crate::notification::{Notification, NotificationKind};

/// Short, non-blocking audible cue played on each emission
pub trait Chime {
    fn ring(&mut self) -> io::Result<()>;
}

/// Default cue: the terminal bell.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn ring(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

/// No-op cue for headless hosts and tests.
#[derive(Debug, Default)]
pub struct Silent;

impl Chime for Silent {
    fn ring(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds notifications and drives the best-effort side channels
pub struct Alerter {
    chime: Box<dyn Chime + Send>,
    sink: Option<NotificationSink>,
}

impl Alerter {
    pub fn new(chime: Box<dyn Chime + Send>) -> Self {
        Self { chime, sink: None }
    }

    /// Mirror every built notification into a JSONL sink.
    pub fn with_sink(mut self, sink: NotificationSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Construct a fresh, unread notification record.
    pub fn build(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> Notification {
        Notification {
            id: Ulid::new(),
            title: title.into(),
            message: message.into(),
            kind,
            timestamp: now,
            read: false,
        }
    }

    /// Fire the side channels for a just-created notification.
    ///
    /// Failures here are swallowed: emission is already complete from the
    /// caller's point of view.
    pub fn dispatch(&mut self, notification: &Notification) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = sink.emit(notification) {
                warn!(error = %err, "notification sink write failed");
            }
        }
        if let Err(err) = self.chime.ring() {
            warn!(error = %err, "audible cue failed");
        }
    }
}

impl std::fmt::Debug for Alerter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alerter")
            .field("sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}
