//! Timer scheduling for the session.
//!
//! A single-threaded, explicitly pumped timer wheel: registrations return a
//! [`TimerId`] handle, and the session drives the wheel by calling
//! [`Scheduler::due`] with the current time. Nothing fires spontaneously, so
//! tests control time completely, and `cancel_all` gives the session an
//! unconditional teardown point — after it, no wakeup can ever surface.
//!
//! The payload type is chosen by the owner; the session uses a wakeup enum in
//! place of boxed callbacks, and interprets each drained value itself.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use chrono::{DateTime, Duration, Utc};

/// Cancellation handle for a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    fire_at: DateTime<Utc>,
    /// Re-arm interval for repeating timers
    repeat: Option<Duration>,
    payload: T,
    /// Registration sequence, breaking ties between equal deadlines
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the earliest deadline (then the
        // earliest registration) pops first.
        other
            .fire_at
            .cmp(&self.fire_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Explicitly pumped timer wheel
#[derive(Debug)]
pub struct Scheduler<T> {
    entries: BinaryHeap<Entry<T>>,
    cancelled: HashSet<TimerId>,
    next_id: u64,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            entries: BinaryHeap::new(),
            cancelled: HashSet::new(),
            next_id: 0,
            next_seq: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, fire_at: DateTime<Utc>, repeat: Option<Duration>, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            id,
            fire_at,
            repeat,
            payload,
            seq,
        });
        id
    }

    /// Arm a one-shot timer firing `delay` after `now`.
    pub fn schedule_once(&mut self, now: DateTime<Utc>, delay: Duration, payload: T) -> TimerId {
        self.push(now + delay, None, payload)
    }

    /// Arm a repeating timer first firing `interval` after `now`.
    pub fn schedule_repeating(
        &mut self,
        now: DateTime<Utc>,
        interval: Duration,
        payload: T,
    ) -> TimerId {
        self.push(now + interval, Some(interval), payload)
    }

    /// Cancel a single timer. Returns `false` if the handle was already
    /// spent or cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if self.entries.iter().any(|e| e.id == id) {
            self.cancelled.insert(id)
        } else {
            false
        }
    }

    /// Cancel every outstanding timer. Session teardown calls this
    /// unconditionally.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
        self.cancelled.clear();
    }

    /// Number of armed (not cancelled) timers.
    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !self.cancelled.contains(&e.id))
            .count()
    }

    /// Pop every payload whose deadline has passed, earliest first.
    ///
    /// Repeating timers re-arm at `fire_at + interval` and keep their handle,
    /// so an interval can fire more than once in a single drain if the pump
    /// fell behind by several periods.
    pub fn due(&mut self, now: DateTime<Utc>) -> Vec<T>
    where
        T: Clone,
    {
        let mut fired = Vec::new();
        while let Some(entry) = self.entries.peek() {
            if entry.fire_at > now {
                break;
            }
            let entry = self.entries.pop().expect("peeked entry");
            if self.cancelled.remove(&entry.id) {
                continue;
            }
            fired.push(entry.payload.clone());
            // Non-positive intervals never re-arm; the drain must terminate.
            if let Some(interval) = entry.repeat.filter(|i| *i > Duration::zero()) {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.entries.push(Entry {
                    id: entry.id,
                    fire_at: entry.fire_at + interval,
                    repeat: Some(interval),
                    payload: entry.payload,
                    seq,
                });
            }
        }
        fired
    }
}
