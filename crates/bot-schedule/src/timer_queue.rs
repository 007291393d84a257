//! `TimerQueue`: sparse deadline-ordered queue of pending timer events.
//!
//! Entries are keyed by their absolute deadline on the timer clock.  Each
//! frame the simulation drains everything at or before "now" in deadline
//! order; entries sharing a deadline come out in insertion order.
//!
//! `BTreeMap` gives O(log D) insert and drain where D is the number of
//! distinct pending deadlines, which stays tiny (one per waving bot).

use std::collections::BTreeMap;

use bot_core::{BotId, Millis};

use crate::{TimerEvent, TimerRequest};

/// Pending timers for every bot in a simulation.
#[derive(Default)]
pub struct TimerQueue {
    inner: BTreeMap<Millis, Vec<(BotId, TimerEvent)>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `event` for `bot`, due at `deadline`.
    pub fn push(&mut self, deadline: Millis, bot: BotId, event: TimerEvent) {
        self.inner.entry(deadline).or_default().push((bot, event));
        self.total += 1;
    }

    /// File a buffered request made at `now`.
    #[inline]
    pub fn push_request(&mut self, now: Millis, bot: BotId, request: TimerRequest) {
        self.push(now.after(request.delay_ms), bot, request.event);
    }

    /// Remove and return every entry due at or before `now`.
    ///
    /// Returns an empty `Vec` without allocating when nothing is due.
    pub fn drain_due(&mut self, now: Millis) -> Vec<(BotId, TimerEvent)> {
        let mut due = Vec::new();
        while let Some(entry) = self.inner.first_entry() {
            if *entry.key() > now {
                break;
            }
            let batch = entry.remove();
            self.total -= batch.len();
            due.extend(batch);
        }
        due
    }

    /// The earliest pending deadline, or `None` if empty.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending entries.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
