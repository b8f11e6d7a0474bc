// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

/// Handle to a scheduled one-shot timer.
///
/// Ids are unique for the lifetime of a [`TimerQueue`] and are never reused,
/// so a stale id held after its timer fired or was cancelled can never alias a
/// newer timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw sequence number of this id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    deadline: Duration,
    id: TimerId,
    payload: T,
}

/// Deadline-ordered queue of one-shot timers driven by a host clock.
///
/// Timers sharing a deadline fire in the order they were scheduled.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    // Sorted by `(deadline, id)`.
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue whose clock starts at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Returns the most recently observed host time.
    #[must_use]
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves the clock forward to `now`.
    ///
    /// Time never goes backwards: an earlier `now` is ignored.
    pub fn advance(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Schedules `payload` to fire `delay` after the current clock.
    pub fn schedule_after(&mut self, delay: Duration, payload: T) -> TimerId {
        let deadline = self.now.saturating_add(delay);
        self.schedule_at(deadline, payload)
    }

    /// Schedules `payload` to fire at the absolute host time `deadline`.
    ///
    /// A deadline in the past is due immediately.
    pub fn schedule_at(&mut self, deadline: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Fresh ids are the largest so far, so ties land after existing entries.
        let index = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            index,
            Entry {
                deadline,
                id,
                payload,
            },
        );
        log::trace!("timer {} scheduled at {:?}", id.0, deadline);
        id
    }

    /// Cancels a pending timer.
    ///
    /// Returns `true` if the timer was pending. Cancelling a timer that
    /// already fired or was already cancelled is a no-op returning `false`.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                log::trace!("timer {} cancelled", id.0);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer whose deadline has passed.
    ///
    /// Call repeatedly after [`advance`](Self::advance) until it returns `None`.
    pub fn pop_due(&mut self) -> Option<(TimerId, T)> {
        let due = self.entries.first().is_some_and(|e| e.deadline <= self.now);
        if !due {
            return None;
        }
        let entry = self.entries.remove(0);
        log::trace!("timer {} fired at {:?}", entry.id.0, self.now);
        Some((entry.id, entry.payload))
    }

    /// Returns the number of pending timers.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending timer without firing it.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
