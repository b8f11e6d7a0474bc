// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide Confirm Timing: host-driven one-shot timers for headless UI state machines.
//!
//! This crate provides [`TimerQueue`], a small deadline-ordered queue of
//! one-shot timers. It never reads a clock and never spawns anything. Instead,
//! the host owns time:
//!
//! - The host calls [`TimerQueue::advance`] with a monotonic "now" (any fixed
//!   epoch works, as long as it never goes backwards).
//! - State machines schedule timers relative to the last observed "now" with
//!   [`TimerQueue::schedule_after`] and keep the returned [`TimerId`].
//! - The host drains expired timers with [`TimerQueue::pop_due`] and routes the
//!   payloads back into the owning state machine on the same thread.
//! - [`TimerQueue::next_deadline`] tells the host when to wake up next.
//!
//! Cancellation is real: a cancelled timer is removed from the queue and its
//! payload is dropped, so it can never be observed by [`TimerQueue::pop_due`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use slide_confirm_timing::TimerQueue;
//!
//! #[derive(Debug, PartialEq)]
//! enum Tick {
//!     AutoReset,
//!     NudgeReturn,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.advance(Duration::from_millis(1_000));
//!
//! let reset = timers.schedule_after(Duration::from_secs(2), Tick::AutoReset);
//! let nudge = timers.schedule_after(Duration::from_millis(100), Tick::NudgeReturn);
//! assert_eq!(timers.next_deadline(), Some(Duration::from_millis(1_100)));
//!
//! // The user pressed "reset": the auto-reset must never fire.
//! assert!(timers.cancel(reset));
//!
//! timers.advance(Duration::from_secs(10));
//! assert_eq!(timers.pop_due(), Some((nudge, Tick::NudgeReturn)));
//! assert_eq!(timers.pop_due(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{TimerId, TimerQueue};
