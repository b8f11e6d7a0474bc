// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete notifications produced by the state machine.

use smallvec::SmallVec;

use crate::state::SlideState;

/// One notification emitted by a [`SlideMachine`](crate::SlideMachine) entry point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlideEvent {
    /// The current state changed to the contained value.
    ///
    /// Never emitted for a no-op assignment of the state already current.
    StateChanged(SlideState),
    /// A pointer took hold of the idle handle.
    DragStarted,
    /// The pointer holding the handle was released.
    DragEnded,
    /// The handle was released past the commit threshold.
    Completed,
}

/// Ordered events produced by a single entry point.
///
/// The largest burst is a commit (`DragEnded`, `StateChanged`, `Completed`),
/// so the inline capacity covers every entry point without allocating.
pub type SlideEvents = SmallVec<[SlideEvent; 4]>;
