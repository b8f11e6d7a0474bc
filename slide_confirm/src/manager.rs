// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session controller wrapping a [`SlideMachine`].
//!
//! [`SlideManager`] is what a host usually holds on to. It forwards input and
//! commands to the machine, runs the nudge excursion, mirrors the session
//! fields a renderer needs, and relays every machine event to host callbacks
//! synchronously and in order.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use core::time::Duration;
//! use std::rc::Rc;
//!
//! use slide_confirm::{NoFeedback, SlideConfig, SlideManager};
//!
//! let completions = Rc::new(Cell::new(0));
//! let mut manager = SlideManager::new(SlideConfig::DEFAULT, NoFeedback);
//! {
//!     let completions = completions.clone();
//!     manager.on_complete(move || completions.set(completions.get() + 1));
//! }
//!
//! manager.set_enabled(true, Duration::ZERO);
//! manager.set_track_width(356.0);
//! manager.drag_move(300.0);
//! manager.drag_end(Duration::from_millis(1_500));
//! assert_eq!(completions.get(), 1);
//! ```

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use kurbo::{Point, Rect};
use slide_confirm_timing::{TimerId, TimerQueue};

use crate::animation::{Easing, OffsetAnimation};
use crate::config::{ConfigError, SlideConfig};
use crate::event::{SlideEvent, SlideEvents};
use crate::feedback::{FeedbackPort, ImpactIntensity};
use crate::machine::SlideMachine;
use crate::state::SlideState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum NudgeTimer {
    Return,
}

#[derive(Default)]
struct Callbacks {
    state_change: Option<Box<dyn FnMut(SlideState)>>,
    complete: Option<Box<dyn FnMut()>>,
    drag_start: Option<Box<dyn FnMut()>>,
    drag_end: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("state_change", &self.state_change.is_some())
            .field("complete", &self.complete.is_some())
            .field("drag_start", &self.drag_start.is_some())
            .field("drag_end", &self.drag_end.is_some())
            .finish()
    }
}

/// Host-facing controller for one slide-to-confirm control.
///
/// After [`teardown`](Self::teardown) every command is a silent no-op, so
/// late calls during host disposal are harmless.
#[derive(Debug)]
pub struct SlideManager<F> {
    machine: SlideMachine<F>,
    is_holding: bool,
    nudge_offset: f64,
    nudge_animation: Option<OffsetAnimation>,
    nudge_timers: TimerQueue<NudgeTimer>,
    nudge_timer: Option<TimerId>,
    torn_down: bool,
    callbacks: Callbacks,
}

impl<F: FeedbackPort> SlideManager<F> {
    /// Creates a manager around a fresh, disabled machine.
    #[must_use]
    pub fn new(config: SlideConfig, feedback: F) -> Self {
        Self::with_machine(SlideMachine::new(config, feedback))
    }

    /// Creates a manager after checking the configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`SlideConfig::validate`].
    pub fn try_new(config: SlideConfig, feedback: F) -> Result<Self, ConfigError> {
        SlideMachine::try_new(config, feedback).map(Self::with_machine)
    }

    /// Wraps an existing machine.
    #[must_use]
    pub fn with_machine(machine: SlideMachine<F>) -> Self {
        Self {
            is_holding: machine.is_holding(),
            machine,
            nudge_offset: 0.0,
            nudge_animation: None,
            nudge_timers: TimerQueue::new(),
            nudge_timer: None,
            torn_down: false,
            callbacks: Callbacks::default(),
        }
    }

    /// Registers the callback invoked for every state change.
    pub fn on_state_change(&mut self, callback: impl FnMut(SlideState) + 'static) {
        self.callbacks.state_change = Some(Box::new(callback));
    }

    /// Registers the callback invoked when the action is confirmed.
    pub fn on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.complete = Some(Box::new(callback));
    }

    /// Registers the callback invoked when a pointer takes hold of the handle.
    pub fn on_drag_start(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.drag_start = Some(Box::new(callback));
    }

    /// Registers the callback invoked when the handle is released.
    pub fn on_drag_end(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.drag_end = Some(Box::new(callback));
    }

    /// The wrapped machine.
    #[must_use]
    pub fn machine(&self) -> &SlideMachine<F> {
        &self.machine
    }

    /// Current state of the wrapped machine.
    #[must_use]
    pub fn state(&self) -> SlideState {
        self.machine.state()
    }

    /// The `enabled` flag.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.machine.is_enabled()
    }

    /// `true` while a pointer holds the handle, as last relayed.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.is_holding
    }

    /// Target handle offset of the wrapped machine.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.machine.offset()
    }

    /// Target nudge offset, added on top of the handle offset.
    #[must_use]
    pub fn nudge_offset(&self) -> f64 {
        self.nudge_offset
    }

    /// The nudge transition in flight, if any.
    #[must_use]
    pub fn nudge_animation(&self) -> Option<&OffsetAnimation> {
        self.nudge_animation.as_ref()
    }

    /// Nudge offset a renderer should draw at the current host time.
    #[must_use]
    pub fn presented_nudge_offset(&self) -> f64 {
        match self.nudge_animation {
            Some(anim) => anim.sample(self.nudge_timers.now()),
            None => self.nudge_offset,
        }
    }

    /// Handle bounds including the presented nudge, once a track is measured.
    #[must_use]
    pub fn handle_rect(&self) -> Option<Rect> {
        self.machine.handle_rect(self.presented_nudge_offset())
    }

    /// Returns `true` once [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Earliest host time at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.machine.next_deadline(), self.nudge_timers.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Sets the `enabled` flag at host time `now`; the machine re-derives its
    /// idle state.
    pub fn set_enabled(&mut self, enabled: bool, now: Duration) {
        if self.torn_down {
            return;
        }
        let events = self.machine.set_enabled(enabled, now);
        self.relay(&events);
    }

    /// Forces the resting state matching the `enabled` flag.
    ///
    /// Safe mid-drag: the drag is abandoned without a drag-end notification.
    pub fn reset(&mut self, now: Duration) {
        if self.torn_down {
            return;
        }
        self.nudge_timers.advance(now);
        let events = self.machine.reset(now);
        self.relay(&events);
        self.cancel_nudge();
        self.is_holding = false;
    }

    /// Plays a short out-and-back offset excursion, starting at host time
    /// `now`, as a visual hint.
    ///
    /// Does nothing unless the control rests in [`SlideState::IdleEnabled`].
    /// Calling again mid-excursion restarts it.
    pub fn nudge(&mut self, now: Duration) {
        if self.torn_down || self.machine.state() != SlideState::IdleEnabled {
            return;
        }
        self.nudge_timers.advance(now);
        let timing = self.machine.config().timing;
        let distance = self.machine.config().visual.nudge_distance;
        log::debug!("nudge by {distance}");

        self.machine.feedback_mut().impact(ImpactIntensity::Light);
        if let Some(id) = self.nudge_timer.take() {
            self.nudge_timers.cancel(id);
        }
        self.animate_nudge(distance, timing.nudge_phase);
        self.nudge_timer = Some(
            self.nudge_timers
                .schedule_after(timing.nudge_phase, NudgeTimer::Return),
        );
    }

    /// Records the measured track width for this layout pass.
    pub fn set_track_width(&mut self, width: f64) {
        if self.torn_down {
            return;
        }
        let events = self.machine.set_track_width(width);
        self.relay(&events);
    }

    /// Begins a drag at `start`.
    pub fn drag_start(&mut self, start: Point) {
        if self.torn_down {
            return;
        }
        let events = self.machine.drag_start(start);
        self.relay(&events);
    }

    /// Reports the horizontal translation since the drag began.
    pub fn drag_move(&mut self, translation_x: f64) {
        if self.torn_down {
            return;
        }
        let events = self.machine.drag_move(translation_x);
        self.relay(&events);
    }

    /// Reports an absolute pointer position.
    pub fn pointer_move(&mut self, position: Point) {
        if self.torn_down {
            return;
        }
        let events = self.machine.pointer_move(position);
        self.relay(&events);
    }

    /// Releases the handle at host time `now`.
    pub fn drag_end(&mut self, now: Duration) {
        if self.torn_down {
            return;
        }
        let events = self.machine.drag_end(now);
        self.relay(&events);
    }

    /// Advances host time and runs every timer that came due.
    pub fn tick(&mut self, now: Duration) {
        if self.torn_down {
            return;
        }
        self.nudge_timers.advance(now);
        while let Some((id, timer)) = self.nudge_timers.pop_due() {
            match timer {
                NudgeTimer::Return => {
                    if self.nudge_timer == Some(id) {
                        self.nudge_timer = None;
                    }
                    let phase = self.machine.config().timing.nudge_phase;
                    self.animate_nudge(0.0, phase);
                }
            }
        }
        if self
            .nudge_animation
            .is_some_and(|anim| anim.is_finished(self.nudge_timers.now()))
        {
            self.nudge_animation = None;
        }
        let events = self.machine.tick(now);
        self.relay(&events);
    }

    /// Detaches the session: drops callbacks and pending timers.
    ///
    /// Every later command is ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        log::debug!("slide manager torn down");
        self.torn_down = true;
        self.callbacks = Callbacks::default();
        self.machine.cancel_timers();
        self.nudge_timers.clear();
        self.nudge_timer = None;
    }

    fn cancel_nudge(&mut self) {
        if let Some(id) = self.nudge_timer.take() {
            self.nudge_timers.cancel(id);
        }
        self.nudge_offset = 0.0;
        self.nudge_animation = None;
    }

    fn animate_nudge(&mut self, to: f64, duration: Duration) {
        let from = self.presented_nudge_offset();
        self.nudge_offset = to;
        self.nudge_animation = (from != to).then_some(OffsetAnimation {
            from,
            to,
            started_at: self.nudge_timers.now(),
            duration,
            easing: Easing::EaseOut,
        });
    }

    fn relay(&mut self, events: &SlideEvents) {
        for event in events {
            match *event {
                SlideEvent::StateChanged(state) => {
                    self.is_holding = state.is_holding();
                    if let Some(cb) = self.callbacks.state_change.as_mut() {
                        cb(state);
                    }
                }
                SlideEvent::DragStarted => {
                    if let Some(cb) = self.callbacks.drag_start.as_mut() {
                        cb();
                    }
                }
                SlideEvent::DragEnded => {
                    if let Some(cb) = self.callbacks.drag_end.as_mut() {
                        cb();
                    }
                }
                SlideEvent::Completed => {
                    if let Some(cb) = self.callbacks.complete.as_mut() {
                        cb();
                    }
                }
            }
        }
    }
}
