// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slide-to-confirm state machine.
//!
//! ## Usage
//!
//! 1) Build a [`SlideMachine`] from a [`SlideConfig`] and a [`FeedbackPort`].
//! 2) Report the measured track with [`SlideMachine::set_track_width`] on every layout pass.
//! 3) Feed pointer input through [`SlideMachine::drag_move`] and [`SlideMachine::drag_end`].
//! 4) Advance host time with [`SlideMachine::tick`] so the auto-reset can fire.
//!
//! Every entry point returns the [`SlideEvents`] it produced, in order.
//! Entry points that schedule a timer or start an offset transition take the
//! host time of the input, so a host that only ticks at
//! [`SlideMachine::next_deadline`] still gets the full delay.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use slide_confirm::{NoFeedback, SlideConfig, SlideEvent, SlideMachine, SlideState};
//!
//! let mut machine = SlideMachine::new(SlideConfig::DEFAULT, NoFeedback);
//! machine.set_enabled(true, Duration::ZERO);
//! machine.set_track_width(356.0); // 300px of travel
//!
//! machine.drag_move(280.0);
//! assert_eq!(machine.state(), SlideState::AtCommitZone);
//!
//! // Released ten seconds into the session.
//! let events = machine.drag_end(Duration::from_secs(10));
//! assert_eq!(
//!     events.as_slice(),
//!     &[
//!         SlideEvent::DragEnded,
//!         SlideEvent::StateChanged(SlideState::Triggered),
//!         SlideEvent::Completed,
//!     ]
//! );
//!
//! // Two seconds later the control returns to idle on its own.
//! machine.tick(Duration::from_millis(11_999));
//! assert_eq!(machine.state(), SlideState::Triggered);
//! machine.tick(Duration::from_secs(12));
//! assert_eq!(machine.state(), SlideState::IdleEnabled);
//! ```

use core::time::Duration;

use kurbo::{Point, Rect};
use slide_confirm_timing::{TimerId, TimerQueue};

use crate::animation::{Easing, OffsetAnimation};
use crate::config::{ConfigError, SlideConfig};
use crate::event::{SlideEvent, SlideEvents};
use crate::feedback::{FeedbackPort, ImpactIntensity};
use crate::geometry::{DragProgress, TrackGeometry};
use crate::state::SlideState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MachineTimer {
    AutoReset,
}

/// Ephemeral record of the pointer currently holding the handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    start: Point,
    translation_x: f64,
    progress: DragProgress,
}

impl DragSession {
    /// Pointer position where the drag began.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Raw horizontal translation of the last move, before clamping.
    #[must_use]
    pub fn translation_x(&self) -> f64 {
        self.translation_x
    }

    /// Clamped offset and progress computed from the last move.
    #[must_use]
    pub fn progress(&self) -> DragProgress {
        self.progress
    }
}

/// Gesture-driven state machine for one slide-to-confirm control.
///
/// The machine exclusively owns the current [`SlideState`] and the handle
/// offset. It never reads a clock: host time enters through [`tick`](Self::tick),
/// and the auto-reset timer is scheduled relative to the last observed time.
#[derive(Debug)]
pub struct SlideMachine<F> {
    config: SlideConfig,
    feedback: F,
    state: SlideState,
    enabled: bool,
    offset: f64,
    track: Option<TrackGeometry>,
    session: Option<DragSession>,
    timers: TimerQueue<MachineTimer>,
    reset_timer: Option<TimerId>,
    animation: Option<OffsetAnimation>,
}

impl<F: FeedbackPort> SlideMachine<F> {
    /// Creates a disabled machine resting at the start of the track.
    ///
    /// The configuration is used as given and a violation is only logged; see
    /// [`try_new`](Self::try_new) for a validating constructor. Even then a
    /// release never commits without some handle travel.
    #[must_use]
    pub fn new(config: SlideConfig, feedback: F) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("slide configuration used despite error: {err}");
        }
        Self {
            config,
            feedback,
            state: SlideState::IdleDisabled,
            enabled: false,
            offset: 0.0,
            track: None,
            session: None,
            timers: TimerQueue::new(),
            reset_timer: None,
            animation: None,
        }
    }

    /// Creates a machine after checking the configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`SlideConfig::validate`].
    pub fn try_new(config: SlideConfig, feedback: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, feedback))
    }

    /// Returns the configuration supplied at construction.
    #[must_use]
    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Returns the current state.
    #[must_use]
    #[inline]
    pub fn state(&self) -> SlideState {
        self.state
    }

    /// Returns the `enabled` flag.
    ///
    /// While a drag is in progress this may disagree with [`state`](Self::state):
    /// a disable is deferred until the pointer is released.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` while a pointer holds the handle.
    #[must_use]
    #[inline]
    pub fn is_holding(&self) -> bool {
        self.state.is_holding()
    }

    /// Target handle offset, in `[0, max_offset]`.
    #[must_use]
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Progress of the current target offset along the track.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self.session {
            Some(session) => session.progress.progress,
            None => match self.track {
                Some(track) if track.has_travel() => self.offset / track.max_offset(),
                _ => 0.0,
            },
        }
    }

    /// The active drag session, if a pointer holds the handle.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The most recently measured track, if any.
    #[must_use]
    pub fn track(&self) -> Option<&TrackGeometry> {
        self.track.as_ref()
    }

    /// The most recent offset transition, if one was started.
    #[must_use]
    pub fn offset_animation(&self) -> Option<&OffsetAnimation> {
        self.animation.as_ref()
    }

    /// Offset a renderer should draw at the current host time.
    #[must_use]
    pub fn presented_offset(&self) -> f64 {
        match self.animation {
            Some(anim) => anim.sample(self.timers.now()),
            None => self.offset,
        }
    }

    /// Handle bounds at the presented offset plus an additive nudge.
    ///
    /// Returns `None` until a track has been measured.
    #[must_use]
    pub fn handle_rect(&self, nudge: f64) -> Option<Rect> {
        self.track
            .map(|track| track.handle_rect(self.presented_offset(), nudge))
    }

    /// Returns `true` while the auto-reset timer is pending.
    #[must_use]
    pub fn auto_reset_pending(&self) -> bool {
        self.reset_timer
            .is_some_and(|id| self.timers.is_pending(id))
    }

    /// Most recently observed host time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Earliest host time at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Returns the injected feedback port.
    #[must_use]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Returns the injected feedback port mutably.
    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Records the measured track width for this layout pass.
    ///
    /// The offset is re-clamped to the new travel. While held, progress and
    /// the commit-zone state are re-derived from the last translation.
    pub fn set_track_width(&mut self, width: f64) -> SlideEvents {
        self.set_track(TrackGeometry::from_width(width, &self.config))
    }

    /// Records a fully measured track geometry.
    pub fn set_track(&mut self, track: TrackGeometry) -> SlideEvents {
        let mut events = SlideEvents::new();
        if self.track == Some(track) {
            return events;
        }
        self.track = Some(track);
        let max = track.max_offset().max(0.0);

        if let Some(mut session) = self.session {
            session.progress = track.drag(session.translation_x);
            self.session = Some(session);
            self.offset = session.progress.offset;
            let zone = self.zone_for(session.progress.progress);
            self.set_state(zone, &mut events);
        } else if self.state == SlideState::Triggered {
            self.offset = max;
        } else {
            self.offset = self.offset.clamp(0.0, max);
        }
        // Layout changes snap; any transition in flight is stale.
        self.animation = None;
        events
    }

    /// Sets the `enabled` flag at host time `now`.
    ///
    /// A resting or triggered control re-derives its idle state immediately
    /// (any pending auto-reset becomes moot). While a pointer holds the
    /// handle the change is deferred until [`drag_end`](Self::drag_end).
    pub fn set_enabled(&mut self, enabled: bool, now: Duration) -> SlideEvents {
        let mut events = SlideEvents::new();
        if self.enabled == enabled {
            return events;
        }
        self.enabled = enabled;
        if self.state.is_holding() {
            log::debug!("enabled={enabled} deferred until drag ends");
            return events;
        }
        self.timers.advance(now);
        self.cancel_auto_reset();
        self.set_state(SlideState::idle(enabled), &mut events);
        self.animate_offset(0.0, self.config.timing.spring_back, Easing::EaseOut);
        events
    }

    /// Begins a drag at `start`.
    ///
    /// Ignored unless the control rests in [`SlideState::IdleEnabled`].
    pub fn drag_start(&mut self, start: Point) -> SlideEvents {
        let mut events = SlideEvents::new();
        self.begin_session(start, &mut events);
        events
    }

    /// Reports the horizontal translation of the pointer since the drag began.
    ///
    /// Ignored in non-interactive states. A move on a resting enabled control
    /// starts a session at the origin first.
    pub fn drag_move(&mut self, translation_x: f64) -> SlideEvents {
        let mut events = SlideEvents::new();
        if !self.state.is_interactive() {
            return events;
        }
        if self.session.is_none() {
            self.begin_session(Point::ZERO, &mut events);
        }
        let progress = match self.track {
            Some(track) => track.drag(translation_x),
            None => DragProgress::ZERO,
        };
        let Some(session) = self.session.as_mut() else {
            return events;
        };
        session.translation_x = translation_x;
        session.progress = progress;
        self.offset = progress.offset;
        self.animation = None;
        log::trace!(
            "drag offset {:.1} progress {:.3}",
            progress.offset,
            progress.progress
        );
        let zone = self.zone_for(progress.progress);
        self.set_state(zone, &mut events);
        events
    }

    /// Reports an absolute pointer position, deriving the translation from
    /// the session start. Starts a session at `position` if none is active.
    pub fn pointer_move(&mut self, position: Point) -> SlideEvents {
        match self.session {
            Some(session) => self.drag_move(position.x - session.start.x),
            None => self.drag_start(position),
        }
    }

    /// Releases the handle at host time `now`.
    ///
    /// Commits when the progress of the last move reached the commit
    /// threshold, otherwise springs back. The auto-reset delay and the
    /// settle transition both start at `now`. Ignored when nothing is held.
    pub fn drag_end(&mut self, now: Duration) -> SlideEvents {
        let mut events = SlideEvents::new();
        let Some(session) = self.session.take() else {
            return events;
        };
        self.timers.advance(now);
        events.push(SlideEvent::DragEnded);

        let progress = session.progress.progress;
        if self.reaches_commit(progress) {
            log::debug!("committed at progress {progress:.3}");
            self.set_state(SlideState::Triggered, &mut events);
            let max = self.track.map_or(0.0, |t| t.max_offset().max(0.0));
            self.animate_offset(max, self.config.timing.animation, Easing::EaseInOut);
            self.feedback.impact(ImpactIntensity::Medium);
            events.push(SlideEvent::Completed);
            self.cancel_auto_reset();
            self.reset_timer = Some(
                self.timers
                    .schedule_after(self.config.timing.reset_delay, MachineTimer::AutoReset),
            );
        } else {
            log::debug!("cancelled at progress {progress:.3}");
            self.set_state(SlideState::idle(self.enabled), &mut events);
            self.animate_offset(0.0, self.config.timing.spring_back, Easing::EaseOut);
        }
        events
    }

    /// Forces the resting state matching the `enabled` flag at host time `now`.
    ///
    /// Abandons any drag in progress without emitting
    /// [`SlideEvent::DragEnded`], and cancels a pending auto-reset.
    pub fn reset(&mut self, now: Duration) -> SlideEvents {
        let mut events = SlideEvents::new();
        self.timers.advance(now);
        if self.session.take().is_some() {
            log::debug!("reset abandoned an active drag");
        }
        self.cancel_auto_reset();
        self.set_state(SlideState::idle(self.enabled), &mut events);
        self.animate_offset(0.0, self.config.timing.spring_back, Easing::EaseOut);
        events
    }

    /// Advances host time to `now` and runs every timer that came due.
    pub fn tick(&mut self, now: Duration) -> SlideEvents {
        let mut events = SlideEvents::new();
        self.timers.advance(now);
        while let Some((id, timer)) = self.timers.pop_due() {
            match timer {
                MachineTimer::AutoReset => self.fire_auto_reset(id, &mut events),
            }
        }
        if self
            .animation
            .is_some_and(|anim| anim.is_finished(self.timers.now()))
        {
            self.animation = None;
        }
        events
    }

    /// Drops pending timers without running them.
    pub(crate) fn cancel_timers(&mut self) {
        self.timers.clear();
        self.reset_timer = None;
    }

    fn fire_auto_reset(&mut self, id: TimerId, events: &mut SlideEvents) {
        if self.reset_timer == Some(id) {
            self.reset_timer = None;
        }
        if self.state != SlideState::Triggered {
            log::trace!("stale auto-reset ignored in {:?}", self.state);
            return;
        }
        log::debug!("auto-reset after {:?}", self.config.timing.reset_delay);
        self.set_state(SlideState::idle(self.enabled), events);
        self.animate_offset(0.0, self.config.timing.spring_back, Easing::EaseOut);
    }

    fn begin_session(&mut self, start: Point, events: &mut SlideEvents) {
        if self.state != SlideState::IdleEnabled {
            return;
        }
        self.session = Some(DragSession {
            start,
            translation_x: 0.0,
            progress: DragProgress::ZERO,
        });
        self.offset = 0.0;
        self.animation = None;
        self.set_state(SlideState::Dragging, events);
        events.push(SlideEvent::DragStarted);
    }

    fn zone_for(&self, progress: f64) -> SlideState {
        if self.reaches_commit(progress) {
            SlideState::AtCommitZone
        } else {
            SlideState::Dragging
        }
    }

    /// A commit needs real travel, whatever the configured threshold.
    fn reaches_commit(&self, progress: f64) -> bool {
        progress > 0.0 && progress >= self.config.thresholds.commit
    }

    fn set_state(&mut self, state: SlideState, events: &mut SlideEvents) {
        if self.state == state {
            return;
        }
        log::debug!("{:?} -> {:?}", self.state, state);
        self.state = state;
        events.push(SlideEvent::StateChanged(state));
    }

    fn animate_offset(&mut self, to: f64, duration: Duration, easing: Easing) {
        let from = self.presented_offset();
        self.offset = to;
        self.animation = (from != to).then_some(OffsetAnimation {
            from,
            to,
            started_at: self.timers.now(),
            duration,
            easing,
        });
    }

    fn cancel_auto_reset(&mut self) {
        if let Some(id) = self.reset_timer.take() {
            self.timers.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::NoFeedback;

    fn ready() -> SlideMachine<NoFeedback> {
        let mut m = SlideMachine::new(SlideConfig::DEFAULT, NoFeedback);
        m.set_enabled(true, Duration::ZERO);
        m.set_track_width(356.0);
        m
    }

    #[test]
    fn starts_disabled_at_rest() {
        let m = SlideMachine::new(SlideConfig::DEFAULT, NoFeedback);
        assert_eq!(m.state(), SlideState::IdleDisabled);
        assert!(!m.is_enabled());
        assert_eq!(m.offset(), 0.0);
        assert!(m.session().is_none());
    }

    #[test]
    fn try_new_rejects_invalid_config() {
        let bad = SlideConfig::DEFAULT.with_commit_threshold(0.0);
        assert!(SlideMachine::try_new(bad, NoFeedback).is_err());
    }

    #[test]
    fn drag_start_emits_state_then_started() {
        let mut m = ready();
        let events = m.drag_start(Point::new(10.0, 20.0));
        assert_eq!(
            events.as_slice(),
            &[
                SlideEvent::StateChanged(SlideState::Dragging),
                SlideEvent::DragStarted
            ]
        );
        assert_eq!(m.session().map(DragSession::start), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn second_drag_start_is_ignored() {
        let mut m = ready();
        m.drag_start(Point::ZERO);
        assert!(m.drag_start(Point::ZERO).is_empty());
    }

    #[test]
    fn pointer_move_uses_session_start() {
        let mut m = ready();
        m.pointer_move(Point::new(40.0, 10.0));
        m.pointer_move(Point::new(190.0, 14.0));
        assert_eq!(m.offset(), 150.0);
        assert_eq!(m.progress(), 0.5);
    }

    #[test]
    fn move_without_track_stays_at_start() {
        let mut m = SlideMachine::new(SlideConfig::DEFAULT, NoFeedback);
        m.set_enabled(true, Duration::ZERO);
        m.drag_move(200.0);
        assert_eq!(m.state(), SlideState::Dragging);
        assert_eq!(m.offset(), 0.0);
        m.drag_end(Duration::ZERO);
        assert_eq!(m.state(), SlideState::IdleEnabled);
    }

    #[test]
    fn widening_track_rederives_commit_zone() {
        let mut m = ready();
        m.drag_move(280.0);
        assert_eq!(m.state(), SlideState::AtCommitZone);
        // 456px track: 400px travel, so 280px is now 70%.
        let events = m.set_track_width(456.0);
        assert_eq!(
            events.as_slice(),
            &[SlideEvent::StateChanged(SlideState::Dragging)]
        );
        assert_eq!(m.offset(), 280.0);
    }

    #[test]
    fn end_without_session_is_ignored() {
        let mut m = ready();
        assert!(m.drag_end(Duration::ZERO).is_empty());
        assert_eq!(m.state(), SlideState::IdleEnabled);
    }

    #[test]
    fn commit_animates_to_end_of_travel() {
        let mut m = ready();
        m.drag_move(280.0);
        m.drag_end(Duration::ZERO);
        assert_eq!(m.offset(), 300.0);
        let anim = m.offset_animation().copied();
        assert_eq!(anim.map(|a| (a.from, a.to)), Some((280.0, 300.0)));
        assert_eq!(anim.map(|a| a.easing), Some(Easing::EaseInOut));
        assert!(m.auto_reset_pending());
    }

    #[test]
    fn cancel_springs_back() {
        let mut m = ready();
        m.drag_move(100.0);
        m.drag_end(Duration::ZERO);
        assert_eq!(m.offset(), 0.0);
        let anim = m.offset_animation().copied();
        assert_eq!(anim.map(|a| (a.from, a.to)), Some((100.0, 0.0)));
        assert_eq!(m.presented_offset(), 100.0);
        m.tick(Duration::from_millis(250));
        assert_eq!(m.presented_offset(), 0.0);
        assert!(m.offset_animation().is_none());
    }

    #[test]
    fn disabling_from_triggered_cancels_auto_reset() {
        let mut m = ready();
        m.drag_move(300.0);
        m.drag_end(Duration::ZERO);
        m.set_enabled(false, Duration::ZERO);
        assert_eq!(m.state(), SlideState::IdleDisabled);
        assert!(!m.auto_reset_pending());
        assert_eq!(m.next_deadline(), None);
    }

    #[test]
    fn release_schedules_from_input_time() {
        let mut m = ready();
        m.drag_move(300.0);
        m.drag_end(Duration::from_secs(10));
        assert_eq!(m.now(), Duration::from_secs(10));
        assert_eq!(m.next_deadline(), Some(Duration::from_secs(12)));
        let anim = m.offset_animation().copied();
        assert_eq!(anim.map(|a| a.started_at), Some(Duration::from_secs(10)));
    }

    #[test]
    fn zero_threshold_never_commits_without_travel() {
        let config = SlideConfig::DEFAULT.with_commit_threshold(0.0);
        let mut m = SlideMachine::new(config, NoFeedback);
        m.set_enabled(true, Duration::ZERO);
        m.set_track_width(40.0);
        m.drag_move(500.0);
        assert_eq!(m.state(), SlideState::Dragging);
        m.drag_end(Duration::ZERO);
        assert_eq!(m.state(), SlideState::IdleEnabled);

        m.set_track_width(356.0);
        m.drag_move(0.0);
        m.drag_end(Duration::ZERO);
        assert_eq!(m.state(), SlideState::IdleEnabled);
    }
}
