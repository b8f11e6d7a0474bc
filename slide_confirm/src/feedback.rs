// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injected haptic feedback capability.

/// Strength of a haptic impact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImpactIntensity {
    /// Subtle tick, used for nudges.
    Light,
    /// Firm confirmation, used on completion.
    Medium,
}

/// Host-supplied sink for haptic feedback requests.
///
/// The kernel only *requests* feedback; playback belongs to the host platform.
pub trait FeedbackPort {
    /// Plays (or records) a single impact.
    fn impact(&mut self, intensity: ImpactIntensity);
}

/// Discards every request.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoFeedback;

impl FeedbackPort for NoFeedback {
    fn impact(&mut self, _intensity: ImpactIntensity) {}
}

/// Any `FnMut(ImpactIntensity)` closure is a feedback port.
impl<F: FnMut(ImpactIntensity)> FeedbackPort for F {
    fn impact(&mut self, intensity: ImpactIntensity) {
        self(intensity);
    }
}
