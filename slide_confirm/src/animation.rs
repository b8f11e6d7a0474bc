// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset transitions for renderers.
//!
//! The state machine assigns the *target* offset immediately and records an
//! [`OffsetAnimation`] describing how a renderer should get there. Sampling is
//! pure: it only depends on the host time passed in.

use core::time::Duration;

/// Timing curve applied to a linear fraction in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Decelerating cubic.
    #[default]
    EaseOut,
    /// Accelerate then decelerate, cubic on both halves.
    EaseInOut,
}

impl Easing {
    /// Maps a linear fraction to an eased fraction. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn transform(self, fraction: f64) -> f64 {
        let t = if fraction.is_nan() {
            1.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = 2.0 - 2.0 * t;
                    1.0 - inv * inv * inv * 0.5
                }
            }
        }
    }
}

/// A single eased transition of a 1-D offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetAnimation {
    /// Offset at `started_at`.
    pub from: f64,
    /// Offset once the animation has finished.
    pub to: f64,
    /// Host time the transition began.
    pub started_at: Duration,
    /// Total length of the transition.
    pub duration: Duration,
    /// Curve applied over `duration`.
    pub easing: Easing,
}

impl OffsetAnimation {
    /// Returns the offset a renderer should draw at host time `now`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> f64 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.started_at);
        let fraction = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.transform(fraction)
    }

    /// Returns `true` once `now` is at or past the end of the transition.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.duration.is_zero() || now >= self.started_at.saturating_add(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.transform(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_at_midpoint() {
        assert_eq!(Easing::EaseInOut.transform(0.5), 0.5);
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.transform(0.25) > 0.25);
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(Easing::EaseOut.transform(-1.0), 0.0);
        assert_eq!(Easing::EaseOut.transform(3.0), 1.0);
    }

    #[test]
    fn sample_interpolates_between_endpoints() {
        let anim = OffsetAnimation {
            from: 0.0,
            to: 300.0,
            started_at: Duration::from_secs(1),
            duration: Duration::from_secs(2),
            easing: Easing::Linear,
        };
        assert_eq!(anim.sample(Duration::from_millis(900)), 0.0);
        assert_eq!(anim.sample(Duration::from_secs(2)), 150.0);
        assert_eq!(anim.sample(Duration::from_secs(3)), 300.0);
        assert!(anim.is_finished(Duration::from_secs(3)));
        assert!(!anim.is_finished(Duration::from_millis(2_999)));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let anim = OffsetAnimation {
            from: 120.0,
            to: 0.0,
            started_at: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::EaseOut,
        };
        assert_eq!(anim.sample(Duration::ZERO), 0.0);
    }
}
