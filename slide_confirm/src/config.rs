// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable configuration for a slide-to-confirm control.
//!
//! A [`SlideConfig`] is a plain value supplied at construction and never
//! mutated afterwards. The named presets ([`SlideConfig::DEFAULT`],
//! [`SlideConfig::COMPACT`], [`SlideConfig::LARGE`] and their mirrored
//! counterparts) are just different literal values.

use core::time::Duration;

use thiserror::Error;

/// Physical dimensions of the track and handle, in logical pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Height of the track.
    pub height: f64,
    /// Gap between the track edge and the handle, applied on both sides.
    pub horizontal_padding: f64,
    /// Diameter of the (square) handle.
    pub handle_size: f64,
    /// Corner radius of the track.
    pub corner_radius: f64,
}

/// Progress fractions of the maximum handle travel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Minimum progress at release that triggers completion. Must lie in `(0, 1]`.
    pub commit: f64,
    /// Progress below which the handle is considered back in the start area.
    ///
    /// Must lie in `[0, commit)`. The state machine itself only consults
    /// [`commit`](Self::commit); hosts may use this to fade start-area hints.
    pub cancel: f64,
}

/// Animation and scheduling durations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    /// Duration of the slide to the end of the track after a commit.
    pub animation: Duration,
    /// Duration of the slide back to the start after a cancel or reset.
    pub spring_back: Duration,
    /// Duration of each of the two nudge phases (out and back).
    pub nudge_phase: Duration,
    /// Delay between completion and the automatic return to idle.
    pub reset_delay: Duration,
}

/// Visual deltas consumed by renderers and the nudge scheduler.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visual {
    /// Peak distance of a nudge excursion.
    pub nudge_distance: f64,
    /// Shadow blur radius of the enabled track.
    pub shadow_radius: f64,
    /// Vertical shadow offset of the enabled track.
    pub shadow_offset: f64,
    /// Place the handle from the trailing edge (right-to-left layouts).
    ///
    /// Only handle placement reads this; drag input is always a
    /// start-to-end translation.
    pub mirrored: bool,
}

/// Complete configuration for one control.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideConfig {
    /// Track and handle dimensions.
    pub layout: Layout,
    /// Commit and cancel thresholds.
    pub thresholds: Thresholds,
    /// Animation and scheduling durations.
    pub timing: Timing,
    /// Visual deltas.
    pub visual: Visual,
}

/// Reason a [`SlideConfig`] was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The commit threshold is outside `(0, 1]`.
    #[error("commit threshold {0} is outside (0, 1]")]
    CommitThreshold(f64),
    /// The cancel threshold is outside `[0, commit)`.
    #[error("cancel threshold {cancel} must lie in [0, {commit})")]
    CancelThreshold {
        /// The offending cancel threshold.
        cancel: f64,
        /// The configured commit threshold.
        commit: f64,
    },
    /// A layout or visual dimension is negative or not finite.
    #[error("dimension `{name}` must be finite and non-negative, got {value}")]
    Dimension {
        /// Field name of the dimension.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A nudge phase of zero would collapse the excursion into a jump.
    #[error("nudge phase duration must be non-zero")]
    ZeroNudgePhase,
}

impl SlideConfig {
    /// Standard size.
    pub const DEFAULT: Self = Self {
        layout: Layout {
            height: 56.0,
            horizontal_padding: 4.0,
            handle_size: 48.0,
            corner_radius: 28.0,
        },
        thresholds: Thresholds {
            commit: 0.9,
            cancel: 0.1,
        },
        timing: Timing {
            animation: Duration::from_millis(300),
            spring_back: Duration::from_millis(250),
            nudge_phase: Duration::from_millis(100),
            reset_delay: Duration::from_secs(2),
        },
        visual: Visual {
            nudge_distance: 8.0,
            shadow_radius: 4.0,
            shadow_offset: 2.0,
            mirrored: false,
        },
    };

    /// Shorter track and smaller handle.
    pub const COMPACT: Self = Self::DEFAULT.with_size(44.0, 36.0, 6.0);

    /// Taller track and larger handle.
    pub const LARGE: Self = Self::DEFAULT.with_size(64.0, 56.0, 10.0);

    /// [`DEFAULT`](Self::DEFAULT) for right-to-left layouts.
    pub const DEFAULT_MIRRORED: Self = Self::DEFAULT.mirrored();

    /// [`COMPACT`](Self::COMPACT) for right-to-left layouts.
    pub const COMPACT_MIRRORED: Self = Self::COMPACT.mirrored();

    /// [`LARGE`](Self::LARGE) for right-to-left layouts.
    pub const LARGE_MIRRORED: Self = Self::LARGE.mirrored();

    const fn with_size(self, height: f64, handle_size: f64, nudge_distance: f64) -> Self {
        let mut out = self;
        out.layout.height = height;
        out.layout.handle_size = handle_size;
        out.visual.nudge_distance = nudge_distance;
        out
    }

    /// Returns a copy with [`Visual::mirrored`] flipped on.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        let mut out = self;
        out.visual.mirrored = true;
        out
    }

    /// Returns a copy with a different commit threshold.
    #[must_use]
    pub const fn with_commit_threshold(self, commit: f64) -> Self {
        let mut out = self;
        out.thresholds.commit = commit;
        out
    }

    /// Returns a copy with a different auto-reset delay.
    #[must_use]
    pub const fn with_reset_delay(self, delay: Duration) -> Self {
        let mut out = self;
        out.timing.reset_delay = delay;
        out
    }

    /// Checks the invariants every consumer of this configuration relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Thresholds { commit, cancel } = self.thresholds;
        if !(commit > 0.0 && commit <= 1.0) {
            return Err(ConfigError::CommitThreshold(commit));
        }
        if !(cancel >= 0.0 && cancel < commit) {
            return Err(ConfigError::CancelThreshold { cancel, commit });
        }
        let dimensions = [
            ("height", self.layout.height),
            ("horizontal_padding", self.layout.horizontal_padding),
            ("handle_size", self.layout.handle_size),
            ("corner_radius", self.layout.corner_radius),
            ("nudge_distance", self.visual.nudge_distance),
            ("shadow_radius", self.visual.shadow_radius),
            ("shadow_offset", self.visual.shadow_offset),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Dimension { name, value });
            }
        }
        if self.timing.nudge_phase.is_zero() {
            return Err(ConfigError::ZeroNudgePhase);
        }
        Ok(())
    }
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for config in [
            SlideConfig::DEFAULT,
            SlideConfig::COMPACT,
            SlideConfig::LARGE,
            SlideConfig::DEFAULT_MIRRORED,
            SlideConfig::COMPACT_MIRRORED,
            SlideConfig::LARGE_MIRRORED,
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn compact_and_large_only_change_size() {
        let compact = SlideConfig::COMPACT;
        assert_eq!(compact.layout.height, 44.0);
        assert_eq!(compact.layout.handle_size, 36.0);
        assert_eq!(compact.visual.nudge_distance, 6.0);
        assert_eq!(compact.thresholds, SlideConfig::DEFAULT.thresholds);
        assert_eq!(compact.timing, SlideConfig::DEFAULT.timing);

        let large = SlideConfig::LARGE;
        assert_eq!(large.layout.height, 64.0);
        assert_eq!(large.layout.handle_size, 56.0);
        assert_eq!(large.visual.nudge_distance, 10.0);
    }

    #[test]
    fn mirrored_presets_differ_only_in_flag() {
        let mut unmirrored = SlideConfig::LARGE_MIRRORED;
        assert!(unmirrored.visual.mirrored);
        unmirrored.visual.mirrored = false;
        assert_eq!(unmirrored, SlideConfig::LARGE);
    }

    #[test]
    fn commit_threshold_bounds() {
        assert_eq!(
            SlideConfig::DEFAULT.with_commit_threshold(0.0).validate(),
            Err(ConfigError::CommitThreshold(0.0))
        );
        assert_eq!(
            SlideConfig::DEFAULT.with_commit_threshold(1.5).validate(),
            Err(ConfigError::CommitThreshold(1.5))
        );
        assert!(
            SlideConfig::DEFAULT
                .with_commit_threshold(f64::NAN)
                .validate()
                .is_err()
        );
        assert_eq!(
            SlideConfig::DEFAULT.with_commit_threshold(1.0).validate(),
            Ok(())
        );
    }

    #[test]
    fn cancel_must_stay_below_commit() {
        let mut config = SlideConfig::DEFAULT;
        config.thresholds.cancel = 0.95;
        assert_eq!(
            config.validate(),
            Err(ConfigError::CancelThreshold {
                cancel: 0.95,
                commit: 0.9
            })
        );
    }

    #[test]
    fn negative_dimension_is_rejected() {
        let mut config = SlideConfig::DEFAULT;
        config.layout.handle_size = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Dimension {
                name: "handle_size",
                value: -1.0
            })
        );
    }

    #[test]
    fn zero_nudge_phase_is_rejected() {
        let mut config = SlideConfig::DEFAULT;
        config.timing.nudge_phase = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroNudgePhase));
    }
}
