// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The five states of a slide-to-confirm control.

/// Current phase of a slide-to-confirm control.
///
/// Exactly one state is current at any time. [`IdleDisabled`](Self::IdleDisabled)
/// and [`Triggered`](Self::Triggered) reject drag input; the other three accept it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlideState {
    /// Resting at the start of the track and not accepting input.
    #[default]
    IdleDisabled,
    /// Resting at the start of the track, ready to be dragged.
    IdleEnabled,
    /// Held by the pointer below the commit threshold.
    Dragging,
    /// Held by the pointer at or past the commit threshold.
    AtCommitZone,
    /// Released past the commit threshold; waiting for auto-reset.
    Triggered,
}

impl SlideState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::IdleDisabled,
        Self::IdleEnabled,
        Self::Dragging,
        Self::AtCommitZone,
        Self::Triggered,
    ];

    /// Returns the resting state matching an `enabled` flag.
    #[must_use]
    #[inline]
    pub const fn idle(enabled: bool) -> Self {
        if enabled {
            Self::IdleEnabled
        } else {
            Self::IdleDisabled
        }
    }

    /// Returns `true` if drag input is accepted in this state.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        match self {
            Self::IdleEnabled | Self::Dragging | Self::AtCommitZone => true,
            Self::IdleDisabled | Self::Triggered => false,
        }
    }

    /// Returns `true` while a pointer holds the handle.
    #[must_use]
    pub const fn is_holding(self) -> bool {
        matches!(self, Self::Dragging | Self::AtCommitZone)
    }

    /// Returns `true` for the two resting states.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::IdleDisabled | Self::IdleEnabled)
    }
}
