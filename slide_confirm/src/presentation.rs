// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text and glyph selection for renderers.

use crate::state::SlideState;

/// Which glyph the handle shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleGlyph {
    /// Forward chevrons inviting a drag.
    Chevron,
    /// Checkmark once release would (or did) confirm.
    Checkmark,
}

impl HandleGlyph {
    /// Returns the glyph for `state`.
    #[must_use]
    pub const fn for_state(state: SlideState) -> Self {
        match state {
            SlideState::IdleDisabled | SlideState::IdleEnabled | SlideState::Dragging => {
                Self::Chevron
            }
            SlideState::AtCommitZone | SlideState::Triggered => Self::Checkmark,
        }
    }
}

/// Host-supplied copy shown on the track.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlideLabels<'a> {
    /// Call to action, always shown.
    pub primary: &'a str,
    /// Instruction shown while resting or dragging.
    pub instruction: &'a str,
    /// Instruction shown in the commit zone.
    pub release_instruction: &'a str,
}

impl SlideLabels<'static> {
    /// Placeholder English copy.
    pub const DEFAULT: Self = Self {
        primary: "CTA Text Here",
        instruction: "slide to confirm",
        release_instruction: "release to confirm",
    };
}

impl Default for SlideLabels<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'a> SlideLabels<'a> {
    /// Instruction line for `state`; empty once triggered.
    #[must_use]
    pub const fn instruction_for(&self, state: SlideState) -> &'a str {
        match state {
            SlideState::IdleDisabled | SlideState::IdleEnabled | SlideState::Dragging => {
                self.instruction
            }
            SlideState::AtCommitZone => self.release_instruction,
            SlideState::Triggered => "",
        }
    }
}
