// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility descriptors keyed by state.

use crate::state::SlideState;

bitflags::bitflags! {
    /// Roles and states to expose to assistive technology.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AccessibilityTraits: u8 {
        /// The control can be activated.
        const BUTTON   = 0b0000_0001;
        /// The control's action has been carried out.
        const SELECTED = 0b0000_0010;
    }
}

/// Strings and traits describing the control in one state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AccessibilityDescriptor {
    /// Label for the whole control.
    pub label: &'static str,
    /// Hint describing what to do next.
    pub hint: &'static str,
    /// Label for the handle element.
    pub handle_label: &'static str,
    /// Traits for the whole control.
    pub traits: AccessibilityTraits,
}

impl AccessibilityDescriptor {
    /// Returns the descriptor for `state`.
    #[must_use]
    pub const fn for_state(state: SlideState) -> Self {
        match state {
            SlideState::IdleDisabled => Self {
                label: "Slide button disabled",
                hint: "Button is currently disabled",
                handle_label: "Disabled handle",
                traits: AccessibilityTraits::empty(),
            },
            SlideState::IdleEnabled => Self {
                label: "Slide to confirm",
                hint: "Drag the handle to the right to confirm your action",
                handle_label: "Drag handle",
                traits: AccessibilityTraits::BUTTON,
            },
            SlideState::Dragging => Self {
                label: "Sliding to confirm",
                hint: "Continue dragging to the right to confirm",
                handle_label: "Drag handle",
                traits: AccessibilityTraits::BUTTON,
            },
            SlideState::AtCommitZone => Self {
                label: "Release to confirm",
                hint: "Release to confirm your action",
                handle_label: "Release handle to confirm",
                traits: AccessibilityTraits::BUTTON,
            },
            SlideState::Triggered => Self {
                label: "Action completed",
                hint: "Action has been completed successfully",
                handle_label: "Action completed",
                traits: AccessibilityTraits::BUTTON.union(AccessibilityTraits::SELECTED),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_disabled_is_not_a_button() {
        for state in SlideState::ALL {
            let traits = AccessibilityDescriptor::for_state(state).traits;
            assert_eq!(
                traits.contains(AccessibilityTraits::BUTTON),
                state != SlideState::IdleDisabled,
                "{state:?}"
            );
        }
    }

    #[test]
    fn triggered_is_selected() {
        let d = AccessibilityDescriptor::for_state(SlideState::Triggered);
        assert!(d.traits.contains(AccessibilityTraits::SELECTED));
        assert_eq!(d.label, "Action completed");
    }

    #[test]
    fn labels_are_distinct_per_state() {
        for (i, a) in SlideState::ALL.iter().enumerate() {
            for b in &SlideState::ALL[i + 1..] {
                assert_ne!(
                    AccessibilityDescriptor::for_state(*a).label,
                    AccessibilityDescriptor::for_state(*b).label
                );
            }
        }
    }
}
