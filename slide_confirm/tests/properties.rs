// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the drag calculator and release outcomes.

use core::time::Duration;

use proptest::prelude::*;
use slide_confirm::{
    NoFeedback, SlideConfig, SlideEvent, SlideMachine, SlideState, compute_drag,
};

const TRACK: f64 = 356.0;
const MAX: f64 = 300.0;

proptest! {
    #[test]
    fn offset_is_clamped_into_travel(tx in -1e6_f64..1e6, max in 1e-3_f64..1e4) {
        let p = compute_drag(tx, max);
        prop_assert!(p.offset >= 0.0 && p.offset <= max);
        prop_assert!(p.progress >= 0.0 && p.progress <= 1.0);
        prop_assert_eq!(p.progress, p.offset / max);
        if (0.0..=max).contains(&tx) {
            prop_assert_eq!(p.offset, tx);
        }
    }

    #[test]
    fn progress_is_monotonic(a in -1e4_f64..1e4, b in -1e4_f64..1e4, max in 1e-3_f64..1e4) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_drag(lo, max).progress <= compute_drag(hi, max).progress);
    }

    #[test]
    fn degenerate_track_is_always_zero(tx in proptest::num::f64::ANY, max in -1e4_f64..=0.0) {
        let p = compute_drag(tx, max);
        prop_assert_eq!(p.offset, 0.0);
        prop_assert_eq!(p.progress, 0.0);
    }

    #[test]
    fn release_outcome_follows_threshold(moves in prop::collection::vec(-100.0_f64..400.0, 1..8)) {
        let mut m = SlideMachine::new(SlideConfig::DEFAULT, NoFeedback);
        m.set_enabled(true, Duration::ZERO);
        m.set_track_width(TRACK);

        let mut completed = 0;
        for tx in &moves {
            for event in m.drag_move(*tx) {
                prop_assert_ne!(event, SlideEvent::Completed);
            }
            prop_assert!(m.is_holding());
        }
        for event in m.drag_end(Duration::ZERO) {
            if event == SlideEvent::Completed {
                completed += 1;
            }
        }

        let last = moves[moves.len() - 1];
        let committed = last.clamp(0.0, MAX) / MAX >= 0.9;
        if committed {
            prop_assert_eq!(m.state(), SlideState::Triggered);
            prop_assert_eq!(completed, 1);
            prop_assert_eq!(m.offset(), MAX);
        } else {
            prop_assert_eq!(m.state(), SlideState::IdleEnabled);
            prop_assert_eq!(completed, 0);
            prop_assert_eq!(m.offset(), 0.0);
        }
    }

    #[test]
    fn state_changes_are_never_redundant(moves in prop::collection::vec(-100.0_f64..400.0, 1..16)) {
        let mut m = SlideMachine::new(SlideConfig::DEFAULT, NoFeedback);
        m.set_enabled(true, Duration::ZERO);
        m.set_track_width(TRACK);

        let mut previous = m.state();
        for tx in moves {
            for event in m.drag_move(tx) {
                if let SlideEvent::StateChanged(next) = event {
                    prop_assert_ne!(next, previous);
                    previous = next;
                }
            }
        }
        prop_assert_eq!(previous, m.state());
    }
}
