// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless demos.
//!
//! The demos drive a [`SlideManager`] from a fixed script instead of a real
//! pointer, so every run prints the same transcript.
//!
//! Run any demo with `RUST_LOG=debug` to see the kernel's own logging.

use core::cell::RefCell;
use core::time::Duration;
use std::rc::Rc;

use slide_confirm::{FeedbackPort, ImpactIntensity, SlideManager, SlideState};

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// One scripted host input.
#[derive(Copy, Clone, Debug)]
pub enum Step {
    /// Pointer moved to this horizontal translation.
    Move(f64),
    /// Pointer released.
    Release,
    /// Host time advanced to this instant.
    Tick(Duration),
    /// Host asked for the nudge hint.
    Nudge,
    /// Host forced a reset.
    Reset,
    /// Host toggled availability.
    Enable(bool),
}

/// Feedback port that prints each impact.
#[derive(Debug, Default)]
pub struct PrintFeedback;

impl FeedbackPort for PrintFeedback {
    fn impact(&mut self, intensity: ImpactIntensity) {
        println!("    haptic: {intensity:?}");
    }
}

/// Attaches printing callbacks and returns the shared completion counter.
pub fn attach_printer<F: FeedbackPort>(manager: &mut SlideManager<F>) -> Rc<RefCell<u32>> {
    let completions = Rc::new(RefCell::new(0));
    manager.on_state_change(|state| println!("    state -> {}", describe(state)));
    manager.on_drag_start(|| println!("    drag started"));
    manager.on_drag_end(|| println!("    drag ended"));
    let counter = completions.clone();
    manager.on_complete(move || {
        *counter.borrow_mut() += 1;
        println!("    COMPLETED");
    });
    completions
}

/// Feeds `script` into `manager`, printing each step.
///
/// Commands happen at the time of the most recent [`Step::Tick`].
pub fn run_script<F: FeedbackPort>(manager: &mut SlideManager<F>, script: &[Step]) {
    let mut now = Duration::ZERO;
    for step in script {
        println!("{step:?}");
        match *step {
            Step::Move(tx) => manager.drag_move(tx),
            Step::Release => manager.drag_end(now),
            Step::Tick(at) => {
                now = at;
                manager.tick(at);
            }
            Step::Nudge => manager.nudge(now),
            Step::Reset => manager.reset(now),
            Step::Enable(enabled) => manager.set_enabled(enabled, now),
        }
        println!(
            "    offset {:.1} (presented {:.1}), nudge {:.1}",
            manager.offset(),
            manager.machine().presented_offset(),
            manager.presented_nudge_offset(),
        );
    }
}

/// Short human label for a state.
#[must_use]
pub fn describe(state: SlideState) -> &'static str {
    match state {
        SlideState::IdleDisabled => "idle (disabled)",
        SlideState::IdleEnabled => "idle",
        SlideState::Dragging => "dragging",
        SlideState::AtCommitZone => "release to confirm",
        SlideState::Triggered => "confirmed",
    }
}
