// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted payment confirmation.
//!
//! Walks one control through a hint, an aborted drag, a confirmed drag and
//! the automatic return to idle.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p slide_confirm_demos --example payment_confirm`

use core::time::Duration;

use slide_confirm::{SlideConfig, SlideLabels, SlideManager};
use slide_confirm_demos::{PrintFeedback, Step, attach_printer, init_logging, run_script};

fn main() {
    init_logging();

    let labels = SlideLabels {
        primary: "Pay $42.00",
        ..SlideLabels::DEFAULT
    };
    println!("[{}]", labels.primary);

    let mut manager = SlideManager::new(SlideConfig::DEFAULT, PrintFeedback);
    let completions = attach_printer(&mut manager);
    manager.set_track_width(356.0);

    let ms = Duration::from_millis;
    run_script(
        &mut manager,
        &[
            Step::Enable(true),
            Step::Nudge,
            Step::Tick(ms(100)),
            Step::Tick(ms(200)),
            // Too short: springs back.
            Step::Move(60.0),
            Step::Move(140.0),
            Step::Release,
            Step::Tick(ms(500)),
            // Past 90%: confirms.
            Step::Move(120.0),
            Step::Move(240.0),
            Step::Move(285.0),
            Step::Release,
            Step::Tick(ms(900)),
            Step::Tick(ms(2_500)),
        ],
    );

    if let Some(deadline) = manager.next_deadline() {
        println!("next deadline: {deadline:?}");
    }
    log::info!("session finished with {} completion(s)", completions.borrow());
    manager.teardown();
}
