// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state presentation tables.
//!
//! Prints what a renderer and a screen reader would get in each state.
//!
//! Run:
//! - `cargo run -p slide_confirm_demos --example state_gallery`

use slide_confirm::{
    AccessibilityDescriptor, HandleGlyph, SlideConfig, SlideLabels, SlideState, SlideTheme,
    TrackGeometry,
};
use slide_confirm_demos::describe;

fn main() {
    let config = SlideConfig::DEFAULT;
    let theme = SlideTheme::DEFAULT;
    let labels = SlideLabels::DEFAULT;
    let track = TrackGeometry::from_width(356.0, &config);

    for state in SlideState::ALL {
        let look = theme.appearance(state, &config.visual);
        let a11y = AccessibilityDescriptor::for_state(state);
        println!("{}:", describe(state));
        println!("  background {:?}", look.background.components);
        println!("  shadow     r={} dy={}", look.shadow_radius, look.shadow_offset);
        println!("  glyph      {:?}", HandleGlyph::for_state(state));
        println!("  text       {:?} / {:?}", labels.primary, labels.instruction_for(state));
        println!("  a11y       {:?} ({:?}) {:?}", a11y.label, a11y.hint, a11y.traits);
    }

    let mirrored = TrackGeometry::from_width(356.0, &SlideConfig::DEFAULT_MIRRORED);
    println!("handle at rest:     {:?}", track.handle_rect(0.0, 0.0));
    println!("handle at rest (rtl): {:?}", mirrored.handle_rect(0.0, 0.0));
}
