// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration presets as JSON.
//!
//! Prints every preset, then reads one back and validates it.
//!
//! Run:
//! - `cargo run -p slide_confirm_demos --example config_json`

use slide_confirm::SlideConfig;
use slide_confirm_demos::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    for (name, config) in [
        ("default", SlideConfig::DEFAULT),
        ("compact", SlideConfig::COMPACT),
        ("large", SlideConfig::LARGE),
    ] {
        println!("{name}: {}", serde_json::to_string_pretty(&config)?);
    }

    let mut value = serde_json::to_value(SlideConfig::DEFAULT)?;
    value["thresholds"]["commit"] = serde_json::json!(1.25);
    let edited: SlideConfig = serde_json::from_value(value)?;
    match edited.validate() {
        Ok(()) => println!("edited config is valid"),
        Err(err) => println!("edited config rejected: {err}"),
    }
    Ok(())
}
