// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide Confirm: a headless slide-to-confirm interaction kernel.
//!
//! A slide-to-confirm control asks the user to drag a handle across a track
//! before a consequential action (a payment, a deletion, a submission) fires.
//! This crate owns the part of that control with real logic and leaves
//! drawing, haptic playback and window plumbing to the host:
//!
//! - [`geometry`]: the pure threshold calculator, [`compute_drag`], plus
//!   [`TrackGeometry`] for travel and handle placement.
//! - [`SlideMachine`]: the gesture-driven state machine. It consumes drag
//!   input and returns ordered [`SlideEvents`].
//! - [`SlideManager`]: a session controller that wraps a machine, runs the
//!   nudge hint, and relays events to host callbacks.
//! - [`SlideConfig`], [`SlideTheme`], [`AccessibilityDescriptor`],
//!   [`HandleGlyph`] and [`SlideLabels`]: configuration and lookup tables.
//!
//! ## States
//!
//! ```text
//!   IdleDisabled <--set_enabled--> IdleEnabled
//!                                    |    ^
//!                        drag start  |    |  release below threshold
//!                                    v    |
//!                                  Dragging <--> AtCommitZone
//!                                                    |
//!                                release at/above    |
//!                                threshold           v
//!                                               Triggered --reset_delay--> idle
//! ```
//!
//! ## Time
//!
//! Nothing here reads a clock. The host passes a monotonic "now" to
//! [`SlideManager::tick`] (or [`SlideMachine::tick`]) and can ask
//! [`SlideManager::next_deadline`] when to call it again. Commands that start
//! a delay or a transition ([`SlideManager::drag_end`],
//! [`SlideManager::reset`], [`SlideManager::set_enabled`] and
//! [`SlideManager::nudge`]) carry the same host time, so an idle host that
//! never ticked still gets the full auto-reset delay. Timers are backed by
//! [`slide_confirm_timing::TimerQueue`] and are truly cancelled by
//! [`SlideManager::reset`]; a reset that races a firing timer is still caught
//! by a state re-check.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use slide_confirm::{ImpactIntensity, SlideConfig, SlideManager, SlideState};
//!
//! let mut haptics = Vec::new();
//! let mut manager = SlideManager::new(SlideConfig::DEFAULT, |i: ImpactIntensity| {
//!     haptics.push(i)
//! });
//!
//! manager.set_enabled(true, Duration::ZERO);
//! manager.set_track_width(356.0); // 300px of travel with the default layout
//!
//! manager.drag_move(250.0);
//! assert_eq!(manager.state(), SlideState::Dragging);
//! manager.drag_move(280.0);
//! assert_eq!(manager.state(), SlideState::AtCommitZone);
//!
//! manager.drag_end(Duration::from_secs(10));
//! assert_eq!(manager.state(), SlideState::Triggered);
//! assert_eq!(manager.offset(), 300.0);
//! assert_eq!(manager.next_deadline(), Some(Duration::from_secs(12)));
//!
//! manager.tick(Duration::from_secs(12));
//! assert_eq!(manager.state(), SlideState::IdleEnabled);
//! drop(manager);
//! assert_eq!(haptics, [ImpactIntensity::Medium]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to `kurbo`, `peniko` and `thiserror`.
//! - `libm`: `no_std` float math for `kurbo` and `peniko`.
//! - `serde`: derive `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod accessibility;
mod animation;
mod config;
mod event;
mod feedback;
pub mod geometry;
mod machine;
mod manager;
mod presentation;
mod state;
pub mod theme;

pub use accessibility::{AccessibilityDescriptor, AccessibilityTraits};
pub use animation::{Easing, OffsetAnimation};
pub use config::{ConfigError, Layout, SlideConfig, Thresholds, Timing, Visual};
pub use event::{SlideEvent, SlideEvents};
pub use feedback::{FeedbackPort, ImpactIntensity, NoFeedback};
pub use geometry::{DragProgress, TrackGeometry, compute_drag};
pub use machine::{DragSession, SlideMachine};
pub use manager::SlideManager;
pub use presentation::{HandleGlyph, SlideLabels};
pub use state::SlideState;
pub use theme::{FontSpec, SlideTheme, StateAppearance};
