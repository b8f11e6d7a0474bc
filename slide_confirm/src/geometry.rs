// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry and the drag threshold calculator.
//!
//! ## Minimal example
//!
//! ```
//! use slide_confirm::geometry::{TrackGeometry, compute_drag};
//! use slide_confirm::SlideConfig;
//!
//! // 356px wide track, 48px handle, 4px padding on both sides.
//! let track = TrackGeometry::from_width(356.0, &SlideConfig::DEFAULT);
//! assert_eq!(track.max_offset(), 300.0);
//!
//! // Dragging past the end clamps to the end of travel.
//! let drag = compute_drag(420.0, track.max_offset());
//! assert_eq!(drag.offset, 300.0);
//! assert_eq!(drag.progress, 1.0);
//! ```

use kurbo::{Point, Rect, Size};

use crate::config::SlideConfig;

/// Clamped handle offset and normalized progress for one drag sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragProgress {
    /// Handle offset from the start of travel, in `[0, max_offset]`.
    pub offset: f64,
    /// `offset / max_offset`, in `[0, 1]`.
    pub progress: f64,
}

impl DragProgress {
    /// No travel.
    pub const ZERO: Self = Self {
        offset: 0.0,
        progress: 0.0,
    };
}

/// Maps a horizontal drag translation to a clamped offset and progress.
///
/// A degenerate track (`max_offset <= 0`, or not finite) yields
/// [`DragProgress::ZERO`], which keeps the handle below any commit threshold.
/// A `NaN` translation is treated as zero.
#[must_use]
pub fn compute_drag(translation_x: f64, max_offset: f64) -> DragProgress {
    if !(max_offset > 0.0 && max_offset.is_finite()) {
        return DragProgress::ZERO;
    }
    let translation = if translation_x.is_nan() {
        0.0
    } else {
        translation_x
    };
    let offset = translation.clamp(0.0, max_offset);
    DragProgress {
        offset,
        progress: offset / max_offset,
    }
}

/// Measured track plus the layout that determines how far the handle travels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackGeometry {
    size: Size,
    handle_size: f64,
    padding: f64,
    mirrored: bool,
}

impl TrackGeometry {
    /// Builds the geometry for a measured track size.
    #[must_use]
    pub fn new(size: Size, config: &SlideConfig) -> Self {
        let width = if size.width.is_finite() {
            size.width
        } else {
            0.0
        };
        Self {
            size: Size::new(width, size.height),
            handle_size: config.layout.handle_size,
            padding: config.layout.horizontal_padding,
            mirrored: config.visual.mirrored,
        }
    }

    /// Builds the geometry from a measured width and the configured height.
    #[must_use]
    pub fn from_width(width: f64, config: &SlideConfig) -> Self {
        Self::new(Size::new(width, config.layout.height), config)
    }

    /// Returns the measured track size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Maximum handle travel: `width - handle_size - 2 * padding`.
    ///
    /// May be zero or negative for a degenerate layout.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.size.width - self.handle_size - 2.0 * self.padding
    }

    /// Returns `true` if the handle can move at all.
    #[must_use]
    pub fn has_travel(&self) -> bool {
        self.max_offset() > 0.0
    }

    /// Applies [`compute_drag`] against this track.
    #[must_use]
    pub fn drag(&self, translation_x: f64) -> DragProgress {
        compute_drag(translation_x, self.max_offset())
    }

    /// Bounds of the track in its own coordinate space.
    #[must_use]
    pub fn track_rect(&self) -> Rect {
        self.size.to_rect()
    }

    /// Bounds of the handle for a given offset plus an additive nudge.
    ///
    /// Mirrored tracks place the handle from the trailing edge.
    #[must_use]
    pub fn handle_rect(&self, offset: f64, nudge: f64) -> Rect {
        let travel = offset + nudge;
        let x = if self.mirrored {
            self.size.width - self.padding - self.handle_size - travel
        } else {
            self.padding + travel
        };
        let y = (self.size.height - self.handle_size) * 0.5;
        Rect::from_origin_size(
            Point::new(x, y),
            Size::new(self.handle_size, self.handle_size),
        )
    }
}
