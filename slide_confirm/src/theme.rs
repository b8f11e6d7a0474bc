// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state display attributes.
//!
//! A [`SlideTheme`] is a lookup table: [`SlideTheme::appearance`] maps a
//! [`SlideState`] to the colors and fonts a renderer should use. It carries
//! no behavior.

use peniko::Color;

use crate::config::Visual;
use crate::state::SlideState;

/// Font request for one text role. Resolution is up to the renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Point size.
    pub size: f32,
    /// CSS-style weight (400 regular, 500 medium, 600 semibold).
    pub weight: u16,
}

/// Color and font table for a slide-to-confirm control.
#[derive(Copy, Clone, Debug)]
pub struct SlideTheme {
    /// Track fill while disabled.
    pub disabled_background: Color,
    /// Track fill while enabled, resting or dragging below the commit
    /// threshold.
    pub enabled_background: Color,
    /// Track fill in the commit zone.
    pub commit_zone_background: Color,
    /// Track fill after completion.
    pub triggered_background: Color,

    /// Track border while disabled.
    pub disabled_border: Color,
    /// Track border otherwise.
    pub enabled_border: Color,

    /// Track shadow while disabled.
    pub disabled_shadow: Color,
    /// Track shadow otherwise.
    pub enabled_shadow: Color,

    /// Primary label while disabled.
    pub disabled_text: Color,
    /// Primary label otherwise.
    pub enabled_text: Color,
    /// Instruction label while disabled.
    pub disabled_secondary_text: Color,
    /// Instruction label while enabled.
    pub enabled_secondary_text: Color,

    /// Handle glyph while disabled.
    pub disabled_handle_icon: Color,
    /// Handle glyph otherwise.
    pub enabled_handle_icon: Color,

    /// Primary label font.
    pub primary_font: FontSpec,
    /// Instruction label font.
    pub secondary_font: FontSpec,
    /// Handle glyph font.
    pub handle_icon_font: FontSpec,
}

/// Everything a renderer needs to paint one state.
#[derive(Copy, Clone, Debug)]
pub struct StateAppearance {
    /// Track fill.
    pub background: Color,
    /// Track border.
    pub border: Color,
    /// Track shadow color.
    pub shadow: Color,
    /// Track shadow blur radius.
    pub shadow_radius: f64,
    /// Track shadow vertical offset.
    pub shadow_offset: f64,
    /// Primary label color.
    pub primary_text: Color,
    /// Instruction label color.
    pub secondary_text: Color,
    /// Handle glyph color.
    pub handle_icon: Color,
    /// Primary label font.
    pub primary_font: FontSpec,
    /// Instruction label font.
    pub secondary_font: FontSpec,
    /// Handle glyph font.
    pub handle_icon_font: FontSpec,
}

const GRAY: Color = Color::new([0.557, 0.557, 0.576, 1.0]);
const YELLOW: Color = Color::new([1.0, 0.9, 0.0, 1.0]);

impl SlideTheme {
    /// Warm yellow track on a light background.
    pub const DEFAULT: Self = Self {
        disabled_background: Color::new([0.98, 0.95, 0.8, 1.0]),
        enabled_background: YELLOW,
        commit_zone_background: Color::new([1.0, 0.6, 0.0, 1.0]),
        triggered_background: YELLOW,
        disabled_border: Color::new([0.9, 0.85, 0.7, 1.0]),
        enabled_border: Color::new([0.8, 0.7, 0.0, 1.0]),
        disabled_shadow: Color::new([0.0, 0.0, 0.0, 0.1]),
        enabled_shadow: Color::new([0.0, 0.0, 0.0, 0.2]),
        disabled_text: GRAY,
        enabled_text: Color::BLACK,
        disabled_secondary_text: GRAY,
        enabled_secondary_text: Color::new([0.4, 0.4, 0.4, 1.0]),
        disabled_handle_icon: GRAY,
        enabled_handle_icon: YELLOW,
        primary_font: FontSpec {
            size: 16.0,
            weight: 500,
        },
        secondary_font: FontSpec {
            size: 12.0,
            weight: 400,
        },
        handle_icon_font: FontSpec {
            size: 20.0,
            weight: 600,
        },
    };

    /// Charcoal track for dark backgrounds.
    pub const DARK: Self = Self {
        disabled_background: Color::new([0.2, 0.2, 0.2, 1.0]),
        enabled_background: Color::new([0.3, 0.3, 0.3, 1.0]),
        commit_zone_background: Color::new([0.4, 0.2, 0.0, 1.0]),
        triggered_background: Color::new([0.3, 0.3, 0.3, 1.0]),
        enabled_text: Color::WHITE,
        enabled_secondary_text: Color::new([0.8, 0.8, 0.8, 1.0]),
        ..Self::DEFAULT
    };

    /// Resolves the display attributes for `state`.
    ///
    /// `visual` supplies the shadow geometry; a disabled track uses half of it.
    #[must_use]
    pub fn appearance(&self, state: SlideState, visual: &Visual) -> StateAppearance {
        let disabled = state == SlideState::IdleDisabled;
        let background = match state {
            SlideState::IdleDisabled => self.disabled_background,
            SlideState::IdleEnabled | SlideState::Dragging => self.enabled_background,
            SlideState::AtCommitZone => self.commit_zone_background,
            SlideState::Triggered => self.triggered_background,
        };
        let secondary_text = match state {
            SlideState::IdleDisabled => self.disabled_secondary_text,
            SlideState::IdleEnabled | SlideState::Dragging | SlideState::AtCommitZone => {
                self.enabled_secondary_text
            }
            SlideState::Triggered => Color::TRANSPARENT,
        };
        let shadow_scale = if disabled { 0.5 } else { 1.0 };
        StateAppearance {
            background,
            border: pick(disabled, self.disabled_border, self.enabled_border),
            shadow: pick(disabled, self.disabled_shadow, self.enabled_shadow),
            shadow_radius: visual.shadow_radius * shadow_scale,
            shadow_offset: visual.shadow_offset * shadow_scale,
            primary_text: pick(disabled, self.disabled_text, self.enabled_text),
            secondary_text,
            handle_icon: pick(
                disabled,
                self.disabled_handle_icon,
                self.enabled_handle_icon,
            ),
            primary_font: self.primary_font,
            secondary_font: self.secondary_font,
            handle_icon_font: self.handle_icon_font,
        }
    }
}

impl Default for SlideTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn pick(disabled: bool, when_disabled: Color, otherwise: Color) -> Color {
    if disabled { when_disabled } else { otherwise }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlideConfig;

    const VISUAL: Visual = SlideConfig::DEFAULT.visual;

    #[test]
    fn commit_zone_has_its_own_background() {
        let theme = SlideTheme::DEFAULT;
        let zone = theme.appearance(SlideState::AtCommitZone, &VISUAL);
        let dragging = theme.appearance(SlideState::Dragging, &VISUAL);
        assert_eq!(zone.background.components, [1.0, 0.6, 0.0, 1.0]);
        assert_ne!(zone.background.components, dragging.background.components);
    }

    #[test]
    fn dragging_shares_enabled_background() {
        let theme = SlideTheme {
            enabled_background: Color::new([0.1, 0.2, 0.3, 1.0]),
            ..SlideTheme::DEFAULT
        };
        let dragging = theme.appearance(SlideState::Dragging, &VISUAL);
        assert_eq!(dragging.background.components, [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn disabled_halves_shadow() {
        let theme = SlideTheme::DEFAULT;
        let disabled = theme.appearance(SlideState::IdleDisabled, &VISUAL);
        let enabled = theme.appearance(SlideState::IdleEnabled, &VISUAL);
        assert_eq!(disabled.shadow_radius, 2.0);
        assert_eq!(disabled.shadow_offset, 1.0);
        assert_eq!(enabled.shadow_radius, 4.0);
        assert_eq!(enabled.shadow_offset, 2.0);
    }

    #[test]
    fn triggered_hides_instruction() {
        let a = SlideTheme::DEFAULT.appearance(SlideState::Triggered, &VISUAL);
        assert_eq!(a.secondary_text.components[3], 0.0);
    }

    #[test]
    fn dark_theme_keeps_default_fonts_and_borders() {
        let dark = SlideTheme::DARK;
        assert_eq!(dark.primary_font, SlideTheme::DEFAULT.primary_font);
        assert_eq!(
            dark.enabled_border.components,
            SlideTheme::DEFAULT.enabled_border.components
        );
        assert_eq!(dark.enabled_text.components, [1.0, 1.0, 1.0, 1.0]);
    }
}
