//! Kiosk configuration.

use alloc::string::String;

use serde::Deserialize;

use crate::layout::LayoutConfig;

/// Recognized configuration options. Missing keys take their defaults.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KioskConfig {
    pub dwell_seconds: u32,
    pub fade_in_seconds: u32,
    pub fade_out_seconds: u32,
    pub margin_px: u32,
    pub line_spacing_px: u32,
    /// Multiple of `body_scale`.
    pub title_scale: u8,
    pub body_scale: u8,
    pub title_gap_px: u32,
    pub display_width: u32,
    pub display_height: u32,
    pub backlight_max_percent: u8,
    pub start_poem_id: Option<String>,
    pub shuffle_seed: Option<u64>,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            dwell_seconds: 30,
            fade_in_seconds: 2,
            fade_out_seconds: 2,
            margin_px: 10,
            line_spacing_px: 2,
            title_scale: 2,
            body_scale: 2,
            title_gap_px: 8,
            display_width: 480,
            display_height: 480,
            backlight_max_percent: 100,
            start_poem_id: None,
            shuffle_seed: None,
        }
    }
}

/// Millisecond timings derived from [`KioskConfig`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideTiming {
    pub dwell_ms: u64,
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
}

impl KioskConfig {
    /// Clamp out-of-range values: scales to at least 1, backlight to 0-100,
    /// and an empty start id to none.
    pub fn normalized(mut self) -> Self {
        self.title_scale = self.title_scale.max(1);
        self.body_scale = self.body_scale.max(1);
        self.backlight_max_percent = self.backlight_max_percent.min(100);
        if self
            .start_poem_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            self.start_poem_id = None;
        }
        self
    }

    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            page_width: self.display_width,
            page_height: self.display_height,
            margin_px: self.margin_px,
            line_spacing_px: self.line_spacing_px,
            title_scale: self.title_scale.max(1),
            body_scale: self.body_scale.max(1),
            title_gap_px: self.title_gap_px,
        }
    }

    pub fn timing(&self) -> SlideTiming {
        SlideTiming {
            dwell_ms: u64::from(self.dwell_seconds) * 1_000,
            fade_in_ms: self.fade_in_seconds.saturating_mul(1_000),
            fade_out_ms: self.fade_out_seconds.saturating_mul(1_000),
        }
    }

    /// Fully-on backlight level, normalized.
    pub fn backlight_target(&self) -> f32 {
        f32::from(self.backlight_max_percent.min(100)) / 100.0
    }
}
