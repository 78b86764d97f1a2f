use serde::{Deserialize, Serialize};

use crate::consts::{
    MAX_SCALE, MIN_SCALE, OVERLAY_BOX_INSET, OVERLAY_FILL_ALPHA, OVERLAY_FONT_FACTOR,
    OVERLAY_GRID_COLOR, OVERLAY_GRID_WIDTH, OVERLAY_MAX_PIXELS, OVERLAY_MIN_FONT_SIZE,
    OVERLAY_MIN_SCALE, OVERLAY_MIN_TEXT_BOX, ZOOM_STEP,
};

/// Tunables for both viewports. Missing fields fall back to the defaults in
/// [`crate::consts`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Scale multiplier per zoom step.
    pub zoom_step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub overlay: OverlayConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            overlay: OverlayConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Clamp `scale` into the allowed range.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    pub fn scale_in_range(&self, scale: f64) -> bool {
        (self.min_scale..=self.max_scale).contains(&scale)
    }
}

/// Per-pixel RGB overlay settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Show values once one image pixel covers at least this many screen pixels.
    pub min_scale: f64,
    /// Minimum box side needed for three lines of text.
    pub min_text_box: f64,
    /// Maximum number of cells drawn per frame.
    pub max_pixels: usize,
    pub fill_alpha: u8,
    pub grid_color: [u8; 4],
    pub grid_width: f32,
    pub font_factor: f64,
    pub min_font_size: f64,
    pub box_inset: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            min_scale: OVERLAY_MIN_SCALE,
            min_text_box: OVERLAY_MIN_TEXT_BOX,
            max_pixels: OVERLAY_MAX_PIXELS,
            fill_alpha: OVERLAY_FILL_ALPHA,
            grid_color: OVERLAY_GRID_COLOR,
            grid_width: OVERLAY_GRID_WIDTH,
            font_factor: OVERLAY_FONT_FACTOR,
            min_font_size: OVERLAY_MIN_FONT_SIZE,
            box_inset: OVERLAY_BOX_INSET,
        }
    }
}

impl OverlayConfig {
    /// Effective scale below which no overlay is drawn.
    pub fn threshold(&self) -> f64 {
        self.min_scale.max(self.min_text_box)
    }

    pub fn font_size(&self, pixel_size: f64) -> f64 {
        (pixel_size * self.font_factor).max(self.min_font_size)
    }
}
