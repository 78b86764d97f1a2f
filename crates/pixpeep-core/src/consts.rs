/// Multiplicative scale change applied per zoom input (one wheel notch).
pub const ZOOM_STEP: f64 = 1.15;

/// Smallest allowed view scale (screen pixels per image pixel).
pub const MIN_SCALE: f64 = 0.05;

/// Largest allowed view scale. Beyond this a single image pixel covers more
/// than a typical window.
pub const MAX_SCALE: f64 = 1000.0;

/// Scale at which per-pixel RGB values become legible.
pub const OVERLAY_MIN_SCALE: f64 = 16.0;

/// Minimum on-screen box side (in screen pixels) that fits three text lines.
pub const OVERLAY_MIN_TEXT_BOX: f64 = 18.0;

/// Upper bound on overlay cells drawn per frame. Larger visible regions are
/// sampled with a uniform stride.
pub const OVERLAY_MAX_PIXELS: usize = 4000;

/// Alpha of the per-pixel background fill (0..=255).
pub const OVERLAY_FILL_ALPHA: u8 = 80;

/// RGBA of the pixel grid outline.
pub const OVERLAY_GRID_COLOR: [u8; 4] = [180, 180, 180, 180];

/// Width of the pixel grid outline in screen pixels, independent of zoom.
pub const OVERLAY_GRID_WIDTH: f32 = 0.7;

/// Overlay font size as a fraction of the on-screen pixel box side.
pub const OVERLAY_FONT_FACTOR: f64 = 0.22;

/// Smallest overlay font size.
pub const OVERLAY_MIN_FONT_SIZE: f64 = 6.0;

/// Inset between the projected pixel square and its filled box.
pub const OVERLAY_BOX_INSET: f64 = 1.0;

/// Number of text lines per overlay cell (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;
