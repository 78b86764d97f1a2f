//! Per-pixel RGB value overlay.
//!
//! Once an image pixel is large enough on screen, every visible pixel gets a
//! translucent box in its own color, a thin grid outline and three lines of
//! text with its red, green and blue values. Everything here is recomputed per
//! frame from the transform and the visible rectangle.

use crate::buffer::PixelBuffer;
use crate::config::OverlayConfig;
use crate::consts::COLOR_CHANNEL_COUNT;
use crate::geometry::{Point, Rect, Size};
use crate::view::render::{DrawCommand, Rgba};
use crate::view::transform::Transform;

/// Inclusive range of image pixels touched by the visible rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl PixelBounds {
    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }

    pub fn count(&self) -> usize {
        self.width() * self.height()
    }
}

/// One overlay box.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayCell {
    pub x: usize,
    pub y: usize,
    pub rgb: [u8; 3],
    /// Screen-space box, already inset from the pixel's projected square.
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPlan {
    pub bounds: PixelBounds,
    /// Sampling stride in both axes (1 = every pixel).
    pub step: usize,
    /// Side of one image pixel on screen.
    pub pixel_size: f64,
    pub font_size: f64,
    pub cells: Vec<OverlayCell>,
}

/// Image pixels under `visible`, clamped to the raster. `None` when the image
/// is entirely off screen.
pub fn visible_pixel_bounds(
    transform: &Transform,
    width: usize,
    height: usize,
    visible: Rect,
) -> Option<PixelBounds> {
    if width == 0 || height == 0 {
        return None;
    }
    let tl = transform.screen_to_image(visible.min);
    let br = transform.screen_to_image(visible.max);

    // The right and bottom edges are exclusive: an edge landing exactly on a
    // pixel boundary does not pull in the next column or row.
    let x0 = tl.x.floor().max(0.0);
    let y0 = tl.y.floor().max(0.0);
    let x1 = (br.x.ceil() - 1.0).max(tl.x.floor()).min((width - 1) as f64);
    let y1 = (br.y.ceil() - 1.0).max(tl.y.floor()).min((height - 1) as f64);
    if !(x1 >= x0 && y1 >= y0) {
        return None;
    }

    Some(PixelBounds {
        x0: x0 as usize,
        y0: y0 as usize,
        x1: x1 as usize,
        y1: y1 as usize,
    })
}

/// Smallest stride whose sampled grid stays within `max_pixels` cells.
///
/// Starts from `ceil(sqrt(total / max_pixels))`, which is a lower bound, and
/// steps up when rounding of partial rows and columns still overshoots.
pub fn overlay_stride(bounds: &PixelBounds, max_pixels: usize) -> usize {
    let max_pixels = max_pixels.max(1);
    let total = bounds.count();
    if total <= max_pixels {
        return 1;
    }
    let mut step = ((total as f64 / max_pixels as f64).sqrt().ceil() as usize).max(1);
    while bounds.width().div_ceil(step) * bounds.height().div_ceil(step) > max_pixels {
        step += 1;
    }
    step
}

/// Decide whether and where to draw the overlay.
pub fn plan_overlay(
    image: &PixelBuffer,
    transform: &Transform,
    visible: Rect,
    config: &OverlayConfig,
) -> Option<OverlayPlan> {
    let pixel_size = transform.scale;
    if pixel_size < config.min_scale || pixel_size < config.min_text_box {
        return None;
    }

    let bounds = visible_pixel_bounds(transform, image.width(), image.height(), visible)?;
    let step = overlay_stride(&bounds, config.max_pixels);
    let side = (pixel_size - 2.0 * config.box_inset).max(0.0);

    let cells = (bounds.y0..=bounds.y1)
        .step_by(step)
        .flat_map(|y| (bounds.x0..=bounds.x1).step_by(step).map(move |x| (x, y)))
        .map(|(x, y)| {
            let center =
                transform.image_to_screen(Point::new(x as f64 + 0.5, y as f64 + 0.5));
            OverlayCell {
                x,
                y,
                rgb: image.pixel(x, y),
                rect: Rect::from_center_size(center, Size::new(side, side)),
            }
        })
        .collect();

    Some(OverlayPlan {
        bounds,
        step,
        pixel_size,
        font_size: config.font_size(pixel_size),
        cells,
    })
}

/// Draw commands for a plan: fill, grid outline, then R/G/B text lines.
///
/// Each value is drawn in its pure channel color at the pixel's own
/// intensity, so e.g. a dark red value is dark red text.
pub fn overlay_commands(plan: &OverlayPlan, config: &OverlayConfig) -> Vec<DrawCommand> {
    let grid = Rgba::from_array(config.grid_color);
    let line_height = plan.pixel_size / COLOR_CHANNEL_COUNT as f64;
    let font_size = plan.font_size as f32;

    let mut commands = Vec::with_capacity(plan.cells.len() * (2 + COLOR_CHANNEL_COUNT));
    for cell in &plan.cells {
        let [r, g, b] = cell.rgb;
        commands.push(DrawCommand::FillRect {
            rect: cell.rect,
            color: Rgba::new(r, g, b, config.fill_alpha),
        });
        commands.push(DrawCommand::StrokeRect {
            rect: cell.rect,
            width: config.grid_width,
            color: grid,
        });

        let lines = [
            (r, Rgba::rgb(r, 0, 0)),
            (g, Rgba::rgb(0, g, 0)),
            (b, Rgba::rgb(0, 0, b)),
        ];
        for (i, (value, color)) in lines.into_iter().enumerate() {
            let top = cell.rect.min.y + i as f64 * line_height;
            commands.push(DrawCommand::Text {
                rect: Rect::from_min_size(
                    Point::new(cell.rect.min.x, top),
                    Size::new(cell.rect.width(), line_height),
                ),
                text: value.to_string(),
                font_size,
                color,
            });
        }
    }
    commands
}
