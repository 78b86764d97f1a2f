use crate::geometry::{Point, Rect, Size};
use crate::view::transform::Transform;

/// 8-bit straight-alpha color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// One primitive in screen space, relative to the viewport's top-left corner.
/// Commands are drawn in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// The visible part of the bitmap. `uv` is the matching source region in
    /// normalized texture coordinates.
    Image { dest: Rect, uv: Rect },
    FillRect { rect: Rect, color: Rgba },
    StrokeRect { rect: Rect, width: f32, color: Rgba },
    /// Text centered inside `rect`.
    Text {
        rect: Rect,
        text: String,
        font_size: f32,
        color: Rgba,
    },
}

/// Bitmap command covering only the part of the image inside `visible`.
pub fn image_command(image: Size, transform: &Transform, visible: Rect) -> Option<DrawCommand> {
    let full = transform.image_rect(image);
    let dest = full.intersect(&visible)?;
    let to_uv = |p: Point| {
        Point::new(
            (p.x - full.min.x) / full.width(),
            (p.y - full.min.y) / full.height(),
        )
    };
    Some(DrawCommand::Image {
        dest,
        uv: Rect::from_min_max(to_uv(dest.min), to_uv(dest.max)),
    })
}
