use pixpeep_core::buffer::PixelBuffer;
use pixpeep_core::geometry::{Point, Rect};
use pixpeep_core::view::Rgba;

/// Upload-ready copy of an RGB buffer.
pub fn buffer_to_color_image(buffer: &PixelBuffer) -> egui::ColorImage {
    egui::ColorImage::from_rgb([buffer.width(), buffer.height()], buffer.as_rgb_bytes())
}

pub fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Pane-local rect to window coordinates.
pub fn to_screen_rect(rect: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_max(
        origin + egui::vec2(rect.min.x as f32, rect.min.y as f32),
        origin + egui::vec2(rect.max.x as f32, rect.max.y as f32),
    )
}

/// Normalized texture coordinates.
pub fn to_uv_rect(uv: Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        egui::pos2(uv.min.x as f32, uv.min.y as f32),
        egui::pos2(uv.max.x as f32, uv.max.y as f32),
    )
}

/// Window position to pane-local coordinates.
pub fn to_local_point(pos: egui::Pos2, origin: egui::Pos2) -> Point {
    let v = pos - origin;
    Point::new(v.x as f64, v.y as f64)
}
