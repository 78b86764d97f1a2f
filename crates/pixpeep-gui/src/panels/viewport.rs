use pixpeep_core::error::ViewerError;
use pixpeep_core::geometry::{Point, Rect, Size};
use pixpeep_core::shell::Slot;
use pixpeep_core::view::{DrawCommand, ZoomDirection};
use tracing::{trace, warn};

use crate::app::PixPeepApp;
use crate::convert::{to_color32, to_local_point, to_screen_rect, to_uv_rect};

const PANE_GAP: f32 = 2.0;
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x20, 0x20, 0x20);
const GAP_COLOR: egui::Color32 = egui::Color32::from_gray(60);

/// Pointer input over one pane for one frame.
#[derive(Clone, Copy, Debug, Default)]
struct PaneInput {
    hover: Option<egui::Pos2>,
    scroll: f32,
    drag: egui::Vec2,
    double_clicked: bool,
}

impl PaneInput {
    fn read(ui: &egui::Ui, response: &egui::Response) -> Self {
        let dragging = response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle);
        Self {
            hover: response.hover_pos(),
            scroll: if response.hovered() {
                ui.input(|i| i.raw_scroll_delta.y)
            } else {
                0.0
            },
            drag: if dragging {
                response.drag_delta()
            } else {
                egui::Vec2::ZERO
            },
            double_clicked: response.double_clicked(),
        }
    }
}

pub fn show(ctx: &egui::Context, app: &mut PixPeepApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            ui.painter().rect_filled(rect, 0.0, GAP_COLOR);

            app.ui_state.hover = None;
            let panes = split_panes(rect);

            // Input for both panes lands before either is painted, so a
            // gesture on one pane shows up in its peer on the same frame.
            for (slot, pane) in panes {
                app.shell.set_view_size(slot, pane_size(pane));
                if texture_for(app, slot).is_none() {
                    continue;
                }
                let id = ui.id().with(("pane", slot));
                let response = ui.interact(pane, id, egui::Sense::click_and_drag());
                apply_input(app, slot, pane, &PaneInput::read(ui, &response));
            }

            for (slot, pane) in panes {
                paint_pane(ui, app, slot, pane);
            }
        });
}

/// Left and right halves with a thin gap between them.
fn split_panes(rect: egui::Rect) -> [(Slot, egui::Rect); 2] {
    let pane_width = ((rect.width() - PANE_GAP) / 2.0).max(0.0);
    let first = egui::Rect::from_min_size(rect.min, egui::vec2(pane_width, rect.height()));
    let second = egui::Rect::from_min_max(
        egui::pos2(rect.max.x - pane_width, rect.min.y),
        rect.max,
    );
    [(Slot::First, first), (Slot::Second, second)]
}

fn pane_size(pane: egui::Rect) -> Size {
    Size::new(pane.width() as f64, pane.height() as f64)
}

fn texture_for(app: &PixPeepApp, slot: Slot) -> Option<egui::TextureId> {
    if !app.shell.has_image(slot) {
        return None;
    }
    app.textures.get(slot).map(|t| t.id())
}

fn apply_input(app: &mut PixPeepApp, slot: Slot, pane: egui::Rect, input: &PaneInput) {
    if let (Some(direction), Some(pos)) =
        (ZoomDirection::from_scroll(input.scroll as f64), input.hover)
    {
        match app.shell.zoom(slot, direction, to_local_point(pos, pane.min)) {
            Ok(()) => {}
            Err(ViewerError::TransformBounds { requested, .. }) => {
                trace!(%slot, requested, "zoom step out of range");
            }
            Err(e) => warn!(%slot, "zoom failed: {e}"),
        }
    }

    if input.drag != egui::Vec2::ZERO {
        let delta = Point::new(input.drag.x as f64, input.drag.y as f64);
        app.shell.pan(slot, delta);
    }

    if input.double_clicked {
        app.reset_zoom();
    }

    if let Some(pos) = input.hover {
        if let Some(probe) = app.shell.probe(slot, to_local_point(pos, pane.min)) {
            app.ui_state.hover = Some((slot, probe));
        }
    }
}

fn paint_pane(ui: &egui::Ui, app: &PixPeepApp, slot: Slot, pane: egui::Rect) {
    ui.painter().rect_filled(pane, 0.0, BACKGROUND);

    let Some(texture_id) = texture_for(app, slot) else {
        show_placeholder(ui, pane, slot);
        return;
    };

    let painter = ui.painter_at(pane);
    let visible = Rect::from_min_size(Point::ZERO, pane_size(pane));
    for command in app.shell.render(slot, visible) {
        paint_command(&painter, command, pane.min, texture_id);
    }
}

fn paint_command(
    painter: &egui::Painter,
    command: DrawCommand,
    origin: egui::Pos2,
    texture_id: egui::TextureId,
) {
    match command {
        DrawCommand::Image { dest, uv } => {
            painter.image(
                texture_id,
                to_screen_rect(dest, origin),
                to_uv_rect(uv),
                egui::Color32::WHITE,
            );
        }
        DrawCommand::FillRect { rect, color } => {
            painter.rect_filled(to_screen_rect(rect, origin), 0.0, to_color32(color));
        }
        DrawCommand::StrokeRect { rect, width, color } => {
            painter.rect_stroke(
                to_screen_rect(rect, origin),
                0.0,
                egui::Stroke::new(width, to_color32(color)),
                egui::StrokeKind::Inside,
            );
        }
        DrawCommand::Text {
            rect,
            text,
            font_size,
            color,
        } => {
            painter.text(
                to_screen_rect(rect, origin).center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::monospace(font_size),
                to_color32(color),
            );
        }
    }
}

fn show_placeholder(ui: &egui::Ui, pane: egui::Rect, slot: Slot) {
    ui.painter().text(
        pane.center(),
        egui::Align2::CENTER_CENTER,
        format!("Load the {slot} image to begin"),
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
