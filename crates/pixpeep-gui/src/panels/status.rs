use pixpeep_core::io::image_io::display_name;
use pixpeep_core::shell::Slot;

use crate::app::PixPeepApp;

const LOG_LINES: f32 = 3.0;

pub fn show(ctx: &egui::Context, app: &mut PixPeepApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * LOG_LINES + spacing * (LOG_LINES - 1.0);

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in &app.ui_state.log_messages {
                    ui.label(msg);
                }
            });

        ui.separator();

        // Status line
        ui.horizontal(|ui| {
            ui.label(&app.ui_state.status);
            for slot in Slot::ALL {
                ui.separator();
                ui.label(slot_summary(app, slot));
            }
            ui.separator();
            ui.label(if app.shell.is_sync_enabled() {
                "Linked"
            } else {
                "Unlinked"
            });

            if let Some((slot, probe)) = app.ui_state.hover {
                ui.separator();
                let [r, g, b] = probe.rgb;
                ui.monospace(format!(
                    "{slot} ({}, {}): R {r} G {g} B {b}",
                    probe.x, probe.y
                ));
            }
        });

        ui.add_space(2.0);
    });
}

fn slot_summary(app: &PixPeepApp, slot: Slot) -> String {
    let Some((w, h)) = app.shell.image_size(slot) else {
        return format!("{slot}: empty");
    };
    let name = app
        .ui_state
        .path(slot)
        .map(display_name)
        .unwrap_or_default();
    format!(
        "{slot}: {name} {w}x{h} @ {:.0}%",
        app.shell.scale(slot) * 100.0
    )
}
