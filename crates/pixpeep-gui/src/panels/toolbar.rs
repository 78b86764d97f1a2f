use pixpeep_core::shell::Slot;

use crate::app::PixPeepApp;
use crate::panels::{open_image, open_pair};

pub fn show(ctx: &egui::Context, app: &mut PixPeepApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if ui.button("Load First Image").clicked() {
                open_image(app, Slot::First);
            }
            if ui.button("Load Second Image").clicked() {
                open_image(app, Slot::Second);
            }
            if ui.button("Load Both").clicked() {
                open_pair(app);
            }

            ui.separator();

            if ui
                .add_enabled(app.shell.can_reset_zoom(), egui::Button::new("Reset Zoom"))
                .clicked()
            {
                app.reset_zoom();
            }

            let mut linked = app.shell.is_sync_enabled();
            if ui.toggle_value(&mut linked, "Link Views").changed() {
                app.set_linked(linked);
            }
        });
        ui.add_space(2.0);
    });
}
