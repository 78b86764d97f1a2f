use pixpeep_core::shell::Slot;

use crate::app::PixPeepApp;
use crate::panels::{open_image, open_pair};

const LOAD_BOTH: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const RESET_ZOOM: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Num0);
const LINK_VIEWS: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::L);
const QUIT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

pub fn show(ctx: &egui::Context, app: &mut PixPeepApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Load First Image...").clicked() {
                    ui.close();
                    open_image(app, Slot::First);
                }
                if ui.button("Load Second Image...").clicked() {
                    ui.close();
                    open_image(app, Slot::Second);
                }
                let load_both = egui::Button::new("Load Both Images...")
                    .shortcut_text(ctx.format_shortcut(&LOAD_BOTH));
                if ui.add(load_both).clicked() {
                    ui.close();
                    open_pair(app);
                }

                ui.separator();

                let quit = egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&QUIT));
                if ui.add(quit).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let reset = egui::Button::new("Reset Zoom")
                    .shortcut_text(ctx.format_shortcut(&RESET_ZOOM));
                if ui.add_enabled(app.shell.can_reset_zoom(), reset).clicked() {
                    ui.close();
                    app.reset_zoom();
                }

                let mut linked = app.shell.is_sync_enabled();
                if ui.checkbox(&mut linked, "Link Views").changed() {
                    ui.close();
                    app.set_linked(linked);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&LOAD_BOTH)) {
            open_pair(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&RESET_ZOOM)) {
            app.reset_zoom();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&LINK_VIEWS)) {
            let linked = !app.shell.is_sync_enabled();
            app.set_linked(linked);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
