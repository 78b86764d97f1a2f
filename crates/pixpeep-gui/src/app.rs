use std::path::Path;
use std::sync::mpsc;

use pixpeep_core::buffer::PixelBuffer;
use pixpeep_core::config::ViewerConfig;
use pixpeep_core::io::image_io::display_name;
use pixpeep_core::shell::{Slot, ViewerShell};

use crate::convert::buffer_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{SlotTextures, UIState};
use crate::workers;

pub struct PixPeepApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub shell: ViewerShell,
    pub ui_state: UIState,
    pub textures: SlotTextures,
    pub show_about: bool,
}

impl PixPeepApp {
    pub fn new(ctx: &egui::Context) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx, ctx.clone())?;

        Ok(Self {
            cmd_tx,
            result_rx,
            shell: ViewerShell::new(ViewerConfig::default()),
            ui_state: UIState::default(),
            textures: SlotTextures::default(),
            show_about: false,
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { slot, path, image } => {
                    self.install_image(ctx, slot, &path, image);
                    self.ui_state
                        .set_status(format!("Loaded {slot} image: {}", display_name(&path)));
                }
                WorkerResult::PairLoaded { paths, images } => {
                    let [first, second] = images;
                    self.install_image(ctx, Slot::First, &paths[0], first);
                    self.install_image(ctx, Slot::Second, &paths[1], second);
                    self.ui_state.set_status(format!(
                        "Loaded both images: {} | {}",
                        display_name(&paths[0]),
                        display_name(&paths[1])
                    ));
                }
                WorkerResult::Warning { message } => {
                    self.ui_state.add_log(format!("WARNING: {message}"));
                    self.ui_state.warning = Some(message);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.set_status(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn install_image(&mut self, ctx: &egui::Context, slot: Slot, path: &Path, image: PixelBuffer) {
        let texture = ctx.load_texture(
            format!("{slot}_image"),
            buffer_to_color_image(&image),
            egui::TextureOptions::NEAREST,
        );
        self.textures.set(slot, texture);
        self.shell.load(slot, image);
        self.ui_state.set_path(slot, path.to_path_buf());
    }

    pub fn reset_zoom(&mut self) {
        if self.shell.can_reset_zoom() {
            self.shell.reset_zoom();
        }
    }

    pub fn set_linked(&mut self, linked: bool) {
        match self.shell.set_sync_enabled(linked) {
            Ok(()) if linked => self.ui_state.set_status("Views linked"),
            Ok(()) => self.ui_state.set_status("Views unlinked"),
            Err(e) => self.ui_state.set_status(format!("ERROR: {e}")),
        }
    }

    fn show_warning(&mut self, ctx: &egui::Context) {
        let Some(message) = self.ui_state.warning.as_deref() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Load Both Images")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.ui_state.warning = None;
        }
    }
}

impl eframe::App for PixPeepApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        self.show_warning(ctx);

        // About dialog
        if self.show_about {
            egui::Window::new("About PixPeep")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("PixPeep");
                        ui.label("Side-by-side image comparison");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
