pub mod menu_bar;
pub mod status;
pub mod toolbar;
pub mod viewport;

use pixpeep_core::io::image_io::IMAGE_EXTENSIONS;
use pixpeep_core::shell::Slot;

use crate::app::PixPeepApp;
use crate::messages::WorkerCommand;

/// Pick one file for `slot`. The dialog runs off the UI thread.
pub(crate) fn open_image(app: &PixPeepApp, slot: Slot) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = image_dialog()
            .set_title(format!("Load {slot} image"))
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { slot, path });
        }
    });
}

/// Multi-select for both views; the worker checks the count.
pub(crate) fn open_pair(app: &PixPeepApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(paths) = image_dialog()
            .set_title("Load both images (select two)")
            .pick_files()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadPair { paths });
        }
    });
}

fn image_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new()
        .add_filter("Image files", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
}
