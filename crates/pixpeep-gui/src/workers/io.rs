use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use pixpeep_core::io::image_io::{decode_image, decode_pair, display_name};
use pixpeep_core::io::selection::expect_pair;
use pixpeep_core::shell::Slot;

use crate::messages::WorkerResult;

use super::{send, send_error, send_log};

pub(super) fn handle_load_image(
    slot: Slot,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let name = display_name(path);

    match decode_image(path) {
        Ok(image) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Decoded {name} ({}x{}) in {:.0}ms",
                    image.width(),
                    image.height(),
                    start.elapsed().as_secs_f32() * 1000.0
                ),
            );
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    slot,
                    path: path.to_path_buf(),
                    image,
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to load {slot} image: {e}")),
    }
}

pub(super) fn handle_load_pair(
    paths: Vec<PathBuf>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let pair = match expect_pair(paths) {
        Ok(Some(pair)) => pair,
        Ok(None) => return,
        Err(e) => {
            send(
                tx,
                ctx,
                WorkerResult::Warning {
                    message: e.to_string(),
                },
            );
            return;
        }
    };

    match decode_pair(&pair) {
        Ok(images) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Decoded {} and {}",
                    display_name(&pair[0]),
                    display_name(&pair[1])
                ),
            );
            send(tx, ctx, WorkerResult::PairLoaded { paths: pair, images });
        }
        Err(e) => send_error(tx, ctx, format!("Failed to load images: {e}")),
    }
}
