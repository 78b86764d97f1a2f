use std::path::PathBuf;

use pixpeep_core::buffer::PixelBuffer;
use pixpeep_core::shell::Slot;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode one file into one view.
    LoadImage { slot: Slot, path: PathBuf },

    /// Decode a multi-file selection into both views. The selection is
    /// validated on the worker, so any number of paths may be sent.
    LoadPair { paths: Vec<PathBuf> },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        slot: Slot,
        path: PathBuf,
        image: PixelBuffer,
    },
    PairLoaded {
        paths: [PathBuf; 2],
        images: [PixelBuffer; 2],
    },
    /// Shown in a modal window; nothing was loaded.
    Warning {
        message: String,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
