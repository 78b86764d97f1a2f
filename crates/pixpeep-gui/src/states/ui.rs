use std::path::{Path, PathBuf};

use pixpeep_core::shell::Slot;
use pixpeep_core::view::PixelProbe;

/// Overall UI state.
pub struct UIState {
    /// Last status line ("Ready", "Loaded first image: a.png", errors).
    pub status: String,
    pub first_path: Option<PathBuf>,
    pub second_path: Option<PathBuf>,

    /// Pending modal warning.
    pub warning: Option<String>,

    /// Pixel under the cursor, refreshed every frame.
    pub hover: Option<(Slot, PixelProbe)>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            status: "Ready".into(),
            first_path: None,
            second_path: None,
            warning: None,
            hover: None,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Replace the status line and keep a copy in the log.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
        self.log_messages.push(self.status.clone());
    }

    pub fn path(&self, slot: Slot) -> Option<&Path> {
        match slot {
            Slot::First => self.first_path.as_deref(),
            Slot::Second => self.second_path.as_deref(),
        }
    }

    pub fn set_path(&mut self, slot: Slot, path: PathBuf) {
        match slot {
            Slot::First => self.first_path = Some(path),
            Slot::Second => self.second_path = Some(path),
        }
    }
}
