use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::buffer::PixelBuffer;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::view::{
    DrawCommand, PixelProbe, SharedViewport, SyncController, ViewState, Viewport, ZoomDirection,
};

/// Which of the two side-by-side views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Two synchronized viewports side by side.
pub struct ViewerShell {
    first: SharedViewport,
    second: SharedViewport,
    sync: SyncController,
}

impl ViewerShell {
    pub fn new(config: ViewerConfig) -> Self {
        let first = Viewport::shared(config.clone());
        let second = Viewport::shared(config);
        let sync = SyncController::new(&first, &second);
        Self {
            first,
            second,
            sync,
        }
    }

    pub fn viewport(&self, slot: Slot) -> &SharedViewport {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }

    pub fn load(&mut self, slot: Slot, image: impl Into<Arc<PixelBuffer>>) {
        let image = image.into();
        info!(%slot, width = image.width(), height = image.height(), "loading image");
        self.viewport(slot).borrow_mut().load(image);
    }

    pub fn load_first(&mut self, image: impl Into<Arc<PixelBuffer>>) {
        self.load(Slot::First, image);
    }

    pub fn load_second(&mut self, image: impl Into<Arc<PixelBuffer>>) {
        self.load(Slot::Second, image);
    }

    pub fn load_both(
        &mut self,
        first: impl Into<Arc<PixelBuffer>>,
        second: impl Into<Arc<PixelBuffer>>,
    ) {
        self.load_first(first);
        self.load_second(second);
    }

    /// Fit both views. Not a sync event: each view fits its own image.
    pub fn reset_zoom(&mut self) {
        for slot in Slot::ALL {
            self.viewport(slot).borrow_mut().reset_to_fit();
        }
    }

    /// Reset is meaningful once any view holds an image.
    pub fn can_reset_zoom(&self) -> bool {
        Slot::ALL.iter().any(|&slot| self.has_image(slot))
    }

    pub fn has_image(&self, slot: Slot) -> bool {
        self.viewport(slot).borrow().has_image()
    }

    pub fn is_sync_enabled(&self) -> bool {
        self.sync.is_enabled()
    }

    /// Link or unlink the views. Re-linking snaps the second view onto the
    /// first so they agree immediately.
    pub fn set_sync_enabled(&mut self, enabled: bool) -> Result<()> {
        let was_enabled = self.sync.is_enabled();
        self.sync.set_enabled(enabled);
        if enabled && !was_enabled {
            self.sync.resync()?;
        }
        Ok(())
    }

    pub fn set_view_size(&self, slot: Slot, size: Size) {
        self.viewport(slot).borrow_mut().set_view_size(size);
    }

    pub fn zoom(&self, slot: Slot, direction: ZoomDirection, anchor: Point) -> Result<()> {
        self.viewport(slot).borrow_mut().zoom(direction, anchor)
    }

    pub fn pan(&self, slot: Slot, delta: Point) {
        self.viewport(slot).borrow_mut().pan(delta);
    }

    pub fn state(&self, slot: Slot) -> Option<ViewState> {
        self.viewport(slot).borrow().state()
    }

    pub fn scale(&self, slot: Slot) -> f64 {
        self.viewport(slot).borrow().scale()
    }

    pub fn image_size(&self, slot: Slot) -> Option<(usize, usize)> {
        self.viewport(slot)
            .borrow()
            .image()
            .map(|img| (img.width(), img.height()))
    }

    pub fn probe(&self, slot: Slot, screen: Point) -> Option<PixelProbe> {
        self.viewport(slot).borrow().probe(screen)
    }

    pub fn render(&self, slot: Slot, visible: Rect) -> Vec<DrawCommand> {
        self.viewport(slot).borrow().render(visible)
    }
}
