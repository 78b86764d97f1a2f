use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::geometry::{Point, Rect, Size};
use crate::view::overlay::{overlay_commands, plan_overlay};
use crate::view::render::{image_command, DrawCommand};
use crate::view::transform::{Transform, ViewState, ZoomDirection};

/// A viewport shared between its owner and the listeners of its peer.
pub type SharedViewport = Rc<RefCell<Viewport>>;

/// Callback invoked synchronously with the new state after every user zoom
/// or pan.
pub type Listener = Box<dyn FnMut(&ViewState)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Image pixel under a screen position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelProbe {
    pub x: usize,
    pub y: usize,
    pub rgb: [u8; 3],
}

/// Raises the external-update flag for its lifetime. Dropping restores the
/// previous value on every exit path, including unwinding.
struct ExternalUpdateGuard {
    flag: Rc<Cell<bool>>,
    previous: bool,
}

impl ExternalUpdateGuard {
    fn enter(flag: &Rc<Cell<bool>>) -> Self {
        let previous = flag.replace(true);
        Self {
            flag: Rc::clone(flag),
            previous,
        }
    }
}

impl Drop for ExternalUpdateGuard {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// One pannable, zoomable view of an image.
pub struct Viewport {
    config: ViewerConfig,
    image: Option<Arc<PixelBuffer>>,
    transform: Transform,
    view_size: Size,
    /// Set by `load` when the view has no size yet; the fit runs on the first
    /// non-empty `set_view_size`.
    fit_pending: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    applying_external: Rc<Cell<bool>>,
}

impl Viewport {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            image: None,
            transform: Transform::default(),
            view_size: Size::default(),
            fit_pending: false,
            listeners: Vec::new(),
            next_listener: 0,
            applying_external: Rc::new(Cell::new(false)),
        }
    }

    pub fn shared(config: ViewerConfig) -> SharedViewport {
        Rc::new(RefCell::new(Self::new(config)))
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ViewState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn image(&self) -> Option<&Arc<PixelBuffer>> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// True only while an inbound state is being applied.
    pub fn is_applying_external(&self) -> bool {
        self.applying_external.get()
    }

    fn image_size(&self) -> Option<Size> {
        self.image
            .as_ref()
            .map(|img| Size::new(img.width() as f64, img.height() as f64))
    }

    /// Update the visible area. A pending fit runs now; otherwise the image
    /// point at the middle of the view stays in the middle. Emits nothing.
    pub fn set_view_size(&mut self, size: Size) {
        if size == self.view_size {
            return;
        }
        let center = self.transform.visible_center(self.view_size);
        self.view_size = size;
        if size.is_empty() {
            return;
        }
        if self.fit_pending {
            self.fit();
            return;
        }
        if let Some(image) = self.image_size() {
            self.transform =
                Transform::centered_on(self.transform.scale, center, size).constrained(image, size);
        }
    }

    /// Replace the image and reset to fit. Does not notify listeners.
    pub fn load(&mut self, image: impl Into<Arc<PixelBuffer>>) {
        let image = image.into();
        debug!(width = image.width(), height = image.height(), "viewport load");
        self.image = Some(image);
        self.fit_pending = true;
        self.fit();
    }

    /// Re-apply the load-time fit.
    pub fn reset_to_fit(&mut self) {
        if self.image.is_some() {
            self.fit_pending = true;
            self.fit();
        }
    }

    fn fit(&mut self) {
        let Some(image) = self.image_size() else {
            return;
        };
        if self.view_size.is_empty() {
            return;
        }
        self.transform = Transform::fit(image, self.view_size, &self.config);
        self.fit_pending = false;
        debug!(scale = self.transform.scale, "fit to view");
    }

    /// Zoom one step around `anchor` (view-local screen coordinates).
    ///
    /// A step that would leave the allowed scale range is rejected with
    /// [`ViewerError::TransformBounds`] and changes nothing.
    pub fn zoom(&mut self, direction: ZoomDirection, anchor: Point) -> Result<()> {
        let Some(image) = self.image_size() else {
            return Ok(());
        };
        let factor = direction.factor(self.config.zoom_step);
        let requested = self.transform.scale * factor;
        if !self.config.scale_in_range(requested) {
            return Err(ViewerError::TransformBounds {
                requested,
                min: self.config.min_scale,
                max: self.config.max_scale,
            });
        }
        self.transform = self
            .transform
            .zoomed(factor, anchor)
            .constrained(image, self.view_size);
        self.fit_pending = false;
        self.notify();
        Ok(())
    }

    /// Move the image by `delta` screen pixels.
    pub fn pan(&mut self, delta: Point) {
        let Some(image) = self.image_size() else {
            return;
        };
        self.transform.pan = self.transform.pan + delta;
        self.transform = self.transform.constrained(image, self.view_size);
        self.fit_pending = false;
        self.notify();
    }

    /// Adopt a state coming from the peer view: copy the scale and center on
    /// the same relative image position. Never notifies listeners.
    pub fn apply_external_state(&mut self, state: &ViewState) -> Result<()> {
        let _guard = ExternalUpdateGuard::enter(&self.applying_external);
        state.validate(&self.config)?;
        let Some(image) = self.image_size() else {
            return Ok(());
        };
        let center = state.center_in(image);
        self.transform = Transform::centered_on(state.scale, center, self.view_size)
            .constrained(image, self.view_size);
        self.fit_pending = false;
        self.notify();
        Ok(())
    }

    /// Current normalized state, `None` without an image.
    pub fn state(&self) -> Option<ViewState> {
        let image = self.image_size()?;
        Some(ViewState::from_transform(
            &self.transform,
            image,
            self.view_size,
        ))
    }

    fn notify(&mut self) {
        if self.applying_external.get() {
            trace!("state change suppressed during external update");
            return;
        }
        let Some(state) = self.state() else {
            return;
        };
        for (_, listener) in &mut self.listeners {
            listener(&state);
        }
    }

    /// Pixel under a view-local screen position.
    pub fn probe(&self, screen: Point) -> Option<PixelProbe> {
        let image = self.image.as_ref()?;
        let p = self.transform.screen_to_image(screen);
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        image.get(x, y).map(|rgb| PixelProbe { x, y, rgb })
    }

    /// Draw commands for the part of the view inside `visible`: the bitmap,
    /// then the pixel overlay when zoomed in far enough.
    pub fn render(&self, visible: Rect) -> Vec<DrawCommand> {
        let Some(image) = self.image.as_ref() else {
            return Vec::new();
        };
        let size = Size::new(image.width() as f64, image.height() as f64);

        let mut commands: Vec<DrawCommand> = image_command(size, &self.transform, visible)
            .into_iter()
            .collect();
        if let Some(plan) = plan_overlay(image, &self.transform, visible, &self.config.overlay) {
            trace!(cells = plan.cells.len(), step = plan.step, "pixel overlay");
            commands.extend(overlay_commands(&plan, &self.config.overlay));
        }
        commands
    }
}
