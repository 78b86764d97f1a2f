use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::error::Result;
use crate::view::transform::ViewState;
use crate::view::viewport::{ListenerId, SharedViewport, Viewport};

/// Keeps two viewports at the same scale and relative center.
///
/// Each viewport gets a listener that forwards its state to the other one.
/// Forwarding is synchronous; the receiving viewport's external-update guard
/// keeps the echo from bouncing back.
pub struct SyncController {
    enabled: Rc<Cell<bool>>,
    first: (Weak<RefCell<Viewport>>, ListenerId),
    second: (Weak<RefCell<Viewport>>, ListenerId),
}

impl SyncController {
    pub fn new(first: &SharedViewport, second: &SharedViewport) -> Self {
        let enabled = Rc::new(Cell::new(true));
        let first_id = first
            .borrow_mut()
            .subscribe(forward_to(Rc::downgrade(second), Rc::clone(&enabled)));
        let second_id = second
            .borrow_mut()
            .subscribe(forward_to(Rc::downgrade(first), Rc::clone(&enabled)));

        Self {
            enabled,
            first: (Rc::downgrade(first), first_id),
            second: (Rc::downgrade(second), second_id),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// While disabled, state changes are still received but not forwarded.
    pub fn set_enabled(&self, enabled: bool) {
        debug!(enabled, "view sync");
        self.enabled.set(enabled);
    }

    /// Push the first view's current state onto the second, e.g. right after
    /// re-linking.
    pub fn resync(&self) -> Result<()> {
        let (Some(first), Some(second)) = (self.first.0.upgrade(), self.second.0.upgrade()) else {
            return Ok(());
        };
        let state = first.borrow().state();
        match state {
            Some(state) => second.borrow_mut().apply_external_state(&state),
            None => Ok(()),
        }
    }
}

impl Drop for SyncController {
    fn drop(&mut self) {
        for (viewport, id) in [&self.first, &self.second] {
            if let Some(viewport) = viewport.upgrade() {
                if let Ok(mut viewport) = viewport.try_borrow_mut() {
                    viewport.unsubscribe(*id);
                }
            }
        }
    }
}

fn forward_to(
    target: Weak<RefCell<Viewport>>,
    enabled: Rc<Cell<bool>>,
) -> impl FnMut(&ViewState) + 'static {
    move |state| {
        if !enabled.get() {
            return;
        }
        let Some(target) = target.upgrade() else {
            return;
        };
        // Already borrowed means the peer is the one mid-update.
        let Ok(mut viewport) = target.try_borrow_mut() else {
            debug!("peer view busy, skipping sync");
            return;
        };
        if let Err(e) = viewport.apply_external_state(state) {
            warn!("Failed to sync view state: {e}");
        }
    }
}
