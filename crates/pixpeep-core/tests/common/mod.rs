#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use pixpeep_core::buffer::PixelBuffer;
use pixpeep_core::config::ViewerConfig;
use pixpeep_core::geometry::Size;
use pixpeep_core::view::{ViewState, Viewport};

/// View size used throughout the tests.
pub const VIEW: Size = Size::new(800.0, 600.0);

/// Diagonal ramp: red follows x, green follows y, blue fixed at 128.
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| [x as u8, y as u8, 128]).expect("valid gradient")
}

pub fn solid(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |_, _| rgb).expect("valid solid image")
}

/// A viewport of size [`VIEW`] showing `image` at fit.
pub fn viewport_with(image: PixelBuffer) -> Viewport {
    let mut vp = Viewport::new(ViewerConfig::default());
    vp.set_view_size(VIEW);
    vp.load(image);
    vp
}

/// Record every state a viewport emits.
pub fn record_states(vp: &mut Viewport) -> Rc<RefCell<Vec<ViewState>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    vp.subscribe(move |state| sink.borrow_mut().push(*state));
    seen
}

pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {a} ~= {b} (tol {tol})");
}
