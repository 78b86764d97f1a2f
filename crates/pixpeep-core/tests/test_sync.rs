mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{assert_close, gradient, record_states, VIEW};
use pixpeep_core::buffer::PixelBuffer;
use pixpeep_core::config::ViewerConfig;
use pixpeep_core::geometry::Point;
use pixpeep_core::view::{SharedViewport, SyncController, ViewState, Viewport, ZoomDirection};

fn shared_with(image: PixelBuffer) -> SharedViewport {
    let vp = Viewport::shared(ViewerConfig::default());
    {
        let mut v = vp.borrow_mut();
        v.set_view_size(VIEW);
        v.load(image);
    }
    vp
}

fn counter(vp: &SharedViewport) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let sink = Rc::clone(&count);
    vp.borrow_mut().subscribe(move |_| sink.set(sink.get() + 1));
    count
}

#[test]
fn test_zoom_propagates_scale_bit_for_bit() {
    let a = shared_with(gradient(256, 256));
    let b = shared_with(gradient(256, 256));
    let _sync = SyncController::new(&a, &b);

    for _ in 0..7 {
        a.borrow_mut()
            .zoom(ZoomDirection::In, Point::new(310.0, 170.0))
            .unwrap();
        assert_eq!(a.borrow().scale().to_bits(), b.borrow().scale().to_bits());
    }

    let sa = a.borrow().state().unwrap();
    let sb = b.borrow().state().unwrap();
    assert_close(sa.center_x_ratio, sb.center_x_ratio, 1e-12);
    assert_close(sa.center_y_ratio, sb.center_y_ratio, 1e-12);
}

#[test]
fn test_sync_is_bidirectional() {
    let a = shared_with(gradient(256, 256));
    let b = shared_with(gradient(256, 256));
    let _sync = SyncController::new(&a, &b);

    b.borrow_mut()
        .apply_external_state(&ViewState::new(9.0, 0.5, 0.5))
        .unwrap();
    b.borrow_mut().pan(Point::new(-120.0, 40.0));

    assert_eq!(a.borrow().scale(), 9.0);
    let sa = a.borrow().state().unwrap();
    let sb = b.borrow().state().unwrap();
    assert_close(sa.center_x_ratio, sb.center_x_ratio, 1e-12);
    assert_close(sa.center_y_ratio, sb.center_y_ratio, 1e-12);
}

#[test]
fn test_sync_uses_ratios_across_image_sizes() {
    let a = shared_with(gradient(256, 256));
    let b = shared_with(gradient(512, 128));
    let _sync = SyncController::new(&a, &b);

    a.borrow_mut()
        .apply_external_state(&ViewState::new(20.0, 0.25, 0.5))
        .unwrap();
    a.borrow_mut().pan(Point::ZERO);

    let sb = b.borrow().state().unwrap();
    assert_eq!(sb.scale, 20.0);
    assert_close(sb.center_x_ratio, 0.25, 1e-12);
    assert_close(sb.center_y_ratio, 0.5, 1e-12);

    let center = b.borrow().transform().visible_center(VIEW);
    assert_close(center.x, 128.0, 1e-9);
    assert_close(center.y, 64.0, 1e-9);
}

#[test]
fn test_external_state_never_echoes() {
    let a = shared_with(gradient(256, 256));
    let b = shared_with(gradient(256, 256));
    let _sync = SyncController::new(&a, &b);
    let a_events = counter(&a);
    let b_events = counter(&b);
    let b_before = b.borrow().transform();

    a.borrow_mut()
        .apply_external_state(&ViewState::new(30.0, 0.1, 0.9))
        .unwrap();

    assert_eq!(a_events.get(), 0);
    assert_eq!(b_events.get(), 0);
    assert_eq!(b.borrow().transform(), b_before);
}

#[test]
fn test_user_input_emits_once_per_side() {
    let a = shared_with(gradient(256, 256));
    let b = shared_with(gradient(256, 256));
    let _sync = SyncController::new(&a, &b);
    let a_events = counter(&a);
    let b_events = counter(&b);

    a.borrow_mut()
        .zoom(ZoomDirection::In, Point::new(400.0, 300.0))
        .unwrap();
    b.borrow_mut().pan(Point::new(3.0, 3.0));

    assert_eq!(a_events.get(), 1);
    assert_eq!(b_events.get(), 1);
    assert!(!a.borrow().is_applying_external());
    assert!(!b.borrow().is_applying_external());
}

#[test]
fn test_disabled_sync_keeps_views_independent() {
    let a = shared_with(gradient(256, 256));
    let b = shared_with(gradient(256, 256));
    let sync = SyncController::new(&a, &b);
    let fit = b.borrow().scale();

    sync.set_enabled(false);
    assert!(!sync.is_enabled());
    a.borrow_mut()
        .zoom(ZoomDirection::In, Point::new(400.0, 300.0))
        .unwrap();
    assert_eq!(b.borrow().scale(), fit);

    sync.set_enabled(true);
    sync.resync().unwrap();
    assert_eq!(b.borrow().scale(), a.borrow().scale());
}

#[test]
fn test_dropping_controller_unlinks_views() {
    let a = shared_with(gradient(256, 256));
    let b = shared_with(gradient(256, 256));
    let b_states = record_states(&mut b.borrow_mut());
    let sync = SyncController::new(&a, &b);
    drop(sync);

    let fit = b.borrow().scale();
    a.borrow_mut()
        .zoom(ZoomDirection::In, Point::new(400.0, 300.0))
        .unwrap();
    assert_eq!(b.borrow().scale(), fit);
    assert!(b_states.borrow().is_empty());
}

#[test]
fn test_sync_into_empty_peer_is_ignored() {
    let a = shared_with(gradient(256, 256));
    let b = Viewport::shared(ViewerConfig::default());
    b.borrow_mut().set_view_size(VIEW);
    let _sync = SyncController::new(&a, &b);

    a.borrow_mut()
        .zoom(ZoomDirection::In, Point::new(400.0, 300.0))
        .unwrap();
    assert!(b.borrow().state().is_none());
    assert_eq!(b.borrow().scale(), 1.0);
}
