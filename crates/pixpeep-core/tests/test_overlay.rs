mod common;

use common::{assert_close, gradient, solid, viewport_with, VIEW};
use pixpeep_core::config::{OverlayConfig, ViewerConfig};
use pixpeep_core::geometry::{Point, Rect, Size};
use pixpeep_core::view::overlay::{
    overlay_commands, overlay_stride, plan_overlay, visible_pixel_bounds, PixelBounds,
};
use pixpeep_core::view::{DrawCommand, Rgba, Transform, ViewState, Viewport};

fn full_view() -> Rect {
    Rect::from_min_size(Point::ZERO, VIEW)
}

fn has_overlay(commands: &[DrawCommand]) -> bool {
    commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { .. } | DrawCommand::StrokeRect { .. }))
}

fn render_at(vp: &mut Viewport, scale: f64) -> Vec<DrawCommand> {
    vp.apply_external_state(&ViewState::new(scale, 0.5, 0.5)).unwrap();
    vp.render(full_view())
}

fn bounds(width: usize, height: usize) -> PixelBounds {
    PixelBounds {
        x0: 0,
        y0: 0,
        x1: width - 1,
        y1: height - 1,
    }
}

fn sampled(b: &PixelBounds, step: usize) -> usize {
    b.width().div_ceil(step) * b.height().div_ceil(step)
}

#[test]
fn test_no_overlay_below_legibility_threshold() {
    let mut vp = viewport_with(gradient(256, 256));
    let commands = render_at(&mut vp, 15.9);
    assert!(!has_overlay(&commands));
    assert_eq!(commands.len(), 1);
}

#[test]
fn test_no_overlay_when_box_too_small_for_text() {
    let mut vp = viewport_with(gradient(256, 256));
    assert!(!has_overlay(&render_at(&mut vp, 16.0)));
    assert!(!has_overlay(&render_at(&mut vp, 17.9)));
    assert!(has_overlay(&render_at(&mut vp, 18.0)));
}

#[test]
fn test_overlay_from_sixteen_when_text_box_allows() {
    let mut config = ViewerConfig::default();
    config.overlay.min_text_box = 16.0;
    let mut vp = Viewport::new(config);
    vp.set_view_size(VIEW);
    vp.load(gradient(256, 256));

    assert!(!has_overlay(&render_at(&mut vp, 15.9)));
    assert!(has_overlay(&render_at(&mut vp, 16.0)));
}

#[test]
fn test_overlay_config_threshold() {
    let config = OverlayConfig::default();
    assert_eq!(config.threshold(), 18.0);
    assert_eq!(config.font_size(20.0), 6.0);
    assert_close(config.font_size(50.0), 11.0, 1e-12);
}

#[test]
fn test_visible_bounds_clamped_to_image() {
    let t = Transform {
        scale: 20.0,
        pan: Point::new(100.0, -30.0),
    };
    let b = visible_pixel_bounds(&t, 10, 50, full_view()).unwrap();
    assert_eq!(b, PixelBounds { x0: 0, y0: 1, x1: 9, y1: 31 });
}

#[test]
fn test_visible_bounds_exclude_pixel_past_aligned_edge() {
    let t = Transform {
        scale: 20.0,
        pan: Point::ZERO,
    };
    let visible = Rect::from_min_size(Point::ZERO, Size::new(1260.0, 1260.0));
    let b = visible_pixel_bounds(&t, 200, 200, visible).unwrap();
    assert_eq!(b, PixelBounds { x0: 0, y0: 0, x1: 62, y1: 62 });

    // Scrolled half a pixel: the partially visible column counts.
    let t = Transform {
        scale: 20.0,
        pan: Point::new(-10.0, 0.0),
    };
    let b = visible_pixel_bounds(&t, 200, 200, visible).unwrap();
    assert_eq!((b.x0, b.x1), (0, 63));
}

#[test]
fn test_plan_uses_every_pixel_when_aligned_view_fits_cap() {
    let image = gradient(200, 200);
    let t = Transform {
        scale: 20.0,
        pan: Point::ZERO,
    };
    let visible = Rect::from_min_size(Point::ZERO, Size::new(1260.0, 1260.0));
    let plan = plan_overlay(&image, &t, visible, &OverlayConfig::default()).unwrap();

    assert_eq!(plan.step, 1);
    assert_eq!(plan.cells.len(), 63 * 63);
}

#[test]
fn test_visible_bounds_none_when_offscreen() {
    let t = Transform {
        scale: 20.0,
        pan: Point::new(900.0, 0.0),
    };
    assert!(visible_pixel_bounds(&t, 10, 10, full_view()).is_none());

    let t = Transform {
        scale: 20.0,
        pan: Point::new(-1000.0, 0.0),
    };
    assert!(visible_pixel_bounds(&t, 10, 10, full_view()).is_none());
}

#[test]
fn test_stride_is_one_under_cap() {
    assert_eq!(overlay_stride(&bounds(40, 30), 4000), 1);
    assert_eq!(overlay_stride(&bounds(80, 50), 4000), 1);
}

#[test]
fn test_stride_for_ten_thousand_pixels() {
    let b = bounds(100, 100);
    let step = overlay_stride(&b, 4000);
    assert_eq!(step, 2);
    assert!(sampled(&b, step) <= 4000);
    assert!(sampled(&b, step - 1) > 4000);
}

#[test]
fn test_stride_is_minimal_and_within_cap() {
    for (w, h) in [(100, 100), (127, 127), (316, 316), (1000, 7), (4001, 1), (640, 480), (65, 65)] {
        let b = bounds(w, h);
        let step = overlay_stride(&b, 4000);
        assert!(sampled(&b, step) <= 4000, "{w}x{h} step {step}");
        if step > 1 {
            assert!(sampled(&b, step - 1) > 4000, "{w}x{h} step {step} not minimal");
        }
    }
}

#[test]
fn test_stride_corrects_rounding_overshoot() {
    // ceil(sqrt(316 * 316 / 4000)) = 5 would sample 64 * 64 = 4096 cells.
    let b = bounds(316, 316);
    assert_eq!(overlay_stride(&b, 4000), 6);
}

#[test]
fn test_plan_caps_ten_thousand_visible_pixels() {
    let image = gradient(200, 200);
    let t = Transform {
        scale: 20.0,
        pan: Point::ZERO,
    };
    let visible = Rect::from_min_size(Point::ZERO, Size::new(2000.0, 2000.0));
    let plan = plan_overlay(&image, &t, visible, &OverlayConfig::default()).unwrap();

    assert_eq!(plan.bounds.count(), 10_000);
    assert_eq!(plan.step, 2);
    assert_eq!(plan.cells.len(), 2500);
    assert!(plan.cells.iter().all(|c| c.x % 2 == 0 && c.y % 2 == 0));
}

#[test]
fn test_plan_cell_geometry() {
    let image = solid(4, 4, [10, 20, 30]);
    let t = Transform {
        scale: 20.0,
        pan: Point::new(5.0, 7.0),
    };
    let plan = plan_overlay(&image, &t, full_view(), &OverlayConfig::default()).unwrap();
    assert_eq!(plan.cells.len(), 16);

    let cell = plan.cells.iter().find(|c| c.x == 1 && c.y == 2).unwrap();
    assert_eq!(cell.rgb, [10, 20, 30]);
    // Pixel center (1.5, 2.5) -> screen (35, 57); box is 20 - 2 wide.
    assert_close(cell.rect.min.x, 26.0, 1e-9);
    assert_close(cell.rect.min.y, 48.0, 1e-9);
    assert_close(cell.rect.width(), 18.0, 1e-9);
    assert_close(cell.rect.height(), 18.0, 1e-9);
}

#[test]
fn test_overlay_commands_use_channel_colors() {
    let image = solid(1, 1, [200, 100, 50]);
    let t = Transform {
        scale: 30.0,
        pan: Point::ZERO,
    };
    let config = OverlayConfig::default();
    let plan = plan_overlay(&image, &t, full_view(), &config).unwrap();
    let commands = overlay_commands(&plan, &config);
    assert_eq!(commands.len(), 5);

    assert_eq!(
        commands[0],
        DrawCommand::FillRect {
            rect: plan.cells[0].rect,
            color: Rgba::new(200, 100, 50, 80),
        }
    );
    match &commands[1] {
        DrawCommand::StrokeRect { width, color, .. } => {
            assert_eq!(*width, 0.7);
            assert_eq!(*color, Rgba::new(180, 180, 180, 180));
        }
        other => panic!("expected grid outline, got {other:?}"),
    }

    let expected = [
        ("200", Rgba::rgb(200, 0, 0)),
        ("100", Rgba::rgb(0, 100, 0)),
        ("50", Rgba::rgb(0, 0, 50)),
    ];
    for (i, (text_expected, color_expected)) in expected.iter().enumerate() {
        match &commands[2 + i] {
            DrawCommand::Text {
                rect,
                text,
                font_size,
                color,
            } => {
                assert_eq!(text, text_expected);
                assert_eq!(color, color_expected);
                assert_close(*font_size as f64, 6.6, 1e-5);
                assert_close(rect.height(), 10.0, 1e-9);
                assert_close(rect.min.y, 1.0 + 10.0 * i as f64, 1e-9);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}

#[test]
fn test_dark_values_are_not_brightened() {
    let image = solid(1, 1, [3, 0, 7]);
    let t = Transform {
        scale: 40.0,
        pan: Point::ZERO,
    };
    let config = OverlayConfig::default();
    let plan = plan_overlay(&image, &t, full_view(), &config).unwrap();
    let colors: Vec<Rgba> = overlay_commands(&plan, &config)
        .into_iter()
        .filter_map(|c| match c {
            DrawCommand::Text { color, .. } => Some(color),
            _ => None,
        })
        .collect();
    assert_eq!(
        colors,
        vec![Rgba::rgb(3, 0, 0), Rgba::rgb(0, 0, 0), Rgba::rgb(0, 0, 7)]
    );
}

#[test]
fn test_render_caps_overlay_in_large_window() {
    let mut vp = Viewport::new(ViewerConfig::default());
    let big = Size::new(4000.0, 4000.0);
    vp.set_view_size(big);
    vp.load(gradient(1000, 1000));
    vp.apply_external_state(&ViewState::new(20.0, 0.5, 0.5)).unwrap();

    let commands = vp.render(Rect::from_min_size(Point::ZERO, big));
    let fills = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
        .count();
    assert!(fills > 0);
    assert!(fills <= 4000);
}
