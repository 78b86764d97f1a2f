use pixpeep_core::config::{OverlayConfig, ViewerConfig};
use pixpeep_core::consts::{MAX_SCALE, MIN_SCALE, OVERLAY_MAX_PIXELS, ZOOM_STEP};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_viewer_config_defaults() {
    let c = ViewerConfig::default();
    assert_eq!(c.zoom_step, ZOOM_STEP);
    assert_eq!(c.min_scale, MIN_SCALE);
    assert_eq!(c.max_scale, MAX_SCALE);
    assert_eq!(c.overlay, OverlayConfig::default());
}

#[test]
fn test_overlay_config_defaults() {
    let o = OverlayConfig::default();
    assert_eq!(o.min_scale, 16.0);
    assert_eq!(o.min_text_box, 18.0);
    assert_eq!(o.max_pixels, OVERLAY_MAX_PIXELS);
    assert_eq!(o.fill_alpha, 80);
    assert_eq!(o.grid_color, [180, 180, 180, 180]);
}

// ---------------------------------------------------------------------------
// Scale range
// ---------------------------------------------------------------------------

#[test]
fn test_scale_range_is_inclusive() {
    let c = ViewerConfig::default();
    assert!(c.scale_in_range(0.05));
    assert!(c.scale_in_range(1000.0));
    assert!(!c.scale_in_range(0.049));
    assert!(!c.scale_in_range(1000.5));
    assert_eq!(c.clamp_scale(5000.0), 1000.0);
    assert_eq!(c.clamp_scale(0.0), 0.05);
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn test_partial_config_fills_defaults() {
    let c: ViewerConfig =
        serde_json::from_str(r#"{"zoom_step": 1.25, "overlay": {"max_pixels": 500}}"#).unwrap();
    assert_eq!(c.zoom_step, 1.25);
    assert_eq!(c.max_scale, MAX_SCALE);
    assert_eq!(c.overlay.max_pixels, 500);
    assert_eq!(c.overlay.min_scale, 16.0);
}

#[test]
fn test_config_serializes_all_fields() {
    let json = serde_json::to_value(ViewerConfig::default()).unwrap();
    assert!(json.get("zoom_step").is_some());
    assert!(json["overlay"].get("font_factor").is_some());
}
