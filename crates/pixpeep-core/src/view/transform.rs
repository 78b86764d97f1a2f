use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::geometry::{Point, Rect, Size};

/// Uniform scale + translation mapping image space onto screen space:
/// `screen = image * scale + pan`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Screen pixels per image pixel.
    pub scale: f64,
    /// Screen position of the image origin (top-left corner).
    pub pan: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan: Point::ZERO,
        }
    }
}

impl Transform {
    pub fn image_to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.pan.x, p.y * self.scale + self.pan.y)
    }

    pub fn screen_to_image(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.pan.x) / self.scale,
            (p.y - self.pan.y) / self.scale,
        )
    }

    /// Whole image visible with its aspect ratio kept, centered in the view.
    pub fn fit(image: Size, view: Size, config: &ViewerConfig) -> Self {
        let fit_x = view.width / image.width;
        let fit_y = view.height / image.height;
        let scale = config.clamp_scale(fit_x.min(fit_y));
        Self::centered_on(
            scale,
            Point::new(image.width / 2.0, image.height / 2.0),
            view,
        )
    }

    /// Transform at `scale` that puts `image_point` in the middle of the view.
    pub fn centered_on(scale: f64, image_point: Point, view: Size) -> Self {
        Self {
            scale,
            pan: Point::new(
                view.width / 2.0 - image_point.x * scale,
                view.height / 2.0 - image_point.y * scale,
            ),
        }
    }

    /// Multiply the scale by `factor`, keeping the image point under `anchor`
    /// fixed on screen.
    pub fn zoomed(&self, factor: f64, anchor: Point) -> Self {
        let fixed = self.screen_to_image(anchor);
        let scale = self.scale * factor;
        Self {
            scale,
            pan: Point::new(anchor.x - fixed.x * scale, anchor.y - fixed.y * scale),
        }
    }

    /// Image-space point shown at the middle of the view.
    pub fn visible_center(&self, view: Size) -> Point {
        self.screen_to_image(Point::new(view.width / 2.0, view.height / 2.0))
    }

    /// Screen rectangle covered by the whole image.
    pub fn image_rect(&self, image: Size) -> Rect {
        Rect::from_min_max(
            self.pan,
            self.image_to_screen(Point::new(image.width, image.height)),
        )
    }

    /// Keep the image inside the view the way a scroll area does: an axis
    /// where the image is smaller than the view is centered, otherwise the pan
    /// cannot expose background past the image edge.
    pub fn constrained(self, image: Size, view: Size) -> Self {
        let constrain_axis = |pan: f64, extent: f64, viewport: f64| {
            let scaled = extent * self.scale;
            if scaled <= viewport {
                (viewport - scaled) / 2.0
            } else {
                pan.clamp(viewport - scaled, 0.0)
            }
        };
        Self {
            scale: self.scale,
            pan: Point::new(
                constrain_axis(self.pan.x, image.width, view.width),
                constrain_axis(self.pan.y, image.height, view.height),
            ),
        }
    }
}

/// Zoom input direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction for a vertical scroll delta; `None` when there is no scroll.
    pub fn from_scroll(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::In)
        } else if delta_y < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    pub fn factor(self, step: f64) -> f64 {
        match self {
            Self::In => step,
            Self::Out => 1.0 / step,
        }
    }
}

/// Size-independent description of what a viewport shows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub scale: f64,
    /// Visible center as a fraction of the image width.
    pub center_x_ratio: f64,
    /// Visible center as a fraction of the image height.
    pub center_y_ratio: f64,
}

impl ViewState {
    pub fn new(scale: f64, center_x_ratio: f64, center_y_ratio: f64) -> Self {
        Self {
            scale,
            center_x_ratio,
            center_y_ratio,
        }
    }

    /// Describe `transform` for an image of `image` size inside `view`.
    pub fn from_transform(transform: &Transform, image: Size, view: Size) -> Self {
        let center = transform.visible_center(view);
        let ratio = |c: f64, extent: f64| if extent > 0.0 { c / extent } else { 0.5 };
        Self {
            scale: transform.scale,
            center_x_ratio: ratio(center.x, image.width),
            center_y_ratio: ratio(center.y, image.height),
        }
    }

    /// Image-space point this state centers on, for an image of `image` size.
    pub fn center_in(&self, image: Size) -> Point {
        Point::new(
            self.center_x_ratio * image.width,
            self.center_y_ratio * image.height,
        )
    }

    /// Check the state can be applied under `config`: finite values and a
    /// scale inside the configured range.
    pub fn validate(&self, config: &ViewerConfig) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ViewerError::InvalidViewState(format!(
                "scale must be finite and positive, got {}",
                self.scale
            )));
        }
        if !(self.center_x_ratio.is_finite() && self.center_y_ratio.is_finite()) {
            return Err(ViewerError::InvalidViewState(format!(
                "center ratios must be finite, got ({}, {})",
                self.center_x_ratio, self.center_y_ratio
            )));
        }
        if !config.scale_in_range(self.scale) {
            return Err(ViewerError::TransformBounds {
                requested: self.scale,
                min: config.min_scale,
                max: config.max_scale,
            });
        }
        Ok(())
    }
}
