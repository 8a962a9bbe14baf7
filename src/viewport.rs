//! Zoom-and-pan viewport.
//!
//! Owns the region of interest currently framed in the original image and
//! the display scale, and maps points between image space and display
//! space. The scale is strictly positive at all times.

use crate::config::ViewConfig;
use crate::geometry::{BBox, Point};

/// Hard lower bound keeping the scale strictly positive under repeated
/// wheel zoom-out.
const MIN_SCALE: f64 = 1e-3;

/// Wheel zoom direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    roi: BBox,
    scale: f64,
    base_scale: f64,
    config: ViewConfig,
}

impl Viewport {
    pub fn new(config: ViewConfig) -> Self {
        let base_scale = config.base_scale.max(MIN_SCALE);
        Self {
            roi: BBox::UNSET,
            scale: base_scale,
            base_scale,
            config,
        }
    }

    /// Sub-rectangle of the original image currently framed.
    pub fn roi(&self) -> BBox {
        self.roi
    }

    /// Display pixels per image pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scale restored by the fit command.
    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    /// Frame the whole image at the base scale. Called on sample load and
    /// on the explicit fit command.
    pub fn reset_to_full_image(&mut self, width: u32, height: u32) {
        self.roi = BBox::new(0, 0, width as i32 - 1, height as i32 - 1);
        self.scale = self.base_scale;
    }

    /// Zoom so `region` fills the view. Requests below the minimum pixel
    /// area are ignored, so a micro-drag never triggers a disorienting
    /// jump. The resulting scale is floored at the configured minimum.
    pub fn zoom_to_region(&mut self, region: BBox) {
        if !region.valid() || region.area() <= self.config.zoom_min_area {
            return;
        }
        let sx = self.roi.width() as f64 / region.width() as f64;
        let sy = self.roi.height() as f64 / region.height() as f64;
        self.scale = (self.scale * sx.min(sy)).max(self.config.zoom_scale_floor);
        self.roi = region;
    }

    /// Wheel zoom with a regime-asymmetric step: coarse while zoomed out
    /// below the base scale, fine at or above it. No ceiling.
    pub fn zoom_by_wheel(&mut self, direction: ZoomDirection) {
        let step = if self.scale < self.base_scale {
            self.config.wheel_step_coarse
        } else {
            self.config.wheel_step_fine
        };
        let factor = match direction {
            ZoomDirection::In => 1.0 + step,
            ZoomDirection::Out => 1.0 - step,
        };
        self.scale = (self.scale * factor).max(MIN_SCALE);
    }

    /// Image-space point to display space.
    pub fn to_display(&self, p: Point) -> Point {
        let tl = self.roi.top_left();
        Point::new(
            (((p.x - tl.x) as f64) * self.scale).round() as i32,
            (((p.y - tl.y) as f64) * self.scale).round() as i32,
        )
    }

    /// Display-space point back to image space. Inverse of `to_display`
    /// up to rounding.
    pub fn to_image(&self, p: Point) -> Point {
        let tl = self.roi.top_left();
        Point::new(
            (p.x as f64 / self.scale).round() as i32 + tl.x,
            (p.y as f64 / self.scale).round() as i32 + tl.y,
        )
    }

    /// Display-space rectangle back to image space.
    pub fn rect_to_image(&self, r: BBox) -> BBox {
        let tl = self.roi.top_left();
        r.decrease(self.scale).translate(tl.x, tl.y)
    }
}
