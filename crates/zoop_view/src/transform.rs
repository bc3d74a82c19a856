//! Pan and zoom mathematics.
//!
//! Both operations are pure: they take the current window and return the next
//! one. Reading the window from a surface and writing it back is done by
//! [`crate::zoom`] and [`crate::pan`].

use serde::{Deserialize, Serialize};

use crate::window::{Anchor, DisplaySize, ViewWindow};

/// Fraction of the current extent added or removed by one zoom step.
pub const DEFAULT_ZOOM_STEP: f64 = 0.05;

/// Tunables for a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPolicy {
    /// Fraction of width/height changed per step.
    pub step: f64,
    /// Smallest width or height a zoom-in step may produce. `None` means no floor.
    pub min_extent: Option<f64>,
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            step: DEFAULT_ZOOM_STEP,
            min_extent: None,
        }
    }
}

/// Direction of a zoom step for a signed gesture magnitude.
///
/// Returns `1.0` for a positive scale (shrink, zoom in), `-1.0` for a negative
/// scale (grow, zoom out) and `0.0` for zero or NaN. Magnitude is ignored.
pub fn zoom_direction(scale: f64) -> f64 {
    if scale > 0.0 {
        1.0
    } else if scale < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl ViewWindow {
    /// Apply one fixed-size zoom step anchored at a surface-local pixel.
    ///
    /// The content point under `anchor` stays under `anchor`. An axis with a
    /// degenerate displayed dimension keeps its origin. A step whose result
    /// would not be a valid window (overflow, or a step of 1 or more) leaves
    /// the window unchanged.
    pub fn zoomed(
        &self,
        scale: f64,
        anchor: Anchor,
        displayed: DisplaySize,
        policy: &ZoomPolicy,
    ) -> ViewWindow {
        if scale.is_nan() {
            log::warn!("Ignoring zoom with NaN scale");
            return *self;
        }

        let direction = zoom_direction(scale);
        if direction == 0.0 {
            return *self;
        }

        let shrink_w = self.width * direction * policy.step;
        let shrink_h = self.height * direction * policy.step;
        let width = self.width - shrink_w;
        let height = self.height - shrink_h;

        if let Some(min) = policy.min_extent {
            if direction > 0.0 && (width < min || height < min) {
                log::debug!(
                    "Zoom step skipped: {}x{} would fall below minimum extent {}",
                    width,
                    height,
                    min
                );
                return *self;
            }
        }

        let dx = if displayed.has_width() {
            shrink_w * anchor.x / displayed.width
        } else {
            log::warn!("Surface has no usable width, zoom anchor ignored horizontally");
            0.0
        };
        let dy = if displayed.has_height() {
            shrink_h * anchor.y / displayed.height
        } else {
            log::warn!("Surface has no usable height, zoom anchor ignored vertically");
            0.0
        };

        let next = match ViewWindow::new(self.x + dx, self.y + dy, width, height).validate() {
            Ok(next) => next,
            Err(e) => {
                log::warn!("Zoom by {} ignored: {}", scale, e);
                return *self;
            }
        };

        log::trace!("zoom {} at ({}, {}): {} -> {}", scale, anchor.x, anchor.y, self, next);
        next
    }

    /// Shift the origin by a displayed-pixel displacement.
    ///
    /// Both axes are converted with the horizontal content scale. Width and
    /// height never change.
    pub fn panned(&self, delta_x: f64, delta_y: f64, displayed: DisplaySize) -> ViewWindow {
        if !displayed.has_width() {
            log::warn!("Surface has no usable width, pan ignored");
            return *self;
        }

        let content_scale = self.content_scale(displayed);
        let next = ViewWindow::new(
            self.x + delta_x / content_scale,
            self.y + delta_y / content_scale,
            self.width,
            self.height,
        );

        if !next.x.is_finite() || !next.y.is_finite() {
            log::warn!("Pan by ({}, {}) produced a non-finite origin, ignored", delta_x, delta_y);
            return *self;
        }

        log::trace!("pan ({}, {}): {} -> {}", delta_x, delta_y, self, next);
        next
    }
}
