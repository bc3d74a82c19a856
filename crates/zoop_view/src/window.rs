//! The view window rectangle and its textual form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};

/// Visible region of the content, in content coordinates.
///
/// Width and height are strictly positive and finite once the window has been
/// through [`ViewWindow::parse`] or [`ViewWindow::validate`]. The origin is never
/// clamped to the content bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rendered size of the surface in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

/// A surface-local pixel position that a zoom step holds fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl DisplaySize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the horizontal axis can be used as a divisor.
    pub fn has_width(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }

    /// Whether the vertical axis can be used as a divisor.
    pub fn has_height(&self) -> bool {
        self.height.is_finite() && self.height > 0.0
    }
}

impl ViewWindow {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Parse the `"x y width height"` representation.
    ///
    /// Values may be separated by whitespace, commas, or both, as in an SVG
    /// `viewBox` attribute.
    pub fn parse(text: &str) -> Result<Self> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.len() != 4 {
            return Err(ViewError::TokenCount {
                found: tokens.len(),
            });
        }

        let mut values = [0.0_f64; 4];
        for (value, token) in values.iter_mut().zip(&tokens) {
            *value = token.parse().map_err(|_| ViewError::InvalidNumber {
                token: (*token).to_string(),
            })?;
        }

        Self::new(values[0], values[1], values[2], values[3]).validate()
    }

    /// Check the window invariants, returning the window unchanged if they hold.
    pub fn validate(self) -> Result<Self> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(ViewError::NonFinite { field });
            }
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ViewError::NonPositiveExtent {
                width: self.width,
                height: self.height,
            });
        }

        Ok(self)
    }

    /// Content units per displayed pixel along the horizontal axis.
    ///
    /// Used for both axes when panning.
    pub fn content_scale(&self, displayed: DisplaySize) -> f64 {
        self.width / displayed.width
    }
}

// Mapping between content and display space, used to check anchor behavior.
#[cfg(test)]
impl ViewWindow {
    /// Content-space point shown at a surface-local pixel.
    pub(crate) fn content_at(&self, pixel: Anchor, displayed: DisplaySize) -> (f64, f64) {
        (
            self.x + pixel.x * self.width / displayed.width,
            self.y + pixel.y * self.height / displayed.height,
        )
    }

    /// Surface-local pixel at which a content-space point is shown.
    pub(crate) fn pixel_of(&self, content: (f64, f64), displayed: DisplaySize) -> Anchor {
        Anchor::new(
            (content.0 - self.x) * displayed.width / self.width,
            (content.1 - self.y) * displayed.height / self.height,
        )
    }
}

impl fmt::Display for ViewWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for ViewWindow {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
