//! The rendering surface boundary.
//!
//! A surface owns the view window. Every pan or zoom reads it at call time and
//! writes the result back before returning, so nothing here caches a window
//! across calls.

use std::borrow::Cow;

use crate::error::{Result, ViewError};
use crate::transform::ZoomPolicy;
use crate::window::{Anchor, DisplaySize, ViewWindow};

/// A rendering surface that exposes its view window and displayed size.
pub trait Surface {
    /// Raw `"x y width height"` representation, if the surface has one.
    fn view_box(&self) -> Option<Cow<'_, str>>;

    /// Replace the raw representation. Subsequent reads must observe it.
    fn set_view_box(&mut self, view_box: &str);

    /// Current rendered size in pixels.
    fn displayed_size(&self) -> DisplaySize;

    /// Parse the current view window.
    fn view_window(&self) -> Result<ViewWindow> {
        let raw = self.view_box().ok_or(ViewError::Missing)?;
        ViewWindow::parse(&raw)
    }

    /// Write a view window back to the surface.
    fn set_view_window(&mut self, window: ViewWindow) {
        self.set_view_box(&window.to_string());
    }
}

/// Zoom the surface's view window one step around `anchor`.
///
/// Returns the window that was written back.
pub fn zoom<S: Surface + ?Sized>(
    surface: &mut S,
    scale: f64,
    anchor: Anchor,
    policy: &ZoomPolicy,
) -> Result<ViewWindow> {
    let current = surface.view_window()?;
    let next = current.zoomed(scale, anchor, surface.displayed_size(), policy);
    surface.set_view_window(next);
    Ok(next)
}

/// Pan the surface's view window by a displayed-pixel displacement.
///
/// Returns the window that was written back.
pub fn pan<S: Surface + ?Sized>(surface: &mut S, delta_x: f64, delta_y: f64) -> Result<ViewWindow> {
    let current = surface.view_window()?;
    let next = current.panned(delta_x, delta_y, surface.displayed_size());
    surface.set_view_window(next);
    Ok(next)
}

/// In-memory surface holding the view window as a text attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSurface {
    view_box: Option<String>,
    displayed: DisplaySize,
}

impl AttributeSurface {
    /// Create a surface with a view window already set.
    pub fn new(window: ViewWindow, displayed: DisplaySize) -> Self {
        Self {
            view_box: Some(window.to_string()),
            displayed,
        }
    }

    /// Create a surface from a raw attribute value, which is not validated here.
    pub fn with_view_box(view_box: Option<String>, displayed: DisplaySize) -> Self {
        Self {
            view_box,
            displayed,
        }
    }

    /// Change the rendered size, as a host would on resize.
    pub fn resize(&mut self, displayed: DisplaySize) {
        self.displayed = displayed;
    }

    /// Remove the view window, as a host that drops the attribute would.
    pub fn clear_view_box(&mut self) {
        self.view_box = None;
    }
}

impl Surface for AttributeSurface {
    fn view_box(&self) -> Option<Cow<'_, str>> {
        self.view_box.as_deref().map(Cow::Borrowed)
    }

    fn set_view_box(&mut self, view_box: &str) {
        self.view_box = Some(view_box.to_string());
    }

    fn displayed_size(&self) -> DisplaySize {
        self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> AttributeSurface {
        AttributeSurface::new(
            ViewWindow::new(0.0, 0.0, 100.0, 100.0),
            DisplaySize::new(100.0, 100.0),
        )
    }

    #[test]
    fn test_zoom_writes_back_attribute() {
        let mut surface = surface();
        let next = zoom(
            &mut surface,
            1.0,
            Anchor::new(50.0, 50.0),
            &ZoomPolicy::default(),
        )
        .unwrap();

        assert_eq!(next, ViewWindow::new(2.5, 2.5, 95.0, 95.0));
        assert_eq!(surface.view_box().as_deref(), Some("2.5 2.5 95 95"));
    }

    #[test]
    fn test_pan_writes_back_attribute() {
        let mut surface = surface();
        pan(&mut surface, 10.0, 0.0).unwrap();
        assert_eq!(surface.view_box().as_deref(), Some("10 0 100 100"));
    }

    #[test]
    fn test_each_call_reads_current_attribute() {
        let mut surface = surface();
        pan(&mut surface, 10.0, 0.0).unwrap();

        // Host rewrites the attribute between gestures.
        surface.set_view_box("0 0 200 200");
        let next = pan(&mut surface, 10.0, 0.0).unwrap();

        assert_eq!(next, ViewWindow::new(5.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn test_zero_scale_leaves_window_unchanged() {
        let mut surface = surface();
        let before = surface.view_window().unwrap();
        zoom(&mut surface, 0.0, Anchor::new(12.0, 80.0), &ZoomPolicy::default()).unwrap();
        assert_eq!(surface.view_window().unwrap(), before);
    }

    #[test]
    fn test_missing_view_box_is_an_error() {
        let mut surface = surface();
        surface.clear_view_box();

        assert_eq!(pan(&mut surface, 1.0, 1.0), Err(ViewError::Missing));
        assert_eq!(
            zoom(&mut surface, 1.0, Anchor::default(), &ZoomPolicy::default()),
            Err(ViewError::Missing)
        );
        assert!(surface.view_box().is_none());
    }

    #[test]
    fn test_malformed_view_box_is_not_overwritten() {
        let mut surface = AttributeSurface::with_view_box(
            Some("0 0 abc 1".to_string()),
            DisplaySize::new(10.0, 10.0),
        );

        assert!(zoom(&mut surface, 1.0, Anchor::default(), &ZoomPolicy::default()).is_err());
        assert_eq!(surface.view_box().as_deref(), Some("0 0 abc 1"));
    }

    #[test]
    fn test_overflowing_zoom_leaves_surface_readable() {
        let mut surface = AttributeSurface::new(
            ViewWindow::new(0.0, 0.0, 1.75e308, 1.0),
            DisplaySize::new(100.0, 100.0),
        );
        let before = surface.view_window().unwrap();

        let next = zoom(&mut surface, -1.0, Anchor::default(), &ZoomPolicy::default()).unwrap();

        assert_eq!(next, before);
        assert_eq!(surface.view_window().unwrap(), before);
    }

    #[test]
    fn test_resize_changes_pan_scale() {
        let mut surface = surface();
        surface.resize(DisplaySize::new(50.0, 50.0));

        let next = pan(&mut surface, 10.0, 10.0).unwrap();
        assert_eq!(next, ViewWindow::new(5.0, 5.0, 100.0, 100.0));
    }
}
