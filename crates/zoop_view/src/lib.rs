//! zoop_view - view window math for pan and zoom
//!
//! This crate owns the view window rectangle, its textual `"x y width height"`
//! representation, and the stateless pan/zoom transforms applied to it. The
//! rendering surface that stores the window is abstracted behind [`Surface`].

mod error;
mod surface;
mod transform;
mod window;

pub use error::{Result, ViewError};
pub use surface::{pan, zoom, AttributeSurface, Surface};
pub use transform::{zoom_direction, ZoomPolicy, DEFAULT_ZOOM_STEP};
pub use window::{Anchor, DisplaySize, ViewWindow};
