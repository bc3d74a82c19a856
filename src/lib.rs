//! zoop - pointer, touch and wheel driven pan/zoom for a single view window
//!
//! [`GestureTracker`] turns raw input into pan and zoom deltas and applies them
//! to a [`Surface`] through the view math in `zoop_view`.

mod config;
mod constants;
mod contact;
mod error;
mod gesture;
mod input;
mod replay;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, LogLevel, ZoopConfig, CONFIG_VERSION};
pub use constants::{DEFAULT_CONFIG_FILENAME, UNSET_PINCH_BASELINE};
pub use contact::{Contact, ContactSet, Point, PointerId};
pub use error::{Result, ZoopError};
pub use gesture::{Dispatch, GestureDelta, GestureTracker};
pub use input::InputEvent;
pub use replay::{run_script, ReplayReport, ReplayScript, ReplayStep};

// Re-export the view types callers need to implement a surface
pub use zoop_view::{
    pan, zoom, Anchor, AttributeSurface, DisplaySize, Surface, ViewError, ViewWindow, ZoomPolicy,
};
