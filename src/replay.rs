//! Replaying recorded input against an in-memory surface.
//!
//! A script names a starting view box, the surface's displayed size and a list
//! of input events. Each event goes through a [`GestureTracker`] exactly as a
//! live attachment would deliver it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use zoop_view::{AttributeSurface, DisplaySize, Surface, ViewWindow};

use crate::config::ZoopConfig;
use crate::contact::PointerId;
use crate::error::Result;
use crate::gesture::{GestureDelta, GestureTracker};
use crate::input::InputEvent;

/// A recorded input session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Starting `"x y width height"` view box.
    pub view_box: String,
    pub displayed: DisplaySize,
    /// Settings embedded in the script, used when none are given explicitly.
    #[serde(default)]
    pub config: Option<ZoopConfig>,
    pub events: Vec<InputEvent>,
}

/// State of the surface after one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub kind: &'static str,
    pub deltas: Vec<GestureDelta>,
    pub unknown_contact: Option<PointerId>,
    pub window: ViewWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub final_window: ViewWindow,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded {} events from {:?}", script.events.len(), path);
        Ok(script)
    }
}

/// Run every event of `script` and record the window after each one.
///
/// Fails before processing anything if the starting view box is invalid, and
/// stops at the first event whose delta cannot be applied.
pub fn run_script(script: &ReplayScript, config: &ZoopConfig) -> Result<ReplayReport> {
    let start = ViewWindow::parse(&script.view_box)?;
    let mut surface = AttributeSurface::new(start, script.displayed);
    let mut tracker = GestureTracker::new(config.zoom_policy());
    let mut steps = Vec::with_capacity(script.events.len());

    for (index, event) in script.events.iter().enumerate() {
        let dispatch = tracker.handle(&mut surface, event)?;
        let window = surface.view_window()?;
        log::debug!("#{} {} -> {}", index, event.kind(), window);

        steps.push(ReplayStep {
            index,
            kind: event.kind(),
            deltas: dispatch.deltas,
            unknown_contact: dispatch.unknown_contact,
            window,
        });
    }

    let final_window = surface.view_window()?;
    log::info!("Replayed {} events, final view box {}", steps.len(), final_window);
    Ok(ReplayReport {
        steps,
        final_window,
    })
}
