//! Global constants for gesture handling

/// Pinch baseline used while no two-contact separation has been recorded.
///
/// The first pinch step after the baseline is reset therefore has a scale of
/// `separation + 1`.
pub const UNSET_PINCH_BASELINE: f64 = -1.0;

/// Default file name for the replay tool's configuration.
pub const DEFAULT_CONFIG_FILENAME: &str = "zoop-config.json";
