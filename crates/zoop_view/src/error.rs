use thiserror::Error;

/// Errors raised while reading a view window from its textual representation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// The surface has no view window at all.
    #[error("View window is not set on the surface")]
    Missing,

    /// The representation did not contain exactly four values.
    #[error("Expected 4 view window values, found {found}")]
    TokenCount {
        /// Number of tokens actually present
        found: usize,
    },

    /// A token could not be parsed as a number.
    #[error("Invalid view window value '{token}'")]
    InvalidNumber {
        /// The offending token
        token: String,
    },

    /// A value parsed but is NaN or infinite.
    #[error("View window {field} is not finite")]
    NonFinite {
        /// Which of x, y, width, height
        field: &'static str,
    },

    /// Width or height is zero or negative.
    #[error("View window extent must be positive, got {width}x{height}")]
    NonPositiveExtent { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, ViewError>;
