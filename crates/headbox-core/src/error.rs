//! Error types for headbox.

use thiserror::Error;

/// The main error type for headbox operations.
#[derive(Error, Debug)]
pub enum HeadboxError {
    /// A non-positive camera count was requested.
    #[error("camera count must be positive")]
    InvalidSampleCount,

    /// Clip planes violate `0 < near < far`.
    #[error("invalid clip planes: near = {near}, far = {far} (need 0 < near < far)")]
    InvalidClipPlanes { near: f64, far: f64 },

    /// A face name did not match any cube face.
    #[error("unknown cube face '{0}' (expected front, back, left, right, bottom or top)")]
    UnknownFace(String),

    /// An image path pattern is missing a required substitution slot.
    #[error("image path pattern '{pattern}' is missing the {missing} slot")]
    InvalidPathPattern {
        pattern: String,
        missing: &'static str,
    },

    /// The external bake pipeline exited unsuccessfully.
    #[error("bake pipeline failed: {0}")]
    BakeFailed(std::process::ExitStatus),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for headbox operations.
pub type Result<T> = std::result::Result<T, HeadboxError>;
