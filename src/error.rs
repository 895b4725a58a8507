//! Error types for the overlay element

use thiserror::Error;

/// Errors surfaced by the overlay element.
///
/// Missing or malformed metadata is never an error; the decoder recovers
/// locally. Only surface allocation can fail the per-frame path.
#[derive(Debug, Clone, Error)]
pub enum OverlayError {
    /// Drawing-surface allocation failed; the instance cannot keep
    /// processing frames and should be torn down by its host.
    #[error("surface allocation failed for {width}x{height} ({bytes} bytes)")]
    SurfaceAlloc {
        width: u32,
        height: u32,
        bytes: usize,
    },

    /// Unknown configuration option requested through the property interface.
    #[error("unknown property: {0}")]
    UnknownProperty(String),
}

/// Result type for overlay operations
pub type Result<T> = std::result::Result<T, OverlayError>;
