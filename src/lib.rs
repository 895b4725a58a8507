//! In-place detection overlay for raw video frames.
//!
//! A one-in-one-out pipeline stage: each frame arrives with optional
//! structured detection metadata attached, and every well-formed region in
//! that metadata is stroked as a green rectangle outline directly onto the
//! frame's own pixel storage before the frame continues downstream.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │ Video Frame │────▶│ OverlayFilter │────▶│ same frame,      │
//! │ + metadata  │     │ decode + draw │     │ outlines in place│
//! └─────────────┘     └───────────────┘     └──────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use vid_overlay::{FrameFormat, OverlayFilter, VideoFrame};
//!
//! let filter = OverlayFilter::new();
//! let meta = json!({
//!     "face-0": { "x": 10, "y": 10, "width": 20, "height": 20 },
//!     "timestamp": 1234,
//! });
//!
//! let mut pixels = vec![0u8; 64 * 48 * 3];
//! let mut frame = VideoFrame {
//!     data: &mut pixels,
//!     width: 64,
//!     height: 48,
//!     format: FrameFormat::Bgr8,
//!     meta: Some(&meta),
//! };
//! filter.process_frame(&mut frame).unwrap();
//! ```
//!
//! ## Contract
//!
//! - Frames are borrowed for one call and forwarded unchanged in length and
//!   geometry; the stage never drops, duplicates, or reorders them.
//! - Missing or malformed metadata is zero regions, never an error. The only
//!   per-frame failure is drawing-surface allocation, which is fatal for the
//!   instance.
//! - Frame delivery is serialized by the host; property accessors may run
//!   concurrently from a control thread and share the instance lock with the
//!   frame path.

pub mod error;
pub mod filter;
pub mod meta;
pub mod surface;
pub mod types;

// Re-export main types at crate root
pub use error::{OverlayError, Result};
pub use filter::{OverlayFilter, PROP_SHOW_DEBUG_REGION};
pub use meta::{decode_regions, TIMESTAMP_FIELD};
pub use surface::{BoundSurface, Surface, OUTLINE_COLOR, OUTLINE_THICKNESS};
pub use types::{FrameFormat, Region, VideoFrame};
