//! Overlay filter element
//!
//! One-in-one-out transform stage: for every frame the pipeline host
//! delivers, decode the attached detection metadata (if any) and stroke the
//! decoded regions onto the frame's own pixel storage. Frames always pass
//! through with byte length and geometry unchanged; only surface allocation
//! can fail the per-frame path.

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::{OverlayError, Result};
use crate::meta::decode_regions;
use crate::surface::Surface;
use crate::types::{Region, VideoFrame};

/// Name of the single exposed configuration option.
pub const PROP_SHOW_DEBUG_REGION: &str = "show-debug-region";

/// In-place detection overlay element.
///
/// The host serializes frame delivery to an instance, but property accessors
/// may run from a separate control thread; one instance lock guards the full
/// critical section of both paths, so a property access never interleaves
/// mid-frame with drawing.
pub struct OverlayFilter {
    state: Mutex<FilterState>,
}

/// Lock-guarded mutable state, reused across frames to keep the hot path
/// free of per-frame allocation.
struct FilterState {
    /// Drawing surface, allocated on the first frame
    surface: Option<Surface>,
    /// Reusable region buffer for the current frame's decode output
    regions: Vec<Region>,
    /// Stored and reported faithfully; the draw path does not consult it
    show_debug_region: bool,
    frame_count: u64,
}

impl OverlayFilter {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FilterState {
                surface: None,
                regions: Vec::with_capacity(16),
                show_debug_region: false,
                frame_count: 0,
            }),
        }
    }

    /// Process one frame in place.
    ///
    /// Always forwards the frame; missing or malformed metadata means zero
    /// regions, not an error. The only failure is surface allocation on a
    /// first frame or a geometry change, after which the host should tear
    /// the instance down.
    pub fn process_frame(&self, frame: &mut VideoFrame<'_>) -> Result<()> {
        debug_assert!(
            frame.width > 0 && frame.height > 0,
            "zero-sized frame geometry"
        );

        let mut state = self.state.lock();
        state.frame_count += 1;
        let frame_count = state.frame_count;

        if frame.data.len() != frame.expected_size() {
            warn!(
                frame = frame_count,
                len = frame.data.len(),
                expected = frame.expected_size(),
                "frame buffer does not match negotiated geometry, passing through"
            );
            return Ok(());
        }

        // Destructure so the surface and the region buffer borrow disjointly.
        let FilterState {
            surface, regions, ..
        } = &mut *state;

        let surface = match surface {
            Some(surface) => {
                surface.ensure(frame.width, frame.height)?;
                surface
            }
            None => surface.insert(Surface::new(frame.width, frame.height)?),
        };

        decode_regions(frame.meta, regions);

        if !regions.is_empty() {
            surface.bind(frame.data).draw_regions(regions);
        }

        debug!(
            frame = frame_count,
            regions = regions.len(),
            "frame annotated"
        );

        Ok(())
    }

    /// Current value of the debug-region flag.
    pub fn show_debug_region(&self) -> bool {
        self.state.lock().show_debug_region
    }

    /// Set the debug-region flag.
    pub fn set_show_debug_region(&self, enable: bool) {
        self.state.lock().show_debug_region = enable;
    }

    /// Read a named configuration option.
    ///
    /// Unknown names are a caller usage error, reported without affecting
    /// frame processing.
    pub fn property(&self, name: &str) -> Result<bool> {
        match name {
            PROP_SHOW_DEBUG_REGION => Ok(self.show_debug_region()),
            _ => Err(OverlayError::UnknownProperty(name.to_string())),
        }
    }

    /// Write a named configuration option.
    pub fn set_property(&self, name: &str, value: bool) -> Result<()> {
        match name {
            PROP_SHOW_DEBUG_REGION => {
                self.set_show_debug_region(value);
                Ok(())
            }
            _ => Err(OverlayError::UnknownProperty(name.to_string())),
        }
    }

    /// Geometry of the current drawing surface, `None` before the first
    /// frame.
    pub fn surface_dimensions(&self) -> Option<(u32, u32)> {
        self.state
            .lock()
            .surface
            .as_ref()
            .map(|s| (s.width(), s.height()))
    }

    /// Number of frames processed so far.
    pub fn frames_processed(&self) -> u64 {
        self.state.lock().frame_count
    }
}

impl Default for OverlayFilter {
    fn default() -> Self {
        Self::new()
    }
}
