//! Drawing surface and outline rasterizer
//!
//! The [`Surface`] tracks the negotiated frame geometry and owns a backing
//! allocation of exactly `width * height * 3` bytes, reallocated whenever a
//! frame of different geometry arrives. Drawing never touches the backing:
//! [`Surface::bind`] repoints the draw target at the incoming frame's own
//! pixel storage for the duration of one call, so outlines land in place.
//! Keeping the backing sized to the negotiated geometry reserves worst-case
//! memory at negotiation time and turns resource exhaustion into a typed
//! error before any frame is touched.

use crate::error::{OverlayError, Result};
use crate::types::Region;

/// Outline color, pure green. Channel-order independent for RGB/BGR.
pub const OUTLINE_COLOR: [u8; 3] = [0, 255, 0];

/// Outline stroke thickness in pixels, centered on the rectangle edge.
pub const OUTLINE_THICKNESS: u32 = 3;

const BYTES_PER_PIXEL: usize = 3;

// Stroke half-width on each side of the edge line.
const HALF: i64 = (OUTLINE_THICKNESS as i64 - 1) / 2;

/// Mutable drawing surface sized to the current frame geometry.
#[derive(Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    backing: Vec<u8>,
}

impl Surface {
    /// Allocate a surface for the given geometry.
    ///
    /// Geometry is guaranteed non-zero by upstream caps negotiation.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        debug_assert!(width > 0 && height > 0, "zero-sized surface geometry");

        Ok(Self {
            width,
            height,
            backing: alloc_pixels(width, height)?,
        })
    }

    /// Make the surface match the given geometry, reallocating on change.
    ///
    /// No-op when the geometry already matches.
    pub fn ensure(&mut self, width: u32, height: u32) -> Result<()> {
        if self.width == width && self.height == height {
            return Ok(());
        }

        debug_assert!(width > 0 && height > 0, "zero-sized surface geometry");

        // Free the old backing before allocating the new one.
        self.backing = Vec::new();
        self.backing = alloc_pixels(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Repoint the draw target at an externally owned frame buffer.
    ///
    /// O(1), no copy. The returned view borrows the surface exclusively, so
    /// at most one bound view exists at a time and it cannot outlive the
    /// frame's processing call.
    pub fn bind<'a>(&'a mut self, frame_data: &'a mut [u8]) -> BoundSurface<'a> {
        debug_assert_eq!(
            frame_data.len(),
            self.width as usize * self.height as usize * BYTES_PER_PIXEL,
            "bound buffer does not match surface geometry"
        );

        BoundSurface {
            data: frame_data,
            width: self.width,
            height: self.height,
        }
    }
}

/// Draw target borrowed from a frame's pixel storage for one render.
#[derive(Debug)]
pub struct BoundSurface<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl BoundSurface<'_> {
    /// Draw each region's outline in decode order.
    ///
    /// Overlapping regions overpaint; no compositing.
    pub fn draw_regions(&mut self, regions: &[Region]) {
        for region in regions {
            self.draw_region(region);
        }
    }

    /// Stroke one rectangle outline, clipped to the surface bounds.
    ///
    /// The stroke is a band of `OUTLINE_THICKNESS` pixels centered on each
    /// edge; horizontal bands extend past the vertical ones so the four
    /// bands close into an 8-connected ring. Regions partially or fully
    /// outside the surface clip silently.
    pub fn draw_region(&mut self, region: &Region) {
        // Widen before adding so oversized rectangles clip instead of
        // overflowing.
        let x0 = i64::from(region.x);
        let y0 = i64::from(region.y);
        let x1 = x0 + i64::from(region.width);
        let y1 = y0 + i64::from(region.height);

        // top, bottom, left, right
        self.fill_band(x0 - HALF, y0 - HALF, x1 + HALF, y0 + HALF);
        self.fill_band(x0 - HALF, y1 - HALF, x1 + HALF, y1 + HALF);
        self.fill_band(x0 - HALF, y0 - HALF, x0 + HALF, y1 + HALF);
        self.fill_band(x1 - HALF, y0 - HALF, x1 + HALF, y1 + HALF);
    }

    /// Fill the inclusive pixel rectangle [x0, x1] x [y0, y1] with the
    /// outline color, clipped to the surface.
    fn fill_band(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let xs = x0.max(0);
        let xe = x1.min(i64::from(self.width) - 1);
        let ys = y0.max(0);
        let ye = y1.min(i64::from(self.height) - 1);

        if xs > xe || ys > ye {
            return;
        }

        let stride = self.width as usize * BYTES_PER_PIXEL;
        for y in ys..=ye {
            let row = y as usize * stride;
            let start = row + xs as usize * BYTES_PER_PIXEL;
            let end = row + xe as usize * BYTES_PER_PIXEL + BYTES_PER_PIXEL;
            for pixel in self.data[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&OUTLINE_COLOR);
            }
        }
    }
}

fn alloc_pixels(width: u32, height: u32) -> Result<Vec<u8>> {
    let bytes = width as usize * height as usize * BYTES_PER_PIXEL;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(bytes)
        .map_err(|_| OverlayError::SurfaceAlloc {
            width,
            height,
            bytes,
        })?;
    pixels.resize(bytes, 0);
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blank_frame(width: u32, height: u32) -> Vec<u8> {
        vec![7u8; width as usize * height as usize * BYTES_PER_PIXEL]
    }

    fn pixel(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
        [data[idx], data[idx + 1], data[idx + 2]]
    }

    /// Reference predicate: is (x, y) on the stroked outline of `region`?
    fn on_outline(region: &Region, x: u32, y: u32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let x0 = i64::from(region.x);
        let y0 = i64::from(region.y);
        let x1 = x0 + i64::from(region.width);
        let y1 = y0 + i64::from(region.height);

        let in_h_span = x >= x0 - HALF && x <= x1 + HALF;
        let in_v_span = y >= y0 - HALF && y <= y1 + HALF;
        let on_h_edge = (y - y0).abs() <= HALF || (y - y1).abs() <= HALF;
        let on_v_edge = (x - x0).abs() <= HALF || (x - x1).abs() <= HALF;

        (in_h_span && on_h_edge) || (in_v_span && on_v_edge)
    }

    #[test]
    fn test_new_surface_tracks_geometry() {
        let surface = Surface::new(320, 240).unwrap();
        assert_eq!((surface.width(), surface.height()), (320, 240));
    }

    #[test]
    fn test_ensure_is_noop_for_matching_geometry() {
        let mut surface = Surface::new(320, 240).unwrap();
        let before = surface.backing.as_ptr();
        surface.ensure(320, 240).unwrap();
        assert_eq!(surface.backing.as_ptr(), before);
    }

    #[test]
    fn test_ensure_reallocates_on_geometry_change() {
        let mut surface = Surface::new(320, 240).unwrap();
        surface.ensure(640, 480).unwrap();
        assert_eq!((surface.width(), surface.height()), (640, 480));
        assert_eq!(surface.backing.len(), 640 * 480 * BYTES_PER_PIXEL);
    }

    #[test]
    fn test_draw_modifies_exactly_the_outline() {
        let (w, h) = (64u32, 48u32);
        let mut surface = Surface::new(w, h).unwrap();
        let mut frame = blank_frame(w, h);
        let untouched = frame.clone();
        let region = Region::new(10, 10, 20, 15);

        surface.bind(&mut frame).draw_region(&region);

        for y in 0..h {
            for x in 0..w {
                if on_outline(&region, x, y) {
                    assert_eq!(pixel(&frame, w, x, y), OUTLINE_COLOR, "at ({x},{y})");
                } else {
                    assert_eq!(
                        pixel(&frame, w, x, y),
                        pixel(&untouched, w, x, y),
                        "at ({x},{y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_region_partially_outside_clips() {
        let (w, h) = (32u32, 32u32);
        let mut surface = Surface::new(w, h).unwrap();
        let mut frame = blank_frame(w, h);
        // Hangs off the right and bottom edges.
        let region = Region::new(24, 24, 20, 20);

        surface.bind(&mut frame).draw_region(&region);

        // In-bounds top-left corner of the outline is stroked.
        assert_eq!(pixel(&frame, w, 24, 24), OUTLINE_COLOR);
        // Interior stays untouched.
        assert_eq!(pixel(&frame, w, 28, 28), [7, 7, 7]);
    }

    #[test]
    fn test_region_fully_outside_draws_nothing() {
        let (w, h) = (32u32, 32u32);
        let mut surface = Surface::new(w, h).unwrap();
        let mut frame = blank_frame(w, h);
        let untouched = frame.clone();

        surface
            .bind(&mut frame)
            .draw_region(&Region::new(100, 100, 10, 10));

        assert_eq!(frame, untouched);
    }

    #[test]
    fn test_oversized_region_does_not_overflow() {
        let (w, h) = (16u32, 16u32);
        let mut surface = Surface::new(w, h).unwrap();
        let mut frame = blank_frame(w, h);

        surface
            .bind(&mut frame)
            .draw_region(&Region::new(0, 0, u32::MAX, u32::MAX));

        // Only the top and left bands land inside this small frame.
        assert_eq!(pixel(&frame, w, 0, 0), OUTLINE_COLOR);
        assert_eq!(pixel(&frame, w, 8, 8), [7, 7, 7]);
    }

    #[test]
    fn test_overpaint_is_idempotent() {
        let (w, h) = (48u32, 48u32);
        let mut surface = Surface::new(w, h).unwrap();
        let region = Region::new(5, 5, 30, 30);

        let mut once = blank_frame(w, h);
        surface.bind(&mut once).draw_region(&region);

        let mut twice = blank_frame(w, h);
        {
            let mut bound = surface.bind(&mut twice);
            bound.draw_region(&region);
            bound.draw_region(&region);
        }

        assert_eq!(once, twice);
    }

    #[test]
    fn test_draw_regions_overpaints_in_order() {
        let (w, h) = (48u32, 48u32);
        let mut surface = Surface::new(w, h).unwrap();
        let mut frame = blank_frame(w, h);
        let regions = [Region::new(4, 4, 10, 10), Region::new(8, 8, 10, 10)];

        surface.bind(&mut frame).draw_regions(&regions);

        // Both outlines present; overlap is just green over green.
        assert_eq!(pixel(&frame, w, 4, 4), OUTLINE_COLOR);
        assert_eq!(pixel(&frame, w, 8, 8), OUTLINE_COLOR);
    }
}
