//! Core types for frame annotation
//!
//! Frames are borrowed from the pipeline host for the duration of one
//! processing call; regions are decoded fresh per frame and never outlive it.

use serde_json::Value;

/// Supported frame formats for input.
///
/// Both are 3-channel 8-bit interleaved; the overlay color is pure green,
/// which lands on the same byte in either channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// RGB with 8 bits per channel (24 bits per pixel)
    Rgb8,
    /// BGR with 8 bits per channel (OpenCV default)
    Bgr8,
}

impl FrameFormat {
    /// Bytes per pixel for this format.
    pub const fn bytes_per_pixel(self) -> usize {
        3
    }

    /// Expected buffer length for a frame of the given geometry.
    pub const fn frame_size(self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.bytes_per_pixel()
    }
}

impl Default for FrameFormat {
    fn default() -> Self {
        Self::Bgr8
    }
}

/// An axis-aligned rectangle decoded from frame metadata.
///
/// Coordinates are unsigned pixel offsets from the frame's top-left corner.
/// A region may extend past the frame; the renderer clips, the decoder does
/// not re-validate ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X coordinate of top-left corner (pixels)
    pub x: u32,
    /// Y coordinate of top-left corner (pixels)
    pub y: u32,
    /// Width of the rectangle (pixels)
    pub width: u32,
    /// Height of the rectangle (pixels)
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One unit of video data borrowed from the pipeline host.
///
/// The pixel buffer is mutated in place by the overlay; its length and the
/// frame geometry are never changed. `meta` is the structured detection blob
/// an upstream stage may have attached (absent on most frames).
#[derive(Debug)]
pub struct VideoFrame<'a> {
    /// Raw interleaved pixel data, `width * height * 3` bytes
    pub data: &'a mut [u8],
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Pixel format of `data`
    pub format: FrameFormat,
    /// Attached structured metadata, if any
    pub meta: Option<&'a Value>,
}

impl<'a> VideoFrame<'a> {
    /// Expected length of `data` for this frame's geometry and format.
    pub fn expected_size(&self) -> usize {
        self.format.frame_size(self.width, self.height)
    }
}
