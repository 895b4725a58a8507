//! Metadata decoder
//!
//! Turns the structured detection blob attached to a frame into a list of
//! [`Region`]s. Decoding is tolerant per item: a field that does not match
//! the expected shape is skipped silently and the rest of the blob is still
//! decoded. Missing metadata is simply zero regions, never an error.
//!
//! The expected blob shape is a keyed object where every field except the
//! reserved `timestamp` carries a nested object with unsigned `x`, `y`,
//! `width`, `height`:
//!
//! ```json
//! {
//!   "face-0": { "x": 10, "y": 10, "width": 20, "height": 20 },
//!   "face-1": { "x": 90, "y": 40, "width": 25, "height": 25 },
//!   "timestamp": 1234
//! }
//! ```

use serde_json::{Map, Value};

use crate::types::Region;

/// Reserved blob field carrying the producer's timestamp, never a region.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Decode regions from a frame's attached metadata into `out`.
///
/// `out` is cleared first and filled in field-declaration order; reusing one
/// buffer across frames keeps the hot path free of per-frame allocation.
/// A blob that is absent, not an object, or contains no well-formed region
/// fields yields an empty `out`.
pub fn decode_regions(meta: Option<&Value>, out: &mut Vec<Region>) {
    out.clear();

    let Some(Value::Object(fields)) = meta else {
        return;
    };

    for (name, value) in fields {
        if name == TIMESTAMP_FIELD {
            continue;
        }
        if let Some(region) = region_from_value(value) {
            out.push(region);
        }
    }
}

/// Interpret one blob field value as a region, `None` on any shape mismatch.
fn region_from_value(value: &Value) -> Option<Region> {
    let fields = value.as_object()?;

    Some(Region {
        x: coord_field(fields, "x")?,
        y: coord_field(fields, "y")?,
        width: coord_field(fields, "width")?,
        height: coord_field(fields, "height")?,
    })
}

fn coord_field(fields: &Map<String, Value>, name: &str) -> Option<u32> {
    fields.get(name)?.as_u64()?.try_into().ok()
}
