// Copyright 2026 png-fixtures contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Solid-color PNG emission.
//!
//! Emits the minimal valid subset of the PNG format: the 8-byte signature,
//! an IHDR chunk (8-bit truecolor, no interlace), a single IDAT chunk with
//! the zlib-compressed scanlines, and an IEND chunk.
//!
//! # Emitted layout
//!
//! ```text
//! [signature: 8 bytes]
//! [IHDR: width u32 BE | height u32 BE | depth=8 | color=2 | comp=0 | filter=0 | interlace=0]
//! [IDAT: zlib stream of height rows, each: filter byte 0 + width * (R,G,B)]
//! [IEND: empty]
//! ```
//!
//! The scanlines use filter type 0 ("none") on every row. Any valid zlib
//! stream is acceptable in IDAT, so the compressed bytes may differ across
//! flate2/zlib versions while the decoded pixels never do.

use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

use bytes::{BufMut, BytesMut};

use crate::chunk::{write_chunk, IDAT, IEND, IHDR};
use crate::error::EmitError;

/// The fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest width/height the IHDR chunk can carry (2^31 - 1).
const MAX_DIMENSION: u32 = 0x7FFF_FFFF;

/// Dimensions and fill color for one fixture image.
///
/// Validated on construction; an existing `ImageSpec` always describes an
/// emittable image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    width: u32,
    height: u32,
    color: [u8; 3],
}

impl ImageSpec {
    /// Builds a spec for a `width` x `height` image filled with `(r, g, b)`.
    ///
    /// Color components are taken as `u32` so out-of-range configuration
    /// values surface as `InvalidColor` instead of silently truncating.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or exceeds
    /// the IHDR range, and `InvalidColor` if any component exceeds 255.
    pub fn new(width: u32, height: u32, r: u32, g: u32, b: u32) -> Result<Self, EmitError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(EmitError::InvalidDimensions { width, height });
        }
        for (component, value) in [("red", r), ("green", g), ("blue", b)] {
            if value > 255 {
                return Err(EmitError::InvalidColor { component, value });
            }
        }
        #[allow(clippy::cast_possible_truncation)] // range-checked above
        let color = [r as u8, g as u8, b as u8];
        Ok(Self {
            width,
            height,
            color,
        })
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill color as `[r, g, b]`.
    #[must_use]
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Length of the uncompressed scanline data:
    /// `height * (1 filter byte + 3 bytes per pixel * width)`.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.height as usize * (1 + 3 * self.width as usize)
    }
}

/// Emits a complete PNG byte sequence for `spec`.
///
/// Pure transformation: no side effects, no shared state. Writing the result
/// to disk is the caller's concern.
///
/// # Errors
///
/// Returns `EmitError::Io` if the zlib backend fails. Dimension and color
/// validation already happened when `spec` was constructed.
pub fn emit(spec: &ImageSpec) -> Result<Vec<u8>, EmitError> {
    let raw = build_scanlines(spec);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&raw)?;
    let compressed = encoder.finish()?;

    #[cfg(feature = "debug-logging")]
    log::debug!(
        "emit: {}x{} color={:?}, raw {} -> idat {} bytes",
        spec.width,
        spec.height,
        spec.color,
        raw.len(),
        compressed.len()
    );

    let mut out = BytesMut::with_capacity(8 + 25 + 12 + compressed.len() + 12);
    out.put_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, IHDR, &ihdr_payload(spec));
    write_chunk(&mut out, IDAT, &compressed);
    write_chunk(&mut out, IEND, &[]);

    Ok(out.to_vec())
}

/// The 13-byte IHDR payload: dimensions plus the fixed format fields
/// (bit depth 8, color type 2 truecolor, compression 0, filter 0,
/// interlace 0).
fn ihdr_payload(spec: &ImageSpec) -> [u8; 13] {
    let mut payload = [0u8; 13];
    payload[0..4].copy_from_slice(&spec.width.to_be_bytes());
    payload[4..8].copy_from_slice(&spec.height.to_be_bytes());
    payload[8] = 8; // bit depth
    payload[9] = 2; // color type: truecolor RGB
    payload[10] = 0; // compression method
    payload[11] = 0; // filter method
    payload[12] = 0; // interlace method
    payload
}

/// Builds the uncompressed image data: each row is one filter byte 0
/// followed by `width` copies of the RGB triple.
fn build_scanlines(spec: &ImageSpec) -> Vec<u8> {
    let mut row = Vec::with_capacity(1 + 3 * spec.width as usize);
    row.push(0); // filter type: none
    for _ in 0..spec.width {
        row.extend_from_slice(&spec.color);
    }

    let mut raw = Vec::with_capacity(spec.raw_len());
    for _ in 0..spec.height {
        raw.extend_from_slice(&row);
    }
    raw
}
