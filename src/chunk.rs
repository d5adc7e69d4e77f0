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

//! PNG chunk framing.
//!
//! A chunk is serialized as:
//!
//! ```text
//! [length: u32 BE] [type: 4 ASCII bytes] [payload] [crc: u32 BE]
//! ```
//!
//! where the CRC-32 (ISO 3309 / zlib polynomial) covers the type code and the
//! payload but NOT the length field. This framing is identical for every
//! chunk type used here (IHDR, IDAT, IEND).

use bytes::{BufMut, BytesMut};

/// IHDR chunk type code (image header, always first).
pub const IHDR: [u8; 4] = *b"IHDR";
/// IDAT chunk type code (zlib-compressed image data).
pub const IDAT: [u8; 4] = *b"IDAT";
/// IEND chunk type code (end marker, empty payload).
pub const IEND: [u8; 4] = *b"IEND";

/// Appends one framed chunk to `buf`.
#[allow(clippy::cast_possible_truncation)] // IDAT payloads here are far below u32::MAX
pub fn write_chunk(buf: &mut BytesMut, chunk_type: [u8; 4], payload: &[u8]) {
    buf.reserve(12 + payload.len());
    buf.put_u32(payload.len() as u32);
    buf.put_slice(&chunk_type);
    buf.put_slice(payload);
    buf.put_u32(crc(chunk_type, payload));
}

/// CRC-32 over type code + payload, per the PNG chunk contract.
fn crc(chunk_type: [u8; 4], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&chunk_type);
    hasher.update(payload);
    hasher.finalize()
}
