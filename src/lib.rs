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

//! Minimal solid-color PNG fixture generator.
//!
//! Emits structurally valid PNG files of a single solid color, used as
//! fixtures for smoke-testing image-handling code. Only the minimal PNG
//! subset is produced: signature, IHDR (8-bit truecolor), one IDAT with
//! zlib-compressed filter-0 scanlines, and IEND.
//!
//! This is deliberately NOT a general PNG encoder: no other bit depths or
//! color types, no interlacing, no ancillary chunks, no decoding.
//!
//! # Example
//!
//! ```
//! use png_fixtures::{emit, ImageSpec};
//!
//! let spec = ImageSpec::new(800, 600, 220, 40, 40)?;
//! let bytes = emit(&spec)?;
//! assert_eq!(&bytes[0..8], &png_fixtures::PNG_SIGNATURE);
//! # Ok::<(), png_fixtures::EmitError>(())
//! ```
//!
//! # Generating the fixture set
//!
//! ```bash
//! cargo run --bin generate_fixtures [output-dir]
//! ```

pub mod chunk;
pub mod encoder;
pub mod error;

pub use encoder::{emit, ImageSpec, PNG_SIGNATURE};
pub use error::EmitError;
