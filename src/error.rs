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

//! Error taxonomy for PNG emission.
//!
//! Validation failures (`InvalidDimensions`, `InvalidColor`) are raised
//! before any bytes are produced. `Io` wraps failures from the zlib backend
//! or the filesystem writer and is propagated unchanged.

use thiserror::Error;

/// Errors produced while building or writing a fixture PNG.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Width or height is zero or exceeds the PNG IHDR range (2^31 - 1).
    #[error("invalid dimensions {width}x{height}: both must be in 1..=2147483647")]
    InvalidDimensions { width: u32, height: u32 },

    /// A color component is outside [0, 255].
    #[error("invalid color: {component} component {value} is outside 0..=255")]
    InvalidColor {
        component: &'static str,
        value: u32,
    },

    /// Compression backend or filesystem failure, propagated unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
