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

//! Fixture Generator
//!
//! Writes the standard set of solid-color test PNGs used as smoke-test
//! inputs for image-handling code. The images are deterministic in pixel
//! content on every platform; the compressed IDAT bytes may vary with the
//! zlib implementation, but always decode to the same pixels.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixtures [output-dir]
//! ```
//!
//! The output directory defaults to `tests/fixtures` and is created if
//! missing. Each image is built fully in memory and written with a single
//! call, so a failed run never leaves a partially-written file.
//!
//! # Generated Files
//!
//! - `red_800x600.png`, `green_800x600.png`, `blue_800x600.png` - primary
//!   solid colors at a common display size
//! - `white_400x300.png` - near-white, smaller size
//! - `dark_1920x1080.png` - near-black at full HD, the largest fixture

use std::path::Path;
use std::process::ExitCode;

use png_fixtures::{emit, ImageSpec};

/// The fixture set: (file name, width, height, r, g, b).
const FIXTURES: &[(&str, u32, u32, u32, u32, u32)] = &[
    ("red_800x600.png", 800, 600, 220, 40, 40),
    ("green_800x600.png", 800, 600, 40, 180, 40),
    ("blue_800x600.png", 800, 600, 40, 40, 220),
    ("white_400x300.png", 400, 300, 240, 240, 240),
    ("dark_1920x1080.png", 1920, 1080, 20, 20, 25),
];

const DEFAULT_OUT_DIR: &str = "tests/fixtures";

fn main() -> ExitCode {
    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUT_DIR.to_string());

    match run(Path::new(&out_dir)) {
        Ok(count) => {
            println!("Generated {count} test images in {out_dir}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(out_dir: &Path) -> Result<usize, String> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| format!("failed to create {}: {e}", out_dir.display()))?;

    for &(name, width, height, r, g, b) in FIXTURES {
        let spec = ImageSpec::new(width, height, r, g, b)
            .map_err(|e| format!("{name}: {e}"))?;
        let bytes = emit(&spec).map_err(|e| format!("{name}: {e}"))?;

        let path = out_dir.join(name);
        std::fs::write(&path, &bytes)
            .map_err(|e| format!("{name}: failed to write {}: {e}", path.display()))?;

        println!("  {name} ({width}x{height})");
    }

    Ok(FIXTURES.len())
}
