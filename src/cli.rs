// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for depth dump operations
//!
//! This module provides command-line functionality for:
//! - Looking up the sample value at one coordinate
//! - Rendering a dump to a viewable image file
//! - Printing shape-derived facts about a dump

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use depth_viewer::{DepthBuffer, RenderMode, render};
use image::imageops::FilterType;
use tracing::info;

/// Print the sample value at (x, y)
///
/// In-bounds coordinates print `[x,y] = value (0xHEX)` and exit 0;
/// out-of-bounds coordinates print a bounds message and exit 1.
pub fn lookup(
    path: &Path,
    width: u32,
    height: u32,
    bpp: u32,
    x: u32,
    y: u32,
) -> Result<ExitCode, Box<dyn Error>> {
    let buffer = DepthBuffer::open(path, width, height, bpp)?;

    match buffer.sample_at(x, y) {
        Some(value) => {
            println!("[{},{}] = {} (0x{:X})", x, y, value, value);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("Invalid position, outside bounds of image.");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Render the dump under `mode` and write it to `output`
pub fn render_to_file(
    path: &Path,
    width: u32,
    height: u32,
    bpp: u32,
    mode: RenderMode,
    zoom: u32,
    output: &Path,
) -> Result<ExitCode, Box<dyn Error>> {
    let buffer = DepthBuffer::open(path, width, height, bpp)?;
    let frame = render(&buffer, mode)?;

    info!(
        width = frame.width,
        height = frame.height,
        %mode,
        "Rendered frame"
    );

    let mut img = frame.into_image();
    if zoom > 1 {
        // Raw integer samples, not photographic data: never interpolate.
        img = img.resize_exact(width * zoom, height * zoom, FilterType::Nearest);
    }

    img.save(output)?;
    println!("Wrote {}", output.display());
    Ok(ExitCode::SUCCESS)
}

/// Print pitch and size information for a dump with the declared shape
///
/// Useful for sanity-checking that a capture matches the shape its producer
/// claims, since the format itself records nothing.
pub fn print_info(
    path: &Path,
    width: u32,
    height: u32,
    bpp: u32,
) -> Result<ExitCode, Box<dyn Error>> {
    let buffer = DepthBuffer::open(path, width, height, bpp)?;
    let expected = u64::from(buffer.pitch()) * u64::from(buffer.height());

    println!(
        "Shape: {}x{} @ {} bpp (declared {})",
        buffer.width(),
        buffer.height(),
        buffer.bits_per_pixel(),
        buffer.declared_bits_per_pixel()
    );
    println!("Bytes per pixel: {}", buffer.bytes_per_pixel());
    println!("Max sample value: {}", buffer.max_sample_value());
    println!("Pitch: {} bytes", buffer.pitch());
    println!("Expected size: {} bytes", expected);
    println!("Actual size: {} bytes", buffer.len());

    if buffer.is_empty() {
        println!("Warning: dump is empty");
    } else if (buffer.len() as u64) < expected {
        println!("Warning: dump is shorter than the declared shape");
    }

    Ok(ExitCode::SUCCESS)
}
