// SPDX-License-Identifier: GPL-3.0-only

//! Render policies turning a depth buffer into an 8-bit raster
//!
//! Three policies are supported:
//! - `Rgb`: source bytes mapped directly onto color channels (debug view)
//! - `Greyscale`: each sample linearly scaled into 0..255
//! - `Stretched`: the frame's observed min..max range remapped to 0..255
//!
//! 1-byte buffers are already displayable and always render as direct
//! greyscale; 2- and 4-byte buffers honor the selected mode. For 4-byte
//! elements the low-order stencil byte is discarded and the depth value is
//! rebuilt from bytes 1..3.

use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::buffer::DepthBuffer;
use crate::errors::{DepthError, DepthResult};

/// How samples map to output pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Source bytes mapped directly onto color channels
    Rgb,
    /// Each sample linearly scaled to 0..255
    Greyscale,
    /// Observed min..max range stretched to 0..255
    Stretched,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Rgb => write!(f, "rgb"),
            RenderMode::Greyscale => write!(f, "greyscale"),
            RenderMode::Stretched => write!(f, "stretched"),
        }
    }
}

/// Pixel layout of a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// Single 8-bit channel per pixel
    Gray8,
    /// Three 8-bit channels per pixel
    Rgb8,
}

impl FrameFormat {
    /// Number of bytes per output pixel
    pub fn channels(&self) -> usize {
        match self {
            FrameFormat::Gray8 => 1,
            FrameFormat::Rgb8 => 3,
        }
    }
}

/// Fully rendered frame, ready for display or encoding
///
/// `data` holds exactly `width * height * channels` bytes.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    pub width: u32,
    pub height: u32,
    pub format: FrameFormat,
    pub data: Vec<u8>,
}

impl RenderedFrame {
    /// Hand the frame to the image crate for encoding or resizing
    pub fn into_image(self) -> image::DynamicImage {
        match self.format {
            FrameFormat::Gray8 => image::DynamicImage::ImageLuma8(
                image::GrayImage::from_raw(self.width, self.height, self.data)
                    .expect("frame data holds width*height bytes"),
            ),
            FrameFormat::Rgb8 => image::DynamicImage::ImageRgb8(
                image::RgbImage::from_raw(self.width, self.height, self.data)
                    .expect("frame data holds width*height*3 bytes"),
            ),
        }
    }
}

/// Render a full frame from `buffer` under `mode`
///
/// Dispatch is by element size. Dumps shorter than the declared frame render
/// the samples that exist and pad the remainder black; nothing is ever read
/// past the end of the buffer.
pub fn render(buffer: &DepthBuffer, mode: RenderMode) -> DepthResult<RenderedFrame> {
    match buffer.bytes_per_pixel() {
        // A single byte has no channel split and no range worth stretching.
        1 => Ok(render_8bpp(buffer)),
        2 => Ok(match mode {
            RenderMode::Rgb => rgb_16bpp(buffer),
            RenderMode::Greyscale => greyscale_16bpp(buffer),
            RenderMode::Stretched => stretched_16bpp(buffer),
        }),
        4 => Ok(match mode {
            RenderMode::Rgb => rgb_24bpp(buffer),
            RenderMode::Greyscale => greyscale_24bpp(buffer),
            RenderMode::Stretched => stretched_24bpp(buffer),
        }),
        other => Err(DepthError::UnsupportedBitDepth(other * 8)),
    }
}

fn pixel_count(buffer: &DepthBuffer) -> usize {
    buffer.width() as usize * buffer.height() as usize
}

/// 16-bit little-endian samples, in row-major order
fn samples_16(buffer: &DepthBuffer, count: usize) -> impl Iterator<Item = u16> + '_ {
    buffer
        .bytes()
        .chunks_exact(2)
        .take(count)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
}

/// 24-bit depth values from 4-byte elements, stencil byte discarded
fn samples_24(buffer: &DepthBuffer, count: usize) -> impl Iterator<Item = u32> + '_ {
    buffer
        .bytes()
        .chunks_exact(4)
        .take(count)
        .map(|c| u32::from(c[1]) | (u32::from(c[2]) << 8) | (u32::from(c[3]) << 16))
}

fn gray_frame(buffer: &DepthBuffer, mut data: Vec<u8>) -> RenderedFrame {
    data.resize(pixel_count(buffer), 0);
    RenderedFrame {
        width: buffer.width(),
        height: buffer.height(),
        format: FrameFormat::Gray8,
        data,
    }
}

fn rgb_frame(buffer: &DepthBuffer, mut data: Vec<u8>) -> RenderedFrame {
    data.resize(pixel_count(buffer) * 3, 0);
    RenderedFrame {
        width: buffer.width(),
        height: buffer.height(),
        format: FrameFormat::Rgb8,
        data,
    }
}

fn render_8bpp(buffer: &DepthBuffer) -> RenderedFrame {
    let count = pixel_count(buffer).min(buffer.len());
    let mut data = Vec::with_capacity(pixel_count(buffer));
    data.extend_from_slice(&buffer.bytes()[..count]);
    gray_frame(buffer, data)
}

fn rgb_16bpp(buffer: &DepthBuffer) -> RenderedFrame {
    let count = pixel_count(buffer);
    let mut data = Vec::with_capacity(count * 3);

    // Low byte on red, high byte on green: a raw dual-channel debug view.
    for chunk in buffer.bytes().chunks_exact(2).take(count) {
        data.extend_from_slice(&[chunk[0], chunk[1], 0]);
    }

    rgb_frame(buffer, data)
}

fn greyscale_16bpp(buffer: &DepthBuffer) -> RenderedFrame {
    let count = pixel_count(buffer);
    let mut data = Vec::with_capacity(count);

    for v in samples_16(buffer, count) {
        data.push((u32::from(v) * 0xFF / 0xFFFF) as u8);
    }

    gray_frame(buffer, data)
}

fn stretched_16bpp(buffer: &DepthBuffer) -> RenderedFrame {
    let count = pixel_count(buffer);

    let mut min_value = u16::MAX;
    let mut max_value = 0u16;
    for v in samples_16(buffer, count) {
        min_value = min_value.min(v);
        max_value = max_value.max(v);
    }

    debug!(min = min_value, max = max_value, "16-bit stretch range");

    // Flat frame (max == min, including all-zero): uniform black instead of
    // dividing by zero. An empty dump lands here too.
    if max_value <= min_value {
        return gray_frame(buffer, Vec::new());
    }

    let range = u32::from(max_value - min_value);
    let mut data = Vec::with_capacity(count);
    for v in samples_16(buffer, count) {
        data.push((u32::from(v - min_value) * 0xFF / range) as u8);
    }

    gray_frame(buffer, data)
}

fn rgb_24bpp(buffer: &DepthBuffer) -> RenderedFrame {
    let count = pixel_count(buffer);
    let mut data = Vec::with_capacity(count * 3);

    // Depth bytes land on the channels in stored order; byte 0 is stencil.
    for chunk in buffer.bytes().chunks_exact(4).take(count) {
        data.extend_from_slice(&[chunk[1], chunk[2], chunk[3]]);
    }

    rgb_frame(buffer, data)
}

fn greyscale_24bpp(buffer: &DepthBuffer) -> RenderedFrame {
    let count = pixel_count(buffer);
    let mut data = Vec::with_capacity(count);

    for v in samples_24(buffer, count) {
        data.push((u64::from(v) * 0xFF / 0xFF_FFFF) as u8);
    }

    gray_frame(buffer, data)
}

fn stretched_24bpp(buffer: &DepthBuffer) -> RenderedFrame {
    let count = pixel_count(buffer);

    let mut min_value = 0xFF_FFFFu32;
    let mut max_value = 0u32;
    for v in samples_24(buffer, count) {
        min_value = min_value.min(v);
        max_value = max_value.max(v);
    }

    debug!(min = min_value, max = max_value, "24-bit stretch range");

    if max_value <= min_value {
        return gray_frame(buffer, Vec::new());
    }

    let range = u64::from(max_value - min_value);
    let mut data = Vec::with_capacity(count);
    for v in samples_24(buffer, count) {
        data.push((u64::from(v - min_value) * 0xFF / range) as u8);
    }

    gray_frame(buffer, data)
}
