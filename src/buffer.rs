// SPDX-License-Identifier: GPL-3.0-only

//! Shape-aware view over a raw depth texture dump
//!
//! Dumps carry no header: width, height, and bits per pixel are an external
//! contract supplied by whoever captured the texture. The view computes byte
//! offsets from that shape and decodes individual little-endian samples.

use std::path::Path;

use tracing::debug;

use crate::errors::{DepthError, DepthResult};

/// Raw depth dump bytes plus the shape declared for them
///
/// 24-bit depth textures carry stencil bits in the low-order byte, so a
/// 24 bpp declaration is stored as 4-byte elements. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    width: u32,
    height: u32,
    declared_bpp: u32,
    bpp: u32,
    bytes_per_pixel: u32,
    pitch: u32,
    data: Vec<u8>,
}

impl DepthBuffer {
    /// Create a view over `data` with the declared shape
    ///
    /// `data.len()` is not required to match `pitch * height`; sampling past
    /// the end of a short buffer yields `None` instead of failing here.
    pub fn from_bytes(data: Vec<u8>, width: u32, height: u32, bpp: u32) -> DepthResult<Self> {
        if width == 0 || height == 0 {
            return Err(DepthError::InvalidShape(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let effective_bpp = match bpp {
            8 | 16 | 32 => bpp,
            // 24 bit depth textures have stencil bits in the low order byte.
            24 => 32,
            other => {
                return Err(DepthError::InvalidShape(format!(
                    "bits per pixel must be 8, 16, 24 or 32, got {}",
                    other
                )));
            }
        };
        let bytes_per_pixel = effective_bpp / 8;

        let pitch = width.checked_mul(bytes_per_pixel).ok_or_else(|| {
            DepthError::InvalidShape(format!(
                "width {} overflows row pitch at {} bytes per pixel",
                width, bytes_per_pixel
            ))
        })?;

        debug!(
            width,
            height,
            declared_bpp = bpp,
            effective_bpp,
            bytes = data.len(),
            "Constructed depth buffer view"
        );

        Ok(Self {
            width,
            height,
            declared_bpp: bpp,
            bpp: effective_bpp,
            bytes_per_pixel,
            pitch,
            data,
        })
    }

    /// Read a dump file and view it with the declared shape
    pub fn open<P: AsRef<Path>>(path: P, width: u32, height: u32, bpp: u32) -> DepthResult<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(data, width, height, bpp)
    }

    /// Decode the sample at pixel (x, y)
    ///
    /// The offset is `y * pitch + x * bytes_per_pixel`; if fewer than
    /// `bytes_per_pixel` bytes remain at that offset the coordinate is out of
    /// bounds and `None` is returned. In-bounds samples decode as unsigned
    /// little-endian integers. For 4-byte elements this is the full 32-bit
    /// value, stencil byte included; only rendering strips the stencil.
    pub fn sample_at(&self, x: u32, y: u32) -> Option<u32> {
        let offset =
            u64::from(y) * u64::from(self.pitch) + u64::from(x) * u64::from(self.bytes_per_pixel);
        let end = offset + u64::from(self.bytes_per_pixel);
        if end > self.data.len() as u64 {
            return None;
        }

        let bytes = &self.data[offset as usize..end as usize];
        match self.bytes_per_pixel {
            1 => Some(u32::from(bytes[0])),
            2 => Some(u32::from(u16::from_le_bytes([bytes[0], bytes[1]]))),
            4 => Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
            _ => None,
        }
    }

    /// Largest value representable at the effective bit depth
    ///
    /// Callers use this to show a normalized 0..1 readout next to a raw
    /// sample.
    pub fn max_sample_value(&self) -> u64 {
        (1u64 << self.bpp) - 1
    }

    /// Texture width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Effective bits per pixel (24 is stored as 32)
    pub fn bits_per_pixel(&self) -> u32 {
        self.bpp
    }

    /// Bits per pixel as declared by the caller
    pub fn declared_bits_per_pixel(&self) -> u32 {
        self.declared_bpp
    }

    /// Bytes consumed by one sample
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bytes_per_pixel
    }

    /// Bytes consumed by one full row of pixels
    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    /// Number of bytes in the dump
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the dump holds no bytes at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw dump bytes
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}
