// SPDX-License-Identifier: GPL-3.0-only

//! Depth texture dump decoding and rendering
//!
//! Depth dumps are raw, headerless byte captures of GPU depth textures: one
//! fixed-size little-endian sample per pixel, row-major. The format embeds no
//! metadata, so width, height, and bits per pixel are supplied by whoever
//! captured the texture.
//!
//! The crate is organized into:
//!
//! - [`buffer`]: shape-aware view over the dump and per-coordinate sampling
//! - [`render`]: full-frame render policies (rgb, greyscale, stretched)
//! - [`errors`]: error taxonomy
//!
//! # Example
//!
//! ```
//! use depth_viewer::{DepthBuffer, RenderMode, render};
//!
//! let dump = vec![0x00, 0x00, 0xFF, 0xFF];
//! let buffer = DepthBuffer::from_bytes(dump, 2, 1, 16)?;
//! assert_eq!(buffer.sample_at(1, 0), Some(0xFFFF));
//!
//! let frame = render(&buffer, RenderMode::Greyscale)?;
//! assert_eq!(frame.data, [0, 255]);
//! # Ok::<(), depth_viewer::DepthError>(())
//! ```

pub mod buffer;
pub mod errors;
pub mod render;

// Re-export commonly used types
pub use buffer::DepthBuffer;
pub use errors::{DepthError, DepthResult};
pub use render::{FrameFormat, RenderMode, RenderedFrame, render};
