// SPDX-License-Identifier: GPL-3.0-only

//! Error types for depth dump decoding

use std::fmt;

/// Result type alias using DepthError
pub type DepthResult<T> = Result<T, DepthError>;

/// Errors produced while opening, decoding, or rendering a depth dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepthError {
    /// Shape rejected at construction (zero dimension or unsupported
    /// bits-per-pixel)
    InvalidShape(String),
    /// Element size not decodable at render time
    UnsupportedBitDepth(u32),
    /// File open/read failure, unrelated to decode logic
    Io(String),
}

impl fmt::Display for DepthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthError::InvalidShape(msg) => write!(f, "Invalid shape: {}", msg),
            DepthError::UnsupportedBitDepth(bpp) => {
                write!(f, "Unsupported bit depth: {} bits per pixel", bpp)
            }
            DepthError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for DepthError {}

impl From<std::io::Error> for DepthError {
    fn from(err: std::io::Error) -> Self {
        DepthError::Io(err.to_string())
    }
}
