/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Errors encountered during encoding
pub enum PngEncodeErrors {
    /// Width or height is zero
    ///
    /// # Arguments
    /// - width
    /// - height
    InvalidDimensions(usize, usize),
    /// A dimension does not fit in the 32 bits png stores it in
    TooLargeDimensions(usize),
    /// The png crate refused the stream
    PngErrors(png::EncodingError),
    IoErrors(io::Error)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions(width, height) => {
                write!(
                    f,
                    "Cannot encode a {width}x{height} image, width and height must be non-zero"
                )
            }
            Self::TooLargeDimensions(found) => {
                write!(
                    f,
                    "Too large image dimension {found}, png can only encode dimensions up to {}",
                    u32::MAX
                )
            }
            Self::PngErrors(err) => write!(f, "Png error {err}"),
            Self::IoErrors(err) => write!(f, "I/O error {err}")
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PngEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PngErrors(err) => Some(err),
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for PngEncodeErrors {
    fn from(value: io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<png::EncodingError> for PngEncodeErrors {
    fn from(value: png::EncodingError) -> Self {
        match value {
            png::EncodingError::IoError(err) => Self::IoErrors(err),
            err => Self::PngErrors(err)
        }
    }
}

/// Errors encountered while reading a png back
pub enum PngDecodeErrors {
    /// Only 8-bit RGB images are read
    UnsupportedFormat(png::ColorType, png::BitDepth),
    GenericStatic(&'static str),
    PngErrors(png::DecodingError),
    IoErrors(io::Error)
}

impl Debug for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(color, depth) => {
                write!(
                    f,
                    "Unsupported png format {color:?} at {depth:?} bits, expected 8-bit Rgb"
                )
            }
            Self::GenericStatic(val) => write!(f, "{val}"),
            Self::PngErrors(err) => write!(f, "Png error {err}"),
            Self::IoErrors(err) => write!(f, "I/O error {err}")
        }
    }
}

impl Display for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PngDecodeErrors {}

impl From<&'static str> for PngDecodeErrors {
    fn from(val: &'static str) -> Self {
        Self::GenericStatic(val)
    }
}

impl From<png::DecodingError> for PngDecodeErrors {
    fn from(value: png::DecodingError) -> Self {
        match value {
            png::DecodingError::IoError(err) => Self::IoErrors(err),
            err => Self::PngErrors(err)
        }
    }
}
