/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Possible Errors that may occur during decoding
///
/// Line numbers are 1-based and refer to the input text
pub enum PpmDecodeErrors {
    /// The stream ended before a header line could be read
    MissingLine { line: usize, expected: &'static str },
    /// The dimension line did not contain exactly two non-negative integers
    MalformedDimensions { line: usize, found: String },
    /// A token could not be read as an integer
    InvalidInteger { line: usize, token: String },
    /// A pixel line did not contain exactly three samples
    WrongTokenCount {
        line:     usize,
        expected: usize,
        found:    usize
    },
    /// The stream ended before `width*height` pixels were read
    TruncatedPixels { expected: usize, found: usize },
    /// Too large dimensions
    ///
    /// # Arguments
    /// - 1st argument is the configured limit
    /// - 2nd argument is the dimension found
    LargeDimensions(usize, usize),
    /// Magic number was not `P3` (strict mode)
    InvalidMagic(String),
    /// Maximum color value line was not a single positive integer (strict mode)
    InvalidMaxValue { line: usize, found: String },
    /// A sample lies outside `[0, max]` (strict mode)
    ChannelOutOfRange { line: usize, value: i64, max: u32 },
    /// Non blank text after the last pixel (strict mode)
    TrailingData { line: usize },
    IoErrors(io::Error)
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLine { line, expected } => {
                write!(f, "Line {line}: stream ended, expected {expected}")
            }
            Self::MalformedDimensions { line, found } => {
                write!(
                    f,
                    "Line {line}: expected width and height as two non-negative integers but found {found:?}"
                )
            }
            Self::InvalidInteger { line, token } => {
                write!(f, "Line {line}: {token:?} is not a valid integer")
            }
            Self::WrongTokenCount {
                line,
                expected,
                found
            } => {
                write!(
                    f,
                    "Line {line}: expected {expected} samples per pixel but found {found}"
                )
            }
            Self::TruncatedPixels { expected, found } => {
                write!(f, "Expected {expected} pixels but stream has {found}")
            }
            Self::LargeDimensions(expected, found) => {
                write!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::InvalidMagic(magic) => {
                write!(f, "Expected `P3` as magic number but found {magic:?}")
            }
            Self::InvalidMaxValue { line, found } => {
                write!(f, "Line {line}: invalid maximum color value {found:?}")
            }
            Self::ChannelOutOfRange { line, value, max } => {
                write!(f, "Line {line}: sample {value} is outside of 0..={max}")
            }
            Self::TrailingData { line } => {
                write!(f, "Line {line}: unexpected data after the last pixel")
            }
            Self::IoErrors(err) => {
                write!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PpmDecodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for PpmDecodeErrors {
    fn from(value: io::Error) -> Self {
        PpmDecodeErrors::IoErrors(value)
    }
}

/// Errors occurring during encoding
pub enum PpmEncodeErrors {
    IoErrors(io::Error)
}

impl Debug for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => write!(f, "I/O error {err}")
        }
    }
}

impl Display for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PpmEncodeErrors {}

impl From<io::Error> for PpmEncodeErrors {
    fn from(value: io::Error) -> Self {
        PpmEncodeErrors::IoErrors(value)
    }
}
