/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use port_png::errors::{PngDecodeErrors, PngEncodeErrors};
use port_ppm::PpmDecodeErrors;

/// Everything that can stop a single conversion, or the batch
pub enum ConvertErrors {
    /// Malformed or truncated ppm
    Parse(PpmDecodeErrors),
    /// The raster could not be encoded
    Encode(PngEncodeErrors),
    /// A written file could not be read back
    Verify(PngDecodeErrors),
    /// A written file decodes to different pixels
    Mismatch(PathBuf),
    /// Unreadable source or unwritable destination
    Io(io::Error),
    GenericString(String)
}

impl Debug for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Ppm decoding failed: {err:?}"),
            Self::Encode(err) => write!(f, "Png encoding failed: {err:?}"),
            Self::Verify(err) => write!(f, "Could not read back written png: {err:?}"),
            Self::Mismatch(path) => {
                write!(f, "{path:?} does not reproduce the source pixels")
            }
            Self::Io(err) => write!(f, "I/O error {err}"),
            Self::GenericString(val) => write!(f, "{val}")
        }
    }
}

impl Display for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ConvertErrors {}

impl From<io::Error> for ConvertErrors {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PpmDecodeErrors> for ConvertErrors {
    fn from(value: PpmDecodeErrors) -> Self {
        match value {
            PpmDecodeErrors::IoErrors(err) => Self::Io(err),
            err => Self::Parse(err)
        }
    }
}

impl From<PngEncodeErrors> for ConvertErrors {
    fn from(value: PngEncodeErrors) -> Self {
        match value {
            PngEncodeErrors::IoErrors(err) => Self::Io(err),
            err => Self::Encode(err)
        }
    }
}

impl From<PngDecodeErrors> for ConvertErrors {
    fn from(value: PngDecodeErrors) -> Self {
        match value {
            PngDecodeErrors::IoErrors(err) => Self::Io(err),
            err => Self::Verify(err)
        }
    }
}
