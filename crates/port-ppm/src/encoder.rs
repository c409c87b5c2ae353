/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for plain text PPM
use std::fmt::Write as _;
use std::io::Write;

use port_core::raster::RasterImage;

use crate::errors::PpmEncodeErrors;

/// Samples are always written as 8-bit
const MAX_VALUE: u8 = u8::MAX;

/// A P3 encoder
///
/// Output uses the same one-pixel-per-line layout the decoder reads
///
/// # Example
/// ```
/// use port_core::pixel::Rgb;
/// use port_core::raster::RasterImage;
/// use port_ppm::PpmEncoder;
///
/// let mut raster = RasterImage::new(1, 1);
/// raster.put_pixel(0, 0, Rgb::new(1, 2, 3));
///
/// let mut out = vec![];
/// PpmEncoder::new(&mut out).encode(&raster).unwrap();
///
/// assert_eq!(out, b"P3\n1 1\n255\n1 2 3\n");
/// ```
pub struct PpmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PpmEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PpmEncoder<'a, W> {
        Self { writer }
    }

    /// Encode `image`, returning the number of bytes written
    pub fn encode(&mut self, image: &RasterImage) -> Result<usize, PpmEncodeErrors> {
        // "255 255 255\n" is the longest pixel line
        let mut out = String::with_capacity(16 + image.pixels().len() * 12);

        let _ = writeln!(out, "P3\n{} {}\n{MAX_VALUE}", image.width(), image.height());

        for pixel in image.pixels() {
            let _ = writeln!(out, "{pixel}");
        }
        self.writer.write_all(out.as_bytes())?;

        Ok(out.len())
    }
}
