/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use port_core::pixel::Rgb;
use port_core::raster::RasterImage;

/// Header of a plain text PPM image
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PpmHeader {
    /// The first line as found in the file, trimmed
    pub magic:     String,
    pub width:     usize,
    pub height:    usize,
    /// Declared maximum color value, `255` if the line could not be read
    /// and the decoder was not strict
    pub max_value: u32
}

/// A decoded PPM image
///
/// Every sample lies in `[0, min(max_value, 255)]`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PpmImage {
    width:     usize,
    height:    usize,
    max_value: u32,
    pixels:    Vec<Rgb>
}

impl PpmImage {
    pub(crate) fn new(header: &PpmHeader, pixels: Vec<Rgb>) -> PpmImage {
        debug_assert_eq!(pixels.len(), header.width * header.height);

        PpmImage {
            width: header.width,
            height: header.height,
            max_value: header.max_value,
            pixels
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Row-major pixels, `width*height` of them
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Copy every pixel into a raster of the same dimensions
    pub fn into_raster(self) -> RasterImage {
        let mut raster = RasterImage::new(self.width, self.height);

        for (y, row) in self.pixels.chunks_exact(self.width.max(1)).enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                raster.put_pixel(x, y, *pixel);
            }
        }
        raster
    }
}

impl From<PpmImage> for RasterImage {
    fn from(value: PpmImage) -> Self {
        value.into_raster()
    }
}
