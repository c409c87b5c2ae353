/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decoded image, independent of any file format
//!
//! Pixels are stored in one flat buffer in row-major order,
//! pixel `(x, y)` lives at index `y * width + x`.
use crate::pixel::{Rgb, RGB_COMPONENTS};

/// An 8-bit RGB raster
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RasterImage {
    width:  usize,
    height: usize,
    pixels: Vec<Rgb>
}

impl RasterImage {
    /// Create a black raster of the given dimensions
    pub fn new(width: usize, height: usize) -> RasterImage {
        let size = width.saturating_mul(height);

        RasterImage {
            width,
            height,
            pixels: vec![Rgb::BLACK; size]
        }
    }

    /// Create a raster from row-major pixels
    ///
    /// Returns `None` if `pixels` does not contain exactly
    /// `width*height` entries
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Option<RasterImage> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(RasterImage {
            width,
            height,
            pixels
        })
    }

    /// Create a raster from interleaved `r,g,b` bytes
    ///
    /// Returns `None` if the byte count does not match the dimensions
    pub fn from_raw(width: usize, height: usize, data: &[u8]) -> Option<RasterImage> {
        let expected = width
            .checked_mul(height)?
            .checked_mul(RGB_COMPONENTS)?;

        if expected != data.len() {
            return None;
        }
        let pixels = data
            .chunks_exact(RGB_COMPONENTS)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();

        Some(RasterImage {
            width,
            height,
            pixels
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Write one pixel
    ///
    /// # Panics
    /// If `(x, y)` lies outside the raster
    pub fn put_pixel(&mut self, x: usize, y: usize, pixel: Rgb) {
        let index = self.index_of(x, y);
        self.pixels[index] = pixel;
    }

    /// Read one pixel, `None` if `(x, y)` lies outside the raster
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// View the pixels as interleaved `r,g,b` bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({x},{y}) outside of a {}x{} raster",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use crate::pixel::Rgb;
    use crate::raster::RasterImage;

    #[test]
    fn test_put_and_get_pixel() {
        let mut raster = RasterImage::new(3, 2);
        raster.put_pixel(2, 1, Rgb::new(10, 20, 30));

        assert_eq!(raster.get_pixel(2, 1), Some(Rgb::new(10, 20, 30)));
        assert_eq!(raster.get_pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(raster.get_pixel(3, 0), None);
        // row major
        assert_eq!(raster.pixels()[5], Rgb::new(10, 20, 30));
    }

    #[test]
    #[should_panic]
    fn test_put_pixel_out_of_bounds() {
        let mut raster = RasterImage::new(1, 1);
        raster.put_pixel(1, 0, Rgb::BLACK);
    }

    #[test]
    fn test_from_raw() {
        let raster = RasterImage::from_raw(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.get_pixel(1, 0), Some(Rgb::new(4, 5, 6)));
        assert_eq!(raster.as_bytes(), &[1, 2, 3, 4, 5, 6]);

        assert!(RasterImage::from_raw(2, 2, &[1, 2, 3]).is_none());
        assert!(RasterImage::from_pixels(2, 2, vec![Rgb::BLACK; 3]).is_none());
    }
}
