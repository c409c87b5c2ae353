/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, trace};
use port_core::options::{CompressionLevel, EncoderOptions};
use port_core::raster::RasterImage;

use crate::errors::PngEncodeErrors;

/// Encodes a raster into an 8-bit RGB png
pub struct PngEncoder<'a> {
    image:   &'a RasterImage,
    options: EncoderOptions
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder that can encode an image into a PNG stream
    pub fn new(image: &'a RasterImage, options: EncoderOptions) -> PngEncoder<'a> {
        PngEncoder { image, options }
    }

    fn dimensions(&self) -> Result<(u32, u32), PngEncodeErrors> {
        let (width, height) = self.image.dimensions();

        if width == 0 || height == 0 {
            return Err(PngEncodeErrors::InvalidDimensions(width, height));
        }
        let w = u32::try_from(width).map_err(|_| PngEncodeErrors::TooLargeDimensions(width))?;
        let h = u32::try_from(height).map_err(|_| PngEncodeErrors::TooLargeDimensions(height))?;

        Ok((w, h))
    }

    /// Encode into `sink`
    ///
    /// Dimensions are checked before anything is written.
    pub fn encode<W: Write>(&self, sink: W) -> Result<(), PngEncodeErrors> {
        let (width, height) = self.dimensions()?;

        let mut encoder = png::Encoder::new(sink, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png_compression(self.options.get_compression()));

        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.image.as_bytes())?;
        writer.finish()?;

        trace!("Encoded {}x{} png", width, height);
        Ok(())
    }

    /// Encode into a new buffer
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, PngEncodeErrors> {
        let mut sink = Vec::with_capacity(self.image.as_bytes().len() / 2);
        self.encode(&mut sink)?;

        Ok(sink)
    }

    /// Encode and write to `path`, replacing any existing file
    ///
    /// The whole stream is built before the file is opened, so
    /// a failing encode leaves `path` untouched.
    ///
    /// Returns the number of bytes written
    pub fn encode_to_path<P: AsRef<Path>>(&self, path: P) -> Result<usize, PngEncodeErrors> {
        let path = path.as_ref();
        let bytes = self.encode_to_vec()?;

        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;

        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes)?;
        writer.flush()?;

        debug!("Wrote {} bytes to {:?}", bytes.len(), path);

        Ok(bytes.len())
    }
}

const fn png_compression(level: CompressionLevel) -> png::Compression {
    match level {
        CompressionLevel::Fast => png::Compression::Fast,
        CompressionLevel::Default => png::Compression::Default,
        CompressionLevel::Best => png::Compression::Best
    }
}

#[cfg(test)]
mod tests {
    use port_core::options::EncoderOptions;
    use port_core::raster::RasterImage;

    use crate::errors::PngEncodeErrors;
    use crate::PngEncoder;

    #[test]
    fn test_zero_dimensions_are_rejected() {
        for (width, height) in [(0, 3), (3, 0), (0, 0)] {
            let raster = RasterImage::new(width, height);
            let mut sink = vec![];

            let err = PngEncoder::new(&raster, EncoderOptions::default())
                .encode(&mut sink)
                .unwrap_err();

            assert!(matches!(err, PngEncodeErrors::InvalidDimensions(w, h) if w == width && h == height));
            assert!(sink.is_empty());
        }
    }

    #[test]
    fn test_output_starts_with_signature() {
        let raster = RasterImage::new(2, 2);
        let bytes = PngEncoder::new(&raster, EncoderOptions::default())
            .encode_to_vec()
            .unwrap();

        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
