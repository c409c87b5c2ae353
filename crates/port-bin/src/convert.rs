/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The per file pipeline, ppm in, png out
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use log::{debug, trace, warn};
use port_core::options::{DecoderOptions, EncoderOptions};
use port_core::raster::RasterImage;
use port_png::{decode_png, PngEncoder};
use port_ppm::PpmDecoder;

use crate::errors::ConvertErrors;

/// Options applied to every file of a batch
#[derive(Debug, Copy, Clone, Default)]
pub struct ConvertOptions {
    pub decoder: DecoderOptions,
    pub encoder: EncoderOptions,
    /// Read the written png back and compare it with the source
    pub verify:  bool
}

/// Decode the ppm at `input` and write it as a png to `output`
///
/// No file is left at `output` when any step fails.
pub fn convert_file(
    input: &Path, output: &Path, options: &ConvertOptions
) -> Result<(), ConvertErrors> {
    debug!("Converting {:?} to {:?}", input, output);

    let raster = read_ppm(input, options.decoder)?;

    PngEncoder::new(&raster, options.encoder).encode_to_path(output)?;

    if options.verify {
        verify_or_discard(output, &raster)?;
    }
    Ok(())
}

/// Read one file into a raster, the file is closed on return
pub fn read_ppm(input: &Path, options: DecoderOptions) -> Result<RasterImage, ConvertErrors> {
    let fd = BufReader::new(File::open(input)?);

    let image = PpmDecoder::new_with_options(options, fd).decode()?;
    trace!(
        "Decoded {}x{} image from {:?}",
        image.width(),
        image.height(),
        input
    );
    Ok(image.into_raster())
}

/// Verify `output`, removing it when it does not hold `expected`
fn verify_or_discard(output: &Path, expected: &RasterImage) -> Result<(), ConvertErrors> {
    let result = verify_output(output, expected);

    if result.is_err() {
        if let Err(err) = fs::remove_file(output) {
            warn!("Could not remove {:?}: {}", output, err);
        }
    }
    result
}

fn verify_output(output: &Path, expected: &RasterImage) -> Result<(), ConvertErrors> {
    let fd = BufReader::new(File::open(output)?);
    let written = decode_png(fd)?;

    if &written != expected {
        return Err(ConvertErrors::Mismatch(output.to_path_buf()));
    }
    debug!("Verified {:?}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use port_core::options::EncoderOptions;
    use port_core::pixel::Rgb;
    use port_core::raster::RasterImage;
    use port_png::PngEncoder;

    use crate::convert::verify_or_discard;
    use crate::errors::ConvertErrors;

    #[test]
    fn test_mismatched_output_is_removed() {
        let output = std::env::temp_dir()
            .join(format!("port-bin-{}-mismatch.png", std::process::id()));

        let written = RasterImage::new(1, 1);
        PngEncoder::new(&written, EncoderOptions::default())
            .encode_to_path(&output)
            .unwrap();

        let mut expected = RasterImage::new(1, 1);
        expected.put_pixel(0, 0, Rgb::new(1, 2, 3));

        let err = verify_or_discard(&output, &expected).unwrap_err();
        assert!(matches!(err, ConvertErrors::Mismatch(_)));
        assert!(!output.exists());

        // a matching file stays
        PngEncoder::new(&expected, EncoderOptions::default())
            .encode_to_path(&output)
            .unwrap();
        verify_or_discard(&output, &expected).unwrap();
        assert!(output.exists());

        fs::remove_file(&output).unwrap();
    }
}
