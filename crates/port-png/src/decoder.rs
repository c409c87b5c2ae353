/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use log::info;
use port_core::raster::RasterImage;

use crate::errors::PngDecodeErrors;

/// Read an 8-bit RGB png into a raster
///
/// Any other color type or depth is an error, no conversion
/// is attempted.
pub fn decode_png<R: Read>(reader: R) -> Result<RasterImage, PngDecodeErrors> {
    let decoder = png::Decoder::new(reader);
    let mut reader = decoder.read_info()?;

    // Allocate the output buffer.
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;

    info!("Width: {}, height: {}", frame.width, frame.height);

    if frame.color_type != png::ColorType::Rgb || frame.bit_depth != png::BitDepth::Eight {
        return Err(PngDecodeErrors::UnsupportedFormat(
            frame.color_type,
            frame.bit_depth
        ));
    }
    buf.truncate(frame.buffer_size());

    let raster = RasterImage::from_raw(frame.width as usize, frame.height as usize, &buf)
        .ok_or("Png frame size does not match its dimensions")?;

    Ok(raster)
}
