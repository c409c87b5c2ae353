/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::PathBuf;

use port_png::errors::PngDecodeErrors;
use port_png::port_core::options::{CompressionLevel, EncoderOptions};
use port_png::port_core::pixel::Rgb;
use port_png::port_core::raster::RasterImage;
use port_png::{decode_png, PngEncoder};

fn decode_ref(data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().unwrap();

    // Allocate the output buffer.
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();

    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);

    (info.width, info.height, buf)
}

fn noisy_raster(width: usize, height: usize) -> RasterImage {
    let mut raster = RasterImage::new(width, height);
    let mut state = 0x2545_f491_u32;

    for y in 0..height {
        for x in 0..width {
            // xorshift, deterministic noise that compresses badly
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            raster.put_pixel(x, y, Rgb::new(r, g, b));
        }
    }
    raster
}

#[test]
fn test_reference_decoder_sees_same_pixels() {
    let raster = noisy_raster(37, 19);

    for level in [CompressionLevel::Fast, CompressionLevel::Default, CompressionLevel::Best] {
        let options = EncoderOptions::default().set_compression(level);
        let bytes = PngEncoder::new(&raster, options).encode_to_vec().unwrap();

        let (width, height, pixels) = decode_ref(&bytes);

        assert_eq!((width, height), (37, 19));
        assert_eq!(&pixels, raster.as_bytes(), "compression {level:?}");
    }
}

#[test]
fn test_decode_png_reads_back_raster() {
    let raster = noisy_raster(8, 64);
    let bytes = PngEncoder::new(&raster, EncoderOptions::default())
        .encode_to_vec()
        .unwrap();

    assert_eq!(decode_png(&bytes[..]).unwrap(), raster);
}

#[test]
fn test_decode_png_rejects_rgba() {
    let mut bytes = vec![];
    {
        let mut encoder = png::Encoder::new(&mut bytes, 1, 1);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[1, 2, 3, 4]).unwrap();
    }
    let err = decode_png(&bytes[..]).unwrap_err();

    assert!(matches!(err, PngDecodeErrors::UnsupportedFormat(png::ColorType::Rgba, _)));
}

#[test]
fn test_encode_to_path_overwrites() {
    let path = std::env::temp_dir().join(format!("port-png-{}-overwrite.png", std::process::id()));
    std::fs::write(&path, b"stale contents that are not a png").unwrap();

    let raster = noisy_raster(4, 4);
    let written = PngEncoder::new(&raster, EncoderOptions::default())
        .encode_to_path(&path)
        .unwrap();

    let contents = read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written, contents.len());
    assert_eq!(decode_png(&contents[..]).unwrap(), raster);
}

#[test]
fn test_zero_width_leaves_no_file() {
    let path: PathBuf =
        std::env::temp_dir().join(format!("port-png-{}-zero.png", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let raster = RasterImage::new(0, 4);
    assert!(PngEncoder::new(&raster, EncoderOptions::default())
        .encode_to_path(&path)
        .is_err());
    assert!(!path.exists());
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let path = std::env::temp_dir()
        .join(format!("port-png-{}-missing-dir", std::process::id()))
        .join("out.png");

    let raster = RasterImage::new(1, 1);
    let err = PngEncoder::new(&raster, EncoderOptions::default())
        .encode_to_path(&path)
        .unwrap_err();

    assert!(matches!(err, port_png::errors::PngEncodeErrors::IoErrors(_)));
}
