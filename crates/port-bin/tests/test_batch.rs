/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::{Path, PathBuf};

use port_bin::batch::{run_batch, run_batch_with_output, BatchOptions};
use port_bin::convert::{convert_file, ConvertOptions};
use port_bin::errors::ConvertErrors;
use port_bin::probe_files::probe_file;
use port_core::options::DecoderOptions;
use port_core::pixel::Rgb;
use port_core::raster::RasterImage;
use port_png::decode_png;
use port_ppm::PpmEncoder;

fn ppm(width: usize, height: usize, pixels: &[Rgb]) -> Vec<u8> {
    let raster = RasterImage::from_pixels(width, height, pixels.to_vec()).unwrap();

    let mut out = vec![];
    PpmEncoder::new(&mut out).encode(&raster).unwrap();
    out
}

fn red_green() -> Vec<u8> {
    ppm(2, 1, &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)])
}

fn blue() -> Vec<u8> {
    ppm(1, 1, &[Rgb::new(0, 0, 255)])
}

/// A fresh directory under the system temp dir, unique per test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("port-bin-{}-{name}", std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn batch_dirs(name: &str) -> (PathBuf, PathBuf) {
    let root = scratch_dir(name);
    let input = root.join("render");
    let output = root.join("render_pngs");

    fs::create_dir(&input).unwrap();
    fs::create_dir(&output).unwrap();
    (input, output)
}

fn options(input: &Path, output: &Path) -> BatchOptions {
    BatchOptions {
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        ..BatchOptions::default()
    }
}

fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_malformed_file_does_not_stop_batch() {
    let (input, output) = batch_dirs("malformed");

    fs::write(input.join("a.ppm"), red_green()).unwrap();
    fs::write(input.join("b.ppm"), "P3\n10\n255\n").unwrap();
    fs::write(input.join("c.ppm"), blue()).unwrap();

    let mut console = vec![];
    let report = run_batch_with_output(&options(&input, &output), &mut console).unwrap();

    assert_eq!(
        String::from_utf8(console).unwrap(),
        "Failed to convert b.ppm to png\n"
    );

    assert_eq!(report.total(), 3);
    assert_eq!(report.converted.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, input.join("b.ppm"));
    assert!(matches!(report.failed[0].1, ConvertErrors::Parse(_)));

    // numbering follows the listing, so the failed entry leaves a gap
    assert_eq!(list_names(&output), ["ppm_0.png", "ppm_2.png"]);

    let first = decode_png(fs::File::open(output.join("ppm_0.png")).unwrap()).unwrap();
    assert_eq!(first.dimensions(), (2, 1));
    assert_eq!(first.get_pixel(0, 0), Some(Rgb::new(255, 0, 0)));
    assert_eq!(first.get_pixel(1, 0), Some(Rgb::new(0, 255, 0)));

    let third = decode_png(fs::File::open(output.join("ppm_2.png")).unwrap()).unwrap();
    assert_eq!(third.get_pixel(0, 0), Some(Rgb::new(0, 0, 255)));
}

#[test]
fn test_parse_failures_write_nothing() {
    let (input, output) = batch_dirs("no-output");

    fs::write(input.join("dims.ppm"), "P3\n10\n255\n").unwrap();
    fs::write(input.join("tokens.ppm"), "P3\n1 1\n255\n255 0\n").unwrap();
    fs::write(input.join("truncated.ppm"), "P3\n2 2\n255\n1 2 3\n").unwrap();
    fs::write(input.join("zero.ppm"), "P3\n0 4\n255\n").unwrap();

    let report = run_batch(&options(&input, &output)).unwrap();

    assert!(report.converted.is_empty());
    assert_eq!(report.failed.len(), 4);
    assert!(matches!(report.failed[3].1, ConvertErrors::Encode(_)));
    assert!(list_names(&output).is_empty());
}

#[test]
fn test_directory_entry_is_reported() {
    let (input, output) = batch_dirs("subdir");

    fs::create_dir(input.join("a_nested")).unwrap();
    fs::write(input.join("b.ppm"), blue()).unwrap();

    let report = run_batch(&options(&input, &output)).unwrap();

    assert_eq!(report.failed.len(), 1);
    assert!(matches!(report.failed[0].1, ConvertErrors::Io(_)));
    assert_eq!(list_names(&output), ["ppm_1.png"]);
}

#[test]
fn test_missing_output_directory_aborts() {
    let root = scratch_dir("missing-output");
    let input = root.join("render");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("a.ppm"), blue()).unwrap();

    let result = run_batch(&options(&input, &root.join("render_pngs")));

    assert!(matches!(result, Err(ConvertErrors::GenericString(_))));
    assert!(!root.join("render_pngs").exists());
}

#[test]
fn test_existing_outputs_are_overwritten() {
    let (input, output) = batch_dirs("overwrite");

    fs::write(input.join("a.ppm"), blue()).unwrap();
    fs::write(output.join("ppm_0.png"), b"old").unwrap();

    let report = run_batch(&options(&input, &output)).unwrap();
    assert_eq!(report.converted.len(), 1);

    let raster = decode_png(fs::File::open(output.join("ppm_0.png")).unwrap()).unwrap();
    assert_eq!(raster.get_pixel(0, 0), Some(Rgb::new(0, 0, 255)));
}

#[test]
fn test_convert_with_verify_and_strict() {
    let root = scratch_dir("verify");
    let input = root.join("in.ppm");
    let output = root.join("out.png");

    fs::write(&input, "P3\n1 1\n255\n0 300 0\n").unwrap();

    let mut options = ConvertOptions {
        verify: true,
        ..ConvertOptions::default()
    };
    // lenient, clamps
    convert_file(&input, &output, &options).unwrap();
    let raster = decode_png(fs::File::open(&output).unwrap()).unwrap();
    assert_eq!(raster.get_pixel(0, 0), Some(Rgb::new(0, 255, 0)));

    fs::remove_file(&output).unwrap();
    options.decoder = DecoderOptions::default().set_strict_mode(true);

    let err = convert_file(&input, &output, &options).unwrap_err();
    assert!(matches!(err, ConvertErrors::Parse(_)));
    assert!(!output.exists());
}

#[test]
fn test_probe_reports_header() {
    let root = scratch_dir("probe");
    let input = root.join("frame.ppm");
    fs::write(&input, "P3\n640 480\n255\n").unwrap();

    let json = probe_file(&input, DecoderOptions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["metadata"]["width"], 640);
    assert_eq!(value["metadata"]["height"], 480);
    assert_eq!(value["metadata"]["max_value"], 255);
    assert_eq!(value["metadata"]["magic"], "P3");
}
