/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::convert::{convert_file, ConvertOptions};
use crate::errors::ConvertErrors;

/// Where to read from, where to write to and how
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir:  PathBuf,
    /// Must exist before the batch runs
    pub output_dir: PathBuf,
    pub prefix:     String,
    pub convert:    ConvertOptions
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            input_dir:  PathBuf::from("render"),
            output_dir: PathBuf::from("render_pngs"),
            prefix:     String::from("ppm_"),
            convert:    ConvertOptions::default()
        }
    }
}

/// Outcome of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(input, output)` pairs
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// `(input, reason)` pairs
    pub failed:    Vec<(PathBuf, ConvertErrors)>
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Name of the output for the `index`-th input entry
pub fn output_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}.png")
}

/// Convert every entry of `options.input_dir`, reporting failures on stdout
///
/// A failing file is reported and skipped, only problems with the
/// directories themselves abort the batch.
pub fn run_batch(options: &BatchOptions) -> Result<BatchReport, ConvertErrors> {
    run_batch_with_output(options, &mut io::stdout().lock())
}

/// Like [`run_batch`] but the one line failure notices go to `console`
pub fn run_batch_with_output<W: Write>(
    options: &BatchOptions, console: &mut W
) -> Result<BatchReport, ConvertErrors> {
    info!("Creating batch from {:?}", options.input_dir);

    verify_directories(&options.input_dir, &options.output_dir)?;

    let entries = list_entries(&options.input_dir)?;
    info!("Found {} entries", entries.len());

    let mut report = BatchReport::default();

    for (index, in_file) in entries.into_iter().enumerate() {
        let out_file = options
            .output_dir
            .join(output_name(&options.prefix, index));

        match convert_file(&in_file, &out_file, &options.convert) {
            Ok(()) => {
                debug!("Wrote {:?}", out_file);
                report.converted.push((in_file, out_file));
            }
            Err(reason) => {
                writeln!(console, "Failed to convert {} to png", display_name(&in_file))?;
                error!("{:?}: {}", in_file, reason);

                report.failed.push((in_file, reason));
            }
        }
    }
    info!(
        "Converted {} of {} files",
        report.converted.len(),
        report.total()
    );
    Ok(report)
}

/// Every entry of `dir`, sorted by name, not recursive
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, ConvertErrors> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;

    entries.sort();

    Ok(entries)
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string()
    }
}

fn verify_directories(input: &Path, output: &Path) -> Result<(), ConvertErrors> {
    if input == output {
        return Err(ConvertErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            input
        )));
    }
    if !input.is_dir() {
        return Err(ConvertErrors::GenericString(format!(
            "Input directory {:?} does not exist",
            input
        )));
    }
    if !output.is_dir() {
        return Err(ConvertErrors::GenericString(format!(
            "Output directory {:?} does not exist, create it first",
            output
        )));
    }
    Ok(())
}

#[test]
fn test_output_name() {
    assert_eq!(output_name("ppm_", 0), "ppm_0.png");
    assert_eq!(output_name("frame-", 12), "frame-12.png");
}
