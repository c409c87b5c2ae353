/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::error;
use port_core::options::DecoderOptions;
use port_ppm::PpmDecoder;

use crate::batch::{list_entries, BatchOptions};
use crate::errors::ConvertErrors;
use crate::serde::Metadata;

/// Probe input files, extract headers, and print to standard output.
pub fn probe_input_files(options: &BatchOptions) -> Result<(), ConvertErrors> {
    for in_file in list_entries(&options.input_dir)? {
        match probe_file(&in_file, options.convert.decoder) {
            Ok(json) => println!("{json}"),
            Err(reason) => {
                println!("Failed to probe {:?}", in_file);
                error!("{:?}: {}", in_file, reason);
            }
        }
    }
    Ok(())
}

/// Read only the header of `path` and return it as pretty printed json
pub fn probe_file(path: &Path, options: DecoderOptions) -> Result<String, ConvertErrors> {
    let fd = BufReader::new(File::open(path)?);
    let mut decoder = PpmDecoder::new_with_options(options, fd);

    decoder.read_headers()?;

    match decoder.get_header() {
        Some(header) => serde_json::to_string_pretty(&Metadata::new(path, header))
            .map_err(|e| ConvertErrors::GenericString(e.to_string())),
        None => Err(ConvertErrors::GenericString(format!(
            "No header decoded for {:?}",
            path
        )))
    }
}
