/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};

use crate::batch::BatchOptions;
use crate::cmd_parsers::{get_decoder_options, get_encoder_options};
use crate::convert::ConvertOptions;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub batch: BatchOptions,
    pub probe: bool
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut batch = BatchOptions::default();

    if let Some(input) = options.get_one::<PathBuf>("in") {
        batch.input_dir = input.clone();
    }
    if let Some(output) = options.get_one::<PathBuf>("out") {
        batch.output_dir = output.clone();
    }
    if let Some(prefix) = options.get_one::<String>("prefix") {
        batch.prefix = prefix.clone();
    }

    batch.convert = ConvertOptions {
        decoder: get_decoder_options(options),
        encoder: get_encoder_options(options),
        verify:  options.get_flag("verify")
    };

    if batch.convert.decoder.get_strict_mode() {
        info!("Strict mode enabled");
    }
    if batch.convert.verify {
        info!("Verifying written files");
    }

    CmdOptions {
        batch,
        probe: options.get_flag("probe")
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
