/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::batch::run_batch;
use crate::probe_files::probe_input_files;

pub mod batch;
mod cmd_args;
mod cmd_parsers;
pub mod convert;
pub mod errors;
pub mod probe_files;
mod serde;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = if parsed_opts.probe {
        probe_input_files(&parsed_opts.batch)
    } else {
        run_batch(&parsed_opts.batch).map(|_| ())
    };

    if let Err(reason) = result {
        println!();
        error!(" Could not complete batch, reason {:?}", reason);

        println!();
        exit(-1);
    }
}
