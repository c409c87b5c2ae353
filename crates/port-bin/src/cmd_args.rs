/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppm-port")
        .about("Convert a directory of plain text PPM renders into PNG files")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Directory to read PPM files from")
            .default_value("render")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Existing directory to write PNG files to")
            .default_value("render_pngs")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("prefix")
            .long("prefix")
            .help("Output file name prefix, files are named <prefix><index>.png")
            .default_value("ppm_"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("DECODING")
            .help("Reject files with recoverable problems")
            .long_help("Treat warnings as errors.\nRejects a magic number other than P3, an unreadable maximum color value, samples outside of the maximum color value and data after the last pixel.\nWithout it such samples are clamped and the rest is ignored."))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODING")
            .help("Maximum width of an image the decoder will accept")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODING")
            .help("Maximum height of an image the decoder will accept")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("compression")
            .long("compression")
            .help_heading("ENCODING")
            .help("Png compression effort")
            .default_value("default")
            .value_parser(["fast", "default", "best"]))
        .arg(Arg::new("verify")
            .long("verify")
            .action(ArgAction::SetTrue)
            .help_heading("ENCODING")
            .help("Read every written png back and compare it with its source"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Print the headers of the input files as json instead of converting"))
}

#[test]
fn test_defaults() {
    let matches = create_cmd_args().get_matches_from(["ppm-port"]);

    assert_eq!(
        matches.get_one::<PathBuf>("in"),
        Some(&PathBuf::from("render"))
    );
    assert_eq!(
        matches.get_one::<PathBuf>("out"),
        Some(&PathBuf::from("render_pngs"))
    );
    assert!(!matches.get_flag("strict"));
}

#[test]
fn test_unknown_compression_is_rejected() {
    let result = create_cmd_args().try_get_matches_from(["ppm-port", "--compression", "tiny"]);
    assert!(result.is_err());
}
