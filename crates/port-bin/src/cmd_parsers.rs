use clap::ArgMatches;
use log::warn;
use port_core::options::{CompressionLevel, DecoderOptions, EncoderOptions};

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let mut decoder_options = DecoderOptions::default().set_strict_mode(options.get_flag("strict"));

    if let Some(max_width) = options.get_one::<usize>("max-width") {
        decoder_options = decoder_options.set_max_width(*max_width);
    }
    if let Some(max_height) = options.get_one::<usize>("max-height") {
        decoder_options = decoder_options.set_max_height(*max_height);
    }
    decoder_options
}

pub fn get_encoder_options(options: &ArgMatches) -> EncoderOptions {
    let level = match options.get_one::<String>("compression") {
        Some(value) => value.parse::<CompressionLevel>().unwrap_or_else(|err| {
            warn!("{err}, using default");
            CompressionLevel::Default
        }),
        None => CompressionLevel::Default
    };
    EncoderOptions::default().set_compression(level)
}
