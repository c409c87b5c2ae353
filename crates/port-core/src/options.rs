//! Decoder and encoder options
//!
//! All supported options are put into one struct per direction to allow
//! for global configuration, i.e the same `DecoderOptions` can be reused
//! for every file of a batch

pub use decoder::DecoderOptions;
pub use encoder::{CompressionLevel, EncoderOptions};

mod decoder;
mod encoder;
