/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::str::FromStr;

/// How hard an encoder should try to shrink its output
///
/// Only affects file size, output stays lossless
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CompressionLevel {
    Fast,
    #[default]
    Default,
    Best
}

impl FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "default" => Ok(Self::Default),
            "best" => Ok(Self::Best),
            _ => Err(format!(
                "Unknown compression level `{s}`, expected one of fast, default or best"
            ))
        }
    }
}

/// Options shared by encoders
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct EncoderOptions {
    compression: CompressionLevel
}

impl EncoderOptions {
    pub const fn get_compression(&self) -> CompressionLevel {
        self.compression
    }

    pub fn set_compression(mut self, level: CompressionLevel) -> Self {
        self.compression = level;
        self
    }
}

#[test]
fn test_parse_compression_level() {
    assert_eq!("BEST".parse::<CompressionLevel>(), Ok(CompressionLevel::Best));
    assert_eq!("fast".parse::<CompressionLevel>(), Ok(CompressionLevel::Fast));
    assert!("smallest".parse::<CompressionLevel>().is_err());
}
