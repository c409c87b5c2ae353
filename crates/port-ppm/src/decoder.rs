/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::borrow::Cow;
use std::io::BufRead;

use log::{info, trace, warn};
use port_core::options::DecoderOptions;
use port_core::pixel::{Rgb, RGB_COMPONENTS};

use crate::errors::PpmDecodeErrors;
use crate::image::{PpmHeader, PpmImage};

/// Maximum color value assumed when the header line can't be read
const DEFAULT_MAX_VALUE: u32 = 255;

/// Upper bound on the pixel buffer reserved before any pixel line is read
const MAX_PREALLOCATED_PIXELS: usize = 1 << 16;

/// An instance of a plain text PPM decoder
///
/// The decoder reads the layout described in the crate docs,
/// one line at a time from any buffered reader.
pub struct PpmDecoder<R: BufRead> {
    lines:   LineReader<R>,
    header:  Option<PpmHeader>,
    options: DecoderOptions
}

impl<R: BufRead> PpmDecoder<R> {
    /// Create a new ppm decoder with default options
    ///
    /// # Example
    /// ```
    /// use port_ppm::PpmDecoder;
    /// let mut decoder = PpmDecoder::new(&b"NOT VALID PPM"[..]);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(reader: R) -> PpmDecoder<R> {
        PpmDecoder::new_with_options(DecoderOptions::default(), reader)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use port_core::options::DecoderOptions;
    /// use port_ppm::PpmDecoder;
    ///
    /// let options = DecoderOptions::default().set_strict_mode(true);
    /// let mut decoder = PpmDecoder::new_with_options(options, &b"P6\n1 1\n255\n"[..]);
    ///
    /// assert!(decoder.read_headers().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, reader: R) -> PpmDecoder<R> {
        PpmDecoder {
            lines: LineReader::new(reader),
            header: None,
            options
        }
    }

    /// Read the three header lines and store them in internal state
    ///
    /// Calling this more than once is a no-op.
    pub fn read_headers(&mut self) -> Result<(), PpmDecodeErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let strict = self.options.get_strict_mode();

        let magic = match self.lines.next_line()? {
            Some((_, text)) => text.trim().to_string(),
            None => {
                return Err(PpmDecodeErrors::MissingLine {
                    line:     1,
                    expected: "magic number"
                })
            }
        };
        if strict && magic != "P3" {
            return Err(PpmDecodeErrors::InvalidMagic(magic));
        }

        let (width, height) = match self.lines.next_line()? {
            Some((line, text)) => parse_dimensions(&text, line, &self.options)?,
            None => {
                return Err(PpmDecodeErrors::MissingLine {
                    line:     2,
                    expected: "width and height"
                })
            }
        };
        info!("Width: {}, height: {}", width, height);

        let max_value = match self.lines.next_line()? {
            Some((line, text)) => match parse_max_value(&text) {
                Some(value) => value,
                None if strict => {
                    return Err(PpmDecodeErrors::InvalidMaxValue {
                        line,
                        found: text.trim().to_string()
                    });
                }
                None => {
                    warn!(
                        "Line {line}: could not read maximum color value {:?}, assuming {DEFAULT_MAX_VALUE}",
                        text.trim()
                    );
                    DEFAULT_MAX_VALUE
                }
            },
            None => {
                return Err(PpmDecodeErrors::MissingLine {
                    line:     3,
                    expected: "maximum color value"
                })
            }
        };
        info!("Max value: {}", max_value);

        self.header = Some(PpmHeader {
            magic,
            width,
            height,
            max_value
        });
        Ok(())
    }

    /// Return the header or none if headers
    /// aren't decoded
    pub const fn get_header(&self) -> Option<&PpmHeader> {
        self.header.as_ref()
    }

    /// Return image dimensions or none if headers aren't decoded
    pub fn get_dimensions(&self) -> Option<(usize, usize)> {
        self.header.as_ref().map(|h| (h.width, h.height))
    }

    /// Return the declared maximum color value or none
    /// if headers aren't decoded
    pub fn get_max_value(&self) -> Option<u32> {
        self.header.as_ref().map(|h| h.max_value)
    }

    /// Decode the whole image
    ///
    /// Reads exactly `height` rows of `width` pixels, one pixel per line,
    /// after the headers.
    pub fn decode(&mut self) -> Result<PpmImage, PpmDecodeErrors> {
        self.read_headers()?;

        let Some(header) = &self.header else {
            return Err(PpmDecodeErrors::MissingLine {
                line:     1,
                expected: "magic number"
            });
        };
        let strict = self.options.get_strict_mode();
        let pixels = read_pixels(&mut self.lines, header, strict)?;

        Ok(PpmImage::new(header, pixels))
    }
}

/// Read `width*height` pixel lines, then check what follows them
fn read_pixels<R: BufRead>(
    lines: &mut LineReader<R>, header: &PpmHeader, strict: bool
) -> Result<Vec<Rgb>, PpmDecodeErrors> {
    let ceiling = header.max_value.min(u32::from(u8::MAX));

    let expected = header.width.checked_mul(header.height).ok_or(
        PpmDecodeErrors::LargeDimensions(usize::MAX / header.height.max(1), header.width)
    )?;

    // capacity never follows the header alone
    let mut pixels = Vec::with_capacity(expected.min(MAX_PREALLOCATED_PIXELS));

    while pixels.len() < expected {
        let (line, text) = match lines.next_line()? {
            Some(value) => value,
            None => {
                return Err(PpmDecodeErrors::TruncatedPixels {
                    expected,
                    found: pixels.len()
                })
            }
        };
        pixels.push(parse_pixel(&text, line, ceiling, strict)?);
    }
    trace!("Read {} pixels", pixels.len());

    if strict {
        while let Some((line, text)) = lines.next_line()? {
            if !text.trim().is_empty() {
                return Err(PpmDecodeErrors::TrailingData { line });
            }
        }
    }
    Ok(pixels)
}

/// Hands out one line at a time with line endings removed
struct LineReader<R: BufRead> {
    reader:      R,
    buffer:      Vec<u8>,
    line_number: usize
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> LineReader<R> {
        LineReader {
            reader,
            buffer: Vec::with_capacity(64),
            line_number: 0
        }
    }

    /// Return the next line and its 1-based number, or `None` at eof
    ///
    /// Bytes that aren't valid UTF-8 are replaced, so they
    /// later fail integer parsing instead of the read.
    fn next_line(&mut self) -> Result<Option<(usize, Cow<'_, str>)>, PpmDecodeErrors> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut end = self.buffer.len();

        while end > 0 && matches!(self.buffer[end - 1], b'\n' | b'\r') {
            end -= 1;
        }
        Ok(Some((
            self.line_number,
            String::from_utf8_lossy(&self.buffer[..end])
        )))
    }
}

fn parse_integer(token: &str, line: usize) -> Result<i64, PpmDecodeErrors> {
    token
        .parse::<i64>()
        .map_err(|_| PpmDecodeErrors::InvalidInteger {
            line,
            token: token.to_string()
        })
}

fn parse_dimensions(
    text: &str, line: usize, options: &DecoderOptions
) -> Result<(usize, usize), PpmDecodeErrors> {
    let malformed = || PpmDecodeErrors::MalformedDimensions {
        line,
        found: text.to_string()
    };
    let mut tokens = text.split_ascii_whitespace();

    let (width, height) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(w), Some(h), None) => (parse_integer(w, line)?, parse_integer(h, line)?),
        _ => return Err(malformed())
    };
    if width < 0 || height < 0 {
        return Err(malformed());
    }
    // doesn't fit in usize, definitely above the limits
    let width = usize::try_from(width).unwrap_or(usize::MAX);
    let height = usize::try_from(height).unwrap_or(usize::MAX);

    if width > options.get_max_width() {
        return Err(PpmDecodeErrors::LargeDimensions(
            options.get_max_width(),
            width
        ));
    }
    if height > options.get_max_height() {
        return Err(PpmDecodeErrors::LargeDimensions(
            options.get_max_height(),
            height
        ));
    }
    Ok((width, height))
}

/// A single integer in `1..=65535`
fn parse_max_value(text: &str) -> Option<u32> {
    let mut tokens = text.split_ascii_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token
            .parse::<u32>()
            .ok()
            .filter(|v| (1..=u32::from(u16::MAX)).contains(v)),
        _ => None
    }
}

fn parse_pixel(
    text: &str, line: usize, ceiling: u32, strict: bool
) -> Result<Rgb, PpmDecodeErrors> {
    let mut tokens = text.split_ascii_whitespace();
    let mut sample = [0_u8; RGB_COMPONENTS];

    for (found, channel) in sample.iter_mut().enumerate() {
        let token = tokens.next().ok_or(PpmDecodeErrors::WrongTokenCount {
            line,
            expected: RGB_COMPONENTS,
            found
        })?;
        let value = parse_integer(token, line)?;

        *channel = fit_sample(value, line, ceiling, strict)?;
    }
    let extra = tokens.count();

    if extra != 0 {
        return Err(PpmDecodeErrors::WrongTokenCount {
            line,
            expected: RGB_COMPONENTS,
            found: RGB_COMPONENTS + extra
        });
    }
    Ok(Rgb::from(sample))
}

/// Reject (strict) or clamp a sample into `[0, ceiling]`
fn fit_sample(
    value: i64, line: usize, ceiling: u32, strict: bool
) -> Result<u8, PpmDecodeErrors> {
    let max = i64::from(ceiling);

    if (0..=max).contains(&value) {
        // ceiling is at most 255
        return Ok(value as u8);
    }
    if strict {
        return Err(PpmDecodeErrors::ChannelOutOfRange {
            line,
            value,
            max: ceiling
        });
    }
    let clamped = value.clamp(0, max);
    warn!("Line {line}: sample {value} outside of 0..={max}, clamping to {clamped}");

    Ok(clamped as u8)
}
