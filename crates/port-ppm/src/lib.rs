/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decoder and encoder for plain text PPM images in a strict,
//! line oriented layout
//!
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════╗
//! ║ Line   │ Description                                          ║
//! ╠════════╪══════════════════════════════════════════════════════╣
//! ║ 1      │ Magic number, `P3`                                   ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 2      │ Width and height, two whitespace separated integers  ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 3      │ Maximum color value, a single integer                ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 4..    │ One pixel per line, `R G B`, row-major               ║
//! ╚════════╧══════════════════════════════════════════════════════╝
//! ```
//!
//! Samples are taken as-is, the maximum color value never scales them.
//! A pixel split across lines, or more than one pixel on a line, is an error.
//!
//! # Example
//! ```
//! use port_ppm::PpmDecoder;
//!
//! let data = b"P3\n2 1\n255\n255 0 0\n0 255 0\n";
//! let image = PpmDecoder::new(&data[..]).decode().unwrap();
//!
//! assert_eq!((image.width(), image.height()), (2, 1));
//! ```
pub use decoder::PpmDecoder;
pub use encoder::PpmEncoder;
pub use errors::{PpmDecodeErrors, PpmEncodeErrors};
pub use image::{PpmHeader, PpmImage};
pub use port_core;

mod decoder;
mod encoder;
mod errors;
mod image;
