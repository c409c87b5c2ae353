/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides the pieces shared by the decoder
//! and encoder crates under the `ppm-port` umbrella
//!
//! It currently contains
//!
//! - An 8-bit RGB pixel record
//! - A flat, row-major raster image holding those pixels
//! - Image decoder and encoder options

pub mod options;
pub mod pixel;
pub mod raster;
