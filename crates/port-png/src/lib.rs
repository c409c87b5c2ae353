//! A png writer for [`RasterImage`](port_core::raster::RasterImage)s
//!
//! Output is always 8-bit RGB, without alpha and without any
//! color-space chunks. The container itself is produced by the
//! [png](https://crates.io/crates/png) crate.
//!
//! # Usage
//!
//! ```no_run
//! use port_core::options::EncoderOptions;
//! use port_core::raster::RasterImage;
//! use port_png::PngEncoder;
//!
//! let raster = RasterImage::new(16, 16);
//!
//! PngEncoder::new(&raster, EncoderOptions::default())
//!     .encode_to_path("black.png")
//!     .unwrap();
//! ```
//!
//! A matching reader, [`decode_png`], reads such files back, it is used to
//! confirm that a written file reproduces its source pixels.
pub use decoder::decode_png;
pub use encoder::PngEncoder;
pub use port_core;

mod decoder;
mod encoder;
pub mod errors;
