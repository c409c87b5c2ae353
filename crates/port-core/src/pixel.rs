/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single 8-bit RGB sample
use core::fmt::{Display, Formatter};

use bytemuck::{Pod, Zeroable};

/// Number of channels in an [`Rgb`] pixel
pub const RGB_COMPONENTS: usize = 3;

/// An 8-bit RGB pixel.
///
/// The layout is `#[repr(C)]` without padding, so a slice of
/// pixels can be viewed as interleaved `r,g,b` bytes via [`bytemuck`]
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    pub const fn to_array(self) -> [u8; RGB_COMPONENTS] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; RGB_COMPONENTS]> for Rgb {
    fn from(value: [u8; RGB_COMPONENTS]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; RGB_COMPONENTS] {
    fn from(value: Rgb) -> Self {
        value.to_array()
    }
}

impl Display for Rgb {
    // the textual ppm sample layout
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

#[test]
fn test_pixels_alias_to_bytes() {
    let pixels = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
    let bytes: &[u8] = bytemuck::cast_slice(&pixels);

    assert_eq!(bytes, &[1, 2, 3, 4, 5, 6]);
    assert_eq!(core::mem::size_of::<Rgb>(), RGB_COMPONENTS);
}
