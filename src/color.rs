use std::fmt::Debug;

use image::{Rgb, Rgba};

/// A color in whatever space the host works in.
///
/// Palettes only ever talk to their colors through 8-bit RGB, so anything
/// that can convert to and from it can be stored in a [`crate::Palette`].
pub trait ColorValue: Clone + PartialEq + Debug {
    fn from_rgb8(r: u8, g: u8, b: u8) -> Self;
    fn to_rgb8(&self) -> [u8; 3];
}

impl ColorValue for Rgb<u8> {
    fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    fn to_rgb8(&self) -> [u8; 3] {
        self.0
    }
}

/// Palette formats carry no alpha, colors come in opaque
impl ColorValue for Rgba<u8> {
    fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, u8::MAX])
    }

    fn to_rgb8(&self) -> [u8; 3] {
        let [r, g, b, _] = self.0;
        [r, g, b]
    }
}
