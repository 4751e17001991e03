//! Colour type and 5-bit channel scaling.

use std::fmt;

use serde::Serialize;

/// A 5-bit-per-channel RGB triple as stored in a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Channels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Channels {
    /// Largest value a 5-bit channel can hold.
    pub const MAX: u8 = 0x1f;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Scale a 5-bit channel to 8 bits by shifting, giving 0..=248 in steps of 8.
pub const fn scale_channel(v: u8) -> u8 {
    (v & Channels::MAX) << 3
}

/// An RGBA colour value (straight, non-premultiplied alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a fill colour from a code's 5-bit channels and the caller's alpha.
    pub const fn from_channels(channels: Channels, alpha: u8) -> Self {
        Self::new(
            scale_channel(channels.r),
            scale_channel(channels.g),
            scale_channel(channels.b),
            alpha,
        )
    }

    /// Components in `[r, g, b, a]` order.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}
