//! Packed 15-bit colour
//!
//! Cell layout: `[unused:1][blue:5][green:5][red:5]`, each channel `0..=31`.
//! This is the raw layout of `embedded_graphics`' `Bgr555`, so the two
//! convert without shuffling bits.
use embedded_graphics_core::pixelcolor::{raw::RawU16, Bgr555, IntoStorage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(u16);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(31, 31, 31);
    pub const RED: Color = Color::rgb(31, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 31, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 31);
    pub const GOLD: Color = Color::rgb(31, 25, 0);
    pub const DARK_GRAY: Color = Color::rgb(10, 10, 10);
    pub const GUIDE_GRAY: Color = Color::rgb(5, 5, 5);

    /// Channels above 31 are masked to their low five bits.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r & 0x1F) as u16;
        let g = (g & 0x1F) as u16;
        let b = (b & 0x1F) as u16;
        Self(r | (g << 5) | (b << 10))
    }

    /// The unused top bit is dropped.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw & 0x7FFF)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x1F) as u8
    }

    pub const fn b(self) -> u8 {
        ((self.0 >> 10) & 0x1F) as u8
    }

    /// The colour in both halves of a 32-bit word, for paired stores.
    pub const fn doubled(self) -> u32 {
        self.0 as u32 | ((self.0 as u32) << 16)
    }
}

impl From<Bgr555> for Color {
    fn from(c: Bgr555) -> Self {
        Color::from_raw(c.into_storage())
    }
}

impl From<Color> for Bgr555 {
    fn from(c: Color) -> Self {
        Bgr555::from(RawU16::new(c.raw()))
    }
}

impl From<Color> for u16 {
    fn from(c: Color) -> Self {
        c.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_core::pixelcolor::RgbColor;

    #[test]
    fn red_occupies_low_bits() {
        assert_eq!(Color::RED.raw(), 0x001F);
        assert_eq!(Color::GREEN.raw(), 0x03E0);
        assert_eq!(Color::BLUE.raw(), 0x7C00);
        assert_eq!(Color::WHITE.raw(), 0x7FFF);
    }

    #[test]
    fn channels_round_trip() {
        let gold = Color::GOLD;
        assert_eq!((gold.r(), gold.g(), gold.b()), (31, 25, 0));
    }

    #[test]
    fn matches_embedded_graphics_bgr555() {
        let eg = Bgr555::new(31, 25, 0);
        assert_eq!(Color::from(eg), Color::GOLD);
        let blue = Bgr555::from(Color::BLUE);
        assert_eq!((blue.r(), blue.g(), blue.b()), (0, 0, 31));
    }

    #[test]
    fn doubled_packs_both_halves() {
        assert_eq!(Color::RED.doubled(), 0x001F_001F);
    }
}
