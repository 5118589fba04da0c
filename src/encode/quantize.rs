use super::tile::Rgba8;

const C565_5_MASK: u8 = 0xF8;
const C565_6_MASK: u8 = 0xFC;

/// An RGB color with 8 bits per channel, used for palette entries.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A packed 5-6-5 color, red in the most significant bits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    const RED_SHIFT: u16 = 11;
    const GREEN_SHIFT: u16 = 5;
    const RED_MASK: u16 = 0b11111_000000_00000;
    const GREEN_MASK: u16 = 0b00000_111111_00000;
    const BLUE_MASK: u16 = 0b00000_000000_11111;

    /// Quantizes an 8-bit color to 5-6-5 precision.
    ///
    /// The alpha channel is ignored.
    pub const fn quantize(color: Rgba8) -> Self {
        let r5 = (color.r >> 3) as u16;
        let g6 = (color.g >> 2) as u16;
        let b5 = (color.b >> 3) as u16;
        Self((r5 << Self::RED_SHIFT) | (g6 << Self::GREEN_SHIFT) | b5)
    }

    /// Rounds an 8-bit color to the value it decodes to after quantization.
    ///
    /// The low bits are refilled with the high bits of the channel, which is exactly the
    /// 8-bit expansion of [`Rgb565::quantize`].
    pub const fn round(color: Rgba8) -> Rgb8 {
        Rgb8 {
            r: (color.r & C565_5_MASK) | (color.r >> 5),
            g: (color.g & C565_6_MASK) | (color.g >> 6),
            b: (color.b & C565_5_MASK) | (color.b >> 5),
        }
    }

    /// Expands the packed color back to 8 bits per channel.
    pub const fn to_rgb8(self) -> Rgb8 {
        let r5 = ((self.0 & Self::RED_MASK) >> Self::RED_SHIFT) as u8;
        let g6 = ((self.0 & Self::GREEN_MASK) >> Self::GREEN_SHIFT) as u8;
        let b5 = (self.0 & Self::BLUE_MASK) as u8;
        Rgb8 {
            r: (r5 << 3) | (r5 >> 2),
            g: (g6 << 2) | (g6 >> 4),
            b: (b5 << 3) | (b5 >> 2),
        }
    }
}
