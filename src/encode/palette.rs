use super::{
    endpoints::EndpointPair,
    quantize::{Rgb565, Rgb8},
};
use crate::ALPHA_CUTOFF;

/// Color mode a block is encoded in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlockAlphaMode {
    /// Four color ramp between the endpoints.
    Opaque,
    /// Three colors plus a transparent entry at index 3.
    PunchThrough,
}

impl BlockAlphaMode {
    /// Punch-through is chosen when even the brightest alpha of the tile is transparent.
    pub const fn select(endpoints: &EndpointPair) -> Self {
        if endpoints.color_max.a <= ALPHA_CUTOFF {
            BlockAlphaMode::PunchThrough
        } else {
            BlockAlphaMode::Opaque
        }
    }
}

/// The decode palette of a block together with its packed endpoints.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    pub color0: Rgb565,
    pub color1: Rgb565,
    pub colors: [Rgb8; 4],
    pub mode: BlockAlphaMode,
}

impl Palette {
    /// Builds the palette for the given endpoints.
    ///
    /// `color0` always comes from the maximum and `color1` from the minimum endpoint, in
    /// both modes.
    pub fn build(endpoints: &EndpointPair) -> Self {
        let mode = BlockAlphaMode::select(endpoints);

        let c0 = Rgb565::round(endpoints.color_max);
        let c1 = Rgb565::round(endpoints.color_min);

        let colors = match mode {
            BlockAlphaMode::Opaque => [
                c0,
                c1,
                interpolate(c0, c1, 2, 1, 3),
                interpolate(c0, c1, 1, 2, 3),
            ],
            BlockAlphaMode::PunchThrough => {
                [c0, c1, interpolate(c0, c1, 1, 1, 2), Rgb8::new(0, 0, 0)]
            }
        };

        Self {
            color0: Rgb565::quantize(endpoints.color_max),
            color1: Rgb565::quantize(endpoints.color_min),
            colors,
            mode,
        }
    }
}

#[inline(always)]
fn interpolate(c0: Rgb8, c1: Rgb8, w0: u32, w1: u32, den: u32) -> Rgb8 {
    let channel = |a: u8, b: u8| ((w0 * a as u32 + w1 * b as u32) / den) as u8;
    Rgb8 {
        r: channel(c0.r, c1.r),
        g: channel(c0.g, c1.g),
        b: channel(c0.b, c1.b),
    }
}
