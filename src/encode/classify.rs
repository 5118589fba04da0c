use super::{
    palette::{BlockAlphaMode, Palette},
    quantize::Rgb8,
    tile::{Rgba8, Tile},
};
use crate::ALPHA_CUTOFF;

/// Index reserved for transparent pixels in punch-through blocks.
const TRANSPARENT_INDEX: u32 = 3;

/// Picks the palette index with the smallest distance without branching.
///
/// The comparisons assume the palette lies on a ramp ordered `0, 2, 3, 1`, which holds
/// for both palette layouts this encoder builds. Ties and distance sets that are not
/// unimodal along the ramp resolve through the same five comparisons, so the result can
/// differ from a plain argmin there.
#[inline(always)]
pub const fn select_nearest(d: [u32; 4]) -> u32 {
    let b0 = (d[0] > d[3]) as u32;
    let b1 = (d[1] > d[2]) as u32;
    let b2 = (d[0] > d[2]) as u32;
    let b3 = (d[1] > d[3]) as u32;
    let b4 = (d[2] > d[3]) as u32;

    let x0 = b1 & b2;
    let x1 = b0 & b3;
    let x2 = b0 & b4;

    x2 | ((x0 | x1) << 1)
}

#[inline(always)]
fn manhattan(pixel: Rgba8, color: Rgb8) -> u32 {
    pixel.r.abs_diff(color.r) as u32
        + pixel.g.abs_diff(color.g) as u32
        + pixel.b.abs_diff(color.b) as u32
}

/// Returns the 2-bit index for one pixel.
#[inline(always)]
pub fn classify_pixel(pixel: Rgba8, palette: &Palette) -> u32 {
    if palette.mode == BlockAlphaMode::PunchThrough && pixel.a <= ALPHA_CUTOFF {
        return TRANSPARENT_INDEX;
    }

    let colors = &palette.colors;
    select_nearest([
        manhattan(pixel, colors[0]),
        manhattan(pixel, colors[1]),
        manhattan(pixel, colors[2]),
        manhattan(pixel, colors[3]),
    ])
}

/// Classifies all 16 slots of the tile and packs the indices, slot `i` at bit `2 * i`.
pub fn classify_tile(tile: &Tile, palette: &Palette) -> u32 {
    let mut indices = 0u32;

    for (i, pixel) in tile.pixels().iter().enumerate().rev() {
        indices |= classify_pixel(*pixel, palette) << (i << 1);
    }

    indices
}
