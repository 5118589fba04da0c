use bytemuck::{Pod, Zeroable};

use crate::BLOCK_DIMENSION;

/// A single RGBA8 pixel as stored in the source image.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A 4x4 tile of pixels in row-major order, loaded from one block of the source image.
///
/// Slots outside the valid region of an edge tile stay zeroed. They are still classified
/// and packed, but decoders that respect the image size never sample them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Tile {
    pixels: [Rgba8; 16],
    width: usize,
    height: usize,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            pixels: [Rgba8::zeroed(); 16],
            width: 4,
            height: 4,
        }
    }
}

impl Tile {
    /// Builds a full 4x4 tile from 16 row-major pixels.
    pub const fn from_pixels(pixels: [Rgba8; 16]) -> Self {
        Self {
            pixels,
            width: 4,
            height: 4,
        }
    }

    /// Loads the tile of block `(xx, yy)`, clamping at the right and bottom image edges.
    ///
    /// `pixels` must hold at least `width * height` pixels in row-major order. Only pixels
    /// inside `[0, width) x [0, height)` are read.
    pub fn load(pixels: &[Rgba8], width: usize, height: usize, xx: usize, yy: usize) -> Self {
        let dimension = BLOCK_DIMENSION as usize;
        let pixel_x = xx * dimension;
        let pixel_y = yy * dimension;

        let mut tile = Self {
            pixels: [Rgba8::zeroed(); 16],
            width: dimension.min(width - pixel_x),
            height: dimension.min(height - pixel_y),
        };

        for y in 0..tile.height {
            let offset = (pixel_y + y) * width + pixel_x;
            let row = &pixels[offset..offset + tile.width];
            tile.pixels[y * 4..y * 4 + tile.width].copy_from_slice(row);
        }

        tile
    }

    /// All 16 slots, including the zeroed ones outside the valid region.
    #[inline(always)]
    pub fn pixels(&self) -> &[Rgba8; 16] {
        &self.pixels
    }

    /// Number of valid columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of valid rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterates the pixels inside the valid region.
    pub fn valid_pixels(&self) -> impl Iterator<Item = &Rgba8> + '_ {
        self.pixels
            .chunks_exact(4)
            .take(self.height)
            .flat_map(move |row| &row[..self.width])
    }
}
