//! # bc1_encode
//!
//! CPU based BC1 (DXT1) texture block encoder.
//!
//! Every 4x4 pixel tile of an RGBA8 image is reduced to an 8 byte block holding two
//! RGB565 endpoint colors and sixteen 2-bit palette indices. Endpoints come from the
//! per-tile color bounding box, pixels are assigned to the nearest palette entry using
//! a branchless selector, and tiles whose alpha never exceeds [`ALPHA_CUTOFF`] are
//! encoded in punch-through mode with index 3 marking transparent pixels.
//!
//! Blocks are independent, so the image can be encoded on the calling thread or with
//! one rayon task per block row. Both produce byte-identical output.
//!
//! ## Example
//! ```
//! use bc1_encode::{blocks_byte_size, encode, EncodeMode};
//!
//! let width = 64;
//! let height = 64;
//! let rgba_data = vec![255u8; (width * height * 4) as usize];
//!
//! let mut blocks_buffer = vec![0u8; blocks_byte_size(width, height)];
//! encode(&mut blocks_buffer, &rgba_data, width, height, EncodeMode::Parallel).unwrap();
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod encode;
mod error;
mod statistics;

pub use encode::{
    classify::{classify_pixel, classify_tile, select_nearest},
    compress_block,
    endpoints::{BoundingBox, EndpointExtractor, EndpointPair},
    encode,
    pack::Bc1Block,
    palette::{BlockAlphaMode, Palette},
    quantize::{Rgb565, Rgb8},
    tile::{Rgba8, Tile},
    Bc1Encoder, EncodeMode,
};
pub use error::EncodeError;
pub use statistics::{AlphaStatistics, BlockAlphaClass, BlockObserver, BlockReport};

/// Alpha values at or below this threshold are treated as transparent.
pub const ALPHA_CUTOFF: u8 = 128;

/// Byte size of one encoded BC1 block.
pub const BLOCK_BYTE_SIZE: usize = 8;

/// Edge length of the square pixel tile a block covers.
pub const BLOCK_DIMENSION: u32 = 4;

/// Returns the number of block columns needed for the given width.
pub const fn blocks_wide(width: u32) -> u32 {
    width.div_ceil(BLOCK_DIMENSION)
}

/// Returns the number of block rows needed for the given height.
pub const fn blocks_high(height: u32) -> u32 {
    height.div_ceil(BLOCK_DIMENSION)
}

/// Returns the bytes per row of blocks for the given width.
pub const fn bytes_per_row(width: u32) -> usize {
    blocks_wide(width) as usize * BLOCK_BYTE_SIZE
}

/// Returns the byte size required for storing compressed blocks for the given dimensions.
///
/// Width and height are rounded up to the nearest multiple of 4. The size never depends
/// on the image content.
pub const fn blocks_byte_size(width: u32, height: u32) -> usize {
    let block_width = (width as usize + 3) / 4;
    let block_height = (height as usize + 3) / 4;
    block_width * block_height * BLOCK_BYTE_SIZE
}
