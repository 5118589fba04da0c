//! CPU based BC1 encoding.

pub mod classify;
pub mod endpoints;
pub mod pack;
pub mod palette;
pub mod quantize;
pub mod tile;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::debug;

use self::{
    classify::classify_tile,
    endpoints::{BoundingBox, EndpointExtractor, EndpointPair},
    pack::Bc1Block,
    palette::{BlockAlphaMode, Palette},
    tile::{Rgba8, Tile},
};
use crate::{
    blocks_high, blocks_wide, bytes_per_row, BlockAlphaClass, BlockObserver, BlockReport,
    EncodeError, BLOCK_BYTE_SIZE,
};

/// Execution strategy of an encode call. It never changes the produced bytes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EncodeMode {
    /// Every block is encoded on the calling thread.
    Sequential,
    /// One task per block row on the rayon thread pool.
    ///
    /// Without the `rayon` feature this runs on the calling thread as well.
    #[default]
    Parallel,
}

/// Encodes a single tile with the given endpoints.
pub fn compress_block(tile: &Tile, endpoints: &EndpointPair) -> Bc1Block {
    let palette = Palette::build(endpoints);

    Bc1Block {
        color0: palette.color0,
        color1: palette.color1,
        indices: classify_tile(tile, &palette),
    }
}

/// Compresses raw RGBA8 data into BC1 blocks.
///
/// # Data Layout Requirements
/// The input data must be tightly packed RGBA8 in row-major order, so `rgba_data` needs at
/// least `width * height * 4` bytes. Images whose size is not a multiple of 4 are
/// supported; the uncovered part of the edge tiles is zero filled.
///
/// # Buffer Requirements
/// The destination buffer must hold at least [`blocks_byte_size()`](crate::blocks_byte_size)
/// bytes. Block `(x, y)` is written at byte offset `(y * blocks_wide + x) * 8`, bytes past
/// the required size are left untouched.
///
/// # Errors
/// Returns an [`EncodeError`] before writing anything if a dimension is zero or one of the
/// buffers is too small.
///
/// # Example
/// ```
/// use bc1_encode::{blocks_byte_size, encode, EncodeMode};
///
/// let rgba_data = [255, 0, 0, 255].repeat(16);
/// let mut blocks_buffer = vec![0u8; blocks_byte_size(4, 4)];
///
/// encode(&mut blocks_buffer, &rgba_data, 4, 4, EncodeMode::Sequential).unwrap();
/// assert_eq!(blocks_buffer, [0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00]);
/// ```
pub fn encode(
    blocks_buffer: &mut [u8],
    rgba_data: &[u8],
    width: u32,
    height: u32,
    mode: EncodeMode,
) -> Result<(), EncodeError> {
    Bc1Encoder::new(mode).encode(blocks_buffer, rgba_data, width, height)
}

/// Configurable BC1 encoder.
///
/// Holds the execution mode, the endpoint extractor and an optional observer that receives
/// a [`BlockReport`] for every block. Neither the mode nor the observer affects the output.
pub struct Bc1Encoder<'a, E = BoundingBox> {
    mode: EncodeMode,
    extractor: E,
    observer: Option<&'a dyn BlockObserver>,
}

impl Default for Bc1Encoder<'_, BoundingBox> {
    fn default() -> Self {
        Self::new(EncodeMode::default())
    }
}

impl<'a> Bc1Encoder<'a, BoundingBox> {
    pub fn new(mode: EncodeMode) -> Self {
        Self {
            mode,
            extractor: BoundingBox,
            observer: None,
        }
    }
}

impl<'a, E: EndpointExtractor> Bc1Encoder<'a, E> {
    /// Replaces the endpoint extractor.
    pub fn with_extractor<F: EndpointExtractor>(self, extractor: F) -> Bc1Encoder<'a, F> {
        Bc1Encoder {
            mode: self.mode,
            extractor,
            observer: self.observer,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn BlockObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn mode(&self) -> EncodeMode {
        self.mode
    }

    /// Encodes the image into `blocks_buffer`. See [`encode()`] for the buffer contract.
    pub fn encode(
        &self,
        blocks_buffer: &mut [u8],
        rgba_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(), EncodeError> {
        let (source_size, output_size) =
            validate(blocks_buffer.len(), rgba_data.len(), width, height)?;

        let pixels: &[Rgba8] = bytemuck::cast_slice(&rgba_data[..source_size]);
        let blocks_buffer = &mut blocks_buffer[..output_size];
        let row_size = bytes_per_row(width);

        debug!(
            width,
            height,
            blocks_wide = blocks_wide(width),
            blocks_high = blocks_high(height),
            mode = ?self.mode,
            "encoding BC1 blocks"
        );

        let width = width as usize;
        let height = height as usize;

        match self.mode {
            EncodeMode::Sequential => {
                blocks_buffer
                    .chunks_exact_mut(row_size)
                    .enumerate()
                    .for_each(|(yy, row)| self.compress_row(pixels, width, height, yy, row));
            }
            #[cfg(feature = "rayon")]
            EncodeMode::Parallel => {
                blocks_buffer
                    .par_chunks_exact_mut(row_size)
                    .enumerate()
                    .for_each(|(yy, row)| self.compress_row(pixels, width, height, yy, row));
            }
            #[cfg(not(feature = "rayon"))]
            EncodeMode::Parallel => {
                blocks_buffer
                    .chunks_exact_mut(row_size)
                    .enumerate()
                    .for_each(|(yy, row)| self.compress_row(pixels, width, height, yy, row));
            }
        }

        debug!(bytes = output_size, "finished BC1 encoding");

        Ok(())
    }

    fn compress_row(
        &self,
        pixels: &[Rgba8],
        width: usize,
        height: usize,
        yy: usize,
        row: &mut [u8],
    ) {
        for (xx, output_block) in row.chunks_exact_mut(BLOCK_BYTE_SIZE).enumerate() {
            let tile = Tile::load(pixels, width, height, xx, yy);
            let endpoints = self.extractor.extract(&tile);

            compress_block(&tile, &endpoints).write_to(output_block);

            if let Some(observer) = self.observer {
                let alpha_mode = BlockAlphaMode::select(&endpoints);
                observer.block_encoded(&BlockReport {
                    x: xx,
                    y: yy,
                    endpoints,
                    alpha_mode,
                    alpha_class: BlockAlphaClass::classify(&endpoints, alpha_mode),
                });
            }
        }
    }
}

/// Checks the caller contract and returns the used source and output sizes in bytes.
fn validate(
    output_len: usize,
    source_len: usize,
    width: u32,
    height: u32,
) -> Result<(usize, usize), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::ZeroDimension { width, height });
    }

    let overflow = || EncodeError::SizeOverflow { width, height };

    let source_size = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(overflow)?;
    let output_size = (blocks_wide(width) as usize)
        .checked_mul(blocks_high(height) as usize)
        .and_then(|blocks| blocks.checked_mul(BLOCK_BYTE_SIZE))
        .ok_or_else(overflow)?;

    if source_len < source_size {
        return Err(EncodeError::SourceTooSmall {
            needed: source_size,
            actual: source_len,
        });
    }

    if output_len < output_size {
        return Err(EncodeError::OutputBufferTooSmall {
            needed: output_size,
            actual: output_len,
        });
    }

    Ok((source_size, output_size))
}
