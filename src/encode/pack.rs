use super::quantize::Rgb565;
use crate::BLOCK_BYTE_SIZE;

/// One encoded BC1 block.
///
/// Serialized as `color0: u16 LE | color1: u16 LE | indices: u32 LE`, with the index of
/// pixel `i` (row-major) in bits `2 * i` and `2 * i + 1`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Bc1Block {
    pub color0: Rgb565,
    pub color1: Rgb565,
    pub indices: u32,
}

impl Bc1Block {
    /// Returns the 2-bit index of pixel `i`.
    #[inline(always)]
    pub const fn index(&self, i: usize) -> u32 {
        (self.indices >> (i * 2)) & 0b11
    }

    pub fn to_bytes(&self) -> [u8; BLOCK_BYTE_SIZE] {
        let mut bytes = [0; BLOCK_BYTE_SIZE];
        self.write_to(&mut bytes);
        bytes
    }

    /// Reads the fields back from their wire layout.
    pub fn from_bytes(bytes: &[u8; BLOCK_BYTE_SIZE]) -> Self {
        Self {
            color0: Rgb565(u16::from_le_bytes([bytes[0], bytes[1]])),
            color1: Rgb565(u16::from_le_bytes([bytes[2], bytes[3]])),
            indices: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// Writes the block into the first 8 bytes of `output`.
    ///
    /// Panics if `output` is shorter than 8 bytes.
    #[inline(always)]
    pub fn write_to(&self, output: &mut [u8]) {
        output[0..2].copy_from_slice(&self.color0.0.to_le_bytes());
        output[2..4].copy_from_slice(&self.color1.0.to_le_bytes());
        output[4..8].copy_from_slice(&self.indices.to_le_bytes());
    }
}
