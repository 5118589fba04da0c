#![allow(dead_code)]

pub mod metrics;

/// A tightly packed RGBA8 test image.
pub struct TestImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl TestImage {
    pub fn from_fn(width: u32, height: u32, pixel: impl Fn(u32, u32) -> [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&pixel(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn uniform(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self::from_fn(width, height, |_, _| color)
    }

    /// Smooth opaque gradient over all three color channels.
    pub fn gradient(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |x, y| {
            [(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8, 255]
        })
    }

    /// Deterministic noise with a mix of opaque, translucent and transparent pixels.
    pub fn noise(width: u32, height: u32, seed: u32) -> Self {
        let state = seed.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
        Self::from_fn(width, height, move |x, y| {
            let mut value = state ^ (x.wrapping_mul(0x9E37_79B9)) ^ (y.wrapping_mul(0x85EB_CA6B));
            value ^= value >> 15;
            value = value.wrapping_mul(0x2C1B_3C6D);
            value ^= value >> 12;
            let bytes = value.to_le_bytes();
            // Rows of four alternate between alpha styles so every block mode shows up.
            let alpha = match (y / 4) % 3 {
                0 => 255,
                1 => bytes[3] & 0x7F,
                _ => bytes[3],
            };
            [bytes[0], bytes[1], bytes[2], alpha]
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y * self.width + x) as usize * 4;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.data[offset..offset + 4]);
        pixel
    }
}

fn expand_565(color: u16) -> [u8; 3] {
    let r5 = ((color >> 11) & 0x1F) as u8;
    let g6 = ((color >> 5) & 0x3F) as u8;
    let b5 = (color & 0x1F) as u8;
    [(r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2)]
}

/// Reference BC1 decoder used to measure what a GPU would sample from the encoded blocks.
pub fn decode_blocks(blocks: &[u8], width: u32, height: u32) -> Vec<u8> {
    let blocks_wide = width.div_ceil(4) as usize;
    let mut output = vec![0u8; width as usize * height as usize * 4];

    for (index, block) in blocks.chunks_exact(8).enumerate() {
        let bx = index % blocks_wide;
        let by = index / blocks_wide;

        let color0 = u16::from_le_bytes([block[0], block[1]]);
        let color1 = u16::from_le_bytes([block[2], block[3]]);
        let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

        let c0 = expand_565(color0);
        let c1 = expand_565(color1);
        let mix = |w0: u32, w1: u32, den: u32| -> [u8; 4] {
            let channel = |i: usize| ((w0 * c0[i] as u32 + w1 * c1[i] as u32) / den) as u8;
            [channel(0), channel(1), channel(2), 255]
        };

        let palette = if color0 > color1 {
            [
                [c0[0], c0[1], c0[2], 255],
                [c1[0], c1[1], c1[2], 255],
                mix(2, 1, 3),
                mix(1, 2, 3),
            ]
        } else {
            [
                [c0[0], c0[1], c0[2], 255],
                [c1[0], c1[1], c1[2], 255],
                mix(1, 1, 2),
                [0, 0, 0, 0],
            ]
        };

        for i in 0..16 {
            let x = bx * 4 + i % 4;
            let y = by * 4 + i / 4;
            if x < width as usize && y < height as usize {
                let offset = (y * width as usize + x) * 4;
                let selected = ((indices >> (i * 2)) & 0b11) as usize;
                output[offset..offset + 4].copy_from_slice(&palette[selected]);
            }
        }
    }

    output
}
