use super::tile::{Rgba8, Tile};

/// The two colors spanning the color range of a tile.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct EndpointPair {
    pub color_min: Rgba8,
    pub color_max: Rgba8,
}

/// Source of the per-tile endpoint colors.
///
/// Implementations must only look at the valid region of the tile and must be pure:
/// the same tile always yields the same pair, no matter which thread asks.
pub trait EndpointExtractor: Sync {
    fn extract(&self, tile: &Tile) -> EndpointPair;
}

/// Componentwise minimum and maximum over the valid pixels of a tile.
///
/// Each channel, alpha included, is reduced independently, so neither endpoint has to
/// be a color that actually occurs in the tile.
#[derive(Copy, Clone, Debug, Default)]
pub struct BoundingBox;

impl EndpointExtractor for BoundingBox {
    fn extract(&self, tile: &Tile) -> EndpointPair {
        let mut color_min = Rgba8::new(255, 255, 255, 255);
        let mut color_max = Rgba8::new(0, 0, 0, 0);

        for pixel in tile.valid_pixels() {
            color_min.r = color_min.r.min(pixel.r);
            color_min.g = color_min.g.min(pixel.g);
            color_min.b = color_min.b.min(pixel.b);
            color_min.a = color_min.a.min(pixel.a);

            color_max.r = color_max.r.max(pixel.r);
            color_max.g = color_max.g.max(pixel.g);
            color_max.b = color_max.b.max(pixel.b);
            color_max.a = color_max.a.max(pixel.a);
        }

        EndpointPair {
            color_min,
            color_max,
        }
    }
}
