use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{encode::endpoints::EndpointPair, encode::palette::BlockAlphaMode};

/// How the alpha range of a block relates to what BC1 can store.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlockAlphaClass {
    /// Every valid pixel is fully opaque.
    Opaque,
    /// Encoded in punch-through mode.
    PunchThrough,
    /// Has alpha below 255 but was encoded opaque, so the alpha is dropped.
    Translucent,
}

impl BlockAlphaClass {
    pub const fn classify(endpoints: &EndpointPair, mode: BlockAlphaMode) -> Self {
        match mode {
            BlockAlphaMode::PunchThrough => BlockAlphaClass::PunchThrough,
            BlockAlphaMode::Opaque if endpoints.color_min.a == 255 => BlockAlphaClass::Opaque,
            BlockAlphaMode::Opaque => BlockAlphaClass::Translucent,
        }
    }
}

/// Summary of one encoded block handed to a [`BlockObserver`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BlockReport {
    /// Block column.
    pub x: usize,
    /// Block row.
    pub y: usize,
    pub endpoints: EndpointPair,
    pub alpha_mode: BlockAlphaMode,
    pub alpha_class: BlockAlphaClass,
}

/// Receives a report for every encoded block.
///
/// With parallel encoding the observer is called from several threads at once and in no
/// particular order.
pub trait BlockObserver: Sync {
    fn block_encoded(&self, report: &BlockReport);
}

/// Counts blocks per [`BlockAlphaClass`].
#[derive(Debug, Default)]
pub struct AlphaStatistics {
    opaque: AtomicUsize,
    punch_through: AtomicUsize,
    translucent: AtomicUsize,
}

impl AlphaStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opaque(&self) -> usize {
        self.opaque.load(Ordering::Relaxed)
    }

    pub fn punch_through(&self) -> usize {
        self.punch_through.load(Ordering::Relaxed)
    }

    pub fn translucent(&self) -> usize {
        self.translucent.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.opaque() + self.punch_through() + self.translucent()
    }
}

impl BlockObserver for AlphaStatistics {
    fn block_encoded(&self, report: &BlockReport) {
        let counter = match report.alpha_class {
            BlockAlphaClass::Opaque => &self.opaque,
            BlockAlphaClass::PunchThrough => &self.punch_through,
            BlockAlphaClass::Translucent => &self.translucent,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgba8;

    fn report(color_min: Rgba8, color_max: Rgba8) -> BlockReport {
        let endpoints = EndpointPair {
            color_min,
            color_max,
        };
        let alpha_mode = BlockAlphaMode::select(&endpoints);
        BlockReport {
            x: 0,
            y: 0,
            endpoints,
            alpha_mode,
            alpha_class: BlockAlphaClass::classify(&endpoints, alpha_mode),
        }
    }

    #[test]
    fn test_alpha_classes() {
        let opaque = report(Rgba8::new(0, 0, 0, 255), Rgba8::new(9, 9, 9, 255));
        let punch_through = report(Rgba8::new(0, 0, 0, 0), Rgba8::new(9, 9, 9, 128));
        let translucent = report(Rgba8::new(0, 0, 0, 0), Rgba8::new(9, 9, 9, 129));

        assert_eq!(opaque.alpha_class, BlockAlphaClass::Opaque);
        assert_eq!(punch_through.alpha_class, BlockAlphaClass::PunchThrough);
        assert_eq!(translucent.alpha_class, BlockAlphaClass::Translucent);

        let statistics = AlphaStatistics::new();
        statistics.block_encoded(&opaque);
        statistics.block_encoded(&opaque);
        statistics.block_encoded(&punch_through);
        statistics.block_encoded(&translucent);

        assert_eq!(statistics.opaque(), 2);
        assert_eq!(statistics.punch_through(), 1);
        assert_eq!(statistics.translucent(), 1);
        assert_eq!(statistics.total(), 4);
    }
}
