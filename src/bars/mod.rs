//! Bar array model
//!
//! This module holds the data every sorting algorithm operates on:
//! - [`Bar`]: a single `(height, width)` pair; height is the sort key
//! - [`BarArray`]: the ordered, index-addressed sequence being sorted
//!
//! # Lifecycle
//!
//! A [`BarArray`] is created by [`BarArray::randomize`] at start-up and every
//! time the user asks for a fresh array. It is mutated in place by whichever
//! algorithm owns the active session and is replaced wholesale, never shrunk or
//! grown, while a run is in progress.
//!
//! # Input Coercion
//!
//! There are no error paths here. Dimensions that are zero or larger than the
//! drawing surface ([`constants::MAX_BAR_WIDTH`] × [`constants::MAX_BAR_EXTENT`])
//! fall back to [`constants::DEFAULT_BAR_WIDTH`] /
//! [`constants::DEFAULT_BAR_HEIGHT`].

pub mod constants;

use constants::{
    DEFAULT_BAR_HEIGHT, DEFAULT_BAR_WIDTH, MAX_BAR_EXTENT, MAX_BAR_HEIGHT, MAX_BAR_WIDTH,
};
use rand::Rng;

/// A single bar. Only `height` takes part in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub height: u32,
    pub width: u32,
}

impl Bar {
    pub fn new(height: u32, width: u32) -> Self {
        Bar {
            height: coerce_height(height),
            width: coerce_width(width),
        }
    }
}

/// The ordered sequence of bars being sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarArray {
    bars: Vec<Bar>,
}

impl BarArray {
    /// Generate `count` bars with heights drawn uniformly from `[1, max_height]`
    pub fn randomize<R: Rng + ?Sized>(count: usize, max_height: u32, rng: &mut R) -> Self {
        let max_height = if (1..=MAX_BAR_EXTENT).contains(&max_height) {
            max_height
        } else {
            MAX_BAR_HEIGHT
        };
        let bars = (0..count)
            .map(|_| Bar::new(rng.gen_range(1..=max_height), DEFAULT_BAR_WIDTH))
            .collect();
        BarArray { bars }
    }

    /// Build an array from explicit heights, all with the default width
    pub fn from_heights(heights: &[u32]) -> Self {
        BarArray {
            bars: heights
                .iter()
                .map(|&h| Bar::new(h, DEFAULT_BAR_WIDTH))
                .collect(),
        }
    }

    /// Set every bar's dimensions in place. Order and count are unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = coerce_width(width);
        let height = coerce_height(height);
        for bar in &mut self.bars {
            bar.width = width;
            bar.height = height;
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn as_slice(&self) -> &[Bar] {
        &self.bars
    }

    pub fn as_mut_slice(&mut self) -> &mut [Bar] {
        &mut self.bars
    }

    /// Heights in index order
    pub fn heights(&self) -> Vec<u32> {
        self.bars.iter().map(|b| b.height).collect()
    }

    /// True when heights are weakly increasing left to right
    pub fn is_sorted(&self) -> bool {
        self.bars.windows(2).all(|w| w[0].height <= w[1].height)
    }
}

/// Widths outside `1..=MAX_BAR_WIDTH` fall back to the default
pub fn coerce_width(width: u32) -> u32 {
    if (1..=MAX_BAR_WIDTH).contains(&width) {
        width
    } else {
        DEFAULT_BAR_WIDTH
    }
}

/// Heights outside `1..=MAX_BAR_EXTENT` fall back to the default
pub fn coerce_height(height: u32) -> u32 {
    if (1..=MAX_BAR_EXTENT).contains(&height) {
        height
    } else {
        DEFAULT_BAR_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_randomize_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bars = BarArray::randomize(500, 12, &mut rng);

        assert_eq!(bars.len(), 500);
        assert!(bars.as_slice().iter().all(|b| (1..=12).contains(&b.height)));
        assert!(bars.as_slice().iter().all(|b| b.width == DEFAULT_BAR_WIDTH));
    }

    #[test]
    fn test_randomize_zero_max_height_uses_default() {
        let mut rng = StdRng::seed_from_u64(1);
        let bars = BarArray::randomize(50, 0, &mut rng);

        assert!(bars
            .as_slice()
            .iter()
            .all(|b| (1..=MAX_BAR_HEIGHT).contains(&b.height)));
    }

    #[test]
    fn test_resize_keeps_count_and_sets_dimensions() {
        let mut bars = BarArray::from_heights(&[5, 3, 9]);
        bars.resize(12, 40);

        assert_eq!(bars.len(), 3);
        assert!(bars.as_slice().iter().all(|b| b.width == 12 && b.height == 40));
    }

    #[test]
    fn test_resize_coerces_zero_to_defaults() {
        let mut bars = BarArray::from_heights(&[5, 3]);
        bars.resize(0, 0);

        for bar in bars.as_slice() {
            assert_eq!(bar.width, DEFAULT_BAR_WIDTH);
            assert_eq!(bar.height, DEFAULT_BAR_HEIGHT);
        }
    }

    #[test]
    fn test_resize_rejects_dimensions_larger_than_surface() {
        let mut bars = BarArray::from_heights(&[5, 3]);
        bars.resize(u32::MAX, MAX_BAR_EXTENT + 1);

        for bar in bars.as_slice() {
            assert_eq!(bar.width, DEFAULT_BAR_WIDTH);
            assert_eq!(bar.height, DEFAULT_BAR_HEIGHT);
        }

        bars.resize(MAX_BAR_WIDTH, MAX_BAR_EXTENT);
        assert_eq!(bars.as_slice()[1], Bar::new(MAX_BAR_EXTENT, MAX_BAR_WIDTH));
    }

    #[test]
    fn test_is_sorted_allows_ties() {
        assert!(BarArray::from_heights(&[1, 2, 2, 7]).is_sorted());
        assert!(!BarArray::from_heights(&[2, 1]).is_sorted());
        assert!(BarArray::default().is_sorted());
    }
}
