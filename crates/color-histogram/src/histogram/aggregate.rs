//! Exact color counting.
//!
//! Pixels are keyed by their packed 24-bit value and counted in one pass.
//! Large grids count into a dense table covering the whole key space; smaller
//! grids use a hash map so they don't pay for a 64 MiB allocation.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::grid::PixelGrid;

/// Grids with at least this many pixels are counted into a dense table.
pub const DENSE_MIN_PIXELS: usize = 1 << 22;

/// One distinct color and the number of pixels that have it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub color: Rgb,
    pub count: u64,
}

/// Count every distinct color in the grid.
///
/// The result covers every pixel exactly once (`Σ count == grid.len()`) and is
/// sorted by ascending `(r, g, b)`.
pub fn aggregate(grid: &PixelGrid<'_>) -> Vec<ColorCount> {
    // Dense bins are u32; grids past u32::MAX pixels fall back to u64 map counts.
    if grid.len() >= DENSE_MIN_PIXELS && grid.len() <= u32::MAX as usize {
        aggregate_dense(grid)
    } else {
        aggregate_sparse(grid)
    }
}

/// Bincount over the full 2^24 key space.
pub(crate) fn aggregate_dense(grid: &PixelGrid<'_>) -> Vec<ColorCount> {
    let mut bins = vec![0u32; Rgb::KEY_SPACE];
    for px in grid.as_bytes().chunks_exact(PixelGrid::CHANNELS) {
        let key = (px[0] as usize) << 16 | (px[1] as usize) << 8 | px[2] as usize;
        bins[key] += 1;
    }

    bins.iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(key, &count)| ColorCount {
            color: Rgb::from_packed(key as u32),
            count: count as u64,
        })
        .collect()
}

/// Hash-map grouping for grids with few pixels relative to the key space.
pub(crate) fn aggregate_sparse(grid: &PixelGrid<'_>) -> Vec<ColorCount> {
    let mut bins: HashMap<u32, u64> = HashMap::new();
    for color in grid.pixels() {
        *bins.entry(color.packed()).or_insert(0) += 1;
    }

    let mut counts: Vec<ColorCount> = bins
        .into_iter()
        .map(|(key, count)| ColorCount {
            color: Rgb::from_packed(key),
            count,
        })
        .collect();
    counts.sort_unstable_by_key(|c| c.color);
    counts
}
