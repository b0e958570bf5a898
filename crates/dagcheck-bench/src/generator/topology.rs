//! Band layout and forward-only edge placement.

use std::ops::Range;

use dagcheck_core::PriorMatrix;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;

use super::{GeneratorConfig, round_tenth};

/// Smallest weight the generator emits, the same floor the CSV writer keeps.
pub const MIN_WEIGHT: f64 = dagcheck_core::MIN_WRITTEN_WEIGHT;

/// Splits `0..nodes` into at most `bands` contiguous, non-empty ranges.
///
/// Earlier bands absorb the remainder, so sizes differ by at most one.
pub fn band_bounds(nodes: usize, bands: usize) -> Vec<Range<usize>> {
    let bands = bands.clamp(1, nodes.max(1));
    let base = nodes / bands;
    let extra = nodes % bands;
    let mut out = Vec::with_capacity(bands);
    let mut start = 0;
    for b in 0..bands {
        let len = base + usize::from(b < extra);
        if len == 0 {
            continue;
        }
        out.push(start..start + len);
        start += len;
    }
    out
}

/// Adds `intra_band_edges` same-band and `cross_band_edges` later-band edges
/// per node. Targets are sampled without replacement and are always greater
/// than the source index.
pub fn add_forward_edges(
    matrix: &mut PriorMatrix,
    bands: &[Range<usize>],
    config: &GeneratorConfig,
    rng: &mut StdRng,
) {
    let n = matrix.node_count();
    for band in bands {
        for source in band.clone() {
            let later_in_band = source + 1..band.end;
            connect(matrix, source, later_in_band, config.intra_band_edges, config, rng);
            connect(matrix, source, band.end..n, config.cross_band_edges, config, rng);
        }
    }
}

fn connect(
    matrix: &mut PriorMatrix,
    source: usize,
    targets: Range<usize>,
    count: usize,
    config: &GeneratorConfig,
    rng: &mut StdRng,
) {
    let len = targets.len();
    let amount = count.min(len);
    if amount == 0 {
        return;
    }
    for offset in index::sample(rng, len, amount) {
        let target = targets.start + offset;
        let weight = draw_weight(config.weight_range, rng);
        if let Some(cell) = matrix.weight_mut(source, target) {
            *cell = weight;
        }
    }
}

/// Draws a weight from `range`, rounded to one decimal and at least
/// [`MIN_WEIGHT`].
pub fn draw_weight(range: (f64, f64), rng: &mut StdRng) -> f64 {
    let (lo, hi) = if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    };
    let raw = if lo < hi { rng.gen_range(lo..=hi) } else { lo };
    round_tenth(raw).max(MIN_WEIGHT)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use rand::SeedableRng;

    use super::*;

    #[test]
    fn bands_cover_all_nodes() {
        let bands = band_bounds(10, 3);
        assert_eq!(bands, vec![0..4, 4..7, 7..10]);
    }

    #[test]
    fn more_bands_than_nodes_collapses() {
        let bands = band_bounds(2, 5);
        assert_eq!(bands, vec![0..1, 1..2]);
    }

    #[test]
    fn zero_nodes_has_no_bands() {
        assert!(band_bounds(0, 4).is_empty());
    }

    #[test]
    fn weights_are_rounded_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let w = draw_weight((0.0, 0.3), &mut rng);
            assert!((MIN_WEIGHT..=0.3).contains(&w), "{w}");
            assert!(((w * 10.0).round() - w * 10.0).abs() < 1e-9, "{w}");
        }
    }

    #[test]
    fn degenerate_range_returns_its_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((draw_weight((0.5, 0.5), &mut rng) - 0.5).abs() < f64::EPSILON);
    }
}
