//! Prior-probability column assignment.

use std::ops::Range;

use dagcheck_core::PriorMatrix;

use super::round_tenth;

/// Sets the prior of the first node of every band to 1.0 and lets the rest
/// of the band decay from 0.9 towards a floor of 0.1.
pub fn assign_priors(matrix: &mut PriorMatrix, bands: &[Range<usize>]) {
    for band in bands {
        for (offset, node) in band.clone().enumerate() {
            let prior = if offset == 0 {
                1.0
            } else {
                #[allow(clippy::cast_precision_loss)]
                let decay = 0.9 - 0.05 * (offset - 1) as f64;
                round_tenth(decay).max(0.1)
            };
            if let Some(cell) = matrix.prior_mut(node) {
                *cell = prior;
            }
        }
    }
}
