// src/rank/norm.rs
use rayon::prelude::*;

/// Sum of absolute elementwise differences.
///
/// Both slices must have the same length.
#[must_use]
pub fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

/// Parallel form of [`l1_distance`].
#[must_use]
pub fn par_l1_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.par_iter()
        .zip(b.par_iter())
        .map(|(x, y)| (x - y).abs())
        .sum()
}
