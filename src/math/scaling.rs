//! Column standardization for penalized polynomial bases.
//!
//! ## Purpose
//!
//! This module provides `ColumnScaler`, which standardizes each power-matrix
//! column to zero mean and unit variance. Penalized fits (ridge, lasso)
//! require comparable column scales for the penalty to act evenly across
//! powers; unpenalized fits use the same transform for conditioning.
//!
//! ## Design notes
//!
//! * **Fit on training only**: Statistics come from the training subset; the
//!   identical transform is applied to held-out rows at prediction time.
//! * **Population scale**: σ_j = sqrt(Σ(v − mean)² / n), so a standardized
//!   column has Σz² = n exactly, which the coordinate-descent update relies on.
//! * **Zero-variance guard**: A constant column gets unit scale; its centered
//!   values are all zero and downstream solvers treat it as absent.
//!
//! ## Invariants
//!
//! * `means.len() == scales.len() ==` number of basis columns.
//! * Every stored scale is positive (or +∞ from overflowing inputs, which
//!   still maps centered values to finite zeros).
//!
//! ## Non-goals
//!
//! * This module does not scale the target (fits center it separately).
//! * Robust (median-based) scale estimation.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Per-column mean and scale of a power matrix.
#[derive(Debug, Clone)]
pub struct ColumnScaler<T> {
    /// Column means, one per basis column.
    pub means: Vec<T>,
    /// Column scales (population standard deviation; 1 for constant columns).
    pub scales: Vec<T>,
}

impl<T: Float> ColumnScaler<T> {
    /// Fit the scaler on a column-major n × p matrix and standardize it in
    /// place.
    pub fn fit_transform(z: &mut [T], n: usize, p: usize) -> Self {
        let mut means = Vec::with_capacity(p);
        let mut scales = Vec::with_capacity(p);
        let n_t = T::from(n).unwrap();

        for j in 0..p {
            let col = &mut z[j * n..(j + 1) * n];

            let mut sum = T::zero();
            for &v in col.iter() {
                sum = sum + v;
            }
            let mean = sum / n_t;

            let mut sq_sum = T::zero();
            for &v in col.iter() {
                let dev = v - mean;
                sq_sum = sq_sum + dev * dev;
            }
            let variance = sq_sum / n_t;
            let scale = if variance > T::zero() {
                variance.sqrt()
            } else {
                T::one()
            };

            for v in col.iter_mut() {
                *v = (*v - mean) / scale;
            }

            means.push(mean);
            scales.push(scale);
        }

        Self { means, scales }
    }

    /// Standardize a single raw basis term for column `j`.
    #[inline]
    pub fn transform_term(&self, j: usize, raw: T) -> T {
        (raw - self.means[j]) / self.scales[j]
    }

    /// Number of columns the scaler was fitted on.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.means.len()
    }
}
