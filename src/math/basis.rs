//! Polynomial basis expansion.
//!
//! ## Purpose
//!
//! This module expands a scalar feature into its polynomial power terms and
//! assembles the column-major matrices consumed by the fitting layer. The
//! intercept is not a basis column: fits center the target instead, so the
//! basis holds exactly `degree` columns (x, x², …, x^degree).
//!
//! ## Design notes
//!
//! * **Iterative products**: Powers are built by repeated multiplication, not
//!   `powi`, matching the hot-loop term construction used elsewhere.
//! * **Column-major**: Column j of the power matrix occupies the contiguous
//!   range `[j*n, (j+1)*n)`, so per-column passes (scaling, coordinate
//!   descent) stay cache-friendly.
//!
//! ## Invariants
//!
//! * `power_matrix` output has length n * degree.
//! * Column j holds x^(j+1) for every record, in record order.
//!
//! ## Non-goals
//!
//! * This module does not standardize columns (see `math::scaling`).
//! * This module does not check finiteness of the expanded terms (callers
//!   decide how overflow is surfaced).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Basis Expansion
// ============================================================================

/// Fill `row` with the power terms x, x², …, x^degree.
///
/// `row` must hold exactly `degree` elements.
#[inline]
pub fn design_row<T: Float>(x: T, row: &mut [T]) {
    let mut pow = T::one();
    for term in row.iter_mut() {
        pow = pow * x;
        *term = pow;
    }
}

/// Build the column-major n × degree power matrix for a feature column.
pub fn power_matrix<T: Float>(xs: &[T], degree: usize) -> Vec<T> {
    let n = xs.len();
    let mut matrix = vec![T::zero(); n * degree];
    fill_power_matrix(xs, degree, &mut matrix);
    matrix
}

/// Fill a pre-sized column-major power matrix in place.
///
/// `matrix` must hold exactly `xs.len() * degree` elements.
pub fn fill_power_matrix<T: Float>(xs: &[T], degree: usize, matrix: &mut [T]) {
    let n = xs.len();
    for (i, &x) in xs.iter().enumerate() {
        let mut pow = T::one();
        for j in 0..degree {
            pow = pow * x;
            matrix[j * n + i] = pow;
        }
    }
}

// ============================================================================
// Normal Equation Assembly
// ============================================================================

/// Assemble the p × p Gram matrix Z'Z (column-major) from a column-major
/// n × p matrix.
///
/// The Gram matrix is symmetric; only the upper triangle is computed and then
/// mirrored.
pub fn gram_matrix<T: Float>(z: &[T], n: usize, p: usize) -> Vec<T> {
    let mut gram = vec![T::zero(); p * p];
    for i in 0..p {
        let col_i = &z[i * n..(i + 1) * n];
        for j in i..p {
            let col_j = &z[j * n..(j + 1) * n];
            let mut dot = T::zero();
            for r in 0..n {
                dot = dot + col_i[r] * col_j[r];
            }
            gram[j * p + i] = dot;
            gram[i * p + j] = dot;
        }
    }
    gram
}

/// Assemble the moment vector Z'y from a column-major n × p matrix.
pub fn moment_vector<T: Float>(z: &[T], y: &[T], n: usize, p: usize) -> Vec<T> {
    let mut moment = vec![T::zero(); p];
    for (j, m) in moment.iter_mut().enumerate() {
        let col = &z[j * n..(j + 1) * n];
        let mut dot = T::zero();
        for r in 0..n {
            dot = dot + col[r] * y[r];
        }
        *m = dot;
    }
    moment
}
