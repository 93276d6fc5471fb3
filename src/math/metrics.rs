//! Score metrics for fit evaluation.
//!
//! ## Purpose
//!
//! This module provides the scalar metrics used to score fitted candidates
//! (RMSE, MAE, R²) and to aggregate per-fold scores (mean, sample standard
//! deviation, standard error of the mean).
//!
//! ## Key concepts
//!
//! * **RMSE**: sqrt(mean((prediction − actual)²)) — the fold-level score.
//! * **Standard error**: sample standard deviation (n − 1 denominator)
//!   divided by √n — the spread of the per-fold RMSE mean.
//!
//! ## Invariants
//!
//! * `std_error` is non-negative, and exactly 0 when all values are identical.
//! * Metrics over empty slices return 0 rather than NaN.
//!
//! ## Non-goals
//!
//! * This module does not decide which candidate wins (see `evaluation::cv`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Fit Scores
// ============================================================================

/// Root-mean-squared error between predictions and actuals.
///
/// Both slices must have the same length.
pub fn rmse<T: Float>(predicted: &[T], actual: &[T]) -> T {
    let n = predicted.len();
    if n == 0 {
        return T::zero();
    }
    let mut sq_sum = T::zero();
    for (&p, &a) in predicted.iter().zip(actual.iter()) {
        let err = a - p;
        sq_sum = sq_sum + err * err;
    }
    (sq_sum / T::from(n).unwrap()).sqrt()
}

/// Mean absolute error between predictions and actuals.
pub fn mae<T: Float>(predicted: &[T], actual: &[T]) -> T {
    let n = predicted.len();
    if n == 0 {
        return T::zero();
    }
    let mut abs_sum = T::zero();
    for (&p, &a) in predicted.iter().zip(actual.iter()) {
        abs_sum = abs_sum + (a - p).abs();
    }
    abs_sum / T::from(n).unwrap()
}

/// Coefficient of determination R².
///
/// Returns 0 when the actuals have zero variance.
pub fn r_squared<T: Float>(predicted: &[T], actual: &[T]) -> T {
    let n = actual.len();
    if n == 0 {
        return T::zero();
    }
    let y_mean = mean(actual);

    let mut ss_res = T::zero();
    let mut ss_tot = T::zero();
    for (&p, &a) in predicted.iter().zip(actual.iter()) {
        let res = a - p;
        let dev = a - y_mean;
        ss_res = ss_res + res * res;
        ss_tot = ss_tot + dev * dev;
    }

    if ss_tot > T::zero() {
        T::one() - ss_res / ss_tot
    } else {
        T::zero()
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Arithmetic mean.
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let mut sum = T::zero();
    for &v in vals {
        sum = sum + v;
    }
    sum / T::from(vals.len()).unwrap()
}

/// Sample standard deviation (n − 1 denominator).
///
/// Returns 0 for fewer than 2 values.
pub fn sample_std<T: Float>(vals: &[T]) -> T {
    let n = vals.len();
    if n < 2 {
        return T::zero();
    }
    let m = mean(vals);
    let mut sq_sum = T::zero();
    for &v in vals {
        let dev = v - m;
        sq_sum = sq_sum + dev * dev;
    }
    (sq_sum / T::from(n - 1).unwrap()).sqrt()
}

/// Standard error of the mean: sample_std / √n.
pub fn std_error<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    sample_std(vals) / T::from(vals.len()).unwrap().sqrt()
}
