//! Polynomial regression fitting.
//!
//! ## Purpose
//!
//! This module fits one candidate model to a training subset: it centers the
//! target, expands and standardizes the polynomial basis, then solves the
//! resulting system with the solver the candidate's regularizer calls for
//! (normal equations for OLS and ridge, coordinate descent for lasso).
//!
//! ## Design notes
//!
//! * **Target centering**: The intercept is the training-target mean, so the
//!   basis carries no intercept column and the penalty never shrinks the
//!   intercept.
//! * **Uniform conditioning**: Every fit runs on the standardized basis;
//!   unpenalized fits gain conditioning, penalized fits gain a scale-even
//!   penalty.
//! * **Failure split**: An under-determined system is a configuration error;
//!   non-finite basis terms or solver failure are numerical failures that
//!   callers turn into candidate exclusions.
//!
//! ## Invariants
//!
//! * A returned fit has finite intercept and coefficients.
//! * `coefficients.len() == candidate.degree`.
//!
//! ## Non-goals
//!
//! * This module does not choose between candidates (see `evaluation::cv`).
//! * This module does not validate the candidate's parameters (handled by
//!   `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::basis;
use crate::math::linalg::FloatLinalg;
use crate::math::metrics;
use crate::math::scaling::ColumnScaler;
use crate::primitives::errors::SelectError;

// Submodules
/// Candidate, regularizer, and fitted-model types.
pub mod types;

/// Lasso coordinate descent.
pub mod lasso;

pub use types::{Candidate, PolynomialFit, Regularizer};

/// Convergence tolerance for lasso coordinate descent.
const LASSO_TOLERANCE: f64 = 1e-4;

/// Fit one candidate on a training subset.
///
/// `x` and `y` must have equal length. Fails with `UnderdeterminedFit` when
/// the subset holds fewer records than the candidate has coefficients, and
/// with `NumericalFailure` when the basis overflows or the solver fails.
pub fn fit<T: FloatLinalg>(
    x: &[T],
    y: &[T],
    candidate: &Candidate<T>,
) -> Result<PolynomialFit<T>, SelectError> {
    let n = y.len();
    let needed = candidate.num_coefficients();
    if n < needed {
        return Err(SelectError::UnderdeterminedFit {
            degree: candidate.degree,
            needed,
            available: n,
        });
    }

    let intercept = metrics::mean(y);
    let p = candidate.degree;

    if p == 0 {
        return Ok(PolynomialFit {
            degree: 0,
            intercept,
            coefficients: Vec::new(),
            scaler: ColumnScaler {
                means: Vec::new(),
                scales: Vec::new(),
            },
        });
    }

    let mut y_c = Vec::with_capacity(n);
    for &v in y {
        y_c.push(v - intercept);
    }

    let mut z = basis::power_matrix(x, p);
    for &term in &z {
        if !term.is_finite() {
            return Err(SelectError::NumericalFailure {
                detail: format!("non-finite basis term while fitting {}", candidate),
            });
        }
    }

    let scaler = ColumnScaler::fit_transform(&mut z, n, p);

    let coefficients = match candidate.regularizer {
        Regularizer::None => solve_penalized(&z, &y_c, n, p, T::zero(), candidate)?,
        Regularizer::Ridge(lambda) => solve_penalized(&z, &y_c, n, p, lambda, candidate)?,
        Regularizer::Lasso(lambda) => {
            let tolerance = T::from(LASSO_TOLERANCE).unwrap();
            let mut cycles = 0;
            lasso::coordinate_descent(&z, &y_c, n, p, lambda, tolerance, &mut cycles)
        }
    };

    for &coeff in &coefficients {
        if !coeff.is_finite() {
            return Err(SelectError::NumericalFailure {
                detail: format!("non-finite coefficient while fitting {}", candidate),
            });
        }
    }

    Ok(PolynomialFit {
        degree: p,
        intercept,
        coefficients,
        scaler,
    })
}

/// Solve (Z'Z + λI)β = Z'y_c on the standardized basis.
fn solve_penalized<T: FloatLinalg>(
    z: &[T],
    y_c: &[T],
    n: usize,
    p: usize,
    lambda: T,
    candidate: &Candidate<T>,
) -> Result<Vec<T>, SelectError> {
    let mut gram = basis::gram_matrix(z, n, p);
    let moment = basis::moment_vector(z, y_c, n, p);

    if lambda > T::zero() {
        for j in 0..p {
            gram[j * p + j] = gram[j * p + j] + lambda;
        }
    }

    T::solve_normal(&gram, &moment, p).ok_or_else(|| SelectError::NumericalFailure {
        detail: format!("normal equations solve failed for {}", candidate),
    })
}
