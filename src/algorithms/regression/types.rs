//! Regression Types
//!
//! ## Purpose
//!
//! This module defines the core data types used in candidate fitting: the
//! `Candidate` complexity descriptor, the `Regularizer` penalty enum, and the
//! fitted `PolynomialFit` value type.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::ColumnScaler;

// ============================================================================
// Regularizer
// ============================================================================

/// Penalty applied to a polynomial fit.
///
/// Penalty strengths must be finite and non-negative; zero degrades to an
/// unpenalized fit. Ridge penalizes the Gram matrix directly
/// ((Z'Z + λI)β = Z'y on the standardized basis); lasso uses the 1/(2n) loss
/// scaling standard for coordinate descent. The two λ scales are therefore
/// not numerically interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Regularizer<T> {
    /// Ordinary least squares (no penalty).
    #[default]
    None,

    /// L2 penalty with the given strength λ.
    Ridge(T),

    /// L1 penalty with the given strength λ.
    Lasso(T),
}

impl<T: Float> Regularizer<T> {
    /// Penalty strength, if any.
    #[inline]
    pub fn strength(&self) -> Option<T> {
        match self {
            Regularizer::None => None,
            Regularizer::Ridge(lambda) | Regularizer::Lasso(lambda) => Some(*lambda),
        }
    }
}

// ============================================================================
// Candidate
// ============================================================================

/// One model complexity under comparison: a polynomial degree plus an
/// optional penalty.
///
/// Candidates are independent; fitting one shares no mutable state with
/// another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<T> {
    /// Polynomial degree of the basis (0 = intercept-only).
    pub degree: usize,
    /// Penalty applied during fitting.
    pub regularizer: Regularizer<T>,
}

impl<T: Float> Candidate<T> {
    /// Unpenalized polynomial regression of the given degree.
    #[inline]
    pub fn degree(degree: usize) -> Self {
        Self {
            degree,
            regularizer: Regularizer::None,
        }
    }

    /// Ridge-penalized polynomial regression.
    #[inline]
    pub fn ridge(degree: usize, lambda: T) -> Self {
        Self {
            degree,
            regularizer: Regularizer::Ridge(lambda),
        }
    }

    /// Lasso-penalized polynomial regression.
    #[inline]
    pub fn lasso(degree: usize, lambda: T) -> Self {
        Self {
            degree,
            regularizer: Regularizer::Lasso(lambda),
        }
    }

    /// Number of coefficients the fit must determine (intercept + powers).
    #[inline]
    pub const fn num_coefficients(&self) -> usize {
        self.degree + 1
    }

    /// Whether `self` is the less complex model for exact score ties.
    ///
    /// Lower degree wins; at equal degree the stronger penalty wins.
    pub fn simpler_than(&self, other: &Self) -> bool {
        if self.degree != other.degree {
            return self.degree < other.degree;
        }
        let a = self.regularizer.strength().unwrap_or_else(T::zero);
        let b = other.regularizer.strength().unwrap_or_else(T::zero);
        a > b
    }
}

impl<T: Float> fmt::Display for Candidate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.regularizer {
            Regularizer::None => write!(f, "degree {}", self.degree),
            Regularizer::Ridge(lambda) => write!(
                f,
                "degree {} + ridge(\u{3bb}={})",
                self.degree,
                lambda.to_f64().unwrap_or(f64::NAN)
            ),
            Regularizer::Lasso(lambda) => write!(
                f,
                "degree {} + lasso(\u{3bb}={})",
                self.degree,
                lambda.to_f64().unwrap_or(f64::NAN)
            ),
        }
    }
}

// ============================================================================
// Fitted Model
// ============================================================================

/// A fitted polynomial model.
///
/// Coefficients live on the standardized basis scale; prediction re-applies
/// the stored scaler to raw power terms, so held-out records see exactly the
/// training-time transform.
#[derive(Debug, Clone)]
pub struct PolynomialFit<T> {
    /// Polynomial degree of the basis.
    pub degree: usize,
    /// Intercept (the training-target mean).
    pub intercept: T,
    /// Coefficients for the standardized power columns x, x², …, x^degree.
    pub coefficients: Vec<T>,
    /// Column scaler fitted on the training basis.
    pub scaler: ColumnScaler<T>,
}

impl<T: Float> PolynomialFit<T> {
    /// Predict the target for one feature value.
    pub fn predict(&self, x: T) -> T {
        let mut acc = self.intercept;
        let mut pow = T::one();
        for (j, &coeff) in self.coefficients.iter().enumerate() {
            pow = pow * x;
            acc = acc + coeff * self.scaler.transform_term(j, pow);
        }
        acc
    }

    /// Predict targets for a feature column into a reusable buffer.
    ///
    /// The buffer is cleared first; capacity is retained across calls.
    pub fn predict_into(&self, xs: &[T], out: &mut Vec<T>) {
        out.clear();
        for &x in xs {
            out.push(self.predict(x));
        }
    }
}
