//! High-level API for model selection.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring the fold count,
//! seed, and candidate list, and produces a validated `CrossValidator` that
//! runs selection against in-memory data.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Candidate and parameter constraints are checked when
//!   `.build()` is called; data-dependent constraints (fold count vs. n,
//!   feasibility) are checked when data arrives.
//! * **Type-Safe**: Generic over `FloatLinalg` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Selector::new()` → chain configuration →
//!   `.build()` → `.select(&x, &y)` or `.holdout(&x, &y, fraction)`.
//! * **Candidate accumulation**: Degree lists and penalty paths append to one
//!   candidate list, evaluated in insertion order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// Internal dependencies
use crate::engine::executor::{self, SelectionConfig};
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::regression::{Candidate, PolynomialFit, Regularizer};
pub use crate::engine::output::{HoldoutResult, SelectionResult};
pub use crate::evaluation::cv::{CandidateScore, Exclusion};
pub use crate::evaluation::holdout::HoldoutScore;
pub use crate::primitives::errors::SelectError;

/// Default fold count.
pub const DEFAULT_FOLDS: usize = 5;

/// Default seed for fold assignment and holdout shuffling.
///
/// A fixed default keeps runs reproducible out of the box; pass `.seed()` to
/// change the shuffle.
pub const DEFAULT_SEED: u64 = 42;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a selection run.
#[derive(Debug, Clone)]
pub struct SelectorBuilder<T: FloatLinalg + Debug> {
    /// Fold count for cross-validation.
    pub folds: Option<usize>,

    /// Seed for fold assignment and holdout shuffling.
    pub seed: Option<u64>,

    /// Accumulated candidates, in evaluation order.
    pub candidates: Vec<Candidate<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + Debug> Default for SelectorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + Debug> SelectorBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            folds: None,
            seed: None,
            candidates: Vec::new(),
            duplicate_param: None,
        }
    }

    /// Set the fold count for cross-validation (default: 5).
    pub fn folds(mut self, k: usize) -> Self {
        if self.folds.is_some() {
            self.duplicate_param = Some("folds");
        }
        self.folds = Some(k);
        self
    }

    /// Set the seed for fold assignment and holdout shuffling (default: 42).
    ///
    /// The same seed, dataset size, and fold count always produce the
    /// identical fold assignment.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Append one unpenalized candidate per degree.
    pub fn degrees(mut self, degrees: impl IntoIterator<Item = usize>) -> Self {
        for degree in degrees {
            self.candidates.push(Candidate::degree(degree));
        }
        self
    }

    /// Append a single candidate.
    pub fn candidate(mut self, candidate: Candidate<T>) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Append candidates in order.
    pub fn candidates(mut self, candidates: impl IntoIterator<Item = Candidate<T>>) -> Self {
        self.candidates.extend(candidates);
        self
    }

    /// Append one ridge candidate per penalty strength, on a fixed-degree
    /// basis.
    pub fn ridge_path(mut self, degree: usize, lambdas: &[T]) -> Self {
        for &lambda in lambdas {
            self.candidates.push(Candidate::ridge(degree, lambda));
        }
        self
    }

    /// Append one lasso candidate per penalty strength, on a fixed-degree
    /// basis.
    pub fn lasso_path(mut self, degree: usize, lambdas: &[T]) -> Self {
        for &lambda in lambdas {
            self.candidates.push(Candidate::lasso(degree, lambda));
        }
        self
    }

    /// Validate the configuration and produce a runnable `CrossValidator`.
    pub fn build(self) -> Result<CrossValidator<T>, SelectError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_candidates(&self.candidates)?;

        let folds = self.folds.unwrap_or(DEFAULT_FOLDS);
        Validator::validate_min_folds(folds)?;

        Ok(CrossValidator {
            config: SelectionConfig {
                folds,
                seed: self.seed.unwrap_or(DEFAULT_SEED),
                candidates: self.candidates,
            },
        })
    }
}

// ============================================================================
// Cross-Validator
// ============================================================================

/// A validated, runnable model-selection configuration.
#[derive(Debug, Clone)]
pub struct CrossValidator<T> {
    config: SelectionConfig<T>,
}

impl<T: FloatLinalg + Debug> CrossValidator<T> {
    /// Run k-fold cross-validation over the candidates on the given columns.
    ///
    /// Returns the full comparison table and the selected candidate.
    pub fn select(&self, x: &[T], y: &[T]) -> Result<SelectionResult<T>, SelectError> {
        executor::run_selection(&self.config, x, y)
    }

    /// Run a single train/validation holdout evaluation over the candidates.
    ///
    /// `validation_fraction` is the portion of records held out, in (0, 1).
    pub fn holdout(
        &self,
        x: &[T],
        y: &[T],
        validation_fraction: T,
    ) -> Result<HoldoutResult<T>, SelectError> {
        executor::run_holdout(&self.config, x, y, validation_fraction)
    }

    /// The validated configuration.
    #[inline]
    pub fn config(&self) -> &SelectionConfig<T> {
        &self.config
    }
}
