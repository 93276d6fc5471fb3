//! Input validation for selection configuration and data.
//!
//! ## Purpose
//!
//! This module provides comprehensive validation functions for selection
//! configuration parameters and input data. It checks requirements such as
//! input lengths, finite values, fold-count bounds, and candidate
//! feasibility.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Configuration errors**: Every check here aborts the run; none of them
//!   is a per-candidate exclusion.
//! * **Feasibility**: A candidate must be fittable on the smallest training
//!   subset the fold plan can produce.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the fitting or scoring itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{Candidate, Regularizer};
use crate::primitives::errors::SelectError;

/// Largest supported polynomial degree.
pub const MAX_DEGREE: usize = 30;

/// Validation utility for selection configuration and input data.
///
/// Provides static methods for validating parameters and input data. All
/// methods return `Result<(), SelectError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input columns for a selection run.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), SelectError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(SelectError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(SelectError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient records
        if y.len() < 2 {
            return Err(SelectError::TooFewPoints {
                got: y.len(),
                min: 2,
            });
        }

        // Check 4: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(SelectError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(SelectError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the fold count against the dataset size.
    ///
    /// k must be at least 2 (a single fold cannot be held out) and at most n
    /// (beyond that a fold would be empty).
    pub fn validate_fold_count(k: usize, n: usize) -> Result<(), SelectError> {
        if k < 2 || k > n {
            return Err(SelectError::InvalidFoldCount { k, n });
        }
        Ok(())
    }

    /// Validate the fold count alone, before the dataset size is known.
    pub fn validate_min_folds(k: usize) -> Result<(), SelectError> {
        if k < 2 {
            return Err(SelectError::InvalidNumericValue(format!(
                "fold count must be at least 2, got {}",
                k
            )));
        }
        Ok(())
    }

    /// Validate the candidate list: non-empty, bounded degrees, and finite
    /// non-negative penalties.
    pub fn validate_candidates<T: Float>(candidates: &[Candidate<T>]) -> Result<(), SelectError> {
        if candidates.is_empty() {
            return Err(SelectError::NoCandidates);
        }

        for candidate in candidates {
            if candidate.degree > MAX_DEGREE {
                return Err(SelectError::InvalidDegree(candidate.degree));
            }
            match candidate.regularizer {
                Regularizer::None => {}
                Regularizer::Ridge(lambda) | Regularizer::Lasso(lambda) => {
                    if !lambda.is_finite() || lambda < T::zero() {
                        return Err(SelectError::InvalidPenalty(
                            lambda.to_f64().unwrap_or(f64::NAN),
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate that every candidate can be fitted on the smallest training
    /// subset.
    ///
    /// Silent omission of an infeasible candidate would corrupt the
    /// comparison table, so this is a whole-run configuration error.
    pub fn validate_feasibility<T: Float>(
        candidates: &[Candidate<T>],
        min_train: usize,
    ) -> Result<(), SelectError> {
        for candidate in candidates {
            let needed = candidate.num_coefficients();
            if min_train < needed {
                return Err(SelectError::UnderdeterminedFit {
                    degree: candidate.degree,
                    needed,
                    available: min_train,
                });
            }
        }
        Ok(())
    }

    /// Validate the holdout validation fraction.
    pub fn validate_split_ratio<T: Float>(fraction: T) -> Result<(), SelectError> {
        if !fraction.is_finite() || fraction <= T::zero() || fraction >= T::one() {
            return Err(SelectError::InvalidSplitRatio(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no builder parameters were set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SelectError> {
        if let Some(parameter) = duplicate_param {
            return Err(SelectError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
