//! Run orchestration for model selection.
//!
//! ## Purpose
//!
//! This module drives a selection run end to end: validate the configuration
//! and data, build the fold plan, loop candidates over folds, apply the
//! exclusion policy, and assemble the result.
//!
//! ## Design notes
//!
//! * **Single-threaded, synchronous**: (candidate, fold) units are
//!   independent and run in a deterministic order; one scratch buffer serves
//!   the whole run.
//! * **Feasibility before fitting**: Every candidate is checked against the
//!   smallest training subset before any fit runs, so configuration errors
//!   abort with no partial work.
//! * **Exclusion policy**: `NumericalFailure` from a candidate removes only
//!   that candidate and is carried into the result; every other error aborts
//!   the run. No retries — fitting is deterministic given data and seed.
//!
//! ## Invariants
//!
//! * A returned result has at least one scored candidate and a valid `best`
//!   index.
//! * Candidate order in the result matches configuration order (minus
//!   exclusions).
//!
//! ## Non-goals
//!
//! * This module does not validate builder usage (handled by `api` at build
//!   time).
//! * This module does not parallelize fold evaluation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::algorithms::regression::Candidate;
use crate::engine::output::{HoldoutResult, SelectionResult};
use crate::engine::validator::Validator;
use crate::evaluation::cv::{self, Exclusion};
use crate::evaluation::holdout;
use crate::math::linalg::FloatLinalg;
use crate::primitives::buffer::FoldBuffer;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::SelectError;
use crate::primitives::folds::FoldPlan;

// ============================================================================
// Configuration
// ============================================================================

/// A validated selection configuration.
#[derive(Debug, Clone)]
pub struct SelectionConfig<T> {
    /// Fold count for cross-validation.
    pub folds: usize,
    /// Seed for fold assignment and holdout shuffling.
    pub seed: u64,
    /// Candidates to compare, in evaluation order.
    pub candidates: Vec<Candidate<T>>,
}

// ============================================================================
// Cross-Validation Run
// ============================================================================

/// Run k-fold cross-validation selection over the configured candidates.
pub fn run_selection<T: FloatLinalg + Debug>(
    config: &SelectionConfig<T>,
    x: &[T],
    y: &[T],
) -> Result<SelectionResult<T>, SelectError> {
    Validator::validate_inputs(x, y)?;
    let dataset = Dataset::from_columns(x, y)?;
    let n = dataset.len();

    Validator::validate_fold_count(config.folds, n)?;
    let plan = FoldPlan::assign(n, config.folds, config.seed)?;

    let min_train = n - plan.max_fold_size();
    Validator::validate_feasibility(&config.candidates, min_train)?;

    let mut buffer = FoldBuffer::with_capacity(n);
    let mut scores = Vec::with_capacity(config.candidates.len());
    let mut excluded = Vec::new();

    for candidate in &config.candidates {
        match cv::score_candidate(&dataset, &plan, candidate, &mut buffer) {
            Ok(row) => scores.push(row),
            Err(SelectError::NumericalFailure { detail }) => excluded.push(Exclusion {
                candidate: *candidate,
                reason: detail,
            }),
            Err(err) => return Err(err),
        }
    }

    if scores.is_empty() {
        return Err(SelectError::NoViableCandidates {
            excluded: excluded.len(),
        });
    }
    let best = cv::select_best(&scores).ok_or(SelectError::NoCandidates)?;

    Ok(SelectionResult {
        scores,
        excluded,
        best,
        records: n,
        folds: config.folds,
        seed: config.seed,
    })
}

// ============================================================================
// Holdout Run
// ============================================================================

/// Run a single train/validation holdout evaluation over the configured
/// candidates.
pub fn run_holdout<T: FloatLinalg + Debug>(
    config: &SelectionConfig<T>,
    x: &[T],
    y: &[T],
    validation_fraction: T,
) -> Result<HoldoutResult<T>, SelectError> {
    Validator::validate_inputs(x, y)?;
    Validator::validate_split_ratio(validation_fraction)?;
    let dataset = Dataset::from_columns(x, y)?;
    let n = dataset.len();

    let (train, validation) = holdout::split(n, validation_fraction, config.seed);
    Validator::validate_feasibility(&config.candidates, train.len())?;

    let mut buffer = FoldBuffer::with_capacity(n);
    let mut scores = Vec::with_capacity(config.candidates.len());
    let mut excluded = Vec::new();

    for candidate in &config.candidates {
        match holdout::score_candidate(&dataset, &train, &validation, candidate, &mut buffer) {
            Ok(row) => scores.push(row),
            Err(SelectError::NumericalFailure { detail }) => excluded.push(Exclusion {
                candidate: *candidate,
                reason: detail,
            }),
            Err(err) => return Err(err),
        }
    }

    if scores.is_empty() {
        return Err(SelectError::NoViableCandidates {
            excluded: excluded.len(),
        });
    }
    let best = holdout::select_best(&scores).ok_or(SelectError::NoCandidates)?;

    Ok(HoldoutResult {
        scores,
        excluded,
        best,
        train_records: train.len(),
        validation_records: validation.len(),
        seed: config.seed,
    })
}
