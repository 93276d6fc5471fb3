//! Cross-validation scoring for candidate selection.
//!
//! ## Purpose
//!
//! This module implements the core of model selection: for one candidate and
//! one fold plan, fit the candidate on every training subset and score RMSE
//! on the corresponding held-out fold, then aggregate the per-fold scores
//! into a mean and standard error.
//!
//! ## Design notes
//!
//! * **Equal fold weighting**: Each fold's RMSE is computed independently of
//!   its size, then folds enter the mean with equal weight — never weighted
//!   by record count. Uneven folds (k ∤ n) therefore cannot bias the
//!   aggregate.
//! * **Ephemeral per-fold scores**: Only the fold RMSE vector is retained;
//!   per-record errors are discarded after each fold.
//! * **Tie-breaking**: Exact mean-RMSE ties select the less complex
//!   candidate (lower degree, then stronger penalty), falling back to list
//!   position.
//!
//! ## Invariants
//!
//! * Training and held-out sets are disjoint in every fold.
//! * A returned score has a finite RMSE for every fold.
//! * `mean_rmse` equals the arithmetic mean of `fold_rmses`.
//!
//! ## Non-goals
//!
//! * This module does not build the fold plan (see `primitives::folds`).
//! * This module does not decide exclusion policy (the engine maps
//!   `NumericalFailure` to an exclusion).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{self, Candidate};
use crate::math::linalg::FloatLinalg;
use crate::math::metrics;
use crate::primitives::buffer::FoldBuffer;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::SelectError;
use crate::primitives::folds::FoldPlan;

// ============================================================================
// Score Records
// ============================================================================

/// Aggregated cross-validation score for one candidate.
#[derive(Debug, Clone)]
pub struct CandidateScore<T> {
    /// The candidate that was scored.
    pub candidate: Candidate<T>,
    /// Held-out RMSE per fold, in fold order.
    pub fold_rmses: Vec<T>,
    /// Unweighted mean of the fold RMSEs.
    pub mean_rmse: T,
    /// Standard error of the fold RMSEs: sample_std / √k.
    pub std_error: T,
}

/// A candidate removed from the comparison by numerical failure.
#[derive(Debug, Clone)]
pub struct Exclusion<T> {
    /// The excluded candidate.
    pub candidate: Candidate<T>,
    /// Why it was excluded.
    pub reason: String,
}

// ============================================================================
// Scoring
// ============================================================================

/// Score one candidate across every fold of the plan.
///
/// Errors with `NumericalFailure` when a fold's fit or predictions go
/// non-finite, and propagates `UnderdeterminedFit` untouched (a
/// configuration error; the engine pre-checks feasibility so this does not
/// normally fire here).
pub fn score_candidate<T: FloatLinalg>(
    dataset: &Dataset<T>,
    plan: &FoldPlan,
    candidate: &Candidate<T>,
    buffer: &mut FoldBuffer<T>,
) -> Result<CandidateScore<T>, SelectError> {
    let k = plan.k();
    let mut fold_rmses = Vec::with_capacity(k);

    for fold in 0..k {
        plan.split_into(fold, &mut buffer.train_idx, &mut buffer.held_out_idx);
        dataset.gather_into(&buffer.train_idx, &mut buffer.train_x, &mut buffer.train_y);
        dataset.gather_into(
            &buffer.held_out_idx,
            &mut buffer.held_out_x,
            &mut buffer.held_out_y,
        );

        let model = regression::fit(&buffer.train_x, &buffer.train_y, candidate)?;
        model.predict_into(&buffer.held_out_x, &mut buffer.predictions);

        let fold_rmse = metrics::rmse(&buffer.predictions, &buffer.held_out_y);
        if !fold_rmse.is_finite() {
            return Err(SelectError::NumericalFailure {
                detail: format!(
                    "non-finite held-out score for {} on fold {}",
                    candidate, fold
                ),
            });
        }
        fold_rmses.push(fold_rmse);
    }

    let mean_rmse = metrics::mean(&fold_rmses);
    let std_error = metrics::std_error(&fold_rmses);

    Ok(CandidateScore {
        candidate: *candidate,
        fold_rmses,
        mean_rmse,
        std_error,
    })
}

// ============================================================================
// Selection
// ============================================================================

/// Index of the winning row: minimum mean RMSE, exact ties broken toward the
/// less complex candidate, then the earlier position.
pub fn select_best<T: Float>(scores: &[CandidateScore<T>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, row) in scores.iter().enumerate() {
        best = match best {
            None => Some(i),
            Some(b) => {
                let current = &scores[b];
                if row.mean_rmse < current.mean_rmse
                    || (row.mean_rmse == current.mean_rmse
                        && row.candidate.simpler_than(&current.candidate))
                {
                    Some(i)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}
