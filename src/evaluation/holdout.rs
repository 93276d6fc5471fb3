//! Single train/validation holdout evaluation.
//!
//! ## Purpose
//!
//! This module scores candidates on one seeded train/validation split: fit
//! each candidate on the training portion, report RMSE on both portions.
//! It is the quick, single-round counterpart to k-fold cross-validation.
//!
//! ## Design notes
//!
//! * **Same shuffle, one cut**: Records are shuffled with the same seeded
//!   generator as fold assignment; the trailing portion of the shuffled order
//!   becomes the validation set.
//! * **Both scores reported**: A widening gap between train and validation
//!   RMSE across candidates is the overfitting signal this evaluation exists
//!   to expose.
//!
//! ## Invariants
//!
//! * Train and validation sets are disjoint and cover every record.
//! * Both sides of the split hold at least one record.
//!
//! ## Non-goals
//!
//! * Repeated or stratified splitting (use cross-validation instead).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::format;
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
use crate::primitives::folds::shuffle_indices;

// ============================================================================
// Split
// ============================================================================

/// Seeded shuffled split of `n` record indices into (train, validation).
///
/// `validation_fraction` must be in (0, 1); both sides are clamped to hold
/// at least one record.
pub fn split<T: Float>(
    n: usize,
    validation_fraction: T,
    seed: u64,
) -> (Vec<usize>, Vec<usize>) {
    let mut order: Vec<usize> = (0..n).collect();
    shuffle_indices(&mut order, seed);

    let raw = (T::from(n).unwrap() * validation_fraction)
        .round()
        .to_usize()
        .unwrap_or(1);
    let validation_len = raw.clamp(1, n - 1);
    let cut = n - validation_len;

    let validation = order.split_off(cut);
    (order, validation)
}

// ============================================================================
// Scoring
// ============================================================================

/// Holdout score for one candidate.
#[derive(Debug, Clone)]
pub struct HoldoutScore<T> {
    /// The candidate that was scored.
    pub candidate: Candidate<T>,
    /// RMSE on the training portion.
    pub train_rmse: T,
    /// RMSE on the validation portion.
    pub validation_rmse: T,
    /// Mean absolute error on the validation portion.
    pub validation_mae: T,
    /// Coefficient of determination on the validation portion.
    pub validation_r_squared: T,
}

/// Fit one candidate on the training indices and score both portions.
pub fn score_candidate<T: FloatLinalg>(
    dataset: &Dataset<T>,
    train: &[usize],
    validation: &[usize],
    candidate: &Candidate<T>,
    buffer: &mut FoldBuffer<T>,
) -> Result<HoldoutScore<T>, SelectError> {
    dataset.gather_into(train, &mut buffer.train_x, &mut buffer.train_y);
    dataset.gather_into(validation, &mut buffer.held_out_x, &mut buffer.held_out_y);

    let model = regression::fit(&buffer.train_x, &buffer.train_y, candidate)?;

    model.predict_into(&buffer.train_x, &mut buffer.predictions);
    let train_rmse = metrics::rmse(&buffer.predictions, &buffer.train_y);

    model.predict_into(&buffer.held_out_x, &mut buffer.predictions);
    let validation_rmse = metrics::rmse(&buffer.predictions, &buffer.held_out_y);
    let validation_mae = metrics::mae(&buffer.predictions, &buffer.held_out_y);
    let validation_r_squared = metrics::r_squared(&buffer.predictions, &buffer.held_out_y);

    if !train_rmse.is_finite() || !validation_rmse.is_finite() {
        return Err(SelectError::NumericalFailure {
            detail: format!("non-finite holdout score for {}", candidate),
        });
    }

    Ok(HoldoutScore {
        candidate: *candidate,
        train_rmse,
        validation_rmse,
        validation_mae,
        validation_r_squared,
    })
}

/// Index of the winning row: minimum validation RMSE, exact ties broken
/// toward the less complex candidate, then the earlier position.
pub fn select_best<T: Float>(scores: &[HoldoutScore<T>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, row) in scores.iter().enumerate() {
        best = match best {
            None => Some(i),
            Some(b) => {
                let current = &scores[b];
                if row.validation_rmse < current.validation_rmse
                    || (row.validation_rmse == current.validation_rmse
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
