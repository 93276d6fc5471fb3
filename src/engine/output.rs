//! Result types for selection runs.
//!
//! ## Purpose
//!
//! This module defines the values a selection run hands back to callers: the
//! full comparison table, the exclusions, and the winning candidate. The
//! `Display` implementations render the summary tables an external reporting
//! collaborator would print.
//!
//! ## Design notes
//!
//! * **Data, not rendering**: The structs carry everything a plotting or
//!   reporting layer needs; `Display` is a convenience, not the interface.
//! * **No silent omission**: Excluded candidates stay visible in the result
//!   with their reasons.
//!
//! ## Invariants
//!
//! * `best` indexes into `scores` (a result is only constructed when at
//!   least one candidate scored).
//!
//! ## Non-goals
//!
//! * Plotting, file output, serialization.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::Candidate;
use crate::evaluation::cv::{CandidateScore, Exclusion};
use crate::evaluation::holdout::HoldoutScore;

// ============================================================================
// Cross-Validation Result
// ============================================================================

/// The outcome of a k-fold cross-validation selection run.
#[derive(Debug, Clone)]
pub struct SelectionResult<T> {
    /// Comparison rows, one per scored candidate, in candidate order.
    pub scores: Vec<CandidateScore<T>>,
    /// Candidates excluded by numerical failure, with reasons.
    pub excluded: Vec<Exclusion<T>>,
    /// Index of the selected row in `scores`.
    pub best: usize,
    /// Number of records in the dataset.
    pub records: usize,
    /// Fold count used.
    pub folds: usize,
    /// Seed used for fold assignment.
    pub seed: u64,
}

impl<T: Float> SelectionResult<T> {
    /// The selected candidate.
    #[inline]
    pub fn best_candidate(&self) -> &Candidate<T> {
        &self.scores[self.best].candidate
    }

    /// The selected candidate's comparison row.
    #[inline]
    pub fn best_score(&self) -> &CandidateScore<T> {
        &self.scores[self.best]
    }
}

impl<T: Float> fmt::Display for SelectionResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selection Summary:")?;
        writeln!(f, "  Records: {}", self.records)?;
        writeln!(f, "  Folds: {} (seed {})", self.folds, self.seed)?;
        writeln!(
            f,
            "  Candidates: {} scored, {} excluded",
            self.scores.len(),
            self.excluded.len()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:<28} {:>12} {:>12}",
            "Candidate", "Mean RMSE", "Std Error"
        )?;
        writeln!(f, "  {}", "-".repeat(54))?;
        for (i, row) in self.scores.iter().enumerate() {
            let marker = if i == self.best { '*' } else { ' ' };
            let name = format!("{}", row.candidate);
            writeln!(
                f,
                "{} {:<28} {:>12.6} {:>12.6}",
                marker,
                name,
                row.mean_rmse.to_f64().unwrap_or(f64::NAN),
                row.std_error.to_f64().unwrap_or(f64::NAN),
            )?;
        }
        for exclusion in &self.excluded {
            writeln!(
                f,
                "  excluded: {} ({})",
                exclusion.candidate, exclusion.reason
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Holdout Result
// ============================================================================

/// The outcome of a single train/validation holdout evaluation.
#[derive(Debug, Clone)]
pub struct HoldoutResult<T> {
    /// Comparison rows, one per scored candidate, in candidate order.
    pub scores: Vec<HoldoutScore<T>>,
    /// Candidates excluded by numerical failure, with reasons.
    pub excluded: Vec<Exclusion<T>>,
    /// Index of the selected row in `scores`.
    pub best: usize,
    /// Number of training records.
    pub train_records: usize,
    /// Number of validation records.
    pub validation_records: usize,
    /// Seed used for the split shuffle.
    pub seed: u64,
}

impl<T: Float> HoldoutResult<T> {
    /// The selected candidate.
    #[inline]
    pub fn best_candidate(&self) -> &Candidate<T> {
        &self.scores[self.best].candidate
    }

    /// The selected candidate's comparison row.
    #[inline]
    pub fn best_score(&self) -> &HoldoutScore<T> {
        &self.scores[self.best]
    }
}

impl<T: Float> fmt::Display for HoldoutResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Holdout Summary:")?;
        writeln!(
            f,
            "  Split: {} train / {} validation (seed {})",
            self.train_records, self.validation_records, self.seed
        )?;
        writeln!(
            f,
            "  Candidates: {} scored, {} excluded",
            self.scores.len(),
            self.excluded.len()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:<28} {:>12} {:>12}",
            "Candidate", "Train RMSE", "Valid RMSE"
        )?;
        writeln!(f, "  {}", "-".repeat(54))?;
        for (i, row) in self.scores.iter().enumerate() {
            let marker = if i == self.best { '*' } else { ' ' };
            let name = format!("{}", row.candidate);
            writeln!(
                f,
                "{} {:<28} {:>12.6} {:>12.6}",
                marker,
                name,
                row.train_rmse.to_f64().unwrap_or(f64::NAN),
                row.validation_rmse.to_f64().unwrap_or(f64::NAN),
            )?;
        }
        for exclusion in &self.excluded {
            writeln!(
                f,
                "  excluded: {} ({})",
                exclusion.candidate, exclusion.reason
            )?;
        }
        Ok(())
    }
}
