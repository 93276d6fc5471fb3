//! Immutable dataset of (feature, target) records.
//!
//! ## Purpose
//!
//! This module defines `Dataset`, the ordered in-memory collection of records
//! evaluated during model selection. Each record has one numeric feature and
//! one numeric target; records have no identity beyond row position.
//!
//! ## Design notes
//!
//! * **Column storage**: Feature and target live in two parallel vectors,
//!   matching the slice-based fitting APIs downstream.
//! * **Immutable**: Once constructed, a dataset is never modified; fold
//!   subsets are gathered into caller-provided scratch buffers.
//!
//! ## Invariants
//!
//! * Feature and target columns have identical lengths.
//! * A dataset holds at least 2 records.
//!
//! ## Non-goals
//!
//! * This module does not read files or parse text (data arrives in memory).
//! * This module does not validate finiteness (handled by `engine::validator`).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SelectError;

/// An ordered, immutable collection of (feature, target) records.
#[derive(Debug, Clone)]
pub struct Dataset<T> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Float> Dataset<T> {
    /// Build a dataset from a feature column and a target column.
    ///
    /// Fails on empty columns, mismatched lengths, or fewer than 2 records.
    pub fn from_columns(x: &[T], y: &[T]) -> Result<Self, SelectError> {
        if x.is_empty() || y.is_empty() {
            return Err(SelectError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(SelectError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if y.len() < 2 {
            return Err(SelectError::TooFewPoints {
                got: y.len(),
                min: 2,
            });
        }

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Whether the dataset holds no records (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// The feature column.
    #[inline]
    pub fn feature(&self) -> &[T] {
        &self.x
    }

    /// The target column.
    #[inline]
    pub fn target(&self) -> &[T] {
        &self.y
    }

    /// Gather the records at `indices` into the provided scratch buffers.
    ///
    /// The buffers are cleared first; capacity is retained across calls.
    pub fn gather_into(&self, indices: &[usize], xs: &mut Vec<T>, ys: &mut Vec<T>) {
        xs.clear();
        ys.clear();
        for &i in indices {
            xs.push(self.x[i]);
            ys.push(self.y[i]);
        }
    }
}
