//! Reusable scratch buffers for per-fold evaluation.
//!
//! ## Purpose
//!
//! This module provides `FoldBuffer`, a bundle of scratch vectors recycled
//! across every (candidate, fold) unit of work. Allocating the subsets once
//! and clearing them between units keeps the evaluation loop allocation-free
//! after the first fold.
//!
//! ## Design notes
//!
//! * **Logical clearing**: Buffers are cleared (`vec.clear()`), never
//!   deallocated, between units; capacity is monotonically increasing.
//! * **Single owner**: One buffer serves the whole sequential run. Each unit
//!   of work reads only its own training/held-out slices.
//!
//! ## Non-goals
//!
//! * Thread-local pooling (the evaluation loop is single-threaded).
//! * Dynamic shrinking or memory reclamation.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Scratch space for one (candidate, fold) unit of work.
#[derive(Debug, Clone)]
pub struct FoldBuffer<T> {
    /// Training record indices.
    pub train_idx: Vec<usize>,
    /// Held-out record indices.
    pub held_out_idx: Vec<usize>,
    /// Training subset features.
    pub train_x: Vec<T>,
    /// Training subset targets.
    pub train_y: Vec<T>,
    /// Held-out subset features.
    pub held_out_x: Vec<T>,
    /// Held-out subset targets.
    pub held_out_y: Vec<T>,
    /// Predictions on the held-out subset.
    pub predictions: Vec<T>,
}

impl<T> FoldBuffer<T> {
    /// Create a buffer sized for a dataset of `n` records.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            train_idx: Vec::with_capacity(n),
            held_out_idx: Vec::with_capacity(n),
            train_x: Vec::with_capacity(n),
            train_y: Vec::with_capacity(n),
            held_out_x: Vec::with_capacity(n),
            held_out_y: Vec::with_capacity(n),
            predictions: Vec::with_capacity(n),
        }
    }

    /// Clear every buffer (length 0, capacity preserved).
    pub fn clear(&mut self) {
        self.train_idx.clear();
        self.held_out_idx.clear();
        self.train_x.clear();
        self.train_y.clear();
        self.held_out_x.clear();
        self.held_out_y.clear();
        self.predictions.clear();
    }
}

impl<T> Default for FoldBuffer<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
