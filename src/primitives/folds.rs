//! Seeded fold assignment for k-fold cross-validation.
//!
//! ## Purpose
//!
//! This module computes the mapping from record indices to fold ids used by
//! cross-validation: record order is shuffled with a seeded generator, then
//! fold ids are assigned round-robin over the shuffled order.
//!
//! ## Design notes
//!
//! * **Reproducibility is a contract**: The same (n, k, seed) always produces
//!   the identical assignment. The shuffle uses a minimal LCG rather than an
//!   OS-seeded generator so no_std builds behave identically.
//! * **Round-robin**: fold id = (position in shuffled order) mod k, so fold
//!   sizes are ⌈n/k⌉ or ⌊n/k⌋ and differ by at most one record.
//!
//! ## Invariants
//!
//! * Every record index in [0, n) is assigned exactly one fold id in [0, k).
//! * Fold sizes differ by at most one record.
//! * k is in [2, n]; a plan with an empty fold cannot be constructed.
//!
//! ## Non-goals
//!
//! * This module does not build the training/held-out data subsets themselves
//!   (indices only; gathering is the dataset's job).
//! * This module does not stratify folds by target value.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SelectError;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for no-std shuffling.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub(crate) struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

/// Shuffle indices in place with a seeded Fisher-Yates pass.
pub(crate) fn shuffle_indices(indices: &mut [usize], seed: u64) {
    let n = indices.len();
    let mut rng = SimpleRng::new(seed);
    for i in (1..n).rev() {
        let j = (rng.next_u32() as usize) % (i + 1);
        indices.swap(i, j);
    }
}

// ============================================================================
// Fold Plan
// ============================================================================

/// The assignment of every record index to a fold id.
#[derive(Debug, Clone)]
pub struct FoldPlan {
    /// assignment[record] = fold id in [0, k).
    assignment: Vec<usize>,
    k: usize,
}

impl FoldPlan {
    /// Assign `n` records to `k` folds using the given seed.
    ///
    /// Record indices are shuffled (Fisher-Yates, seeded) and fold ids are
    /// assigned round-robin over the shuffled order.
    pub fn assign(n: usize, k: usize, seed: u64) -> Result<Self, SelectError> {
        if k < 2 || k > n {
            return Err(SelectError::InvalidFoldCount { k, n });
        }

        let mut order: Vec<usize> = (0..n).collect();
        shuffle_indices(&mut order, seed);

        let mut assignment = vec![0usize; n];
        for (position, &record) in order.iter().enumerate() {
            assignment[record] = position % k;
        }

        Ok(Self { assignment, k })
    }

    /// Number of folds.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of records covered by the plan.
    #[inline]
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// Whether the plan covers no records (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Fold id of a record.
    #[inline]
    pub fn fold_id(&self, record: usize) -> usize {
        self.assignment[record]
    }

    /// Record count per fold.
    pub fn fold_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.k];
        for &fold in &self.assignment {
            sizes[fold] += 1;
        }
        sizes
    }

    /// Size of the largest fold: ⌈n / k⌉.
    ///
    /// The smallest training subset over all folds is `len() - max_fold_size()`.
    #[inline]
    pub fn max_fold_size(&self) -> usize {
        self.assignment.len().div_ceil(self.k)
    }

    /// Split record indices into (training, held-out) sets for one fold.
    ///
    /// Training records are every record whose fold id differs from `fold`.
    /// The index buffers are cleared first; capacity is retained across calls.
    pub fn split_into(&self, fold: usize, train: &mut Vec<usize>, held_out: &mut Vec<usize>) {
        train.clear();
        held_out.clear();
        for (record, &id) in self.assignment.iter().enumerate() {
            if id == fold {
                held_out.push(record);
            } else {
                train.push(record);
            }
        }
    }
}
