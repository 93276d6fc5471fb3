#![cfg(feature = "dev")]
//! Tests for seeded fold assignment.
//!
//! These tests verify the fold-plan invariants the rest of the crate depends
//! on:
//! - Every record lands in exactly one fold
//! - Fold sizes differ by at most one record
//! - Identical (n, k, seed) produces an identical assignment
//!
//! ## Test Organization
//!
//! 1. **Coverage** - Every record assigned, counts add up
//! 2. **Balance** - Near-equal fold sizes
//! 3. **Determinism** - Seed reproducibility
//! 4. **Bounds** - Invalid fold counts rejected
//! 5. **Splitting** - Train/held-out index sets

use polycv_rs::internals::primitives::errors::SelectError;
use polycv_rs::internals::primitives::folds::FoldPlan;

// ============================================================================
// Coverage
// ============================================================================

/// Every record index appears in exactly one fold.
#[test]
fn test_every_record_in_exactly_one_fold() {
    let plan = FoldPlan::assign(23, 4, 7).unwrap();

    let mut counts = vec![0usize; 23];
    for fold in 0..plan.k() {
        let mut train = Vec::new();
        let mut held_out = Vec::new();
        plan.split_into(fold, &mut train, &mut held_out);
        for idx in held_out {
            counts[idx] += 1;
        }
    }

    assert!(counts.iter().all(|&c| c == 1));
}

/// Fold sizes sum to the record count.
#[test]
fn test_fold_sizes_sum_to_n() {
    let plan = FoldPlan::assign(17, 5, 123).unwrap();
    assert_eq!(plan.fold_sizes().iter().sum::<usize>(), 17);
}

// ============================================================================
// Balance
// ============================================================================

/// Fold sizes differ by at most one record when k does not divide n.
#[test]
fn test_fold_sizes_differ_by_at_most_one() {
    let plan = FoldPlan::assign(10, 3, 42).unwrap();
    let sizes = plan.fold_sizes();

    let min = *sizes.iter().min().unwrap();
    let max = *sizes.iter().max().unwrap();
    assert!(max - min <= 1);
    assert_eq!(max, 4);
    assert_eq!(min, 3);
}

/// n=10, k=5 yields five folds of exactly 2 records, for any seed.
#[test]
fn test_ten_records_five_folds_of_two() {
    let plan = FoldPlan::assign(10, 5, 42).unwrap();
    assert_eq!(plan.fold_sizes(), vec![2, 2, 2, 2, 2]);
}

/// k = n yields singleton folds (leave-one-out shape).
#[test]
fn test_k_equals_n() {
    let plan = FoldPlan::assign(6, 6, 9).unwrap();
    assert!(plan.fold_sizes().iter().all(|&s| s == 1));
}

/// Largest fold size is ⌈n / k⌉.
#[test]
fn test_max_fold_size() {
    let plan = FoldPlan::assign(10, 3, 0).unwrap();
    assert_eq!(plan.max_fold_size(), 4);

    let plan = FoldPlan::assign(12, 3, 0).unwrap();
    assert_eq!(plan.max_fold_size(), 4);
}

// ============================================================================
// Determinism
// ============================================================================

/// The same (n, k, seed) always produces the identical assignment.
#[test]
fn test_same_seed_same_assignment() {
    let a = FoldPlan::assign(50, 5, 42).unwrap();
    let b = FoldPlan::assign(50, 5, 42).unwrap();

    for record in 0..50 {
        assert_eq!(a.fold_id(record), b.fold_id(record));
    }
}

/// Different seeds shuffle records into different folds.
#[test]
fn test_different_seed_different_assignment() {
    let a = FoldPlan::assign(50, 5, 1).unwrap();
    let b = FoldPlan::assign(50, 5, 2).unwrap();

    let differs = (0..50).any(|record| a.fold_id(record) != b.fold_id(record));
    assert!(differs);
}

// ============================================================================
// Bounds
// ============================================================================

/// k greater than n leaves a fold empty and is rejected outright.
#[test]
fn test_k_greater_than_n_rejected() {
    let err = FoldPlan::assign(10, 11, 42).unwrap_err();
    assert_eq!(err, SelectError::InvalidFoldCount { k: 11, n: 10 });
}

/// Fewer than 2 folds is not cross-validation.
#[test]
fn test_k_below_two_rejected() {
    assert!(FoldPlan::assign(10, 1, 42).is_err());
    assert!(FoldPlan::assign(10, 0, 42).is_err());
}

// ============================================================================
// Splitting
// ============================================================================

/// Train and held-out sets are disjoint and cover every record.
#[test]
fn test_split_disjoint_and_complete() {
    let plan = FoldPlan::assign(11, 4, 99).unwrap();
    let mut train = Vec::new();
    let mut held_out = Vec::new();

    for fold in 0..plan.k() {
        plan.split_into(fold, &mut train, &mut held_out);

        assert_eq!(train.len() + held_out.len(), 11);
        for idx in &held_out {
            assert!(!train.contains(idx));
            assert_eq!(plan.fold_id(*idx), fold);
        }
        for idx in &train {
            assert_ne!(plan.fold_id(*idx), fold);
        }
    }
}

/// Split buffers are recycled: contents reflect only the latest fold.
#[test]
fn test_split_buffers_recycled() {
    let plan = FoldPlan::assign(9, 3, 5).unwrap();
    let mut train = Vec::new();
    let mut held_out = Vec::new();

    plan.split_into(0, &mut train, &mut held_out);
    let first_len = held_out.len();
    plan.split_into(1, &mut train, &mut held_out);

    assert_eq!(train.len() + held_out.len(), 9);
    assert!(held_out.len() <= first_len + 1);
}
