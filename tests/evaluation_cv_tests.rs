#![cfg(feature = "dev")]
//! Tests for cross-validation scoring and candidate selection.
//!
//! These tests verify the aggregation contract (unweighted fold means,
//! standard errors) and the tie-breaking rules of `select_best`.

use approx::assert_relative_eq;

use polycv_rs::internals::evaluation::cv::{self, CandidateScore};
use polycv_rs::internals::primitives::buffer::FoldBuffer;
use polycv_rs::internals::primitives::dataset::Dataset;
use polycv_rs::internals::primitives::folds::FoldPlan;
use polycv_rs::prelude::*;

/// Deterministic "noisy" line: residuals alternate ±1.
fn wobbly_line(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 2.0 * xi + if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    (x, y)
}

// ============================================================================
// Aggregation
// ============================================================================

/// Mean RMSE is the unweighted arithmetic mean of the fold RMSEs, even when
/// fold sizes are uneven.
#[test]
fn test_mean_is_unweighted_fold_mean() {
    let (x, y) = wobbly_line(10);
    let dataset = Dataset::from_columns(&x, &y).unwrap();
    let plan = FoldPlan::assign(10, 3, 42).unwrap();
    let mut buffer = FoldBuffer::with_capacity(10);

    let row = cv::score_candidate(&dataset, &plan, &Candidate::degree(1), &mut buffer).unwrap();

    assert_eq!(row.fold_rmses.len(), 3);
    let manual_mean = row.fold_rmses.iter().sum::<f64>() / 3.0;
    assert_relative_eq!(row.mean_rmse, manual_mean, epsilon = 1e-12);
}

/// Every fold of the n=10, k=5, seed=42 scenario produces a finite RMSE for
/// a straight-line candidate.
#[test]
fn test_degree_one_finite_on_five_folds_of_two() {
    let (x, y) = wobbly_line(10);
    let dataset = Dataset::from_columns(&x, &y).unwrap();
    let plan = FoldPlan::assign(10, 5, 42).unwrap();
    let mut buffer = FoldBuffer::with_capacity(10);

    let row = cv::score_candidate(&dataset, &plan, &Candidate::degree(1), &mut buffer).unwrap();

    assert_eq!(row.fold_rmses.len(), 5);
    assert!(row.fold_rmses.iter().all(|r| r.is_finite()));
    assert!(row.std_error >= 0.0);
}

/// Standard error follows sample_std / √k over the fold RMSEs.
#[test]
fn test_std_error_matches_fold_spread() {
    let (x, y) = wobbly_line(12);
    let dataset = Dataset::from_columns(&x, &y).unwrap();
    let plan = FoldPlan::assign(12, 4, 7).unwrap();
    let mut buffer = FoldBuffer::with_capacity(12);

    let row = cv::score_candidate(&dataset, &plan, &Candidate::degree(1), &mut buffer).unwrap();

    let mean = row.fold_rmses.iter().sum::<f64>() / 4.0;
    let var: f64 = row
        .fold_rmses
        .iter()
        .map(|r| (r - mean) * (r - mean))
        .sum::<f64>()
        / 3.0;
    assert_relative_eq!(row.std_error, var.sqrt() / 2.0, epsilon = 1e-12);
}

// ============================================================================
// Selection
// ============================================================================

fn score_row(candidate: Candidate<f64>, mean_rmse: f64) -> CandidateScore<f64> {
    CandidateScore {
        candidate,
        fold_rmses: vec![mean_rmse; 3],
        mean_rmse,
        std_error: 0.0,
    }
}

#[test]
fn test_select_best_lowest_mean_wins() {
    let rows = vec![
        score_row(Candidate::degree(1), 3.0),
        score_row(Candidate::degree(2), 1.0),
        score_row(Candidate::degree(3), 2.0),
    ];
    assert_eq!(cv::select_best(&rows), Some(1));
}

/// Exact mean ties go to the lower degree, regardless of list order.
#[test]
fn test_select_best_tie_prefers_lower_degree() {
    let rows = vec![
        score_row(Candidate::degree(3), 1.0),
        score_row(Candidate::degree(2), 1.0),
    ];
    assert_eq!(cv::select_best(&rows), Some(1));
}

/// At equal degree, the stronger penalty is the simpler model.
#[test]
fn test_select_best_tie_prefers_stronger_penalty() {
    let rows = vec![
        score_row(Candidate::ridge(10, 0.1), 1.0),
        score_row(Candidate::ridge(10, 1.0), 1.0),
    ];
    assert_eq!(cv::select_best(&rows), Some(1));
}

/// Fully identical candidates fall back to the earlier position.
#[test]
fn test_select_best_tie_prefers_earlier_position() {
    let rows = vec![
        score_row(Candidate::degree(2), 1.0),
        score_row(Candidate::degree(2), 1.0),
    ];
    assert_eq!(cv::select_best(&rows), Some(0));
}

#[test]
fn test_select_best_empty_is_none() {
    let rows: Vec<CandidateScore<f64>> = Vec::new();
    assert_eq!(cv::select_best(&rows), None);
}

// ============================================================================
// Determinism
// ============================================================================

/// The same configuration scores to the same fold RMSEs, bit for bit.
#[test]
fn test_scoring_is_deterministic() {
    let (x, y) = wobbly_line(15);
    let dataset = Dataset::from_columns(&x, &y).unwrap();
    let plan = FoldPlan::assign(15, 5, 42).unwrap();

    let mut buffer = FoldBuffer::with_capacity(15);
    let a = cv::score_candidate(&dataset, &plan, &Candidate::degree(2), &mut buffer).unwrap();
    let b = cv::score_candidate(&dataset, &plan, &Candidate::degree(2), &mut buffer).unwrap();

    assert_eq!(a.fold_rmses, b.fold_rmses);
    assert_eq!(a.mean_rmse, b.mean_rmse);
}
