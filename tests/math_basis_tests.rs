#![cfg(feature = "dev")]
//! Tests for polynomial basis expansion and column standardization.

use approx::assert_relative_eq;

use polycv_rs::internals::math::basis::{
    design_row, gram_matrix, moment_vector, power_matrix,
};
use polycv_rs::internals::math::scaling::ColumnScaler;

// ============================================================================
// Basis Expansion
// ============================================================================

#[test]
fn test_design_row_powers() {
    let mut row = [0.0f64; 4];
    design_row(2.0, &mut row);
    assert_eq!(row, [2.0, 4.0, 8.0, 16.0]);
}

#[test]
fn test_design_row_degree_one() {
    let mut row = [0.0f64; 1];
    design_row(-3.0, &mut row);
    assert_eq!(row, [-3.0]);
}

#[test]
fn test_power_matrix_column_major() {
    let xs = [1.0f64, 2.0, 3.0];
    let matrix = power_matrix(&xs, 2);

    // Column 0: x, column 1: x²
    assert_eq!(matrix, vec![1.0, 2.0, 3.0, 1.0, 4.0, 9.0]);
}

// ============================================================================
// Normal Equation Assembly
// ============================================================================

#[test]
fn test_gram_matrix_hand_computed() {
    // Two columns [1, 2] and [3, 4]
    let z = [1.0f64, 2.0, 3.0, 4.0];
    let gram = gram_matrix(&z, 2, 2);

    assert_relative_eq!(gram[0], 5.0); // col0·col0
    assert_relative_eq!(gram[1], 11.0); // col0·col1
    assert_relative_eq!(gram[2], 11.0); // symmetric
    assert_relative_eq!(gram[3], 25.0); // col1·col1
}

#[test]
fn test_moment_vector_hand_computed() {
    let z = [1.0f64, 2.0, 3.0, 4.0];
    let y = [1.0f64, 1.0];
    let moment = moment_vector(&z, &y, 2, 2);

    assert_relative_eq!(moment[0], 3.0);
    assert_relative_eq!(moment[1], 7.0);
}

// ============================================================================
// Standardization
// ============================================================================

#[test]
fn test_scaler_zero_mean_unit_variance() {
    let mut z = vec![1.0f64, 2.0, 3.0];
    let scaler = ColumnScaler::fit_transform(&mut z, 3, 1);

    assert_relative_eq!(scaler.means[0], 2.0);
    assert_relative_eq!(scaler.scales[0], (2.0f64 / 3.0).sqrt());

    // Standardized column sums to zero and has Σz² = n.
    let sum: f64 = z.iter().sum();
    let sq_sum: f64 = z.iter().map(|v| v * v).sum();
    assert_relative_eq!(sum, 0.0, epsilon = 1e-12);
    assert_relative_eq!(sq_sum, 3.0, epsilon = 1e-12);
}

#[test]
fn test_scaler_constant_column_guard() {
    let mut z = vec![4.0f64, 4.0, 4.0];
    let scaler = ColumnScaler::fit_transform(&mut z, 3, 1);

    assert_relative_eq!(scaler.scales[0], 1.0);
    assert!(z.iter().all(|&v| v == 0.0));
}

#[test]
fn test_scaler_transform_term_matches_training_transform() {
    let raw = [1.0f64, 2.0, 3.0, 4.0];
    let mut z = raw.to_vec();
    let scaler = ColumnScaler::fit_transform(&mut z, 4, 1);

    for (i, &v) in raw.iter().enumerate() {
        assert_relative_eq!(scaler.transform_term(0, v), z[i], epsilon = 1e-12);
    }
}

#[test]
fn test_scaler_multiple_columns() {
    // Column 0: [1, 2, 3], column 1: [10, 20, 30]
    let mut z = vec![1.0f64, 2.0, 3.0, 10.0, 20.0, 30.0];
    let scaler = ColumnScaler::fit_transform(&mut z, 3, 2);

    assert_eq!(scaler.num_columns(), 2);
    assert_relative_eq!(scaler.means[1], 20.0);

    // Both standardized columns are identical up to rounding.
    for i in 0..3 {
        assert_relative_eq!(z[i], z[3 + i], epsilon = 1e-12);
    }
}
