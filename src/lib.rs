//! # polycv — Polynomial Regression Model Selection for Rust
//!
//! Selects the complexity of a polynomial regression model by k-fold
//! cross-validation, with optional ridge and lasso regularization over the
//! polynomial basis.
//!
//! ## What does it do?
//!
//! Given a numeric feature column and a numeric target column, the crate
//! compares a list of candidate model complexities — polynomial degrees,
//! optionally paired with a penalty strength — and reports which one
//! generalizes best:
//!
//! 1. Records are shuffled with a fixed seed and dealt into k near-equal
//!    folds (round-robin over the shuffled order).
//! 2. Each candidate is fitted k times, each time on k−1 folds, and scored
//!    by RMSE on the held-out fold.
//! 3. Per-candidate fold RMSEs are aggregated into a mean and a standard
//!    error, with every fold weighted equally.
//! 4. The candidate with the lowest mean RMSE wins; exact ties go to the
//!    less complex model.
//!
//! **Key properties:**
//! - Fully reproducible: the same seed, fold count, and dataset always
//!   produce the identical fold assignment — this is a contract, not an
//!   implementation detail.
//! - No silent omission: a candidate that fails numerically is excluded from
//!   the comparison *and reported*; a candidate that cannot be fitted at all
//!   (under-determined) aborts the run.
//! - Uneven folds (when k does not divide n) cannot bias the aggregate:
//!   folds enter the mean with equal weight, never weighted by size.
//!
//! ## Quick Start
//!
//! ```rust
//! use polycv_rs::prelude::*;
//!
//! // Feature (e.g. minimum temperature) and target (e.g. daily trip count)
//! let x: Vec<f64> = (0..24).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|&xi| 0.5 * xi * xi - 2.0 * xi + 3.0).collect();
//!
//! // Build the validator
//! let model = Selector::new()
//!     .folds(4)           // 4-fold cross-validation
//!     .seed(42)           // reproducible fold assignment
//!     .degrees(1..=4)     // candidate polynomial degrees
//!     .build()?;
//!
//! // Run selection
//! let result = model.select(&x, &y)?;
//!
//! println!("{}", result);
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! ```text
//! Selection Summary:
//!   Records: 24
//!   Folds: 4 (seed 42)
//!   Candidates: 4 scored, 0 excluded
//!
//!   Candidate                       Mean RMSE    Std Error
//!   ------------------------------------------------------
//!   degree 1                        20.135711     1.534844
//! * degree 2                         0.000000     0.000000
//!   degree 3                         0.000000     0.000000
//!   degree 4                         0.000001     0.000000
//! ```
//!
//! ### Regularization paths
//!
//! On a high-degree basis, the candidate axis can be the penalty strength
//! instead of the degree — one candidate per λ:
//!
//! ```rust
//! use polycv_rs::prelude::*;
//! # let x: Vec<f64> = (0..30).map(|i| i as f64 * 0.3).collect();
//! # let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi + 1.0).collect();
//!
//! let model = Selector::new()
//!     .folds(5)
//!     .seed(7)
//!     .ridge_path(10, &[0.01, 0.1, 1.0, 10.0])   // ridge on a degree-10 basis
//!     .lasso_path(10, &[0.01, 0.1, 1.0])         // lasso on the same basis
//!     .build()?;
//!
//! let result = model.select(&x, &y)?;
//! println!("selected: {}", result.best_candidate());
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! ### Holdout evaluation
//!
//! A single seeded train/validation split, reporting both RMSEs per
//! candidate — the quick look before committing to a full cross-validation:
//!
//! ```rust
//! use polycv_rs::prelude::*;
//! # let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
//! # let y: Vec<f64> = x.iter().map(|&xi| 3.0 * xi - 4.0).collect();
//!
//! let model = Selector::new().degrees(1..=3).build()?;
//! let report = model.holdout(&x, &y, 0.25)?;
//!
//! for row in &report.scores {
//!     println!(
//!         "{}: train {:.3}, validation {:.3}",
//!         row.candidate, row.train_rmse, row.validation_rmse
//!     );
//! }
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `select` returns a `Result<SelectionResult<T>, SelectError>`:
//!
//! - **`Ok(SelectionResult<T>)`**: the full comparison table, any exclusions,
//!   and the index of the selected candidate.
//! - **`Err(SelectError)`**: a configuration or input error (mismatched
//!   columns, fold count out of range, under-determined candidate, …) —
//!   surfaced immediately, with no partial result.
//!
//! ```rust
//! use polycv_rs::prelude::*;
//! # let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
//! # let y: Vec<f64> = x.clone();
//!
//! let model = Selector::new().folds(11).degrees(1..=2).build()?;
//!
//! // 11 folds on 10 records would leave a fold empty.
//! match model.select(&x, &y) {
//!     Ok(result) => println!("selected {}", result.best_candidate()),
//!     Err(SelectError::InvalidFoldCount { k, n }) => {
//!         eprintln!("cannot split {} records into {} folds", n, k);
//!     }
//!     Err(e) => eprintln!("selection failed: {}", e),
//! }
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter      | Default | Range            | Description                                   |
//! |----------------|---------|------------------|-----------------------------------------------|
//! | **folds**      | 5       | [2, n]           | Fold count for cross-validation               |
//! | **seed**       | 42      | any u64          | Shuffle seed (identical seed ⇒ identical folds) |
//! | **degrees**    | —       | [0, 30]          | Unpenalized candidate degrees                 |
//! | **ridge_path** | —       | λ ≥ 0, finite    | One ridge candidate per penalty strength      |
//! | **lasso_path** | —       | λ ≥ 0, finite    | One lasso candidate per penalty strength      |
//!
//! Candidates accumulate in insertion order; the comparison table preserves
//! that order.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polycv-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` and small candidate lists to keep the footprint down; the fold
//! shuffle uses an internal seeded generator, so behavior is identical with
//! and without `std`.
//!
//! ## References
//!
//! - Stone, M. (1974). "Cross-Validatory Choice and Assessment of Statistical
//!   Predictions"
//! - Hastie, T., Tibshirani, R. & Friedman, J. (2009). "The Elements of
//!   Statistical Learning", ch. 7 (model assessment and selection)
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the dataset and fold-plan types, the crate-wide error enum, and
// reusable scratch buffers.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the linear algebra backend, polynomial basis expansion, column
// standardization, and score metrics.
mod math;

// Layer 3: Algorithms - candidate model fitting.
//
// Contains polynomial regression via normal equations (OLS, ridge) and lasso
// coordinate descent.
mod algorithms;

// Layer 4: Evaluation - scoring on unseen data.
//
// Contains k-fold cross-validation scoring/selection and the holdout split.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains configuration validation, the run loop, and result assembly.
mod engine;

// High-level fluent API for model selection.
//
// Provides the `Selector` builder for configuring and running selection.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard model-selection prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use polycv_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Candidate, CandidateScore, CrossValidator, Exclusion, HoldoutResult, HoldoutScore,
        PolynomialFit, Regularizer, SelectError, SelectionResult, SelectorBuilder as Selector,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal fitting algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and selection.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
