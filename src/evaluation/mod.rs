//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores candidates on data they were not fitted on:
//! - K-fold cross-validation (train on k−1 folds, score the held-out fold)
//! - Single train/validation holdout split
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// K-fold cross-validation scoring and candidate selection.
pub mod cv;

/// Single train/validation holdout evaluation.
pub mod holdout;
