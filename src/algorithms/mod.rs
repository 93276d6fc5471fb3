//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the candidate models themselves: polynomial basis
//! regression fitted by ordinary least squares, ridge regression, or lasso
//! coordinate descent.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial regression fitting (OLS, ridge, lasso dispatch).
pub mod regression;
