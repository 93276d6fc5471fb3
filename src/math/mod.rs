//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Linear algebra backend for solving normal equations
//! - Polynomial basis expansion
//! - Column standardization
//! - Score metrics (RMSE and friends)
//!
//! These are reusable mathematical building blocks with no selection-specific
//! logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend abstraction.
pub mod linalg;

/// Polynomial basis expansion.
pub mod basis;

/// Column standardization for penalized fits.
pub mod scaling;

/// Score metrics: RMSE, MAE, R², mean, standard error.
pub mod metrics;
