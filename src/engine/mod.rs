//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a selection run: it validates configuration and
//! data, builds the fold plan, drives the candidate loop, applies the
//! exclusion policy, and assembles the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast validation of configuration and input data.
pub mod validator;

/// Run orchestration.
pub mod executor;

/// Result types returned to callers.
pub mod output;
