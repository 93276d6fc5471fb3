//! Error types for model selection.
//!
//! ## Purpose
//!
//! This module defines `SelectError`, the crate-wide error enum covering
//! structural input problems, configuration errors, and numerical failures.
//!
//! ## Design notes
//!
//! * **Two families**: Configuration errors abort a run immediately with no
//!   partial result; numerical failures are candidate-level and surface as
//!   exclusions in the result table.
//! * **Named fields**: Variants carry the offending values so messages can be
//!   rendered without extra context.
//! * **Hand-written Display**: No derive macros; `std::error::Error` is
//!   implemented behind the `std` feature.
//!
//! ## Invariants
//!
//! * Every variant renders a single-line, human-readable message.
//! * Messages state the constraint that was violated.
//!
//! ## Non-goals
//!
//! * This module does not decide recovery policy (handled by `engine`).
//! * This module does not capture backtraces or error chains.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

/// Errors produced during configuration, validation, or candidate fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectError {
    /// Input columns are empty.
    EmptyInput,

    /// Feature and target columns have different lengths.
    MismatchedInputs {
        /// Length of the feature column.
        x_len: usize,
        /// Length of the target column.
        y_len: usize,
    },

    /// Fewer records than the minimum required.
    TooFewPoints {
        /// Number of records provided.
        got: usize,
        /// Minimum number of records required.
        min: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the inputs or
    /// parameters.
    InvalidNumericValue(String),

    /// The fold count is outside [2, n]; with k > n a fold would be empty.
    InvalidFoldCount {
        /// Requested fold count.
        k: usize,
        /// Number of records in the dataset.
        n: usize,
    },

    /// Polynomial degree above the supported maximum.
    InvalidDegree(usize),

    /// Penalty strength is negative or non-finite.
    InvalidPenalty(f64),

    /// The candidate list is empty.
    NoCandidates,

    /// A candidate requires more training records than the smallest training
    /// subset provides, making the fit under-determined.
    UnderdeterminedFit {
        /// Polynomial degree of the candidate.
        degree: usize,
        /// Coefficients the fit must determine (degree + 1).
        needed: usize,
        /// Records in the smallest training subset.
        available: usize,
    },

    /// The solver failed or produced non-finite output for one candidate.
    ///
    /// At the run level this excludes the candidate from the comparison
    /// table; the exclusion is reported in the result.
    NumericalFailure {
        /// Description of what went non-finite or failed.
        detail: String,
    },

    /// Every candidate was excluded by numerical failure.
    NoViableCandidates {
        /// Number of candidates excluded.
        excluded: usize,
    },

    /// Holdout validation fraction outside (0, 1).
    InvalidSplitRatio(f64),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::EmptyInput => write!(f, "Input arrays are empty"),
            SelectError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            SelectError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            SelectError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            SelectError::InvalidFoldCount { k, n } => {
                write!(
                    f,
                    "Invalid fold count: {} (must be in [2, {}] for {} records)",
                    k, n, n
                )
            }
            SelectError::InvalidDegree(degree) => {
                write!(f, "Invalid degree: {} (exceeds supported maximum)", degree)
            }
            SelectError::InvalidPenalty(lambda) => {
                write!(
                    f,
                    "Invalid penalty: {} (must be finite and non-negative)",
                    lambda
                )
            }
            SelectError::NoCandidates => write!(f, "No candidates to evaluate"),
            SelectError::UnderdeterminedFit {
                degree,
                needed,
                available,
            } => {
                write!(
                    f,
                    "Under-determined fit for degree {}: needs {} training records, smallest training subset has {}",
                    degree, needed, available
                )
            }
            SelectError::NumericalFailure { detail } => {
                write!(f, "Numerical failure: {}", detail)
            }
            SelectError::NoViableCandidates { excluded } => {
                write!(
                    f,
                    "No viable candidates: all {} were excluded by numerical failure",
                    excluded
                )
            }
            SelectError::InvalidSplitRatio(ratio) => {
                write!(
                    f,
                    "Invalid split ratio: {} (must be > 0 and < 1)",
                    ratio
                )
            }
            SelectError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SelectError {}
