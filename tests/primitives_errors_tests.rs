#![cfg(feature = "dev")]

use polycv_rs::internals::primitives::errors::SelectError;

#[test]
fn test_select_error_display() {
    // EmptyInput
    let err = SelectError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // MismatchedInputs
    let err = SelectError::MismatchedInputs {
        x_len: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 points, y has 5"
    );

    // TooFewPoints
    let err = SelectError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 2");

    // InvalidNumericValue
    let err = SelectError::InvalidNumericValue("NaN detected".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: NaN detected");

    // InvalidFoldCount
    let err = SelectError::InvalidFoldCount { k: 11, n: 10 };
    assert_eq!(
        format!("{}", err),
        "Invalid fold count: 11 (must be in [2, 10] for 10 records)"
    );

    // InvalidDegree
    let err = SelectError::InvalidDegree(31);
    assert_eq!(
        format!("{}", err),
        "Invalid degree: 31 (exceeds supported maximum)"
    );

    // InvalidPenalty
    let err = SelectError::InvalidPenalty(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid penalty: -1 (must be finite and non-negative)"
    );

    // NoCandidates
    let err = SelectError::NoCandidates;
    assert_eq!(format!("{}", err), "No candidates to evaluate");

    // UnderdeterminedFit
    let err = SelectError::UnderdeterminedFit {
        degree: 5,
        needed: 6,
        available: 4,
    };
    assert_eq!(
        format!("{}", err),
        "Under-determined fit for degree 5: needs 6 training records, smallest training subset has 4"
    );

    // NumericalFailure
    let err = SelectError::NumericalFailure {
        detail: "solve failed".to_string(),
    };
    assert_eq!(format!("{}", err), "Numerical failure: solve failed");

    // NoViableCandidates
    let err = SelectError::NoViableCandidates { excluded: 3 };
    assert_eq!(
        format!("{}", err),
        "No viable candidates: all 3 were excluded by numerical failure"
    );

    // InvalidSplitRatio
    let err = SelectError::InvalidSplitRatio(1.5);
    assert_eq!(
        format!("{}", err),
        "Invalid split ratio: 1.5 (must be > 0 and < 1)"
    );

    // DuplicateParameter
    let err = SelectError::DuplicateParameter { parameter: "folds" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'folds' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_select_error_properties() {
    let err1 = SelectError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(
        err1,
        SelectError::NumericalFailure {
            detail: "foo".to_string()
        }
    );
}

#[cfg(feature = "std")]
#[test]
fn test_select_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<SelectError>();
}
