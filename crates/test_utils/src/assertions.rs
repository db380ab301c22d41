//! Custom Test Assertions
//!
//! Assertion helpers for validation outcomes that report the rule code and
//! message on failure instead of a bare `Err(..)` debug dump.

use domain_lodgement::{LodgementError, RuleCode};

/// Asserts that validation failed, returning the error
///
/// # Panics
///
/// Panics if the result is `Ok`
pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T, LodgementError>) -> LodgementError {
    match result {
        Ok(value) => panic!("Expected rejection, but validation accepted {:?}", value),
        Err(e) => e,
    }
}

/// Asserts that validation failed with the given top-level rule code
pub fn assert_rejected_with<T: std::fmt::Debug>(result: Result<T, LodgementError>, expected: RuleCode) -> LodgementError {
    let err = assert_rejected(result);
    assert_eq!(
        err.rule_code(),
        expected,
        "Expected {}, got {} ({})",
        expected,
        err.code(),
        err
    );
    err
}

/// Asserts that validation failed and that the innermost cause has this code
pub fn assert_root_cause<T: std::fmt::Debug>(result: Result<T, LodgementError>, expected: RuleCode) -> LodgementError {
    let err = assert_rejected(result);
    assert_eq!(
        err.root_cause().rule_code(),
        expected,
        "Expected root cause {}, got {} ({})",
        expected,
        err.root_cause().code(),
        err
    );
    err
}

/// Asserts that a result is `Ok`, reporting the rule code otherwise
pub fn assert_accepted<T>(result: Result<T, LodgementError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected acceptance, got {}: {}", e.code(), e),
    }
}
