//! Error Tests

use std::error::Error as _;
use weave_domain::error::Error;

#[test]
fn test_contract_violation_message() {
    let error = Error::contract_violation("caching", "calc::Calc::name(str)", "needs one i64");

    assert_eq!(
        error.to_string(),
        "Contract violation by advice 'caching' on calc::Calc::name(str): needs one i64"
    );
}

#[test]
fn test_target_failure_detection() {
    assert!(Error::target("boom").is_target_failure());
    assert!(!Error::internal("boom").is_target_failure());
    assert!(!Error::pointcut_mismatch("d", "r").is_target_failure());
}

#[test]
fn test_target_with_source_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
    let error = Error::target_with_source("read failed", io_error);

    assert_eq!(error.to_string(), "Target failure: read failed");
    assert_eq!(error.source().map(ToString::to_string), Some("disk gone".to_string()));
}

#[test]
fn test_method_not_found_message() {
    let error = Error::method_not_found("calc::RecCalculator", "sqrt");
    assert_eq!(error.to_string(), "Method not found: calc::RecCalculator::sqrt");
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io_error.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}
