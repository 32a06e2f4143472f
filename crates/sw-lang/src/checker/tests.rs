use std::time::Duration;

use super::*;
use crate::ast::WindowSpec;
use crate::duration::DurationValue;
use crate::parser::parse_window;

fn check_str(input: &str) -> Vec<CheckError> {
    check_window(&parse_window(input).unwrap())
}

// -----------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------

#[test]
fn valid_hopping_is_clean() {
    assert!(check_str("HOPPING ( SIZE 10 SECONDS , ADVANCE BY 2 SECONDS )").is_empty());
}

#[test]
fn advance_exceeding_size_is_error_with_location() {
    let errs = check_str("  HOPPING ( SIZE 2 SECONDS , ADVANCE BY 5 SECONDS )");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].severity, Severity::Error);
    assert_eq!(errs[0].location, Some(NodeLocation::new(1, 3)));
    assert_eq!(
        errs[0].error,
        Some(WindowError::InvalidAdvance {
            size_ms: 2_000,
            advance_ms: 5_000,
        })
    );
    assert!(errs[0].to_string().starts_with("error at 1:3: invalid advance"));
}

#[test]
fn zero_gap_session_is_error() {
    let errs = check_str("SESSION ( 0 SECONDS )");
    assert_eq!(errs.len(), 1);
    assert_eq!(
        errs[0].error,
        Some(WindowError::InvalidWindowSize { field: "gap" })
    );
    assert!(has_errors(&errs));
}

#[test]
fn zero_tumbling_is_error() {
    let errs = check_str("TUMBLING ( SIZE 0 MINUTES )");
    assert!(matches!(
        errs[0].error,
        Some(WindowError::InvalidWindowSize { field: "size" })
    ));
}

#[test]
fn overflowing_duration_is_error() {
    let errs = check_str("TUMBLING ( SIZE 18446744073709551615 DAYS )");
    assert!(matches!(
        errs[0].error,
        Some(WindowError::DurationOverflow { .. })
    ));
}

#[test]
fn unlocated_node_renders_without_position() {
    let expr = WindowExpression::new(WindowSpec::tumbling(DurationValue::seconds(0)));
    let errs = check_window(&expr);
    assert_eq!(errs[0].location, None);
    assert!(errs[0].to_string().starts_with("error: "));
}

// -----------------------------------------------------------------------
// Size cap
// -----------------------------------------------------------------------

#[test]
fn max_window_size_rejects_larger_windows() {
    let opts = CheckOptions {
        max_window_size: Some(Duration::from_secs(3600)),
        deny_warnings: false,
    };
    let expr = parse_window("TUMBLING ( SIZE 2 HOURS )").unwrap();
    let errs = check_window_with(&expr, &opts);
    assert_eq!(
        errs[0].error,
        Some(WindowError::ExceedsLimit {
            field: "size",
            millis: 7_200_000,
            max_ms: 3_600_000,
        })
    );

    let expr = parse_window("SESSION ( 60 MINUTES )").unwrap();
    assert!(check_window_with(&expr, &opts).is_empty());

    let expr = parse_window("SESSION ( 61 MINUTES )").unwrap();
    let errs = check_window_with(&expr, &opts);
    assert!(matches!(
        errs[0].error,
        Some(WindowError::ExceedsLimit { field: "gap", .. })
    ));
}

// -----------------------------------------------------------------------
// Lints
// -----------------------------------------------------------------------

#[test]
fn lint_advance_equals_size() {
    let errs = check_str("HOPPING ( SIZE 1 MINUTE , ADVANCE BY 60 SECONDS )");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].severity, Severity::Warning);
    assert!(errs[0].message.contains("TUMBLING ( SIZE 1 MINUTES )"), "{}", errs[0]);
    assert!(!has_errors(&errs));
}

#[test]
fn lint_uneven_overlap() {
    let errs = check_str("HOPPING ( SIZE 5 SECONDS , ADVANCE BY 2 SECONDS )");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].severity, Severity::Warning);
    assert!(errs[0].message.contains("2 or 3 windows"), "{}", errs[0]);
}

#[test]
fn lints_skipped_when_invalid() {
    // invalid (advance > size) must only report the error, not lints
    let errs = check_str("HOPPING ( SIZE 3 SECONDS , ADVANCE BY 7 SECONDS )");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].severity, Severity::Error);
}

#[test]
fn deny_warnings_promotes() {
    let opts = CheckOptions {
        max_window_size: None,
        deny_warnings: true,
    };
    let expr = parse_window("HOPPING ( SIZE 5 SECONDS , ADVANCE BY 5 SECONDS )").unwrap();
    let errs = check_window_with(&expr, &opts);
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].severity, Severity::Error);
    assert!(has_errors(&errs));
}

#[test]
fn non_hopping_windows_have_no_lints() {
    assert!(check_str("TUMBLING ( SIZE 7 SECONDS )").is_empty());
    assert!(check_str("SESSION ( 7 SECONDS )").is_empty());
}
