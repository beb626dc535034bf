//! Property-based tests for motion_error_codes
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use motion_error_codes::{
    describe, ring_buffer::RingBufferLogger, severity_of, severity_prefix, ErrorCode,
    ParseCodeError, Report, ReportStyle, Severity, UNKNOWN_DESCRIPTION,
};
use proptest::prelude::*;

fn any_defined_code() -> impl Strategy<Value = ErrorCode> {
    prop::sample::select(ErrorCode::ALL.to_vec())
}

fn any_undefined_number() -> impl Strategy<Value = u16> {
    any::<u16>().prop_filter("must be outside the catalog", |n| {
        ErrorCode::from_code(*n).is_none()
    })
}

// ============================================================================
// TOTALITY PROPERTIES
// ============================================================================

proptest! {
    /// Every u16 has a non-empty description and one of the four severities.
    #[test]
    fn lookups_are_total(raw in any::<u16>()) {
        prop_assert!(!describe(raw).is_empty());
        prop_assert!(Severity::ALL.contains(&severity_of(raw)));
        prop_assert!(severity_prefix(raw).ends_with(severity_of(raw).label()));
    }

    /// Defined codes never use the fallback text.
    #[test]
    fn defined_codes_have_real_descriptions(code in any_defined_code()) {
        prop_assert_ne!(describe(code.code()), UNKNOWN_DESCRIPTION);
        prop_assert_eq!(describe(code.code()), code.description());
        prop_assert_eq!(severity_of(code.code()), code.severity());
    }

    /// Undefined numbers fall back to "Unknown Error" / ERROR.
    #[test]
    fn undefined_numbers_fall_back(raw in any_undefined_number()) {
        prop_assert_eq!(describe(raw), UNKNOWN_DESCRIPTION);
        prop_assert_eq!(severity_of(raw), Severity::Error);
    }

    /// Lookups are referentially transparent.
    #[test]
    fn lookups_are_deterministic(raw in any::<u16>()) {
        prop_assert_eq!(describe(raw), describe(raw));
        prop_assert_eq!(severity_of(raw), severity_of(raw));
    }
}

// ============================================================================
// IDENTIFIER PROPERTIES
// ============================================================================

proptest! {
    /// Identifier and bare number both parse back to the same code.
    #[test]
    fn identifier_parses_back(code in any_defined_code()) {
        prop_assert_eq!(code.to_string().parse::<ErrorCode>(), Ok(code));
        prop_assert_eq!(code.code().to_string().parse::<ErrorCode>(), Ok(code));
        prop_assert_eq!(ErrorCode::try_from(u16::from(code)), Ok(code));
    }

    /// Parsing arbitrary text never panics.
    #[test]
    fn parse_never_panics(s in "\\PC{0,64}") {
        let _ = s.parse::<ErrorCode>();
    }

    /// Undefined numbers are rejected as unknown, not as malformed.
    #[test]
    fn undefined_numbers_parse_as_unknown(raw in any_undefined_number()) {
        let result = raw.to_string().parse::<ErrorCode>();
        prop_assert!(matches!(result, Err(ParseCodeError::Unknown(e)) if e.value == raw));
    }
}

// ============================================================================
// REPORT PROPERTIES
// ============================================================================

proptest! {
    /// Every number renders a line carrying its severity and description.
    #[test]
    fn report_line_contains_lookups(raw in any::<u16>()) {
        let mut line = String::new();
        Report::new(raw).write_to(&mut line, ReportStyle::PLAIN).unwrap();

        prop_assert!(line.starts_with(severity_of(raw).label()));
        prop_assert!(line.ends_with(describe(raw)));
        let number = raw.to_string();
        prop_assert!(line.contains(&number));
    }

    /// Context values are bounded in the rendered line.
    #[test]
    fn report_context_is_bounded(value in "\\PC{0,2000}") {
        let mut line = String::new();
        Report::new(401)
            .with_context("reading", value)
            .write_to(&mut line, ReportStyle::DECORATED)
            .unwrap();

        prop_assert!(std::str::from_utf8(line.as_bytes()).is_ok());
        prop_assert!(line.len() < motion_error_codes::MAX_FIELD_OUTPUT_LEN + 64);
    }
}

// ============================================================================
// HISTORY PROPERTIES
// ============================================================================

proptest! {
    /// The history keeps exactly the newest `capacity` entries.
    #[test]
    fn history_keeps_newest(
        capacity in 1usize..32,
        numbers in prop::collection::vec(any::<u16>(), 0..100),
    ) {
        let history = RingBufferLogger::new(capacity, 64);
        for &n in &numbers {
            history.log(n, "");
        }

        let kept = numbers.len().min(capacity);
        prop_assert_eq!(history.len(), kept);
        prop_assert_eq!(history.eviction_count() as usize, numbers.len() - kept);

        let expected: Vec<u16> = numbers.iter().rev().take(kept).copied().collect();
        let actual: Vec<u16> = history.get_all().iter().map(|e| e.raw).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Detail text never exceeds the per-entry limit and stays valid UTF-8.
    #[test]
    fn history_detail_is_bounded(limit in 0usize..128, detail in "\\PC{0,500}") {
        let history = RingBufferLogger::new(4, limit);
        history.log(900, &detail);

        let entry = &history.get_recent(1)[0];
        prop_assert!(entry.detail.len() <= limit);
        prop_assert_eq!(entry.size_bytes, entry.detail.len());
    }
}
