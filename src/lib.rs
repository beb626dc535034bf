//! # Motion Error Codes
//!
//! Diagnostic code catalog for motion-control firmware (motors, sensors,
//! communication links, configuration memory, safety chain).
//!
//! ## Design Philosophy
//!
//! 1. **Codes are compact integers** on the serial link; text is looked up
//!    on whichever side renders it
//! 2. **Numbers never change** once assigned, gaps are kept
//! 3. **Lookups are total**: every `u16` has a description and a severity
//! 4. **Severity and description are separate** so callers choose the line
//!    layout and severity policy can change without touching message text
//!
//! ## Quick Start
//!
//! ```rust
//! use motion_error_codes::{describe, severity_of, ErrorCode, Severity};
//!
//! assert_eq!(describe(100), "System Overheat");
//! assert_eq!(severity_of(100), Severity::Fatal);
//!
//! // Numbers outside the catalog still render.
//! assert_eq!(describe(9999), "Unknown Error");
//! assert_eq!(severity_of(9999), Severity::Error);
//!
//! // Typed access
//! let code = ErrorCode::try_from(301u16).unwrap();
//! assert_eq!(code.to_string(), "E-MOT-301");
//! ```
//!
//! ## Report Lines
//!
//! ```rust
//! use motion_error_codes::{Report, ReportStyle};
//!
//! let mut line = String::new();
//! Report::new(900).write_to(&mut line, ReportStyle::DECORATED).unwrap();
//! assert_eq!(line, "❌ FATAL [E-SAF-900] Emergency Stop");
//! ```
//!
//! ## Features
//!
//! - `plain_labels`: default [`ReportStyle`] renders severities without glyphs

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod logging;
pub mod ring_buffer;

pub use codes::*;
pub use definitions::*;
pub use logging::*;
pub use ring_buffer::{ReportEntry, RingBufferLogger};

/// Catalog name reported by the firmware at startup.
pub const LIB_NAME: &str = "ErrorCodes";

/// Catalog revision. Bumped whenever a code is added.
pub const LIB_VERSION: &str = "1.0.4";

/// Date of the catalog revision (DD/MM/YYYY).
pub const LIB_DATE: &str = "09/04/2025";

/// Description returned for numbers outside the catalog.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown Error";

/// Severity returned for numbers outside the catalog.
///
/// Unknown numbers are surfaced as errors rather than dropped.
pub const DEFAULT_SEVERITY: Severity = Severity::Error;

/// Description for any number.
///
/// Returns [`UNKNOWN_DESCRIPTION`] for numbers not in the catalog.
#[inline]
pub const fn describe(code: u16) -> &'static str {
    match ErrorCode::from_code(code) {
        Some(code) => code.description(),
        None => UNKNOWN_DESCRIPTION,
    }
}

/// Severity for any number.
///
/// Returns [`DEFAULT_SEVERITY`] for numbers not in the catalog.
#[inline]
pub const fn severity_of(code: u16) -> Severity {
    match ErrorCode::from_code(code) {
        Some(code) => code.severity(),
        None => DEFAULT_SEVERITY,
    }
}

/// Glyph-decorated severity prefix for any number, e.g. `"❌ FATAL"`.
#[inline]
pub const fn severity_prefix(code: u16) -> &'static str {
    severity_of(code).decorated()
}
