//! Code vocabulary - severities, categories and the identity of a code.
//!
//! A reported code is a bare `u16` on the serial link. On the host it is
//! rendered as `"❌ FATAL [E-SYS-100] System Overheat"`: a severity prefix,
//! a stable identifier and a description.
//!
//! # Category Bands
//!
//! - **OK** (0): no error
//! - **SYS** (100-199): power, temperature, memory hardware
//! - **COM** (200-299): serial/I2C/SPI/USB links
//! - **MOT** (300-399): motor control, calibration, endstops
//! - **SEN** (400-499): sensors and load cells
//! - **USR** (500-599): user input validation
//! - **INF** (600-699): informational events
//! - **CMD** (700-799): commands received from the display MCU
//! - **MEM** (800-899): configuration persistence
//! - **SAF** (900-999): safety shutdowns
//!
//! # Zero-Allocation Guarantee
//!
//! Every lookup in this module is a `const fn` over a fixed `match`.
//! `Display` writes directly to the formatter; `to_string()` allocates in
//! user code only.

use crate::ErrorCode;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Severity
// ============================================================================

/// How urgently a reported code should be surfaced.
///
/// Ordered by urgency, so `Severity::Warning < Severity::Fatal` and the
/// worst of a set of reports is its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Status report; nothing is wrong.
    Info,
    /// Operation continues, attention advised.
    Warning,
    /// Operation refused or failed.
    Error,
    /// Machine must stop.
    Fatal,
}

impl Severity {
    /// All severities, least urgent first.
    pub const ALL: [Severity; 4] = [Self::Info, Self::Warning, Self::Error, Self::Fatal];

    /// Plain label, e.g. `"FATAL"`.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Display glyph shown in front of the label.
    ///
    /// ERROR and FATAL share the cross glyph.
    #[inline]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Warning => "⚠️",
            Self::Error | Self::Fatal => "❌",
        }
    }

    /// Glyph and label, e.g. `"❌ FATAL"`.
    #[inline]
    pub const fn decorated(self) -> &'static str {
        match self {
            Self::Info => "ℹ️ INFO",
            Self::Warning => "⚠️ WARNING",
            Self::Error => "❌ ERROR",
            Self::Fatal => "❌ FATAL",
        }
    }

    /// Parse a plain label. Case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Category
// ============================================================================

/// Subsystem a code belongs to.
///
/// Categories normally follow the hundreds band of the number. The catalog
/// may declare a code under a different category than its band (see
/// `ErrorCode::MemoryDisabled`); the declared category wins for defined
/// codes, and [`Category::from_range`] is only used for unknown numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Code 0.
    Success,
    /// 100-199.
    System,
    /// 200-299.
    Communication,
    /// 300-399.
    Motor,
    /// 400-499.
    Sensor,
    /// 500-599.
    UserInput,
    /// 600-699.
    Informational,
    /// 700-799.
    Command,
    /// 800-899.
    Memory,
    /// 900-999.
    Safety,
}

impl Category {
    /// All categories in band order.
    pub const ALL: [Category; 10] = [
        Self::Success,
        Self::System,
        Self::Communication,
        Self::Motor,
        Self::Sensor,
        Self::UserInput,
        Self::Informational,
        Self::Command,
        Self::Memory,
        Self::Safety,
    ];

    /// Identifier tag, as in `E-MOT-301`.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::System => "SYS",
            Self::Communication => "COM",
            Self::Motor => "MOT",
            Self::Sensor => "SEN",
            Self::UserInput => "USR",
            Self::Informational => "INF",
            Self::Command => "CMD",
            Self::Memory => "MEM",
            Self::Safety => "SAF",
        }
    }

    /// Human-readable name for dashboards.
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::System => "System",
            Self::Communication => "Communication",
            Self::Motor => "Motor Control",
            Self::Sensor => "Sensor",
            Self::UserInput => "User Input",
            Self::Informational => "Informational",
            Self::Command => "MCU Command",
            Self::Memory => "Memory",
            Self::Safety => "Safety",
        }
    }

    /// Classify a raw number by its hundreds band.
    ///
    /// Returns `None` for 1-99 and anything from 1000 up.
    #[inline]
    pub const fn from_range(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            100..=199 => Some(Self::System),
            200..=299 => Some(Self::Communication),
            300..=399 => Some(Self::Motor),
            400..=499 => Some(Self::Sensor),
            500..=599 => Some(Self::UserInput),
            600..=699 => Some(Self::Informational),
            700..=799 => Some(Self::Command),
            800..=899 => Some(Self::Memory),
            900..=999 => Some(Self::Safety),
            _ => None,
        }
    }

    /// Resolve an identifier tag such as `"MOT"`. Case-insensitive.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.prefix().eq_ignore_ascii_case(prefix))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Conversion Errors
// ============================================================================

/// A number that is not in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCodeError {
    /// The rejected number.
    pub value: u16,
}

impl fmt::Display for UnknownCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error code {} is not defined in the catalog", self.value)
    }
}

impl std::error::Error for UnknownCodeError {}

/// Failure to parse a code from text received over a serial link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCodeError {
    /// Input was empty or whitespace.
    Empty,
    /// Numeric part is not a valid `u16`.
    InvalidNumber,
    /// Looked like an identifier but was not `E-XXX-NNN`.
    MalformedIdentifier,
    /// Identifier tag does not match the code's category.
    PrefixMismatch {
        /// Tag of the code's declared category.
        expected: &'static str,
        /// Tag found in the input.
        found: String,
    },
    /// Well-formed number outside the catalog.
    Unknown(UnknownCodeError),
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty error code"),
            Self::InvalidNumber => f.write_str("error code is not a number in 0-65535"),
            Self::MalformedIdentifier => {
                f.write_str("malformed error identifier (expected E-XXX-NNN)")
            }
            Self::PrefixMismatch { expected, found } => {
                write!(f, "identifier tag {} does not match category {}", found, expected)
            }
            Self::Unknown(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for ParseCodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unknown(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownCodeError> for ParseCodeError {
    fn from(err: UnknownCodeError) -> Self {
        Self::Unknown(err)
    }
}

// ============================================================================
// ErrorCode Conversions
// ============================================================================

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = UnknownCodeError;

    #[inline]
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::from_code(value).ok_or(UnknownCodeError { value })
    }
}

impl fmt::Display for ErrorCode {
    /// Writes the stable identifier, e.g. `E-MOT-301`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E-{}-{:03}", self.category().prefix(), self.code())
    }
}

impl FromStr for ErrorCode {
    type Err = ParseCodeError;

    /// Accepts a bare number (`"301"`) or an identifier (`"E-MOT-301"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCodeError::Empty);
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            let value: u16 = s.parse().map_err(|_| ParseCodeError::InvalidNumber)?;
            return Ok(ErrorCode::try_from(value)?);
        }

        let mut parts = s.split('-');
        let (Some(head), Some(tag), Some(number), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseCodeError::MalformedIdentifier);
        };
        if !head.eq_ignore_ascii_case("E") || tag.is_empty() {
            return Err(ParseCodeError::MalformedIdentifier);
        }
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCodeError::MalformedIdentifier);
        }

        let value: u16 = number.parse().map_err(|_| ParseCodeError::InvalidNumber)?;
        let code = ErrorCode::try_from(value)?;
        let expected = code.category().prefix();
        if !expected.eq_ignore_ascii_case(tag) {
            return Err(ParseCodeError::PrefixMismatch {
                expected,
                found: tag.to_owned(),
            });
        }
        Ok(code)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Severity Tests
    // ========================================================================

    #[test]
    fn severity_is_ordered_by_urgency() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn severity_decoration_matches_glyph_and_label() {
        for severity in Severity::ALL {
            let expected = format!("{} {}", severity.glyph(), severity.label());
            assert_eq!(severity.decorated(), expected);
        }
    }

    #[test]
    fn severity_from_label_is_case_insensitive() {
        assert_eq!(Severity::from_label("fatal"), Some(Severity::Fatal));
        assert_eq!(Severity::from_label(" WARNING "), Some(Severity::Warning));
        assert_eq!(Severity::from_label("ERR"), None);
    }

    // ========================================================================
    // Category Tests
    // ========================================================================

    #[test]
    fn category_band_boundaries() {
        assert_eq!(Category::from_range(0), Some(Category::Success));
        assert_eq!(Category::from_range(1), None);
        assert_eq!(Category::from_range(99), None);
        assert_eq!(Category::from_range(100), Some(Category::System));
        assert_eq!(Category::from_range(399), Some(Category::Motor));
        assert_eq!(Category::from_range(730), Some(Category::Command));
        assert_eq!(Category::from_range(999), Some(Category::Safety));
        assert_eq!(Category::from_range(1000), None);
    }

    #[test]
    fn category_prefixes_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_prefix(category.prefix()), Some(category));
        }
        assert_eq!(Category::from_prefix("mot"), Some(Category::Motor));
        assert_eq!(Category::from_prefix("XYZ"), None);
    }

    // ========================================================================
    // Identifier Tests
    // ========================================================================

    #[test]
    fn identifier_display_is_zero_padded() {
        assert_eq!(ErrorCode::NoError.to_string(), "E-OK-000");
        assert_eq!(ErrorCode::SystemOverheat.to_string(), "E-SYS-100");
        assert_eq!(ErrorCode::MotorOvercurrent.to_string(), "E-MOT-301");
        assert_eq!(ErrorCode::MemoryDisabled.to_string(), "E-MEM-730");
    }

    #[test]
    fn try_from_rejects_unknown_numbers() {
        assert_eq!(ErrorCode::try_from(900u16), Ok(ErrorCode::EmergencyStop));
        assert_eq!(
            ErrorCode::try_from(600u16),
            Err(UnknownCodeError { value: 600 })
        );
        assert_eq!(u16::from(ErrorCode::HardwareLimitExceeded), 901);
    }

    #[test]
    fn parse_accepts_numbers_and_identifiers() {
        assert_eq!("301".parse::<ErrorCode>(), Ok(ErrorCode::MotorOvercurrent));
        assert_eq!(" 0 ".parse::<ErrorCode>(), Ok(ErrorCode::NoError));
        assert_eq!("E-MOT-301".parse::<ErrorCode>(), Ok(ErrorCode::MotorOvercurrent));
        assert_eq!("e-saf-900".parse::<ErrorCode>(), Ok(ErrorCode::EmergencyStop));
        assert_eq!("E-MEM-730".parse::<ErrorCode>(), Ok(ErrorCode::MemoryDisabled));
    }

    #[test]
    fn parse_reports_specific_failures() {
        assert_eq!("".parse::<ErrorCode>(), Err(ParseCodeError::Empty));
        assert_eq!("70000".parse::<ErrorCode>(), Err(ParseCodeError::InvalidNumber));
        assert_eq!(
            "9999".parse::<ErrorCode>(),
            Err(ParseCodeError::Unknown(UnknownCodeError { value: 9999 }))
        );
        assert_eq!(
            "E-MOT".parse::<ErrorCode>(),
            Err(ParseCodeError::MalformedIdentifier)
        );
        assert_eq!(
            "X-MOT-301".parse::<ErrorCode>(),
            Err(ParseCodeError::MalformedIdentifier)
        );
        assert_eq!(
            "E-SYS-301".parse::<ErrorCode>(),
            Err(ParseCodeError::PrefixMismatch {
                expected: "MOT",
                found: "SYS".to_owned(),
            })
        );
    }

    #[test]
    fn parse_error_exposes_unknown_source() {
        use std::error::Error;

        let err = "9999".parse::<ErrorCode>().unwrap_err();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("9999"));
    }
}
