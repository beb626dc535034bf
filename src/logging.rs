//! Report lines for reported codes.
//!
//! A [`Report`] is what the host (or the firmware's own console) prints when
//! a code comes in:
//!
//! ```text
//! ❌ FATAL [E-SYS-100] System Overheat axis='2'
//! ```
//!
//! # Properties
//!
//! - Total: any `u16` renders, unknown numbers use the catalog fallbacks
//! - `write_to` writes straight into the caller's `fmt::Write`
//! - Context values are truncated so a single report cannot grow without
//!   bound
//! - Up to four context pairs are stored inline (no heap)
//!
//! No global logger is installed. Callers decide where lines go (serial
//! console, host log file, on-device display) and whether glyphs are shown
//! via [`ReportStyle`].

use crate::{Category, ErrorCode, Severity, DEFAULT_SEVERITY, UNKNOWN_DESCRIPTION};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any context value in formatted output.
pub const MAX_FIELD_OUTPUT_LEN: usize = 256;

/// Appended to truncated values.
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Tag used in identifiers of numbers outside every band.
const UNKNOWN_PREFIX: &str = "UNK";

// ============================================================================
// Style
// ============================================================================

/// How severities are rendered.
///
/// The default shows glyphs (`❌ FATAL`). Building with the `plain_labels`
/// feature flips the default to bare labels (`FATAL`) for consoles that
/// cannot render emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    /// Prefix the severity label with its glyph.
    pub glyphs: bool,
}

impl ReportStyle {
    /// Glyph-decorated severities.
    pub const DECORATED: Self = Self { glyphs: true };
    /// Bare severity labels.
    pub const PLAIN: Self = Self { glyphs: false };

    /// Severity text for this style.
    #[inline]
    pub const fn severity_text(self, severity: Severity) -> &'static str {
        if self.glyphs {
            severity.decorated()
        } else {
            severity.label()
        }
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        if cfg!(feature = "plain_labels") {
            Self::PLAIN
        } else {
            Self::DECORATED
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// One reported code with optional context.
///
/// # Example
///
/// ```rust
/// use motion_error_codes::{Report, ReportStyle};
///
/// let report = Report::new(301).with_context("axis", "2");
/// let mut line = String::new();
/// report.write_to(&mut line, ReportStyle::PLAIN).unwrap();
/// assert_eq!(line, "FATAL [E-MOT-301] Motor Overcurrent axis='2'");
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    raw: u16,
    code: Option<ErrorCode>,
    context: SmallVec<[(&'static str, Cow<'static, str>); 4]>,
}

impl Report {
    /// Report a raw number as received from the wire.
    #[inline]
    pub fn new(raw: u16) -> Self {
        Self {
            raw,
            code: ErrorCode::from_code(raw),
            context: SmallVec::new(),
        }
    }

    /// Report a catalogued code.
    #[inline]
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            raw: code.code(),
            code: Some(code),
            context: SmallVec::new(),
        }
    }

    /// Attach a context pair (axis, measured value, command id, ...).
    #[inline]
    pub fn with_context(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Number as received.
    #[inline]
    pub const fn raw(&self) -> u16 {
        self.raw
    }

    /// Catalogued code, if the number is defined.
    #[inline]
    pub const fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Severity, with the catalog fallback for unknown numbers.
    #[inline]
    pub const fn severity(&self) -> Severity {
        match self.code {
            Some(code) => code.severity(),
            None => DEFAULT_SEVERITY,
        }
    }

    /// Description, with the catalog fallback for unknown numbers.
    #[inline]
    pub const fn description(&self) -> &'static str {
        match self.code {
            Some(code) => code.description(),
            None => UNKNOWN_DESCRIPTION,
        }
    }

    /// Category tag used in the identifier.
    fn prefix(&self) -> &'static str {
        match self.code {
            Some(code) => code.category().prefix(),
            None => Category::from_range(self.raw).map_or(UNKNOWN_PREFIX, Category::prefix),
        }
    }

    /// Write the identifier, e.g. `E-MOT-301` or `E-UNK-9999`.
    pub fn write_identifier(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "E-{}-{:03}", self.prefix(), self.raw)
    }

    /// Context pairs in insertion order. Values are not truncated here.
    #[inline]
    pub fn context(&self) -> &[(&'static str, Cow<'static, str>)] {
        &self.context
    }

    /// Write the report line.
    ///
    /// Context values longer than [`MAX_FIELD_OUTPUT_LEN`] bytes are cut on
    /// a character boundary and marked with [`TRUNCATION_INDICATOR`].
    pub fn write_to(&self, f: &mut impl fmt::Write, style: ReportStyle) -> fmt::Result {
        write!(f, "{} [", style.severity_text(self.severity()))?;
        self.write_identifier(f)?;
        write!(f, "] {}", self.description())?;

        for (key, value) in &self.context {
            write!(f, " {}='{}'", key, truncate_with_indicator(value))?;
        }

        Ok(())
    }
}

impl From<ErrorCode> for Report {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for Report {
    /// Renders with [`ReportStyle::default`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, ReportStyle::default())
    }
}

/// Truncate a value for display.
///
/// Returns a borrowed value when no truncation is needed.
pub(crate) fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    truncate_to_bytes(s, MAX_FIELD_OUTPUT_LEN, TRUNCATION_INDICATOR)
}

/// Truncate to at most `max_bytes`, respecting UTF-8 boundaries, with the
/// indicator counted inside the limit.
pub(crate) fn truncate_to_bytes<'a>(s: &'a str, max_bytes: usize, indicator: &'static str) -> Cow<'a, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }
    if max_bytes <= indicator.len() {
        // Indicators are ASCII, any cut is a boundary.
        return Cow::Borrowed(&indicator[..max_bytes]);
    }

    let mut idx = max_bytes - indicator.len();
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    if idx == 0 {
        return Cow::Borrowed(indicator);
    }

    let mut out = String::with_capacity(idx + indicator.len());
    out.push_str(&s[..idx]);
    out.push_str(indicator);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &Report, style: ReportStyle) -> String {
        let mut line = String::new();
        report.write_to(&mut line, style).unwrap();
        line
    }

    // ========================================================================
    // Line Format
    // ========================================================================

    #[test]
    fn decorated_line_for_known_code() {
        let report = Report::from_code(ErrorCode::SystemOverheat);
        assert_eq!(
            render(&report, ReportStyle::DECORATED),
            "❌ FATAL [E-SYS-100] System Overheat"
        );
    }

    #[test]
    fn plain_line_for_info_code() {
        let report = Report::new(800);
        assert_eq!(
            render(&report, ReportStyle::PLAIN),
            "INFO [E-MEM-800] Memory save successful"
        );
    }

    #[test]
    fn unknown_code_in_a_band_uses_band_prefix() {
        let report = Report::new(305);
        assert_eq!(report.code(), None);
        assert_eq!(
            render(&report, ReportStyle::PLAIN),
            "ERROR [E-MOT-305] Unknown Error"
        );
    }

    #[test]
    fn unknown_code_outside_bands() {
        let report = Report::new(9999);
        assert_eq!(report.severity(), Severity::Error);
        assert_eq!(
            render(&report, ReportStyle::DECORATED),
            "❌ ERROR [E-UNK-9999] Unknown Error"
        );
        let report = Report::new(7);
        assert_eq!(
            render(&report, ReportStyle::PLAIN),
            "ERROR [E-UNK-007] Unknown Error"
        );
    }

    #[test]
    fn context_pairs_render_in_order() {
        let report = Report::from(ErrorCode::MotorEndstopTriggered)
            .with_context("axis", "1")
            .with_context("position", format!("{}", 1520));
        assert_eq!(report.context().len(), 2);
        assert_eq!(
            render(&report, ReportStyle::PLAIN),
            "FATAL [E-MOT-315] Endstop Triggered axis='1' position='1520'"
        );
    }

    #[test]
    fn display_uses_default_style() {
        let report = Report::new(900);
        let expected = render(&report, ReportStyle::default());
        assert_eq!(report.to_string(), expected);
    }

    #[cfg(not(feature = "plain_labels"))]
    #[test]
    fn default_style_is_decorated() {
        assert_eq!(ReportStyle::default(), ReportStyle::DECORATED);
    }

    #[cfg(feature = "plain_labels")]
    #[test]
    fn plain_labels_feature_switches_default() {
        assert_eq!(ReportStyle::default(), ReportStyle::PLAIN);
    }

    // ========================================================================
    // Truncation
    // ========================================================================

    #[test]
    fn long_context_value_is_truncated() {
        let report = Report::new(401).with_context("reading", "9".repeat(MAX_FIELD_OUTPUT_LEN * 4));
        let line = render(&report, ReportStyle::PLAIN);
        assert!(line.contains(TRUNCATION_INDICATOR));
        assert!(line.len() < MAX_FIELD_OUTPUT_LEN + 64);
    }

    #[test]
    fn no_truncate_when_under_limit() {
        let truncated = truncate_with_indicator("short string");
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated, "short string");
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated.len(), MAX_FIELD_OUTPUT_LEN);
    }

    #[test]
    fn one_over_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 1);
        let truncated = truncate_with_indicator(&s);
        assert!(matches!(truncated, Cow::Owned(_)));
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn truncate_utf8_boundary() {
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn tiny_limit_returns_indicator_prefix() {
        let truncated = truncate_to_bytes("abcdefgh", 3, TRUNCATION_INDICATOR);
        assert_eq!(truncated, "...");
    }
}
