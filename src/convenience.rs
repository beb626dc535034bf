//! Declarative macro for defining the code catalog.
//!
//! The catalog is written once, as category blocks of
//! `Name = (number, Severity, "description")` rows, and the macro expands it
//! into the `ErrorCode` enum plus every lookup over it. Keeping the table in
//! one place means the severity map and the description map cannot drift
//! apart: a code without a severity or a description does not compile.
//!
//! # Governance
//!
//! - Each variant's discriminant is its wire number, so two rows sharing a
//!   number are rejected by the compiler (duplicate discriminant).
//! - Every lookup is an exhaustive `match`; there is no fallback arm for a
//!   defined code.
//! - Fallbacks for numbers outside the table live in `from_code` only.

/// Define the `ErrorCode` enum from category blocks.
///
/// # Example
///
/// ```rust,ignore
/// define_error_codes! {
///     System => {
///         SystemOverheat     = (100, Fatal, "System Overheat"),
///         SystemUndervoltage = (101, Warning, "Undervoltage"),
///     }
///     Safety => {
///         EmergencyStop = (900, Fatal, "Emergency Stop"),
///     }
/// }
/// ```
///
/// Category and severity are given as bare variant names of
/// [`Category`](crate::Category) and [`Severity`](crate::Severity).
#[macro_export]
macro_rules! define_error_codes {
    (
        $(
            $category:ident => {
                $( $(#[$meta:meta])* $name:ident = ($code:literal, $severity:ident, $desc:literal) ),+ $(,)?
            }
        )+
    ) => {
        /// A catalogued diagnostic code.
        ///
        /// The discriminant is the number transmitted on the wire; it never
        /// changes across releases.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum ErrorCode {
            $( $( $(#[$meta])* $name = $code, )+ )+
        }

        impl ErrorCode {
            /// Every defined code, in declaration order.
            pub const ALL: &'static [ErrorCode] = &[ $( $( ErrorCode::$name, )+ )+ ];

            /// Resolve a raw wire number.
            ///
            /// Returns `None` for numbers outside the catalog.
            #[inline]
            pub const fn from_code(code: u16) -> Option<Self> {
                match code {
                    $( $( $code => Some(Self::$name), )+ )+
                    _ => None,
                }
            }

            /// Wire number of this code.
            #[inline]
            pub const fn code(self) -> u16 {
                self as u16
            }

            /// Category this code was declared under.
            #[inline]
            pub const fn category(self) -> $crate::Category {
                match self {
                    $( $( Self::$name => $crate::Category::$category, )+ )+
                }
            }

            /// Severity this code is reported with.
            #[inline]
            pub const fn severity(self) -> $crate::Severity {
                match self {
                    $( $( Self::$name => $crate::Severity::$severity, )+ )+
                }
            }

            /// Human-readable description.
            #[inline]
            pub const fn description(self) -> &'static str {
                match self {
                    $( $( Self::$name => $desc, )+ )+
                }
            }

            /// Symbolic name of the variant.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $( $( Self::$name => stringify!($name), )+ )+
                }
            }
        }
    };
}
