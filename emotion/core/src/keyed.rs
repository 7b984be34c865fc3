//! Stable string keys for the closed enumerations
//!
//! Every input and output enumeration has a lowercase snake_case key that is
//! shared by serde, `Display` and `FromStr`, so configuration files, CLI
//! arguments and log lines all spell a value the same way.

use thiserror::Error;

/// Error returned when a string does not name a variant of an enumeration
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    /// Which enumeration was being parsed (e.g. "emotion")
    pub kind: &'static str,
    /// The rejected input, as given
    pub value: String,
    /// Comma-separated list of accepted keys
    pub expected: String,
}

/// Normalize user input before key lookup: trimmed, lowercase, `-` as `_`
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace('-', "_")
}

/// Implements `ALL`, `as_str`, `Display` and `FromStr` for a fieldless enum
///
/// The keys given here must match the enum's `#[serde(rename_all = "snake_case")]`
/// spelling.
macro_rules! impl_keyed_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable lowercase key for this variant
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::keyed::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $crate::keyed::normalize_key(s).as_str() {
                    $($key => Ok(Self::$variant),)+
                    _ => Err($crate::keyed::ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: [$($key),+].join(", "),
                    }),
                }
            }
        }
    };
}

pub(crate) use impl_keyed_enum;
