//! Utility functions and types.

use std::fmt::{Debug, Display, Formatter};

/// Redacts a secret so that it can be logged or printed with `{:?}`.
///
/// - Empty input is rendered as `EMPTY` so a missing key is easy to spot.
/// - Anything else is rendered as `***` followed by the input length, e.g. `***(22)`.
///
/// Signing keys are short, so no characters of the value itself are kept.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("EMPTY")
        } else {
            write!(f, "***({})", self.0.len())
        }
    }
}

impl Display for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}
