//! Integer addition returning a decimal string.

use crate::error::ArithError;

/// What to do when `a + b` leaves the i64 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Two's complement wrap-around.
    #[default]
    Wrap,
    /// Report `ArithError::Overflow`.
    Checked,
}

/// Per-call configuration for addition.
#[derive(Debug, Clone, Default)]
pub struct AddConfig {
    pub overflow: OverflowPolicy,
}

impl AddConfig {
    pub fn checked() -> Self {
        Self {
            overflow: OverflowPolicy::Checked,
        }
    }
}

/// Formats the sum of two numbers as string.
///
/// Overflow wraps, so this never fails.
pub fn add_as_string(a: i64, b: i64) -> String {
    a.wrapping_add(b).to_string()
}

/// Like [`add_as_string`], with an explicit overflow policy.
pub fn add_as_string_with(a: i64, b: i64, config: &AddConfig) -> Result<String, ArithError> {
    match config.overflow {
        OverflowPolicy::Wrap => Ok(add_as_string(a, b)),
        OverflowPolicy::Checked => a
            .checked_add(b)
            .map(|sum| sum.to_string())
            .ok_or_else(|| {
                tracing::debug!(a, b, "checked addition overflowed");
                ArithError::Overflow { a, b }
            }),
    }
}
