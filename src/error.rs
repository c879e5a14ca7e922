//! Errors raised at the native boundary.

use crate::data::DType;
use crate::ffi::types::RpStatus;

/// Which argument of a binary operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    X,
    Y,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::X => write!(f, "x"),
            Operand::Y => write!(f, "y"),
        }
    }
}

/// Errors that can occur in arithmetic calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArithError {
    /// Element type of an input array is not the one the routine requires.
    #[error("type mismatch for {operand}: expected {expected}, got {found}")]
    TypeMismatch {
        operand: Operand,
        expected: DType,
        found: DType,
    },

    /// Element type code coming from C is not a known `DType`.
    #[error("type mismatch for {operand}: unknown element type code {code}")]
    UnknownDType { operand: Operand, code: u32 },

    /// Total element counts of the two inputs differ.
    #[error("shape mismatch: x has {x_len} elements {x_shape:?}, y has {y_len} elements {y_shape:?}")]
    ShapeMismatch {
        x_len: usize,
        y_len: usize,
        x_shape: Vec<usize>,
        y_shape: Vec<usize>,
    },

    /// Checked addition left the i64 range.
    #[error("integer overflow: {a} + {b} does not fit in i64")]
    Overflow { a: i64, b: i64 },

    /// Null pointer passed to an FFI function.
    #[error("null pointer passed for {0}")]
    NullPointer(&'static str),

    /// Malformed argument (misaligned buffer, oversized shape, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ArithError {
    /// Status code reported across the C ABI for this error.
    pub fn status(&self) -> RpStatus {
        match self {
            ArithError::TypeMismatch { .. } | ArithError::UnknownDType { .. } => {
                RpStatus::TypeMismatch
            }
            ArithError::ShapeMismatch { .. } => RpStatus::ShapeMismatch,
            ArithError::Overflow { .. } => RpStatus::Overflow,
            ArithError::NullPointer(_) => RpStatus::NullPointer,
            ArithError::InvalidArgument(_) => RpStatus::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = ArithError::TypeMismatch {
            operand: Operand::Y,
            expected: DType::F64,
            found: DType::I32,
        };
        assert_eq!(err.to_string(), "type mismatch for y: expected f64, got i32");
        assert_eq!(err.status(), RpStatus::TypeMismatch);
    }

    #[test]
    fn test_shape_and_type_are_distinguishable() {
        let shape = ArithError::ShapeMismatch {
            x_len: 4,
            y_len: 3,
            x_shape: vec![2, 2],
            y_shape: vec![3],
        };
        let unknown = ArithError::UnknownDType {
            operand: Operand::X,
            code: 42,
        };

        assert_eq!(shape.status(), RpStatus::ShapeMismatch);
        assert_eq!(unknown.status(), RpStatus::TypeMismatch);
        assert!(shape.to_string().contains("x has 4 elements [2, 2]"));
    }
}
