//! C-compatible type definitions for FFI.

use crate::arith::{AddConfig, OverflowPolicy};
use crate::data::{DType, DynArrayView};
use crate::error::{ArithError, Operand};
use std::ffi::c_void;

/// Result status codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpStatus {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer was passed.
    NullPointer = 1,
    /// Invalid argument.
    InvalidArgument = 2,
    /// Array element type is not the required one.
    TypeMismatch = 3,
    /// Array element counts differ.
    ShapeMismatch = 4,
    /// Checked integer addition overflowed.
    Overflow = 5,
    /// Output buffer cannot hold the result.
    BufferTooSmall = 6,
}

impl RpStatus {
    /// Static description of this status.
    pub fn message(&self) -> &'static std::ffi::CStr {
        match self {
            RpStatus::Ok => c"ok",
            RpStatus::NullPointer => c"null pointer",
            RpStatus::InvalidArgument => c"invalid argument",
            RpStatus::TypeMismatch => c"array element type must be f64",
            RpStatus::ShapeMismatch => c"arrays have different element counts",
            RpStatus::Overflow => c"integer overflow",
            RpStatus::BufferTooSmall => c"output buffer too small",
        }
    }
}

impl From<&ArithError> for RpStatus {
    fn from(err: &ArithError) -> Self {
        err.status()
    }
}

/// Element type codes understood by `CArrayDesc::dtype`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpDType {
    F32 = 0,
    F64 = 1,
    I32 = 2,
    I64 = 3,
}

impl From<DType> for RpDType {
    fn from(dtype: DType) -> Self {
        match dtype {
            DType::F32 => RpDType::F32,
            DType::F64 => RpDType::F64,
            DType::I32 => RpDType::I32,
            DType::I64 => RpDType::I64,
        }
    }
}

/// C-compatible descriptor of a C-contiguous host array.
///
/// `dtype` is kept as a plain integer so an unknown code from the host is a
/// reportable error rather than an invalid enum value.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CArrayDesc {
    /// One of the `RpDType` codes.
    pub dtype: u32,
    /// First element; may be null for zero-element arrays.
    pub data: *const c_void,
    /// `ndim` dimension sizes; may be null when `ndim` is 0.
    pub shape: *const usize,
    pub ndim: usize,
}

impl CArrayDesc {
    /// Borrow the described buffer as a typed view.
    ///
    /// # Safety
    /// `shape` must point to `ndim` values and `data` to the number of
    /// elements they describe, both valid for `'a`.
    pub unsafe fn as_view<'a>(&self, operand: Operand) -> Result<DynArrayView<'a>, ArithError> {
        let dtype = DType::from_code(self.dtype).ok_or(ArithError::UnknownDType {
            operand,
            code: self.dtype,
        })?;

        let shape: &[usize] = if self.ndim == 0 {
            &[]
        } else if self.shape.is_null() {
            return Err(ArithError::NullPointer(match operand {
                Operand::X => "x.shape",
                Operand::Y => "y.shape",
            }));
        } else {
            std::slice::from_raw_parts(self.shape, self.ndim)
        };

        DynArrayView::from_raw_parts(operand, dtype, self.data, shape)
    }
}

/// C-compatible owned f64 buffer returned to the caller.
///
/// Must be released with `rp_array_free`.
#[repr(C)]
#[derive(Debug)]
pub struct CF64Array {
    pub data: *mut f64,
    pub len: usize,
    pub capacity: usize,
}

impl CF64Array {
    /// An array holding nothing; safe to free.
    pub fn empty() -> Self {
        Self {
            data: std::ptr::null_mut(),
            len: 0,
            capacity: 0,
        }
    }

    /// Hand ownership of a vector over to C.
    pub fn from_vec(values: Vec<f64>) -> Self {
        let mut values = std::mem::ManuallyDrop::new(values);
        Self {
            data: values.as_mut_ptr(),
            len: values.len(),
            capacity: values.capacity(),
        }
    }

    /// Take ownership back, leaving `self` empty.
    ///
    /// # Safety
    /// `self` must come from `from_vec` (or be empty) and not have been
    /// reclaimed already.
    pub unsafe fn take_vec(&mut self) -> Vec<f64> {
        let taken = std::mem::replace(self, Self::empty());
        if taken.data.is_null() || taken.capacity == 0 {
            Vec::new()
        } else {
            Vec::from_raw_parts(taken.data, taken.len, taken.capacity)
        }
    }
}

/// C mirror of `AddConfig`.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct CAddConfig {
    /// Report overflow instead of wrapping.
    pub checked_overflow: bool,
}

impl From<CAddConfig> for AddConfig {
    fn from(c: CAddConfig) -> Self {
        AddConfig {
            overflow: if c.checked_overflow {
                OverflowPolicy::Checked
            } else {
                OverflowPolicy::Wrap
            },
        }
    }
}
