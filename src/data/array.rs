//! Dynamically typed array views.
//!
//! The host hands over buffers whose element type is only known at runtime.
//! `DynArrayView` keeps that type tag next to a borrowed ndarray view so the
//! arithmetic routines can check it before touching any element.

use super::dtype::DType;
use crate::error::{ArithError, Operand};
use ndarray::{ArrayViewD, IxDyn};
use std::ffi::c_void;
use std::ptr::NonNull;

/// A borrowed, C-contiguous array of any supported element type.
#[derive(Debug, Clone)]
pub enum DynArrayView<'a> {
    F32(ArrayViewD<'a, f32>),
    F64(ArrayViewD<'a, f64>),
    I32(ArrayViewD<'a, i32>),
    I64(ArrayViewD<'a, i64>),
}

macro_rules! dispatch {
    ($view:expr, $v:ident => $body:expr) => {
        match $view {
            DynArrayView::F32($v) => $body,
            DynArrayView::F64($v) => $body,
            DynArrayView::I32($v) => $body,
            DynArrayView::I64($v) => $body,
        }
    };
}

impl<'a> DynArrayView<'a> {
    /// Element type of this view.
    pub fn dtype(&self) -> DType {
        match self {
            DynArrayView::F32(_) => DType::F32,
            DynArrayView::F64(_) => DType::F64,
            DynArrayView::I32(_) => DType::I32,
            DynArrayView::I64(_) => DType::I64,
        }
    }

    /// Total number of elements, ignoring dimensionality.
    #[inline]
    pub fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Logical shape as supplied by the caller.
    pub fn shape(&self) -> &[usize] {
        dispatch!(self, v => v.shape())
    }

    /// Borrow as an `f64` view, failing if the element type differs.
    ///
    /// No conversion is attempted: an `i32` or `f32` buffer is an error.
    pub fn as_f64(&self, operand: Operand) -> Result<ArrayViewD<'a, f64>, ArithError> {
        match self {
            DynArrayView::F64(v) => Ok(v.clone()),
            other => Err(ArithError::TypeMismatch {
                operand,
                expected: DType::F64,
                found: other.dtype(),
            }),
        }
    }

    /// Build a view over a raw C-contiguous buffer.
    ///
    /// `data` may be null only when the shape holds zero elements.
    ///
    /// # Safety
    /// If non-null, `data` must point to `product(shape)` initialised elements
    /// of `dtype` that stay alive and unmodified for `'a`.
    pub unsafe fn from_raw_parts(
        operand: Operand,
        dtype: DType,
        data: *const c_void,
        shape: &[usize],
    ) -> Result<Self, ArithError> {
        let len = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| {
                ArithError::InvalidArgument(format!("{} shape {:?} overflows usize", operand, shape))
            })?;

        let fits = len
            .checked_mul(dtype.size_bytes())
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(ArithError::InvalidArgument(format!(
                "{} buffer of {} {} elements is too large",
                operand, len, dtype
            )));
        }

        if data.is_null() {
            if len != 0 {
                return Err(ArithError::NullPointer(match operand {
                    Operand::X => "x.data",
                    Operand::Y => "y.data",
                }));
            }
        } else if (data as usize) % dtype.align() != 0 {
            return Err(ArithError::InvalidArgument(format!(
                "{} data is not aligned for {}",
                operand, dtype
            )));
        }

        Ok(match dtype {
            DType::F32 => DynArrayView::F32(view_from_ptr(shape, data)),
            DType::F64 => DynArrayView::F64(view_from_ptr(shape, data)),
            DType::I32 => DynArrayView::I32(view_from_ptr(shape, data)),
            DType::I64 => DynArrayView::I64(view_from_ptr(shape, data)),
        })
    }
}

unsafe fn view_from_ptr<'a, T>(shape: &[usize], data: *const c_void) -> ArrayViewD<'a, T> {
    // ndarray wants a non-null, aligned pointer even for empty arrays.
    let ptr = if data.is_null() {
        NonNull::<T>::dangling().as_ptr() as *const T
    } else {
        data as *const T
    };
    ArrayViewD::from_shape_ptr(IxDyn(shape), ptr)
}

macro_rules! impl_from_view {
    ($t:ty, $variant:ident) => {
        impl<'a> From<ArrayViewD<'a, $t>> for DynArrayView<'a> {
            fn from(view: ArrayViewD<'a, $t>) -> Self {
                DynArrayView::$variant(view)
            }
        }
    };
}

impl_from_view!(f32, F32);
impl_from_view!(f64, F64);
impl_from_view!(i32, I32);
impl_from_view!(i64, I64);
