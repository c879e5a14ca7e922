//! FFI functions for the arithmetic routines.

use super::types::{CAddConfig, CArrayDesc, CF64Array, RpStatus};
use crate::arith::{add_as_string_with, multiply_arrays, AddConfig};
use crate::error::Operand;
use std::ffi::c_char;

/// C ABI version.
pub const ABI_VERSION: u32 = 1;

/// Get the C ABI version.
///
/// Lets the host check that it was built against a compatible header.
#[no_mangle]
pub extern "C" fn rp_abi_version() -> u32 {
    ABI_VERSION
}

/// Get a static, NUL-terminated description of a status code.
#[no_mangle]
pub extern "C" fn rp_status_message(status: RpStatus) -> *const c_char {
    status.message().as_ptr()
}

/// Format `a + b` as a decimal string into a caller buffer.
///
/// `config` may be null for the defaults (wrapping overflow). `out_len`
/// receives the length of the full string, excluding the terminator. If
/// the buffer is too short the output is truncated, still NUL-terminated,
/// and `BufferTooSmall` is returned.
///
/// # Safety
/// `buffer` must be writable for `buffer_len` bytes; `out_len` must be valid.
#[no_mangle]
pub unsafe extern "C" fn rp_add_as_string(
    a: i64,
    b: i64,
    config: *const CAddConfig,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> RpStatus {
    if buffer.is_null() || out_len.is_null() {
        return RpStatus::NullPointer;
    }
    if buffer_len == 0 {
        return RpStatus::BufferTooSmall;
    }

    let cfg = if config.is_null() {
        AddConfig::default()
    } else {
        (*config).clone().into()
    };

    let text = match add_as_string_with(a, b, &cfg) {
        Ok(text) => text,
        Err(err) => {
            *buffer = 0;
            *out_len = 0;
            return err.status();
        }
    };

    let bytes = text.as_bytes();
    let copy_len = bytes.len().min(buffer_len - 1);
    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer as *mut u8, copy_len);
    *buffer.add(copy_len) = 0;
    *out_len = bytes.len();

    if copy_len < bytes.len() {
        RpStatus::BufferTooSmall
    } else {
        RpStatus::Ok
    }
}

/// Multiply two arrays element-wise.
///
/// Both descriptors must describe `f64` data with the same element count;
/// their shapes may differ. On success `out` holds a new flat buffer that
/// must be released with `rp_array_free`. On failure `out` is left empty.
///
/// # Safety
/// Descriptors must describe valid, live buffers. `out` must be valid.
#[no_mangle]
pub unsafe extern "C" fn rp_multiply_arrays(
    x: *const CArrayDesc,
    y: *const CArrayDesc,
    out: *mut CF64Array,
) -> RpStatus {
    if x.is_null() || y.is_null() || out.is_null() {
        return RpStatus::NullPointer;
    }
    *out = CF64Array::empty();

    let x_view = match (*x).as_view(Operand::X) {
        Ok(view) => view,
        Err(err) => return err.status(),
    };
    let y_view = match (*y).as_view(Operand::Y) {
        Ok(view) => view,
        Err(err) => return err.status(),
    };

    match multiply_arrays(&x_view, &y_view) {
        Ok(product) => {
            *out = CF64Array::from_vec(product.into_raw_vec_and_offset().0);
            RpStatus::Ok
        }
        Err(err) => err.status(),
    }
}

/// Free an array produced by `rp_multiply_arrays`.
///
/// # Safety
/// Array must have been filled by `rp_multiply_arrays`, or be zeroed.
#[no_mangle]
pub unsafe extern "C" fn rp_array_free(arr: *mut CF64Array) {
    if arr.is_null() {
        return;
    }
    drop((*arr).take_vec());
}
