//! rusty-python - native arithmetic routines callable from Python.
//!
//! A small demonstration of the native/host boundary. Each routine exists as
//! plain Rust, behind a C ABI, and (for addition) again in pure Python, and
//! all of them are reachable from one Python namespace:
//!
//! - `add_as_string`: the sum of two `i64` values as a decimal string
//! - `multiply_arrays`: element-wise product of two `f64` arrays whose element
//!   type is only known at runtime and is checked before any computation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  python/rusty_python (namespace)    │
//! │  core.py (host)   _native.py (cffi) │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │   FFI Layer (rusty_python.h)        │
//! │  RpStatus, CArrayDesc, CF64Array    │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │          Pure Rust core             │
//! │  ┌───────────┐  ┌───────────────┐  │
//! │  │   arith   │  │ DynArrayView  │  │
//! │  │ (add/mul) │  │ (dtype check) │  │
//! │  └───────────┘  └───────────────┘  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # FFI Usage
//!
//! ```c
//! char buf[32];
//! size_t len;
//! rp_add_as_string(1, 1, NULL, buf, sizeof buf, &len);   // "2"
//!
//! size_t shape[1] = {4};
//! CArrayDesc x = {RP_D_TYPE_F64, xs, shape, 1};
//! CArrayDesc y = {RP_D_TYPE_F64, ys, shape, 1};
//! CF64Array out;
//! if (rp_multiply_arrays(&x, &y, &out) == RP_STATUS_OK) {
//!     // use out.data[0..out.len]
//!     rp_array_free(&out);
//! }
//! ```

pub mod arith;
pub mod data;
pub mod error;
pub mod ffi;
pub mod logging;

// Re-export commonly used items
pub use arith::{
    add_as_string, add_as_string_with, mult_array_views, multiply_arrays, AddConfig,
    OverflowPolicy,
};
pub use data::{DType, DynArrayView};
pub use error::{ArithError, Operand};

// Re-export FFI types for cbindgen
pub use ffi::arith::*;
pub use ffi::logging::*;
pub use ffi::types::*;
