//! FFI (Foreign Function Interface) layer for C bindings.
//!
//! This module provides C-compatible functions that can be called from
//! Python via cffi, or from any other language that supports C FFI.

pub mod arith;
pub mod logging;
pub mod types;

pub use arith::*;
pub use logging::*;
pub use types::*;
