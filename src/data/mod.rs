//! Data types crossing the native boundary.

pub mod array;
pub mod dtype;

pub use array::DynArrayView;
pub use dtype::DType;
