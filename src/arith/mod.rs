//! Native arithmetic routines.

pub mod add;
pub mod multiply;

pub use add::{add_as_string, add_as_string_with, AddConfig, OverflowPolicy};
pub use multiply::{mult_array_views, multiply_arrays};
