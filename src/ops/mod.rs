//! Masked vector kernels over [`crate::isa`].
//!
//! Each kernel has a serial twin in `vecintrin-scalar-ops` that defines its
//! semantics. `clamped_exp_vector` and `array_sum_vector` accept any length
//! and hand the `len % W` tail to the serial kernel; `abs_vector` requires a
//! width-aligned length.

pub mod abs;
pub mod array_sum;
pub mod clamped_exp;

pub use abs::{abs_vector, abs_vector_inplace};
pub use array_sum::array_sum_vector;
pub use clamped_exp::{clamped_exp_vector, clamped_exp_vector_inplace};
