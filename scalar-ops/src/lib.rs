//! Serial reference kernels.
//!
//! These serve as:
//! 1. Golden reference for correctness testing of the masked vector kernels.
//! 2. The scalar tail path the vector kernels fall back to for the
//!    `len % W` elements past their width-aligned prefix.
//!
//! The crate is compiled with `opt-level = 1` (configured in the workspace
//! root Cargo.toml) so the loops keep their branchy scalar shape in benchmarks.

pub mod elementwise;
pub mod reduce;

pub use elementwise::{abs_serial, abs_serial_inplace, clamped_exp_serial, clamped_exp_scalar};
pub use reduce::array_sum_serial;

/// Ceiling applied by the clamped exponentiation kernels.
pub const CLAMP_CEILING: f32 = 4.18;
