//! vecintrin-kernels: masked, lane-parallel kernels over an emulated
//! fixed-width vector ISA.
//!
//! Three scalar algorithms re-expressed with masked vector instructions:
//! - **Branch emulation**: `abs_vector` runs both arms of an if/else on every
//!   lane and commits each through a mask and its complement.
//! - **Per-lane early exit**: `clamped_exp_vector` threads an active-lane mask
//!   through a repeated-squaring loop in place of a scalar `break`.
//! - **Reduction**: `array_sum_vector` accumulates lane-wise, then reduces
//!   horizontally and merges the unaligned tail.
//!
//! Serial twins live in `vecintrin-scalar-ops` and define the expected
//! results. Every instruction is accounted by the ISA logger, so lane
//! utilization of a kernel run can be inspected.
//!
//! # Quick Start
//!
//! ```
//! use vecintrin_kernels::{Kernels, SerialKernels, VectorKernels, IsaConfig};
//!
//! let values = vec![2.0f32; 11];
//! let exponents = vec![3u32; 11];
//! let mut serial = vec![0.0; 11];
//! let mut vector = vec![0.0; 11];
//!
//! SerialKernels::new().clamped_exp(&values, &exponents, &mut serial).unwrap();
//! let mut kernels = VectorKernels::<8>::with_config(IsaConfig::default());
//! kernels.clamped_exp(&values, &exponents, &mut vector).unwrap();
//!
//! assert_eq!(serial, vector);
//! println!("utilization: {:.1}%", kernels.stats().utilization() * 100.0);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod isa;
pub mod kernels;
pub mod ops;
pub mod traits;

pub use config::IsaConfig;
pub use error::{KernelError, KernelResult};
pub use isa::{IsaStats, Mask, VecF32, VecI32, VecReg, VecU32, VectorIsa, VECTOR_WIDTH};
pub use kernels::{SerialKernels, VectorKernels};
pub use ops::{
    abs_vector, abs_vector_inplace, array_sum_vector, clamped_exp_vector, clamped_exp_vector_inplace,
};
pub use traits::Kernels;

pub use vecintrin_scalar_ops::{
    abs_serial, abs_serial_inplace, array_sum_serial, clamped_exp_scalar, clamped_exp_serial, CLAMP_CEILING,
};
