use crate::error::KernelResult;

/// Common surface of the serial and vector kernel sets.
///
/// Lets tests and benchmarks drive either implementation through the same
/// calls and compare outputs index by index.
pub trait Kernels {
    /// Short label used in benchmark ids and logs.
    fn name(&self) -> &'static str;

    /// `output[i] = |values[i]|`.
    fn abs(&mut self, values: &[f32], output: &mut [f32]) -> KernelResult<()>;

    /// `output[i] = values[i] ^ exponents[i]`, clamped to
    /// [`CLAMP_CEILING`](crate::CLAMP_CEILING).
    fn clamped_exp(&mut self, values: &[f32], exponents: &[u32], output: &mut [f32]) -> KernelResult<()>;

    fn array_sum(&mut self, values: &[f32]) -> f32;
}
