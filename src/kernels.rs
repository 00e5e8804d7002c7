//! [`Kernels`] implementations: the serial references and the masked vector
//! kernels on a `W`-lane [`VectorIsa`].

use vecintrin_scalar_ops::{abs_serial, array_sum_serial, clamped_exp_serial};

use crate::config::IsaConfig;
use crate::error::{check_len, KernelResult};
use crate::isa::{IsaStats, VectorIsa, VECTOR_WIDTH};
use crate::ops;
use crate::traits::Kernels;

/// Serial reference kernels behind the [`Kernels`] trait.
///
/// Lengths are validated here so mismatches surface as errors instead of the
/// reference crate's assertions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialKernels;

impl SerialKernels {
    pub fn new() -> Self {
        Self
    }
}

impl Kernels for SerialKernels {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn abs(&mut self, values: &[f32], output: &mut [f32]) -> KernelResult<()> {
        check_len("output", values.len(), output.len())?;
        abs_serial(values, output);
        Ok(())
    }

    fn clamped_exp(&mut self, values: &[f32], exponents: &[u32], output: &mut [f32]) -> KernelResult<()> {
        check_len("exponents", values.len(), exponents.len())?;
        check_len("output", values.len(), output.len())?;
        clamped_exp_serial(values, exponents, output);
        Ok(())
    }

    fn array_sum(&mut self, values: &[f32]) -> f32 {
        array_sum_serial(values)
    }
}

/// Vector kernels on an owned `W`-lane ISA context.
///
/// The context keeps accumulating statistics across calls; use
/// [`take_stats`](Self::take_stats) to read them per kernel.
#[derive(Debug, Clone)]
pub struct VectorKernels<const W: usize = VECTOR_WIDTH> {
    isa: VectorIsa<W>,
}

impl<const W: usize> Default for VectorKernels<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> VectorKernels<W> {
    /// ISA configured from the environment.
    pub fn new() -> Self {
        Self { isa: VectorIsa::new() }
    }

    pub fn with_config(config: IsaConfig) -> Self {
        Self { isa: VectorIsa::with_config(config) }
    }

    pub fn isa(&self) -> &VectorIsa<W> {
        &self.isa
    }

    pub fn isa_mut(&mut self) -> &mut VectorIsa<W> {
        &mut self.isa
    }

    pub fn stats(&self) -> IsaStats {
        self.isa.stats()
    }

    pub fn take_stats(&mut self) -> IsaStats {
        self.isa.take_stats()
    }

    pub fn log_summary(&self) {
        self.isa.log_summary();
    }

    pub fn abs_inplace(&mut self, values: &mut [f32]) -> KernelResult<()> {
        ops::abs_vector_inplace(&mut self.isa, values)
    }

    pub fn clamped_exp_inplace(&mut self, values: &mut [f32], exponents: &[u32]) -> KernelResult<()> {
        ops::clamped_exp_vector_inplace(&mut self.isa, values, exponents)
    }
}

impl<const W: usize> Kernels for VectorKernels<W> {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn abs(&mut self, values: &[f32], output: &mut [f32]) -> KernelResult<()> {
        ops::abs_vector(&mut self.isa, values, output)
    }

    fn clamped_exp(&mut self, values: &[f32], exponents: &[u32], output: &mut [f32]) -> KernelResult<()> {
        ops::clamped_exp_vector(&mut self.isa, values, exponents, output)
    }

    fn array_sum(&mut self, values: &[f32]) -> f32 {
        ops::array_sum_vector(&mut self.isa, values)
    }
}
