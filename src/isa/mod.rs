//! Emulated fixed-width masked vector ISA.
//!
//! The instruction set the kernels in [`crate::ops`] are written against:
//! `W`-lane registers ([`VecReg`]), per-lane execution masks ([`Mask`]) and
//! masked arithmetic / compare / load / store instructions on a
//! [`VectorIsa`] context. Each instruction reports its mask to the
//! context's [`IsaLogger`], which is how lane utilization is measured.
//!
//! Masked semantics, for every instruction:
//! - arithmetic returns `dst` with only the masked-on lanes replaced;
//! - compares return a mask whose masked-off lanes are `false`;
//! - loads and stores touch only masked-on lanes, so a slice may be shorter
//!   than `W` as long as the lanes past its end are masked off.
//!
//! Registers and masks are `Copy`; instructions take them by value and
//! return the result, which is what lets `result = isa.vmult(result, result, x, m)`
//! read like the register-to-register form.

mod lane;
pub mod logger;
mod mask;

pub use lane::{IntLane, Lane, VecF32, VecI32, VecReg, VecU32};
pub use logger::{IsaLogger, IsaStats, TraceEntry};
pub use mask::Mask;

use crate::config::IsaConfig;

/// Default lane count of the emulated vector unit.
pub const VECTOR_WIDTH: usize = 8;

/// Instruction context for a `W`-lane vector unit.
#[derive(Debug, Clone)]
pub struct VectorIsa<const W: usize = VECTOR_WIDTH> {
    logger: IsaLogger,
}

impl<const W: usize> Default for VectorIsa<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> VectorIsa<W> {
    const VALID_WIDTH: () = assert!(W > 0 && W.is_power_of_two(), "vector width must be a non-zero power of two");

    /// Context configured from the environment (see [`IsaConfig::from_env`]).
    pub fn new() -> Self {
        Self::with_config(IsaConfig::from_env())
    }

    pub fn with_config(config: IsaConfig) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_WIDTH;
        Self {
            logger: IsaLogger::new(W, config),
        }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub fn logger(&self) -> &IsaLogger {
        &self.logger
    }

    pub fn stats(&self) -> IsaStats {
        self.logger.stats()
    }

    pub fn take_stats(&mut self) -> IsaStats {
        self.logger.take_stats()
    }

    pub fn reset_stats(&mut self) {
        self.logger.reset();
    }

    #[inline(always)]
    fn log(&mut self, instruction: &'static str, mask: &Mask<W>) {
        self.logger.record(instruction, mask.bits());
    }

    // ------------------------------------------------------------------
    // Masks
    // ------------------------------------------------------------------

    pub fn init_ones(&self) -> Mask<W> {
        Mask::ones()
    }

    pub fn init_zeros(&self) -> Mask<W> {
        Mask::zeros()
    }

    /// Lanes `0..first` on.
    pub fn init_first(&self, first: usize) -> Mask<W> {
        Mask::first(first)
    }

    pub fn mask_not(&mut self, mask: Mask<W>) -> Mask<W> {
        self.log("masknot", &Mask::ones());
        !mask
    }

    pub fn mask_and(&mut self, a: Mask<W>, b: Mask<W>) -> Mask<W> {
        self.log("maskand", &Mask::ones());
        a & b
    }

    pub fn mask_or(&mut self, a: Mask<W>, b: Mask<W>) -> Mask<W> {
        self.log("maskor", &Mask::ones());
        a | b
    }

    /// Population count.
    pub fn cntbits(&mut self, mask: Mask<W>) -> usize {
        self.log("cntbits", &Mask::ones());
        mask.count()
    }

    // ------------------------------------------------------------------
    // Register fill / memory
    // ------------------------------------------------------------------

    /// Broadcast `value` into every lane.
    pub fn splat<T: Lane>(&mut self, value: T) -> VecReg<T, W> {
        self.log("vset", &Mask::ones());
        VecReg::splat(value)
    }

    /// Broadcast `value` into the masked-on lanes of `dst`.
    pub fn vset<T: Lane>(&mut self, dst: VecReg<T, W>, value: T, mask: Mask<W>) -> VecReg<T, W> {
        let mut out = dst;
        for (lane, slot) in out.lanes_mut().iter_mut().enumerate() {
            if mask.is_set(lane) {
                *slot = value;
            }
        }
        self.log("vset", &mask);
        out
    }

    /// `dst[lane] = src[lane]` on masked-on lanes.
    ///
    /// # Panics
    /// Panics if a masked-on lane is past the end of `src`.
    pub fn vload<T: Lane>(&mut self, dst: VecReg<T, W>, src: &[T], mask: Mask<W>) -> VecReg<T, W> {
        let mut out = dst;
        for (lane, slot) in out.lanes_mut().iter_mut().enumerate() {
            if mask.is_set(lane) {
                *slot = src[lane];
            }
        }
        self.log("vload", &mask);
        out
    }

    /// `dst[lane] = src[lane]` on masked-on lanes; other elements of `dst` are untouched.
    ///
    /// # Panics
    /// Panics if a masked-on lane is past the end of `dst`.
    pub fn vstore<T: Lane>(&mut self, dst: &mut [T], src: VecReg<T, W>, mask: Mask<W>) {
        for (lane, &value) in src.lanes().iter().enumerate() {
            if mask.is_set(lane) {
                dst[lane] = value;
            }
        }
        self.log("vstore", &mask);
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    #[inline(always)]
    fn binary<T: Lane>(
        &mut self,
        instruction: &'static str,
        dst: VecReg<T, W>,
        a: VecReg<T, W>,
        b: VecReg<T, W>,
        mask: Mask<W>,
        op: impl Fn(T, T) -> T,
    ) -> VecReg<T, W> {
        let mut out = dst;
        for (lane, slot) in out.lanes_mut().iter_mut().enumerate() {
            if mask.is_set(lane) {
                *slot = op(a[lane], b[lane]);
            }
        }
        self.log(instruction, &mask);
        out
    }

    pub fn vadd<T: Lane>(&mut self, dst: VecReg<T, W>, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> VecReg<T, W> {
        self.binary("vadd", dst, a, b, mask, T::lane_add)
    }

    pub fn vsub<T: Lane>(&mut self, dst: VecReg<T, W>, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> VecReg<T, W> {
        self.binary("vsub", dst, a, b, mask, T::lane_sub)
    }

    pub fn vmult<T: Lane>(&mut self, dst: VecReg<T, W>, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> VecReg<T, W> {
        self.binary("vmult", dst, a, b, mask, T::lane_mul)
    }

    pub fn vbitand<T: IntLane>(&mut self, dst: VecReg<T, W>, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> VecReg<T, W> {
        self.binary("vbitand", dst, a, b, mask, T::lane_and)
    }

    /// `a >> b` per lane.
    pub fn vshiftright<T: IntLane>(&mut self, dst: VecReg<T, W>, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> VecReg<T, W> {
        self.binary("vshiftright", dst, a, b, mask, T::lane_shr)
    }

    // ------------------------------------------------------------------
    // Compare
    // ------------------------------------------------------------------

    #[inline(always)]
    fn compare<T: Lane>(
        &mut self,
        instruction: &'static str,
        a: VecReg<T, W>,
        b: VecReg<T, W>,
        mask: Mask<W>,
        pred: impl Fn(T, T) -> bool,
    ) -> Mask<W> {
        let mut out = Mask::zeros();
        for lane in 0..W {
            if mask.is_set(lane) {
                out.set(lane, pred(a[lane], b[lane]));
            }
        }
        self.log(instruction, &mask);
        out
    }

    pub fn vlt<T: Lane>(&mut self, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> Mask<W> {
        self.compare("vlt", a, b, mask, |x, y| x < y)
    }

    pub fn vgt<T: Lane>(&mut self, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> Mask<W> {
        self.compare("vgt", a, b, mask, |x, y| x > y)
    }

    pub fn veq<T: Lane>(&mut self, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> Mask<W> {
        self.compare("veq", a, b, mask, |x, y| x == y)
    }

    pub fn vneq<T: Lane>(&mut self, a: VecReg<T, W>, b: VecReg<T, W>, mask: Mask<W>) -> Mask<W> {
        self.compare("vneq", a, b, mask, |x, y| x != y)
    }

    // ------------------------------------------------------------------
    // Reporting
    // ------------------------------------------------------------------

    pub fn trace_string(&self) -> String {
        self.logger.trace_string()
    }

    pub fn log_summary(&self) {
        self.logger.log_summary();
    }
}
