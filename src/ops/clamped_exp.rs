//! Clamped power by repeated squaring, with per-lane early exit.
//!
//! The serial loop `break`s out as soon as the exponent runs out or the
//! product passes [`CLAMP_CEILING`]. Lanes cannot break individually, so an
//! `active` mask carries the loop condition per lane and the group keeps
//! iterating while any lane is still active:
//!
//! ```text
//! odd    = (y & 1) > 0        on active
//! result = result * xpower    on odd
//! over   = result > ceiling   on odd
//! result = ceiling            on over
//! active = active & !over
//! xpower = xpower * xpower    on active
//! y      = y >> 1             on active
//! active = y != 0             on active
//! ```
//!
//! A clamped lane leaves `active` for good, which is the serial `break`.
//! `y` strictly shrinks on active lanes, so a group finishes within
//! `u32::BITS + 1` iterations. Elements past the width-aligned prefix go
//! through the serial kernel.

use vecintrin_scalar_ops::{clamped_exp_scalar, clamped_exp_serial, CLAMP_CEILING};

use crate::error::{check_len, KernelResult};
use crate::isa::{Mask, VecF32, VecU32, VectorIsa};

/// Broadcast constants shared by every group of one call.
#[derive(Clone, Copy)]
struct ExpConsts<const W: usize> {
    zero: VecU32<W>,
    one: VecU32<W>,
    ceiling: VecF32<W>,
}

impl<const W: usize> ExpConsts<W> {
    fn new(isa: &mut VectorIsa<W>) -> Self {
        Self {
            zero: isa.splat(0u32),
            one: isa.splat(1u32),
            ceiling: isa.splat(CLAMP_CEILING),
        }
    }
}

/// `output[i] = clamp(values[i] ^ exponents[i])`, identical to
/// [`clamped_exp_serial`] for every index and any length.
pub fn clamped_exp_vector<const W: usize>(
    isa: &mut VectorIsa<W>,
    values: &[f32],
    exponents: &[u32],
    output: &mut [f32],
) -> KernelResult<()> {
    let n = values.len();
    check_len("exponents", n, exponents.len())?;
    check_len("output", n, output.len())?;
    let aligned = n - n % W;
    log::debug!("clamped_exp_vector: n={} vector={} tail={} width={}", n, aligned, n - aligned, W);

    let all = isa.init_ones();
    let consts = ExpConsts::new(isa);
    let groups = values[..aligned]
        .chunks_exact(W)
        .zip(exponents[..aligned].chunks_exact(W))
        .zip(output[..aligned].chunks_exact_mut(W));
    for ((xs, ys), dst) in groups {
        let result = clamped_exp_group(isa, xs, ys, consts);
        isa.vstore(dst, result, all);
    }

    clamped_exp_serial(&values[aligned..], &exponents[aligned..], &mut output[aligned..]);
    Ok(())
}

/// In-place [`clamped_exp_vector`]: results replace `values`.
pub fn clamped_exp_vector_inplace<const W: usize>(
    isa: &mut VectorIsa<W>,
    values: &mut [f32],
    exponents: &[u32],
) -> KernelResult<()> {
    let n = values.len();
    check_len("exponents", n, exponents.len())?;
    let aligned = n - n % W;

    let all = isa.init_ones();
    let consts = ExpConsts::new(isa);
    let (head, tail) = values.split_at_mut(aligned);
    for (group, ys) in head.chunks_exact_mut(W).zip(exponents[..aligned].chunks_exact(W)) {
        let result = clamped_exp_group(isa, group, ys, consts);
        isa.vstore(group, result, all);
    }

    for (x, &y) in tail.iter_mut().zip(&exponents[aligned..]) {
        *x = clamped_exp_scalar(*x, y);
    }
    Ok(())
}

fn clamped_exp_group<const W: usize>(
    isa: &mut VectorIsa<W>,
    xs: &[f32],
    ys: &[u32],
    c: ExpConsts<W>,
) -> VecF32<W> {
    let all = isa.init_ones();
    let mut result = isa.splat(1.0f32);
    let mut xpower = isa.vload(VecF32::default(), xs, all);
    let mut y = isa.vload(VecU32::default(), ys, all);
    let mut active: Mask<W> = isa.init_ones();

    while isa.cntbits(active) > 0 {
        let low_bit = isa.vbitand(VecU32::default(), y, c.one, active);
        let odd = isa.vgt(low_bit, c.zero, active);
        result = isa.vmult(result, result, xpower, odd);

        let over = isa.vgt(result, c.ceiling, odd);
        result = isa.vset(result, CLAMP_CEILING, over);
        let not_over = isa.mask_not(over);
        active = isa.mask_and(active, not_over);

        xpower = isa.vmult(xpower, xpower, xpower, active);
        y = isa.vshiftright(y, y, c.one, active);
        active = isa.vneq(y, c.zero, active);
        log::trace!("clamped_exp_group: active lanes {}", active);
    }
    result
}
