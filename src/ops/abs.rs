//! Absolute value with the if/else branch emulated by a predicate mask.
//!
//! Both arms run on every lane; the masks decide which arm's value lands in
//! the result register:
//!
//! ```text
//! neg    = x < 0            (vlt)
//! result = 0 - x   on neg   (vsub)
//! result = x       on !neg  (vload)
//! ```
//!
//! Unlike the other kernels there is no scalar tail: `values.len()` must be a
//! multiple of `W`, and unaligned input is rejected before anything is written.

use crate::error::{check_len, KernelError, KernelResult};
use crate::isa::{Mask, VecF32, VectorIsa};

/// `output[i] = |values[i]|` for a width-aligned `values`.
pub fn abs_vector<const W: usize>(
    isa: &mut VectorIsa<W>,
    values: &[f32],
    output: &mut [f32],
) -> KernelResult<()> {
    check_len("output", values.len(), output.len())?;
    check_aligned::<W>(values.len())?;

    let all = isa.init_ones();
    let zero = isa.splat(0.0f32);
    for (src, dst) in values.chunks_exact(W).zip(output.chunks_exact_mut(W)) {
        let result = abs_group(isa, src, zero, all);
        isa.vstore(dst, result, all);
    }
    Ok(())
}

/// In-place [`abs_vector`]: each group is loaded into a register before the
/// store writes it back, so no element is read after being overwritten.
pub fn abs_vector_inplace<const W: usize>(isa: &mut VectorIsa<W>, values: &mut [f32]) -> KernelResult<()> {
    check_aligned::<W>(values.len())?;

    let all = isa.init_ones();
    let zero = isa.splat(0.0f32);
    for group in values.chunks_exact_mut(W) {
        let result = abs_group(isa, group, zero, all);
        isa.vstore(group, result, all);
    }
    Ok(())
}

#[inline]
fn abs_group<const W: usize>(isa: &mut VectorIsa<W>, src: &[f32], zero: VecF32<W>, all: Mask<W>) -> VecF32<W> {
    let x = isa.vload(VecF32::default(), src, all);
    let negative = isa.vlt(x, zero, all);
    let result = isa.vsub(VecF32::default(), zero, x, negative);
    let non_negative = isa.mask_not(negative);
    isa.vload(result, src, non_negative)
}

fn check_aligned<const W: usize>(len: usize) -> KernelResult<()> {
    if len % W == 0 {
        return Ok(());
    }
    log::warn!("abs_vector: rejecting length {} (not a multiple of width {})", len, W);
    Err(KernelError::UnalignedLength { len, width: W })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IsaConfig;
    use vecintrin_scalar_ops::abs_serial;

    fn isa8() -> VectorIsa<8> {
        VectorIsa::with_config(IsaConfig::default())
    }

    fn bits(v: &[f32]) -> Vec<u32> {
        v.iter().map(|x| x.to_bits()).collect()
    }

    #[test]
    fn test_abs_vector_matches_serial() {
        let values: Vec<f32> = (0..32).map(|i| (i as f32 - 15.5) * 0.75).collect();
        let mut expected = vec![0.0; 32];
        abs_serial(&values, &mut expected);

        let mut out = vec![0.0; 32];
        abs_vector(&mut isa8(), &values, &mut out).unwrap();
        assert_eq!(bits(&out), bits(&expected));
    }

    #[test]
    fn test_abs_vector_special_values() {
        let values = [-0.0, 0.0, f32::NAN, -f32::INFINITY, f32::INFINITY, -1e-38, f32::MIN, 3.0];
        let mut expected = [0.0; 8];
        abs_serial(&values, &mut expected);
        let mut out = [0.0; 8];
        abs_vector(&mut isa8(), &values, &mut out).unwrap();
        assert_eq!(bits(&out), bits(&expected));
        assert!(out[0].is_sign_negative());
    }

    #[test]
    fn test_abs_vector_unaligned_rejected() {
        let values = vec![-1.0; 11];
        let mut out = vec![7.0; 11];
        let err = abs_vector(&mut isa8(), &values, &mut out).unwrap_err();
        assert_eq!(err, KernelError::UnalignedLength { len: 11, width: 8 });
        assert!(out.iter().all(|&x| x == 7.0));
    }

    #[test]
    fn test_abs_vector_length_mismatch() {
        let values = vec![-1.0; 8];
        let mut out = vec![0.0; 16];
        let err = abs_vector(&mut isa8(), &values, &mut out).unwrap_err();
        assert_eq!(err, KernelError::LengthMismatch { buffer: "output", expected: 8, actual: 16 });
    }

    #[test]
    fn test_abs_vector_empty() {
        let mut isa = isa8();
        abs_vector(&mut isa, &[], &mut []).unwrap();
        // only the zero broadcast ran
        assert_eq!(isa.stats().vector_instructions, 1);
    }

    #[test]
    fn test_abs_vector_inplace() {
        let mut values: Vec<f32> = (0..16).map(|i| if i % 3 == 0 { -(i as f32) } else { i as f32 }).collect();
        let mut expected = vec![0.0; 16];
        abs_serial(&values, &mut expected);
        abs_vector_inplace(&mut isa8(), &mut values).unwrap();
        assert_eq!(bits(&values), bits(&expected));
    }

    #[test]
    fn test_abs_vector_utilization_tracks_sign_mix() {
        // per group: vload, vlt, vsub, masknot, vload, vstore
        let mut isa = isa8();
        let values = [-1.0, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0, 8.0];
        let mut out = [0.0; 8];
        abs_vector(&mut isa, &values, &mut out).unwrap();
        let stats = isa.stats();
        assert_eq!(stats.vector_instructions, 7);
        // vsub and the reload each run on half the lanes
        assert_eq!(stats.utilized_lanes, 7 * 8 - 8);
    }
}
