//! Sum reduction: lane-wise accumulation, then a horizontal pass.
//!
//! One accumulator register collects every full-width group. At the end it is
//! spilled to a `W`-element scratch buffer that is summed serially, and the
//! serial sum of the `len % W` tail is added on top. The vector path reorders
//! the additions, so results agree with [`array_sum_serial`] to rounding, not
//! bit for bit.

use vecintrin_scalar_ops::array_sum_serial;

use crate::isa::{VecF32, VectorIsa};

/// Sum of `values`, any length; `0.0` for an empty slice.
pub fn array_sum_vector<const W: usize>(isa: &mut VectorIsa<W>, values: &[f32]) -> f32 {
    let all = isa.init_ones();
    let groups = values.chunks_exact(W);
    let tail = groups.remainder();
    log::debug!("array_sum_vector: n={} tail={} width={}", values.len(), tail.len(), W);

    let mut acc = isa.splat(0.0f32);
    for group in groups {
        let v = isa.vload(VecF32::default(), group, all);
        acc = isa.vadd(acc, acc, v, all);
    }

    let mut spill = [0.0f32; W];
    isa.vstore(&mut spill, acc, all);
    array_sum_serial(&spill) + array_sum_serial(tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IsaConfig;

    fn isa8() -> VectorIsa<8> {
        VectorIsa::with_config(IsaConfig::default())
    }

    #[test]
    fn test_array_sum_empty() {
        assert_eq!(array_sum_vector(&mut isa8(), &[]), 0.0);
    }

    #[test]
    fn test_array_sum_tail_only() {
        assert_eq!(array_sum_vector(&mut isa8(), &[1.0, 2.0, 3.0]), 6.0);
    }

    #[test]
    fn test_array_sum_prefix_and_tail() {
        let values: Vec<f32> = (1..=11).map(|i| i as f32).collect();
        assert_eq!(array_sum_vector(&mut isa8(), &values), 66.0);
    }

    #[test]
    fn test_array_sum_close_to_serial() {
        let values: Vec<f32> = (0..1001).map(|i| ((i * 37 % 101) as f32 - 50.0) * 0.013).collect();
        let serial = array_sum_serial(&values);
        let vector = array_sum_vector(&mut isa8(), &values);
        let scale: f32 = values.iter().map(|v| v.abs()).sum();
        assert!((serial - vector).abs() <= 1e-4 * scale.max(1.0), "serial={serial} vector={vector}");
    }

    #[test]
    fn test_array_sum_other_widths() {
        let values: Vec<f32> = (0..13).map(|i| i as f32 * 0.5).collect();
        let mut isa4 = VectorIsa::<4>::with_config(IsaConfig::default());
        let mut isa16 = VectorIsa::<16>::with_config(IsaConfig::default());
        assert_eq!(array_sum_vector(&mut isa4, &values), 39.0);
        assert_eq!(array_sum_vector(&mut isa16, &values), 39.0);
    }

    #[test]
    fn test_array_sum_instruction_count() {
        // splat + (vload + vadd) per group + spill store
        let mut isa = isa8();
        array_sum_vector(&mut isa, &[1.0; 24]);
        assert_eq!(isa.stats().vector_instructions, 1 + 2 * 3 + 1);
        assert_eq!(isa.stats().utilization(), 1.0);
    }
}
