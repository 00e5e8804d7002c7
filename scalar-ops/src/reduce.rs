//! Reduction scalar references.

/// Sum: `values[0] + values[1] + ... + values[n-1]`, accumulated left to right in `f32`.
#[inline(never)]
pub fn array_sum_serial(values: &[f32]) -> f32 {
    let mut sum = 0.0_f32;
    for &v in values {
        sum += v;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_sum_empty() {
        assert_eq!(array_sum_serial(&[]), 0.0);
    }

    #[test]
    fn test_array_sum_values() {
        assert_eq!(array_sum_serial(&[1.0, 2.0, 3.5, -0.5]), 6.0);
    }
}
