//! Element-wise scalar references: absolute value and clamped power.

use crate::CLAMP_CEILING;

/// Abs: `output[i] = if values[i] < 0 { -values[i] } else { values[i] }`
///
/// `-0.0` and NaN take the `else` branch and are copied through unchanged.
///
/// # Panics
/// Panics if `output` is shorter than `values`.
#[inline(never)]
pub fn abs_serial(values: &[f32], output: &mut [f32]) {
    assert!(output.len() >= values.len(), "abs_serial: output too short");
    for (out, &x) in output.iter_mut().zip(values) {
        *out = if x < 0.0 { -x } else { x };
    }
}

/// In-place variant of [`abs_serial`].
#[inline(never)]
pub fn abs_serial_inplace(values: &mut [f32]) {
    for x in values.iter_mut() {
        if *x < 0.0 {
            *x = -*x;
        }
    }
}

/// `x^y` by repeated squaring, clamped to [`CLAMP_CEILING`].
///
/// Stops as soon as the running product exceeds the ceiling; the squared
/// base is never computed past that point.
#[inline]
pub fn clamped_exp_scalar(x: f32, y: u32) -> f32 {
    let mut result = 1.0_f32;
    let mut xpower = x;
    let mut y = y;
    while y > 0 {
        if y & 0x1 != 0 {
            result *= xpower;
            if result > CLAMP_CEILING {
                result = CLAMP_CEILING;
                break;
            }
        }
        xpower *= xpower;
        y >>= 1;
    }
    result
}

/// Clamped exp: `output[i] = min_clamped(values[i] ^ exponents[i])`
///
/// # Panics
/// Panics if `exponents` or `output` is shorter than `values`.
#[inline(never)]
pub fn clamped_exp_serial(values: &[f32], exponents: &[u32], output: &mut [f32]) {
    let n = values.len();
    assert!(
        exponents.len() >= n && output.len() >= n,
        "clamped_exp_serial: exponents/output too short"
    );
    for i in 0..n {
        output[i] = clamped_exp_scalar(values[i], exponents[i]);
    }
}
