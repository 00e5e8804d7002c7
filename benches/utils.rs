#![allow(dead_code)]

use vecintrin_kernels::data;

/// Element throughput: elements / second.
pub fn throughput_elements(elements: usize, duration_secs: f64) -> f64 {
    elements as f64 / duration_secs
}

/// Bytes read + written by an element-wise kernel (in + out, f32).
pub fn elementwise_rw_bytes(n: usize) -> u64 {
    2 * n as u64 * 4
}

/// Bytes read + written by the clamped-exp kernel (values + exponents + out).
pub fn clamped_exp_rw_bytes(n: usize) -> u64 {
    3 * n as u64 * 4
}

/// Bytes read by a reduction (f32).
pub fn reduce_read_bytes(n: usize) -> u64 {
    n as u64 * 4
}

#[derive(Debug, Clone, Copy)]
pub enum InputPattern {
    Random,
    Good,
    Bad,
}

impl InputPattern {
    pub const ALL: [InputPattern; 3] = [InputPattern::Random, InputPattern::Good, InputPattern::Bad];

    pub fn label(self) -> &'static str {
        match self {
            InputPattern::Random => "random",
            InputPattern::Good => "good",
            InputPattern::Bad => "bad",
        }
    }
}

/// Values and exponents for `pattern`, grouped by `width` lanes.
pub fn make_inputs(pattern: InputPattern, n: usize, width: usize, max_exponent: u32) -> (Vec<f32>, Vec<u32>) {
    match pattern {
        InputPattern::Random => (data::random_values(n), data::random_exponents(n, max_exponent)),
        InputPattern::Good => {
            let mut values = vec![0.0; n];
            let mut exponents = vec![0; n];
            data::init_good(&mut values, width);
            data::init_exponents_good(&mut exponents, max_exponent);
            (values, exponents)
        }
        InputPattern::Bad => {
            let mut values = vec![0.0; n];
            let mut exponents = vec![0; n];
            data::init_bad(&mut values, width);
            data::init_exponents_bad(&mut exponents, width, max_exponent);
            (values, exponents)
        }
    }
}

pub fn size_label(n: usize) -> String {
    match n {
        1024 => "1K".into(),
        16384 => "16K".into(),
        65536 => "64K".into(),
        _ => format!("{n}"),
    }
}
