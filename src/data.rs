//! Synthetic inputs for exercising lane divergence.
//!
//! "Good" inputs make every lane of a width-aligned group behave the same,
//! so masked instructions run with full masks. "Bad" inputs put one lane of
//! each group on a different path from its neighbours.

use rand::Rng;

/// Uniform values in `[0, 1.99)`.
pub fn init_random<R: Rng>(rng: &mut R, values: &mut [f32]) {
    for v in values.iter_mut() {
        *v = rng.gen_range(0.0..1.99);
    }
}

/// One value per `width`-element group, ramping from `0` towards `1` by group start.
///
/// # Panics
/// Panics if `width == 0`.
pub fn init_good(values: &mut [f32], width: usize) {
    let interval = 1.0 / values.len().max(1) as f32;
    for (g, group) in values.chunks_mut(width).enumerate() {
        group.fill(interval * (g * width) as f32);
    }
}

/// `0.0` on the first lane of each group, `1.0` on the others.
///
/// # Panics
/// Panics if `width == 0`.
pub fn init_bad(values: &mut [f32], width: usize) {
    assert!(width > 0, "init_bad: width must be non-zero");
    for (i, v) in values.iter_mut().enumerate() {
        *v = if i % width == 0 { 0.0 } else { 1.0 };
    }
}

/// Uniform exponents in `[0, max_exponent]`.
pub fn init_exponents_random<R: Rng>(rng: &mut R, exponents: &mut [u32], max_exponent: u32) {
    for y in exponents.iter_mut() {
        *y = rng.gen_range(0..=max_exponent);
    }
}

/// The same exponent on every lane.
pub fn init_exponents_good(exponents: &mut [u32], exponent: u32) {
    exponents.fill(exponent);
}

/// `exponent` on the first lane of each group, `0` elsewhere: one lane keeps
/// the group iterating while the rest sit masked off.
///
/// # Panics
/// Panics if `width == 0`.
pub fn init_exponents_bad(exponents: &mut [u32], width: usize, exponent: u32) {
    assert!(width > 0, "init_exponents_bad: width must be non-zero");
    for (i, y) in exponents.iter_mut().enumerate() {
        *y = if i % width == 0 { exponent } else { 0 };
    }
}

/// `n` values from [`init_random`] on the thread rng.
pub fn random_values(n: usize) -> Vec<f32> {
    let mut values = vec![0.0; n];
    init_random(&mut rand::thread_rng(), &mut values);
    values
}

/// `n` exponents from [`init_exponents_random`] on the thread rng.
pub fn random_exponents(n: usize, max_exponent: u32) -> Vec<u32> {
    let mut exponents = vec![0; n];
    init_exponents_random(&mut rand::thread_rng(), &mut exponents, max_exponent);
    exponents
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_init_random_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut values = vec![0.0; 1000];
        init_random(&mut rng, &mut values);
        assert!(values.iter().all(|&v| (0.0f32..1.99).contains(&v)));
    }

    #[test]
    fn test_init_good_groups_uniform() {
        let mut values = vec![-1.0; 20];
        init_good(&mut values, 8);
        for group in values.chunks(8) {
            assert!(group.iter().all(|&v| v == group[0]));
        }
        assert_eq!(values[0], 0.0);
        assert_eq!(values[8], 8.0 / 20.0);
        assert!(values.iter().all(|&v| (0.0f32..1.0).contains(&v)));
    }

    #[test]
    fn test_init_bad_pattern() {
        let mut values = vec![5.0; 10];
        init_bad(&mut values, 4);
        assert_eq!(values, vec![0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_exponent_generators() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut exps = vec![99; 64];
        init_exponents_random(&mut rng, &mut exps, 9);
        assert!(exps.iter().all(|&y| y <= 9));

        init_exponents_good(&mut exps, 3);
        assert!(exps.iter().all(|&y| y == 3));

        init_exponents_bad(&mut exps, 8, 12);
        assert_eq!(&exps[..9], &[12, 0, 0, 0, 0, 0, 0, 0, 12]);
    }

    #[test]
    fn test_random_helpers_lengths() {
        assert_eq!(random_values(17).len(), 17);
        assert!(random_exponents(33, 4).iter().all(|&y| y <= 4));
    }
}
