use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Bit-per-lane execution predicate. Its width is the register width by
/// construction: both share the same `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask<const W: usize> {
    bits: [bool; W],
}

impl<const W: usize> Mask<W> {
    pub fn ones() -> Self {
        Self { bits: [true; W] }
    }

    pub fn zeros() -> Self {
        Self { bits: [false; W] }
    }

    /// Lanes `0..first` on, the rest off. `first >= W` gives all ones.
    pub fn first(first: usize) -> Self {
        let mut bits = [false; W];
        for bit in bits.iter_mut().take(first) {
            *bit = true;
        }
        Self { bits }
    }

    pub fn from_array(bits: [bool; W]) -> Self {
        Self { bits }
    }

    #[inline(always)]
    pub fn is_set(&self, lane: usize) -> bool {
        self.bits[lane]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, lane: usize, on: bool) {
        self.bits[lane] = on;
    }

    pub fn bits(&self) -> &[bool; W] {
        &self.bits
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn any(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }
}

impl<const W: usize> Default for Mask<W> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const W: usize> Not for Mask<W> {
    type Output = Self;

    fn not(self) -> Self {
        let mut bits = self.bits;
        for b in bits.iter_mut() {
            *b = !*b;
        }
        Self { bits }
    }
}

impl<const W: usize> BitAnd for Mask<W> {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        let mut bits = self.bits;
        for (b, o) in bits.iter_mut().zip(other.bits) {
            *b = *b && o;
        }
        Self { bits }
    }
}

impl<const W: usize> BitOr for Mask<W> {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        let mut bits = self.bits;
        for (b, o) in bits.iter_mut().zip(other.bits) {
            *b = *b || o;
        }
        Self { bits }
    }
}

/// `*` for an active lane, `_` for an inactive one.
impl<const W: usize> fmt::Display for Mask<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "*" } else { "_" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_first() {
        let m = Mask::<8>::first(3);
        assert_eq!(m.count(), 3);
        assert!(m.is_set(2));
        assert!(!m.is_set(3));
        assert_eq!(Mask::<4>::first(9), Mask::<4>::ones());
        assert_eq!(Mask::<4>::first(0), Mask::<4>::zeros());
    }

    #[test]
    fn test_mask_combinators() {
        let a = Mask::<4>::from_array([true, true, false, false]);
        let b = Mask::<4>::from_array([true, false, true, false]);
        assert_eq!(a & b, Mask::from_array([true, false, false, false]));
        assert_eq!(a | b, Mask::from_array([true, true, true, false]));
        assert_eq!(!a, Mask::from_array([false, false, true, true]));
        assert!(!Mask::<4>::zeros().any());
    }

    #[test]
    fn test_mask_display() {
        let m = Mask::<4>::from_array([true, false, false, true]);
        assert_eq!(m.to_string(), "*__*");
    }
}
