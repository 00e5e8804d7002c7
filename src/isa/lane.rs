use std::fmt::Debug;
use std::ops::Index;

/// Scalar element held in one lane of a [`VecReg`].
///
/// Arithmetic goes through explicit methods so integer lanes wrap like
/// hardware lanes do instead of panicking on overflow in debug builds.
pub trait Lane: Debug + Clone + Copy + Default + PartialEq + PartialOrd + Send + Sync + 'static {
    const ZERO: Self;

    fn lane_add(self, other: Self) -> Self;
    fn lane_sub(self, other: Self) -> Self;
    fn lane_mul(self, other: Self) -> Self;
}

/// Integer lanes additionally support bitwise and shift instructions.
pub trait IntLane: Lane {
    fn lane_and(self, other: Self) -> Self;
    /// Right shift by `amount` (modulo the lane bit width). Arithmetic for
    /// signed lanes, logical for unsigned.
    fn lane_shr(self, amount: Self) -> Self;
}

impl Lane for f32 {
    const ZERO: Self = 0.0;

    #[inline(always)] fn lane_add(self, other: Self) -> Self { self + other }
    #[inline(always)] fn lane_sub(self, other: Self) -> Self { self - other }
    #[inline(always)] fn lane_mul(self, other: Self) -> Self { self * other }
}

impl Lane for i32 {
    const ZERO: Self = 0;

    #[inline(always)] fn lane_add(self, other: Self) -> Self { self.wrapping_add(other) }
    #[inline(always)] fn lane_sub(self, other: Self) -> Self { self.wrapping_sub(other) }
    #[inline(always)] fn lane_mul(self, other: Self) -> Self { self.wrapping_mul(other) }
}

impl IntLane for i32 {
    #[inline(always)] fn lane_and(self, other: Self) -> Self { self & other }
    #[inline(always)] fn lane_shr(self, amount: Self) -> Self { self.wrapping_shr(amount as u32) }
}

impl Lane for u32 {
    const ZERO: Self = 0;

    #[inline(always)] fn lane_add(self, other: Self) -> Self { self.wrapping_add(other) }
    #[inline(always)] fn lane_sub(self, other: Self) -> Self { self.wrapping_sub(other) }
    #[inline(always)] fn lane_mul(self, other: Self) -> Self { self.wrapping_mul(other) }
}

impl IntLane for u32 {
    #[inline(always)] fn lane_and(self, other: Self) -> Self { self & other }
    #[inline(always)] fn lane_shr(self, amount: Self) -> Self { self.wrapping_shr(amount) }
}

/// A `W`-lane vector register.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VecReg<T: Lane, const W: usize> {
    lanes: [T; W],
}

pub type VecF32<const W: usize> = VecReg<f32, W>;
pub type VecI32<const W: usize> = VecReg<i32, W>;
pub type VecU32<const W: usize> = VecReg<u32, W>;

impl<T: Lane, const W: usize> VecReg<T, W> {
    pub const WIDTH: usize = W;

    pub fn from_array(lanes: [T; W]) -> Self {
        Self { lanes }
    }

    /// Every lane set to `value`. Not an instruction: no logger entry.
    pub fn splat(value: T) -> Self {
        Self { lanes: [value; W] }
    }

    pub fn lanes(&self) -> &[T; W] {
        &self.lanes
    }

    pub fn to_array(self) -> [T; W] {
        self.lanes
    }

    #[inline(always)]
    pub(crate) fn lanes_mut(&mut self) -> &mut [T; W] {
        &mut self.lanes
    }
}

impl<T: Lane, const W: usize> Default for VecReg<T, W> {
    fn default() -> Self {
        Self::splat(T::ZERO)
    }
}

impl<T: Lane, const W: usize> Index<usize> for VecReg<T, W> {
    type Output = T;

    fn index(&self, lane: usize) -> &T {
        &self.lanes[lane]
    }
}
