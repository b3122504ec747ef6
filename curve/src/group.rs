use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::field::{FieldParams, Fp};

/// Integers usable as scalar-multiplication exponents.
pub trait ScalarBits {
    /// Canonical little-endian 64-bit limbs.
    fn to_u64_limbs(&self) -> [u64; 4];

    /// Bits from most significant to least significant.
    fn bits_msb_first(&self) -> impl Iterator<Item = bool> {
        self.to_u64_limbs()
            .into_iter()
            .rev()
            .flat_map(|limb| (0..64).rev().map(move |i| (limb >> i) & 1 == 1))
    }
}

impl<P: FieldParams> ScalarBits for Fp<P> {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}

/// Raw limbs may encode values at or above the group order, e.g. the order itself.
impl ScalarBits for [u64; 4] {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        *self
    }
}

impl ScalarBits for u64 {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        [*self, 0, 0, 0]
    }
}

pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Left-to-right double-and-add, folded over the scalar's bits.
    #[inline]
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        scalar
            .bits_msb_first()
            .fold(Self::identity(), |acc, bit| {
                let doubled = acc.double();
                if bit {
                    doubled + *self
                } else {
                    doubled
                }
            })
    }

    /// Fixed 4-bit window variant of [`Group::scalar_mul`].
    fn scalar_mul_windowed<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        let mut table = [Self::identity(); 16];
        table[1] = *self;

        for i in 2..16 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1] + table[1]
            };
        }

        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for &limb in scalar_limbs.iter().rev() {
            for shift in (0..64).step_by(4).rev() {
                result = result.double().double().double().double();

                let window = ((limb >> shift) & 0xF) as usize;
                if window != 0 {
                    result = result + table[window];
                }
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        match n {
            0 => Self::identity(),
            1 => *self,
            _ => self.scalar_mul(&n),
        }
    }
}
