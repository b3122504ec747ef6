//! Quadratic extension Fp2 = Fp[u] / (u^2 + 1), the coordinate field of G2.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::field::CurveField;
use crate::BaseField;

/// Element `c0 + c1 * u` with `u^2 = -1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fp2 {
    /// Real part.
    pub c0: BaseField,
    /// Coefficient of `u`.
    pub c1: BaseField,
}

impl Fp2 {
    pub const ZERO: Self = Fp2 {
        c0: BaseField::ZERO,
        c1: BaseField::ZERO,
    };

    pub const ONE: Self = Fp2 {
        c0: BaseField::ONE,
        c1: BaseField::ZERO,
    };

    #[inline]
    pub const fn new(c0: BaseField, c1: BaseField) -> Self {
        Fp2 { c0, c1 }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    /// `c0 - c1 * u`
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp2::new(self.c0, -self.c1)
    }

    /// `(c0 + c1 u)(c0 - c1 u) = c0^2 + c1^2`
    #[inline]
    pub fn norm(&self) -> BaseField {
        self.c0.square() + self.c1.square()
    }

    #[inline]
    pub fn mul_by_base(&self, k: BaseField) -> Self {
        Fp2::new(self.c0 * k, self.c1 * k)
    }

    pub fn square(&self) -> Self {
        // (a + bu)^2 = (a + b)(a - b) + 2ab u
        let ab = self.c0 * self.c1;
        Fp2::new((self.c0 + self.c1) * (self.c0 - self.c1), ab.double())
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// `conjugate / norm`; the norm of a nonzero element is nonzero since
    /// `u^2 + 1` is irreducible over the base field.
    pub fn invert(&self) -> Result<Self> {
        let norm_inv = self.norm().invert()?;
        Ok(self.conjugate().mul_by_base(norm_inv))
    }
}

impl CurveField for Fp2 {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    #[inline]
    fn is_zero(&self) -> bool {
        Fp2::is_zero(self)
    }

    #[inline]
    fn square(&self) -> Self {
        Fp2::square(self)
    }

    #[inline]
    fn double(&self) -> Self {
        Fp2::double(self)
    }

    #[inline]
    fn invert(&self) -> Result<Self> {
        Fp2::invert(self)
    }
}

impl Add for Fp2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fp2::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl AddAssign for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fp2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fp2::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl SubAssign for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fp2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp2::new(-self.c0, -self.c1)
    }
}

impl Mul for Fp2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Karatsuba: (a0 + a1 u)(b0 + b1 u) = (a0 b0 - a1 b1) + ((a0 + a1)(b0 + b1) - a0 b0 - a1 b1) u
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let cross = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        Fp2::new(v0 - v1, cross)
    }
}

impl MulAssign for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<BaseField> for Fp2 {
    fn from(c0: BaseField) -> Self {
        Fp2::new(c0, BaseField::ZERO)
    }
}

impl Display for Fp2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}*u", self.c0, self.c1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn fp2(c0: u64, c1: u64) -> Fp2 {
        Fp2::new(BaseField::from_u64(c0), BaseField::from_u64(c1))
    }

    #[test]
    fn test_u_squared_is_minus_one() {
        let u = fp2(0, 1);
        assert_eq!(u * u, -Fp2::ONE);
        assert_eq!(u.square(), -Fp2::ONE);
    }

    #[test]
    fn test_multiplication() {
        // (3 + 4u)(5 + 6u) = 15 - 24 + (18 + 20)u
        let product = fp2(3, 4) * fp2(5, 6);
        assert_eq!(product, Fp2::new(-BaseField::from_u64(9), BaseField::from_u64(38)));
        assert_eq!(fp2(3, 4).square(), fp2(3, 4) * fp2(3, 4));
    }

    #[test]
    fn test_norm_and_conjugate() {
        let a = fp2(3, 4);
        assert_eq!(a.norm(), BaseField::from_u64(25));
        assert_eq!(a * a.conjugate(), Fp2::from(a.norm()));
    }

    #[test]
    fn test_inverse() {
        let a = fp2(9, 1);
        let inv = a.invert().expect("nonzero");
        assert_eq!(a * inv, Fp2::ONE);

        let real_only = fp2(7, 0);
        assert_eq!(real_only * real_only.invert().expect("nonzero"), Fp2::ONE);

        let imaginary_only = fp2(0, 7);
        assert_eq!(
            imaginary_only * imaginary_only.invert().expect("nonzero"),
            Fp2::ONE
        );
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        assert_eq!(
            Fp2::ZERO.invert(),
            Err(Error::ArithmeticDomain("inverse of zero"))
        );
    }

    #[test]
    fn test_add_sub_neg() {
        let a = fp2(10, 20);
        let b = fp2(1, 2);
        assert_eq!(a - b, fp2(9, 18));
        assert_eq!(a + -a, Fp2::ZERO);
        assert_eq!(a.double(), a + a);
    }
}
