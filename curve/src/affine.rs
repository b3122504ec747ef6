//! Short Weierstrass curves `y^2 = x^3 + b` in affine coordinates.
//!
//! `Affine<G1Config>` lives over the base field, `Affine<G2Config>` over the
//! quadratic extension. Points can only be built through [`Affine::new`] (or
//! decoding), which checks the curve equation.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::errors::{Error, Result};
use crate::field::CurveField;
use crate::{Group, ScalarField};

/// Parameters of a curve `y^2 = x^3 + b` with a fixed generator.
pub trait CurveConfig:
    'static + Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync
{
    /// Coordinate field.
    type Base: CurveField;

    const NAME: &'static str;

    /// The `b` coefficient.
    fn coeff_b() -> Self::Base;

    /// The fixed generator of the prime-order group.
    fn generator() -> Affine<Self>;
}

/// Affine point on the curve described by `C`, or the point at infinity.
#[derive(Copy, Clone)]
pub struct Affine<C: CurveConfig> {
    x: C::Base,
    y: C::Base,
    infinity: bool,
    _curve: PhantomData<C>,
}

impl<C: CurveConfig> Affine<C> {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: C::Base::ZERO,
        y: C::Base::ZERO,
        infinity: true,
        _curve: PhantomData,
    };

    /// Create a point, failing with `PointNotOnCurve` unless `y^2 = x^3 + b`.
    pub fn new(x: C::Base, y: C::Base) -> Result<Self> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    #[inline]
    pub(crate) fn new_unchecked(x: C::Base, y: C::Base) -> Self {
        Affine {
            x,
            y,
            infinity: false,
            _curve: PhantomData,
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(C::Base, C::Base)> {
        if self.infinity {
            None
        } else {
            Some((self.x, self.y))
        }
    }

    /// Check `y^2 = x^3 + b`; the point at infinity is always on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;
        y2 == x3 + C::coeff_b()
    }

    /// Affine addition, with the special cases resolved before the chord formula.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        if self.infinity {
            return Ok(*other);
        }
        if other.infinity {
            return Ok(*self);
        }

        if self.x == other.x {
            return if self.y == other.y {
                self.try_double()
            } else {
                // y2 = -y1
                Ok(Self::INFINITY)
            };
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (other.y - self.y) * (other.x - self.x).invert()?;

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        Ok(Self::new_unchecked(x_r, y_r))
    }

    /// Tangent doubling. A point with `y = 0` has order two, which no
    /// prime-order curve group contains; `try_double` reports it as an
    /// `ArithmeticDomain` error, while [`Affine::double`] maps it to the
    /// identity.
    pub fn try_double(&self) -> Result<Self> {
        if self.infinity {
            return Ok(*self);
        }
        if self.y.is_zero() {
            return Err(Error::ArithmeticDomain("doubling a point with y = 0"));
        }

        // λ = 3x^2 / 2y
        let x2 = self.x.square();
        let lambda = (x2.double() + x2) * self.y.double().invert()?;

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - self.x.double();

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        Ok(Self::new_unchecked(x_r, y_r))
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        // Only a y = 0 point fails, and its double is the identity.
        self.try_double().unwrap_or(Self::INFINITY)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.infinity {
            return *self;
        }
        Self::new_unchecked(self.x, -self.y)
    }
}

impl<C: CurveConfig> PartialEq for Affine<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl<C: CurveConfig> Eq for Affine<C> {}

impl<C: CurveConfig> Debug for Affine<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "{}::INFINITY", C::NAME)
        } else {
            f.debug_struct(C::NAME)
                .field("x", &self.x)
                .field("y", &self.y)
                .finish()
        }
    }
}

impl<C: CurveConfig> Default for Affine<C> {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl<C: CurveConfig> Group for Affine<C> {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.infinity
    }

    #[inline]
    fn generator() -> Self {
        C::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Affine::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Affine::negate(self)
    }
}

impl<C: CurveConfig> Add for Affine<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // Distinct x-coordinates give a nonzero chord denominator, so the
        // only failure is doubling a y = 0 point, whose double is the identity.
        self.checked_add(&other).unwrap_or(Self::INFINITY)
    }
}

impl<C: CurveConfig> AddAssign for Affine<C> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<C: CurveConfig> Sub for Affine<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl<C: CurveConfig> SubAssign for Affine<C> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<C: CurveConfig> Neg for Affine<C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl<C: CurveConfig> Mul<ScalarField> for Affine<C> {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl<C: CurveConfig> Mul<&ScalarField> for Affine<C> {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl<C: CurveConfig> Mul<Affine<C>> for ScalarField {
    type Output = Affine<C>;

    fn mul(self, point: Affine<C>) -> Affine<C> {
        <Affine<C> as Group>::scalar_mul(&point, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseField, G1Affine, G2Affine, GROUP_ORDER};

    #[test]
    fn test_infinity() {
        let inf = G1Affine::INFINITY;
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
        assert_eq!(inf.coordinates(), None);
        assert_eq!(G1Affine::default(), inf);
    }

    #[test]
    fn test_new_rejects_off_curve_point() {
        let x = BaseField::from_u64(1);
        assert_eq!(
            G1Affine::new(x, BaseField::from_u64(3)),
            Err(Error::PointNotOnCurve)
        );
        assert!(G1Affine::new(x, BaseField::from_u64(2)).is_ok());
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = G1Affine::generator();
        let inf = G1Affine::INFINITY;

        assert_eq!(g + inf, g);
        assert_eq!(inf + g, g);
        assert_eq!(inf + inf, inf);
    }

    #[test]
    fn test_point_doubling() {
        let g = G1Affine::generator();
        let g2 = g.double();

        assert!(g2.is_on_curve(), "Doubled point is not on the curve");
        assert_eq!(g + g, g2);
        assert_eq!(G1Affine::INFINITY.double(), G1Affine::INFINITY);
    }

    #[test]
    fn test_double_of_y_zero_point_is_a_domain_error() {
        // (x, 0) is never a curve point here; built unchecked to reach the edge case.
        let p = G1Affine::new_unchecked(BaseField::from_u64(5), BaseField::ZERO);
        assert_eq!(
            p.try_double(),
            Err(Error::ArithmeticDomain("doubling a point with y = 0"))
        );
        assert_eq!(p.double(), G1Affine::INFINITY);
    }

    #[test]
    fn test_point_negation() {
        let g = G1Affine::generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(g + neg_g, G1Affine::INFINITY);
        assert_eq!(g - g, G1Affine::INFINITY);
        assert_eq!(-G1Affine::INFINITY, G1Affine::INFINITY);
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = G1Affine::generator();
        let scalar = ScalarField::from_u64(5);
        let result = g.scalar_mul(&scalar);

        // 5*G = G + G + G + G + G
        let expected = g + g + g + g + g;
        assert_eq!(result, expected);
        assert!(result.is_on_curve());
        assert_eq!(g * scalar, expected);
        assert_eq!(scalar * g, expected);
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        for g in [G1Affine::generator(), G1Affine::generator().double()] {
            assert_eq!(g.scalar_mul(&ScalarField::ZERO), G1Affine::INFINITY);
            assert_eq!(g.scalar_mul(&ScalarField::ONE), g);
        }
        let h = G2Affine::generator();
        assert_eq!(h.scalar_mul(&ScalarField::ZERO), G2Affine::INFINITY);
        assert_eq!(h.scalar_mul(&ScalarField::ONE), h);
        assert_eq!(
            G1Affine::INFINITY.scalar_mul(&ScalarField::from_u64(7)),
            G1Affine::INFINITY
        );
    }

    #[test]
    fn test_group_order() {
        assert_eq!(
            G1Affine::generator().scalar_mul(&GROUP_ORDER),
            G1Affine::INFINITY
        );
        assert_eq!(
            G2Affine::generator().scalar_mul(&GROUP_ORDER),
            G2Affine::INFINITY
        );
    }

    #[test]
    fn test_order_minus_one_is_negation() {
        let r_minus_one = -ScalarField::ONE;
        let g = G1Affine::generator();
        assert_eq!(g.scalar_mul(&r_minus_one), -g);
        let h = G2Affine::generator();
        assert_eq!(h.scalar_mul(&r_minus_one), -h);
    }

    #[test]
    fn test_associativity() {
        let g = G2Affine::generator();
        let a = ScalarField::from_u64(3);
        let b = ScalarField::from_u64(5);

        // (a + b) * G = a*G + b*G
        let left = g.scalar_mul(&(a + b));
        let right = g.scalar_mul(&a) + g.scalar_mul(&b);

        assert_eq!(left, right);
        assert!(left.is_on_curve());
    }

    #[test]
    fn test_windowed_scalar_mul() {
        let scalar = ScalarField::from_u64(123456);

        let g = G1Affine::generator();
        assert_eq!(g.scalar_mul(&scalar), g.scalar_mul_windowed(&scalar));

        let h = G2Affine::generator();
        assert_eq!(h.scalar_mul(&scalar), h.scalar_mul_windowed(&scalar));
    }

    #[test]
    fn test_mul_u64() {
        let g = G1Affine::generator();
        let n = 42u64;

        let result1 = g.mul_u64(n);
        let result2 = g.scalar_mul(&ScalarField::from_u64(n));

        assert_eq!(result1, result2);
        assert!(result1.is_on_curve());
        assert_eq!(g.mul_u64(0), G1Affine::INFINITY);
        assert_eq!(g.mul_u64(1), g);
    }

    #[test]
    fn test_group_properties() {
        let g = G2Affine::generator();

        assert_eq!(g.double(), g + g);

        let triple1 = g + g + g;
        let triple2 = g.mul_u64(3);
        assert_eq!(triple1, triple2);

        let h = g.mul_u64(5);
        let neg_h = -h;
        assert_eq!(h + neg_h, G2Affine::INFINITY);
        assert_eq!(h + G2Affine::INFINITY, h);
    }
}
