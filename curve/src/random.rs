use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::field::{FieldParams, Fp};
use crate::Fp2;

/// Both moduli are below 2^254.
const TOP_LIMB_MASK: u64 = u64::MAX >> 2;

impl<P: FieldParams> Distribution<Fp<P>> for StandardUniform {
    /// Rejection sampling over 254-bit integers.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp<P> {
        loop {
            let mut limbs: [u64; 4] = rng.random();
            limbs[3] &= TOP_LIMB_MASK;
            if let Ok(value) = Fp::try_from_limbs(limbs) {
                return value;
            }
        }
    }
}

impl Distribution<Fp2> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp2 {
        Fp2::new(self.sample(rng), self.sample(rng))
    }
}

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Sample until the value is nonzero.
    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<P: FieldParams> RandomField for Fp<P> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }

    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let value = Self::random(rng);
            if !value.is_zero() {
                return value;
            }
        }
    }
}

impl RandomField for Fp2 {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }

    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let value = Self::random(rng);
            if !value.is_zero() {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseField, ScalarField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_are_canonical_and_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = ScalarField::random(&mut rng);
        let b = ScalarField::random(&mut rng);
        assert_ne!(a, b);
        assert!(a.to_biguint() < ScalarField::modulus());

        let x = BaseField::random_nonzero(&mut rng);
        assert!(!x.is_zero());
        assert!(x.to_biguint() < BaseField::modulus());
    }

    #[test]
    fn test_fp2_sample_inverts() {
        let mut rng = StdRng::seed_from_u64(99);
        let z = Fp2::random_nonzero(&mut rng);
        assert_eq!(z * z.invert().expect("nonzero"), Fp2::ONE);
    }
}
