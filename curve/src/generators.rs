//! Fixed generators of G1 and G2.
//!
//! G1 uses `(1, 2)`. G2 uses the generator from EIP-197, which is also the
//! `generatorG2()` of the Solidity BN254 libraries that verify against the
//! pairing precompile:
//!
//! ```text
//! x = 10857046999023057135944570762232829481370756359578518086990519993285655852781
//!   + 11559732032986387107991004021392285783925812861821192530917403151452391805634 * u
//! y = 8495653923123431417604973247489272438418190587263600148770280649306958101930
//!   + 4082367875863433681332203403145435568316851327593401208105741076214120093531 * u
//! ```

use std::sync::{LazyLock, OnceLock};

use crate::errors::{Error, Result};
use crate::{BaseField, Fp2, G1Affine, G2Affine, Group, GROUP_ORDER};

const G2_X_C0: [u64; 4] = [
    0x46debd5cd992f6ed,
    0x674322d4f75edadd,
    0x426a00665e5c4479,
    0x1800deef121f1e76,
];
const G2_X_C1: [u64; 4] = [
    0x97e485b7aef312c2,
    0xf1aa493335a9e712,
    0x7260bfb731fb5d25,
    0x198e9393920d483a,
];
const G2_Y_C0: [u64; 4] = [
    0x4ce6cc0166fa7daa,
    0xe3d1e7690c43d37b,
    0x4aab71808dcb408f,
    0x12c85ea5db8c6deb,
];
const G2_Y_C1: [u64; 4] = [
    0x55acdadcd122975b,
    0xbc4b313370b38ef3,
    0xec9e99ad690c3395,
    0x090689d0585ff075,
];

static G1_GENERATOR: LazyLock<G1Affine> =
    LazyLock::new(|| G1Affine::new_unchecked(BaseField::ONE, BaseField::from_u64(2)));

static G2_GENERATOR: LazyLock<G2Affine> = LazyLock::new(|| {
    G2Affine::new_unchecked(
        Fp2::new(
            BaseField::from_canonical_limbs(G2_X_C0),
            BaseField::from_canonical_limbs(G2_X_C1),
        ),
        Fp2::new(
            BaseField::from_canonical_limbs(G2_Y_C0),
            BaseField::from_canonical_limbs(G2_Y_C1),
        ),
    )
});

static GENERATOR_CHECK: OnceLock<Result<()>> = OnceLock::new();

/// The G1 generator `(1, 2)`.
#[inline]
pub fn g1_generator() -> G1Affine {
    *G1_GENERATOR
}

/// The EIP-197 G2 generator.
#[inline]
pub fn g2_generator() -> G2Affine {
    *G2_GENERATOR
}

/// Check once per process that both generators lie on their curves and have
/// order r. Later calls return the cached outcome.
pub fn verify_generators() -> Result<()> {
    GENERATOR_CHECK
        .get_or_init(|| {
            tracing::debug!("verifying BN254 generators");
            check_generator(g1_generator())?;
            check_generator(g2_generator())
        })
        .clone()
}

fn check_generator<G>(generator: crate::Affine<G>) -> Result<()>
where
    G: crate::CurveConfig,
{
    if generator.is_infinity() || !generator.is_on_curve() {
        return Err(Error::PointNotOnCurve);
    }
    if !generator.scalar_mul(&GROUP_ORDER).is_infinity() {
        return Err(Error::ArithmeticDomain("generator does not have order r"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_verify() {
        assert_eq!(verify_generators(), Ok(()));
        // cached
        assert_eq!(verify_generators(), Ok(()));
    }

    #[test]
    fn test_g1_generator_is_one_two() {
        let g = g1_generator();
        let (x, y) = g.coordinates().expect("not infinity");
        assert_eq!(x, BaseField::from_u64(1));
        assert_eq!(y, BaseField::from_u64(2));
        // 2^2 = 4 = 1^3 + 3
        assert_eq!(y.square(), x.square() * x + BaseField::from_u64(3));
        assert!(g.is_on_curve());
    }

    #[test]
    fn test_g2_generator_coordinates() {
        let (x, y) = g2_generator().coordinates().expect("not infinity");
        assert_eq!(
            x.c0.to_decimal(),
            "10857046999023057135944570762232829481370756359578518086990519993285655852781"
        );
        assert_eq!(
            x.c1.to_decimal(),
            "11559732032986387107991004021392285783925812861821192530917403151452391805634"
        );
        assert_eq!(
            y.c0.to_decimal(),
            "8495653923123431417604973247489272438418190587263600148770280649306958101930"
        );
        assert_eq!(
            y.c1.to_decimal(),
            "4082367875863433681332203403145435568316851327593401208105741076214120093531"
        );
        assert!(g2_generator().is_on_curve());
    }

    #[test]
    fn test_check_rejects_off_curve_generator() {
        let bogus = G1Affine::new_unchecked(BaseField::ONE, BaseField::from_u64(3));
        assert_eq!(check_generator(bogus), Err(Error::PointNotOnCurve));
        assert_eq!(
            check_generator(G1Affine::INFINITY),
            Err(Error::PointNotOnCurve)
        );
    }
}
