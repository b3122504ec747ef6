//! G2: the sextic twist `y^2 = x^3 + 3 / (9 + u)` over [`Fp2`].

use std::sync::LazyLock;

use crate::affine::{Affine, CurveConfig};
use crate::generators::g2_generator;
use crate::{BaseField, Fp2};

const B_C0: [u64; 4] = [
    0x3267e6dc24a138e5,
    0xb5b4c5e559dbefa3,
    0x81be18991be06ac3,
    0x2b149d40ceb8aaae,
];
const B_C1: [u64; 4] = [
    0xe4a2bd0685c315d2,
    0xa74fa084e52d1852,
    0xcd2cafadeed8fdf4,
    0x009713b03af0fed4,
];

static TWIST_B: LazyLock<Fp2> = LazyLock::new(|| {
    Fp2::new(
        BaseField::from_canonical_limbs(B_C0),
        BaseField::from_canonical_limbs(B_C1),
    )
});

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G2Config;

impl CurveConfig for G2Config {
    type Base = Fp2;

    const NAME: &'static str = "G2";

    #[inline]
    fn coeff_b() -> Fp2 {
        *TWIST_B
    }

    #[inline]
    fn generator() -> Affine<Self> {
        g2_generator()
    }
}

pub type G2Affine = Affine<G2Config>;
