//! G1: `y^2 = x^3 + 3` over the base field.

use crate::affine::{Affine, CurveConfig};
use crate::generators::g1_generator;
use crate::BaseField;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G1Config;

impl CurveConfig for G1Config {
    type Base = BaseField;

    const NAME: &'static str = "G1";

    #[inline]
    fn coeff_b() -> BaseField {
        BaseField::from_u64(3)
    }

    #[inline]
    fn generator() -> Affine<Self> {
        g1_generator()
    }
}

pub type G1Affine = Affine<G1Config>;
