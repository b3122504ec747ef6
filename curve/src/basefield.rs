//! Base field of BN254. p = 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47

use crate::field::{FieldParams, Fp};

/// Montgomery parameters for the BN254 base field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BaseParams;

impl FieldParams for BaseParams {
    const NAME: &'static str = "BaseField";

    // p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
    const MODULUS: [u64; 4] = [
        0x3c208c16d87cfd47,
        0x97816a916871ca8d,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ];

    const R: [u64; 4] = [
        0xd35d438dc58f0d9d,
        0x0a78eb28f5c70b3d,
        0x666ea36f7879462c,
        0x0e0a77c19a07df2f,
    ];

    const R2: [u64; 4] = [
        0xf32cfc5b538afa89,
        0xb5e71911d44501fb,
        0x47ab1eff0a417ff6,
        0x06d89f71cab8351f,
    ];

    const MU: u64 = 0x87d20782e4866389;
}

/// BN254 base field element, the coordinate field of G1.
pub type BaseField = Fp<BaseParams>;
