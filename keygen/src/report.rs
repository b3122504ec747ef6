//! Human-readable key report and Solidity call snippets.

use core::fmt::{self, Display, Formatter};

use bn254_curve::{BaseField, G1Affine, G2Layout, Group, FIELD_BYTES};
use num_bigint::BigUint;

use crate::keys::KeyPair;

/// Decimal strings of a G1 point's coordinates. The identity prints as `(0, 0)`.
fn g1_decimal(point: &G1Affine) -> [String; 2] {
    match point.coordinates() {
        Some((x, y)) => [x.to_decimal(), y.to_decimal()],
        None => ["0".to_string(), "0".to_string()],
    }
}

fn limb_decimal(chunk: &[u8]) -> String {
    BigUint::from_bytes_be(chunk).to_str_radix(10)
}

fn limb_hex(chunk: &[u8]) -> String {
    format!("0x{}", hex::encode(chunk))
}

/// Text rendering of a key pair. `layout` orders the G2 limb dump; the
/// contract snippets always use the `BN254.G2Point` order.
pub struct KeyReport<'a> {
    pair: &'a KeyPair,
    layout: G2Layout,
}

impl<'a> KeyReport<'a> {
    pub fn new(pair: &'a KeyPair, layout: G2Layout) -> Self {
        KeyReport { pair, layout }
    }

    fn g2_limbs(&self, layout: G2Layout) -> Vec<Vec<u8>> {
        self.pair
            .public
            .g2_bytes(layout)
            .chunks_exact(FIELD_BYTES)
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// Decimal G2 limbs in `BN254.G2Point` order, imaginary part first,
    /// whatever layout the report dumps.
    fn contract_g2_limbs(&self) -> Vec<String> {
        self.g2_limbs(G2Layout::ImaginaryFirst)
            .iter()
            .map(|l| limb_decimal(l))
            .collect()
    }

    /// Solidity `BN254.G1Point` / `BN254.G2Point` literals.
    pub fn solidity(&self) -> String {
        let [x, y] = g1_decimal(&self.pair.public.g1);
        let g2 = self.contract_g2_limbs();
        format!(
            "// G1 Point\n\
             BN254.G1Point memory pubkeyG1 = BN254.G1Point({{\n    X: {x},\n    Y: {y}\n}});\n\n\
             // G2 Point\n\
             BN254.G2Point memory pubkeyG2 = BN254.G2Point({{\n    X: [{}, {}],\n    Y: [{}, {}]\n}});\n",
            g2[0], g2[1], g2[2], g2[3]
        )
    }

    /// `abi.encode` payload for a key registrar.
    pub fn key_registrar(&self) -> String {
        let [x, y] = g1_decimal(&self.pair.public.g1);
        let g2 = self.contract_g2_limbs();
        format!(
            "bytes memory keyData = abi.encode(\n    {x}, // g1X\n    {y}, // g1Y\n    [{}, {}], // g2X\n    [{}, {}]  // g2Y\n);\n",
            g2[0], g2[1], g2[2], g2[3]
        )
    }
}

impl Display for KeyReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let scalar = self.pair.secret.scalar();
        let g1 = self.pair.public.g1_bytes();
        let g2 = self.pair.public.g2_bytes(self.layout);

        writeln!(f, "Key Details:")?;
        writeln!(f, "Private Key (scalar): {}", scalar.to_decimal())?;
        writeln!(f, "Private Key (hex): {}", scalar.to_hex())?;
        writeln!(f, "Public Key G1 (hex): 0x{}", hex::encode(g1))?;
        writeln!(f, "Public Key G1 Length: {} bytes", g1.len())?;
        writeln!(f, "Public Key G2 (hex): 0x{}", hex::encode(g2))?;
        writeln!(f, "Public Key G2 Length: {} bytes", g2.len())?;

        writeln!(f, "\n=== G1 Public Key ===")?;
        let (x, y) = self
            .pair
            .public
            .g1
            .coordinates()
            .unwrap_or((BaseField::ZERO, BaseField::ZERO));
        writeln!(f, "X coordinate: {}", x.to_decimal())?;
        writeln!(f, "Y coordinate: {}", y.to_decimal())?;
        writeln!(f, "X coordinate (hex): {}", x.to_hex())?;
        writeln!(f, "Y coordinate (hex): {}", y.to_hex())?;

        writeln!(f, "\n=== G2 Public Key ({:?}) ===", self.layout)?;
        let limbs = self.g2_limbs(self.layout);
        let names = ["X[0]", "X[1]", "Y[0]", "Y[1]"];
        for (name, limb) in names.iter().zip(&limbs) {
            writeln!(f, "{name} coordinate: {}", limb_decimal(limb))?;
        }
        for (name, limb) in names.iter().zip(&limbs) {
            writeln!(f, "{name} coordinate (hex): {}", limb_hex(limb))?;
        }

        let [gx, gy] = g1_decimal(&G1Affine::generator());
        writeln!(f, "\nGenerator Point (BN254.generatorG1()): ({gx}, {gy})")?;

        writeln!(f, "\n=== Solidity Format ===")?;
        write!(f, "{}", self.solidity())?;
        writeln!(f, "\n=== KeyRegistrar Format ===")?;
        write!(f, "{}", self.key_registrar())
    }
}
