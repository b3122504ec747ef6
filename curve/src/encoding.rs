//! Fixed-width big-endian point encodings.
//!
//! G1 points take 64 bytes (`X ‖ Y`), G2 points take 128 bytes as four
//! 32-byte limbs. The identity is the all-zero string in both groups; no
//! curve point has `x = y = 0` because `b != 0`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{EncodingError, Result};
use crate::field::FIELD_BYTES;
use crate::{BaseField, Fp2, G1Affine, G2Affine};

pub const G1_ENCODED_LEN: usize = 2 * FIELD_BYTES;
pub const G2_ENCODED_LEN: usize = 4 * FIELD_BYTES;

/// Order of the two `Fp2` limbs inside each G2 coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum G2Layout {
    /// `X.c0 ‖ X.c1 ‖ Y.c0 ‖ Y.c1`
    #[default]
    RealFirst,
    /// `X.c1 ‖ X.c0 ‖ Y.c1 ‖ Y.c0`, the EIP-197 precompile order.
    ImaginaryFirst,
}

impl G2Layout {
    fn split(self, z: &Fp2) -> [BaseField; 2] {
        match self {
            G2Layout::RealFirst => [z.c0, z.c1],
            G2Layout::ImaginaryFirst => [z.c1, z.c0],
        }
    }

    fn join(self, first: BaseField, second: BaseField) -> Fp2 {
        match self {
            G2Layout::RealFirst => Fp2::new(first, second),
            G2Layout::ImaginaryFirst => Fp2::new(second, first),
        }
    }
}

fn write_limbs<const N: usize>(limbs: &[BaseField]) -> [u8; N] {
    let mut out = [0u8; N];
    for (chunk, limb) in out.chunks_exact_mut(FIELD_BYTES).zip(limbs) {
        chunk.copy_from_slice(&limb.to_bytes_be());
    }
    out
}

/// Split `bytes` into `N` field elements. `Ok(None)` means all zero.
fn read_limbs<const N: usize>(bytes: &[u8]) -> Result<Option<[BaseField; N]>> {
    let expected = N * FIELD_BYTES;
    if bytes.len() != expected {
        return Err(EncodingError::WrongLength {
            expected,
            actual: bytes.len(),
        }
        .into());
    }
    if bytes.iter().all(|&b| b == 0) {
        return Ok(None);
    }

    let mut limbs = [BaseField::ZERO; N];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(FIELD_BYTES)) {
        *limb = BaseField::from_be_slice(chunk)?;
    }
    Ok(Some(limbs))
}

pub fn encode_g1(point: &G1Affine) -> [u8; G1_ENCODED_LEN] {
    match point.coordinates() {
        None => [0u8; G1_ENCODED_LEN],
        Some((x, y)) => write_limbs(&[x, y]),
    }
}

/// Decode 64 bytes, validating length, canonical coordinates and the curve
/// equation.
pub fn decode_g1(bytes: &[u8]) -> Result<G1Affine> {
    match read_limbs::<2>(bytes)? {
        None => Ok(G1Affine::INFINITY),
        Some([x, y]) => G1Affine::new(x, y),
    }
}

/// Encode in the default [`G2Layout::RealFirst`] order.
pub fn encode_g2(point: &G2Affine) -> [u8; G2_ENCODED_LEN] {
    encode_g2_with(point, G2Layout::RealFirst)
}

pub fn decode_g2(bytes: &[u8]) -> Result<G2Affine> {
    decode_g2_with(bytes, G2Layout::RealFirst)
}

pub fn encode_g2_with(point: &G2Affine, layout: G2Layout) -> [u8; G2_ENCODED_LEN] {
    match point.coordinates() {
        None => [0u8; G2_ENCODED_LEN],
        Some((x, y)) => {
            let [x0, x1] = layout.split(&x);
            let [y0, y1] = layout.split(&y);
            write_limbs(&[x0, x1, y0, y1])
        }
    }
}

pub fn decode_g2_with(bytes: &[u8], layout: G2Layout) -> Result<G2Affine> {
    match read_limbs::<4>(bytes)? {
        None => Ok(G2Affine::INFINITY),
        Some([x0, x1, y0, y1]) => G2Affine::new(layout.join(x0, x1), layout.join(y0, y1)),
    }
}

fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn from_prefixed_hex<E: serde::de::Error>(s: &str) -> core::result::Result<Vec<u8>, E> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| E::custom(EncodingError::MalformedNumber(s.to_string())))?;
    hex::decode(digits).map_err(E::custom)
}

impl Serialize for G1Affine {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_prefixed_hex(&encode_g1(self)))
    }
}

impl<'de> Deserialize<'de> for G1Affine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = from_prefixed_hex(&s)?;
        decode_g1(&bytes).map_err(D::Error::custom)
    }
}

impl Serialize for G2Affine {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_prefixed_hex(&encode_g2(self)))
    }
}

impl<'de> Deserialize<'de> for G2Affine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = from_prefixed_hex(&s)?;
        decode_g2(&bytes).map_err(D::Error::custom)
    }
}
