//! Sizes and labels used by key encodings.

/// Size of an encoded G1 public key in bytes: `X ‖ Y`, 32 bytes each.
pub const G1_PUBLIC_KEY_SIZE: usize = bn254_curve::G1_ENCODED_LEN;

/// Size of an encoded G2 public key in bytes.
///
/// A G2 point has two coordinates in the quadratic extension, each made of
/// two 32-byte limbs.
pub const G2_PUBLIC_KEY_SIZE: usize = bn254_curve::G2_ENCODED_LEN;

/// Size of a serialized secret scalar in bytes (big-endian, zero-padded).
pub const SK_SIZE: usize = 32;

/// Value of the `curve` field in a key record.
pub const CURVE_NAME: &str = "bn254";
