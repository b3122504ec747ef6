//! Private scalars and the public keys derived from them.

use core::str::FromStr;

use bn254_curve::{
    encode_g1, encode_g2_with, parse_integer, verify_generators, G1Affine, G2Affine, G2Layout,
    Group, RandomField, ScalarField,
};
use num_bigint::BigUint;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{G1_PUBLIC_KEY_SIZE, G2_PUBLIC_KEY_SIZE, SK_SIZE};
use crate::errors::KeyError;

/// Encoded public keys: 64-byte G1 point and 128-byte G2 point.
pub type EncodedPublicKeys = ([u8; G1_PUBLIC_KEY_SIZE], [u8; G2_PUBLIC_KEY_SIZE]);

/// A secret BN254 scalar `sk` with `0 < sk < r`.
///
/// # Example
///
/// ```
/// use bn254_keygen::SigningKey;
///
/// let sk: SigningKey = "12345".parse().expect("valid scalar");
/// let public = sk.public_keys();
/// assert!(public.g1.is_on_curve());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScalarField", into = "ScalarField")]
pub struct SigningKey {
    scalar: ScalarField,
}

/// Public keys `sk * G1` and `sk * G2`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeys {
    pub g1: G1Affine,
    pub g2: G2Affine,
}

/// A signing key together with its public keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub secret: SigningKey,
    pub public: PublicKeys,
}

impl SigningKey {
    /// Wrap a scalar, rejecting zero.
    pub fn from_scalar(scalar: ScalarField) -> Result<Self, KeyError> {
        if scalar.is_zero() {
            return Err(KeyError::ScalarOutOfRange);
        }
        Ok(Self { scalar })
    }

    /// Range-check an arbitrary integer against `0 < value < r`.
    pub fn from_biguint(value: &BigUint) -> Result<Self, KeyError> {
        let scalar = ScalarField::from_biguint(value).map_err(|_| KeyError::ScalarOutOfRange)?;
        Self::from_scalar(scalar)
    }

    /// Decode a 32-byte big-endian scalar.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != SK_SIZE {
            return Err(bn254_curve::EncodingError::WrongLength {
                expected: SK_SIZE,
                actual: bytes.len(),
            }
            .into());
        }
        Self::from_biguint(&BigUint::from_bytes_be(bytes))
    }

    /// Generates a uniformly random nonzero signing key.
    ///
    /// # Example
    ///
    /// ```
    /// use bn254_keygen::SigningKey;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let sk = SigningKey::random(&mut rng);
    /// assert!(!sk.scalar().is_zero());
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: ScalarField::random_nonzero(rng),
        }
    }

    pub fn scalar(&self) -> ScalarField {
        self.scalar
    }

    /// 32-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_bytes_be()
    }

    /// `0x` followed by 64 hex digits.
    pub fn to_hex(&self) -> String {
        self.scalar.to_hex()
    }

    /// Computes `sk * G1` and `sk * G2`.
    pub fn public_keys(&self) -> PublicKeys {
        PublicKeys {
            g1: G1Affine::generator().scalar_mul(&self.scalar),
            g2: G2Affine::generator().scalar_mul(&self.scalar),
        }
    }

    pub fn key_pair(&self) -> KeyPair {
        KeyPair {
            secret: *self,
            public: self.public_keys(),
        }
    }
}

impl TryFrom<ScalarField> for SigningKey {
    type Error = KeyError;

    fn try_from(scalar: ScalarField) -> Result<Self, KeyError> {
        Self::from_scalar(scalar)
    }
}

impl From<SigningKey> for ScalarField {
    fn from(sk: SigningKey) -> Self {
        sk.scalar
    }
}

impl FromStr for SigningKey {
    type Err = KeyError;

    /// Parses a decimal or `0x`-prefixed hexadecimal scalar.
    fn from_str(s: &str) -> Result<Self, KeyError> {
        Self::from_biguint(&parse_integer(s)?)
    }
}

impl PublicKeys {
    pub fn g1_bytes(&self) -> [u8; G1_PUBLIC_KEY_SIZE] {
        encode_g1(&self.g1)
    }

    pub fn g2_bytes(&self, layout: G2Layout) -> [u8; G2_PUBLIC_KEY_SIZE] {
        encode_g2_with(&self.g2, layout)
    }
}

impl From<&SigningKey> for PublicKeys {
    fn from(sk: &SigningKey) -> Self {
        sk.public_keys()
    }
}

/// Derive the encoded G1 and G2 public keys of `scalar`.
///
/// Fails with [`KeyError::ScalarOutOfRange`] when `scalar` is zero. A
/// [`ScalarField`] is always below r, so integers `>= r` are rejected
/// earlier by [`SigningKey::from_biguint`] and [`SigningKey::from_str`].
pub fn derive(scalar: &ScalarField) -> Result<EncodedPublicKeys, KeyError> {
    derive_with_layout(scalar, G2Layout::RealFirst)
}

/// [`derive`] with an explicit G2 limb order.
pub fn derive_with_layout(
    scalar: &ScalarField,
    layout: G2Layout,
) -> Result<EncodedPublicKeys, KeyError> {
    verify_generators()?;
    let public = SigningKey::from_scalar(*scalar)?.public_keys();
    let g1 = public.g1_bytes();
    tracing::debug!(pub_g1 = %hex::encode(g1), "derived BN254 public keys");
    Ok((g1, public.g2_bytes(layout)))
}

/// Run [`derive`] over `scalars` in parallel. Results keep the input order.
pub fn derive_batch(scalars: &[ScalarField]) -> Vec<Result<EncodedPublicKeys, KeyError>> {
    tracing::trace!(count = scalars.len(), "deriving key batch");
    scalars.par_iter().map(derive).collect()
}
