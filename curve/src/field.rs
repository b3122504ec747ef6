//! Prime fields in Montgomery form.
//!
//! An element is represented as [u64; 4] in little-endian order and stored as
//! `value * R mod m`, where `R = 2^256`. The modulus and Montgomery constants
//! come from a [`FieldParams`] implementation, so the base field and the
//! scalar field share one implementation.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;
use num_bigint::BigUint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{EncodingError, Error, Result};

/// Size of a canonical big-endian field element encoding.
pub const FIELD_BYTES: usize = 32;

/// Parameters of a prime field below 2^255.
///
/// All constants use 4 x u64 limbs in little-endian order.
pub trait FieldParams:
    'static + Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync
{
    /// Short name used by `Debug`.
    const NAME: &'static str;

    /// The prime modulus m.
    const MODULUS: [u64; 4];

    /// R = 2^256 mod m.
    const R: [u64; 4];

    /// R^2 = 2^512 mod m, used to convert into Montgomery form.
    const R2: [u64; 4];

    /// -m^{-1} mod 2^64.
    const MU: u64;
}

/// Operations the affine point formulas need from a coordinate field.
pub trait CurveField:
    Copy
    + Clone
    + Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn is_zero(&self) -> bool;
    fn square(&self) -> Self;
    fn double(&self) -> Self;

    /// Multiplicative inverse; fails with `ArithmeticDomain` on zero.
    fn invert(&self) -> Result<Self>;
}

/// Element of the prime field described by `P`.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Fp<P: FieldParams> {
    /// Montgomery form: value * R mod m
    limbs: [u64; 4],
    _params: PhantomData<P>,
}

impl<P: FieldParams> Fp<P> {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = Self::from_raw([0, 0, 0, 0]);

    /// One element (in Montgomery form: R mod m)
    pub const ONE: Self = Self::from_raw(P::R);

    #[inline]
    const fn from_raw(limbs: [u64; 4]) -> Self {
        Fp {
            limbs,
            _params: PhantomData,
        }
    }

    /// Create a field element from a u64 value.
    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Self::from_canonical_limbs([val, 0, 0, 0])
    }

    /// Convert canonical limbs into Montgomery form. The caller guarantees
    /// `limbs < m`.
    #[inline]
    pub(crate) fn from_canonical_limbs(limbs: [u64; 4]) -> Self {
        montgomery_mul::<P>(&limbs, &P::R2)
    }

    /// Build an element from little-endian limbs, rejecting values `>= m`.
    pub fn try_from_limbs(limbs: [u64; 4]) -> Result<Self> {
        if is_canonical(&limbs, &P::MODULUS) {
            Ok(Self::from_canonical_limbs(limbs))
        } else {
            Err(EncodingError::NonCanonical.into())
        }
    }

    /// Convert from Montgomery form to canonical little-endian limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        montgomery_mul::<P>(&self.limbs, &[1, 0, 0, 0]).limbs
    }

    /// Decode a 32-byte big-endian integer.
    pub fn from_bytes_be(bytes: &[u8; FIELD_BYTES]) -> Result<Self> {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(buf);
        }
        Self::try_from_limbs(limbs)
    }

    /// Decode a big-endian slice that must be exactly 32 bytes long.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        let array: &[u8; FIELD_BYTES] =
            bytes
                .try_into()
                .map_err(|_| EncodingError::WrongLength {
                    expected: FIELD_BYTES,
                    actual: bytes.len(),
                })?;
        Self::from_bytes_be(array)
    }

    /// Canonical 32-byte big-endian encoding.
    pub fn to_bytes_be(&self) -> [u8; FIELD_BYTES] {
        let mut out = [0u8; FIELD_BYTES];
        for (chunk, limb) in out.rchunks_exact_mut(8).zip(self.to_canonical_limbs()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Convert an arbitrary-precision integer, rejecting values `>= m`.
    pub fn from_biguint(value: &BigUint) -> Result<Self> {
        if value.bits() > 256 {
            return Err(EncodingError::NonCanonical.into());
        }
        let mut limbs = [0u64; 4];
        for (limb, digit) in limbs.iter_mut().zip(value.iter_u64_digits()) {
            *limb = digit;
        }
        Self::try_from_limbs(limbs)
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes_be())
    }

    /// The field modulus.
    pub fn modulus() -> BigUint {
        let mut bytes = Vec::with_capacity(FIELD_BYTES);
        for &limb in &P::MODULUS {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    /// Canonical decimal representation.
    pub fn to_decimal(&self) -> String {
        self.to_biguint().to_str_radix(10)
    }

    /// `0x` followed by 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        let canonical = self.to_canonical_limbs();
        format!(
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }

    /// Check if this field element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse via Fermat's little theorem: a^{-1} = a^{m-2}.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::ArithmeticDomain("inverse of zero"));
        }
        let exp = sub_mod(&P::MODULUS, &[2, 0, 0, 0], &P::MODULUS);
        Ok(self.pow_vartime(&exp))
    }

    /// Variable-time exponentiation by a little-endian limb exponent.
    pub fn pow_vartime(&self, exp: &[u64; 4]) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        // Process bits from least significant to most significant
        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base.square();
                remaining >>= 1;
            }
        }

        result
    }
}

/// Parse a decimal string or a `0x`-prefixed hexadecimal string.
///
/// Only digits of the selected radix are accepted; signs, separators and
/// whitespace are rejected.
pub fn parse_integer(s: &str) -> core::result::Result<BigUint, EncodingError> {
    let (digits, radix) = match s.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(EncodingError::MalformedNumber(s.to_string()));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| EncodingError::MalformedNumber(s.to_string()))
}

/// Helper: Add two 256-bit numbers mod m
#[inline]
const fn add_mod(a: &[u64; 4], b: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    // Subtract modulus if we overflowed or result >= m
    let (s0, borrow) = r0.overflowing_sub(m[0]);
    let (s1, borrow) = borrowing_sub(r1, m[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, m[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, m[3], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Helper: Subtract two 256-bit numbers mod m
#[inline]
const fn sub_mod(a: &[u64; 4], b: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    // Add modulus if we underflowed
    if borrow {
        let (r0, carry) = r0.overflowing_add(m[0]);
        let (r1, carry) = carrying_add(r1, m[1], carry);
        let (r2, carry) = carrying_add(r2, m[2], carry);
        let (r3, _) = carrying_add(r3, m[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Helper: Negate a 256-bit number mod m
#[inline]
const fn neg_mod(a: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(m, a, m)
}

/// True iff `limbs < m`.
#[inline]
const fn is_canonical(limbs: &[u64; 4], m: &[u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(m[0]);
    let (_, borrow) = borrowing_sub(limbs[1], m[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], m[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], m[3], borrow);
    borrow
}

/// Helper: Carrying addition
#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Montgomery multiplication: (a * b * R^{-1}) mod m
#[inline]
fn montgomery_mul<P: FieldParams>(a: &[u64; 4], b: &[u64; 4]) -> Fp<P> {
    let modulus = &P::MODULUS;
    let mut t = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    // Montgomery reduction
    for i in 0..4 {
        let k = t[i].wrapping_mul(P::MU);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (modulus[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for j in 4..8 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    // Extract high half and conditionally subtract m
    let result = [t[4], t[5], t[6], t[7]];
    if is_canonical(&result, modulus) {
        Fp::from_raw(result)
    } else {
        Fp::from_raw(sub_mod(&result, modulus, modulus))
    }
}

impl<P: FieldParams> CurveField for Fp<P> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    #[inline]
    fn is_zero(&self) -> bool {
        Fp::is_zero(self)
    }

    #[inline]
    fn square(&self) -> Self {
        Fp::square(self)
    }

    #[inline]
    fn double(&self) -> Self {
        Fp::double(self)
    }

    #[inline]
    fn invert(&self) -> Result<Self> {
        Fp::invert(self)
    }
}

impl<P: FieldParams> Add for Fp<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(add_mod(&self.limbs, &rhs.limbs, &P::MODULUS))
    }
}

impl<P: FieldParams> AddAssign for Fp<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: FieldParams> Sub for Fp<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(sub_mod(&self.limbs, &rhs.limbs, &P::MODULUS))
    }
}

impl<P: FieldParams> SubAssign for Fp<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: FieldParams> Neg for Fp<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(neg_mod(&self.limbs, &P::MODULUS))
    }
}

impl<P: FieldParams> Mul for Fp<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        montgomery_mul::<P>(&self.limbs, &rhs.limbs)
    }
}

impl<P: FieldParams> MulAssign for Fp<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: FieldParams> From<u64> for Fp<P> {
    fn from(val: u64) -> Self {
        Self::from_u64(val)
    }
}

impl<P: FieldParams> FromStr for Fp<P> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_biguint(&parse_integer(s)?)
    }
}

impl<P: FieldParams> Display for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<P: FieldParams> Debug for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", P::NAME, self)
    }
}

impl<P: FieldParams> Hash for Fp<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

impl<P: FieldParams> Serialize for Fp<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, P: FieldParams> Deserialize<'de> for Fp<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseField, ScalarField};
    use proptest::prelude::*;

    const P_DECIMAL: &str =
        "21888242871839275222246405745257275088696311157297823662689037894645226208583";
    const R_DECIMAL: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";

    #[test]
    fn test_zero_one() {
        assert_eq!(BaseField::ZERO + BaseField::ZERO, BaseField::ZERO);
        assert_eq!(BaseField::ONE * BaseField::ONE, BaseField::ONE);
        assert_eq!(BaseField::ZERO * BaseField::ONE, BaseField::ZERO);
        assert_eq!(BaseField::ONE + BaseField::ZERO, BaseField::ONE);
        assert_eq!(BaseField::from_u64(1), BaseField::ONE);
    }

    #[test]
    fn test_moduli() {
        assert_eq!(BaseField::modulus().to_str_radix(10), P_DECIMAL);
        assert_eq!(ScalarField::modulus().to_str_radix(10), R_DECIMAL);
        assert_eq!(
            ScalarField::modulus().to_str_radix(16),
            "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = BaseField::from_u64(10);
        let b = BaseField::from_u64(3);
        assert_eq!(a + b, BaseField::from_u64(13));
        assert_eq!(a - b, BaseField::from_u64(7));
        assert_eq!(a * b, BaseField::from_u64(30));
        assert_eq!(b - a + BaseField::from_u64(7), BaseField::ZERO);
    }

    #[test]
    fn test_negation_wraps() {
        let two = BaseField::from_u64(2);
        let minus_two: BaseField = "21888242871839275222246405745257275088696311157297823662689037894645226208581"
            .parse()
            .expect("p - 2");
        assert_eq!(-two, minus_two);
        assert_eq!(-BaseField::ZERO, BaseField::ZERO);
    }

    #[test]
    fn test_inverse() {
        let a = ScalarField::from_u64(5);
        let a_inv = a.invert().expect("nonzero");
        assert_eq!(a * a_inv, ScalarField::ONE);

        let b = BaseField::from_u64(2);
        assert_eq!(b * b.invert().expect("nonzero"), BaseField::ONE);
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        assert_eq!(
            BaseField::ZERO.invert(),
            Err(Error::ArithmeticDomain("inverse of zero"))
        );
        assert!(ScalarField::ZERO.invert().is_err());
    }

    #[test]
    fn test_bytes_are_big_endian() {
        let one = BaseField::ONE.to_bytes_be();
        assert_eq!(one[31], 1);
        assert!(one[..31].iter().all(|&b| b == 0));

        let value = BaseField::from_u64(0x0102_0304_0506_0708);
        let bytes = value.to_bytes_be();
        assert_eq!(&bytes[24..], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(BaseField::from_bytes_be(&bytes), Ok(value));
    }

    #[test]
    fn test_from_bytes_rejects_modulus() {
        let modulus = BaseField::modulus().to_bytes_be();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&modulus);
        assert_eq!(
            BaseField::from_bytes_be(&bytes),
            Err(Error::InvalidEncoding(EncodingError::NonCanonical))
        );
        assert!(BaseField::from_bytes_be(&[0xff; 32]).is_err());
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert_eq!(
            BaseField::from_be_slice(&[0u8; 31]),
            Err(Error::InvalidEncoding(EncodingError::WrongLength {
                expected: 32,
                actual: 31
            }))
        );
        assert_eq!(BaseField::from_be_slice(&[0u8; 32]), Ok(BaseField::ZERO));
    }

    #[test]
    fn test_string_conversions() {
        let x: BaseField = "12345".parse().expect("decimal");
        let y: BaseField = "0x3039".parse().expect("hex");
        assert_eq!(x, y);
        assert_eq!(x.to_decimal(), "12345");
        assert_eq!(
            x.to_hex(),
            "0x0000000000000000000000000000000000000000000000000000000000003039"
        );
        assert_eq!(format!("{x}"), x.to_hex());
    }

    #[test]
    fn test_string_rejects_out_of_range_and_garbage() {
        assert_eq!(
            P_DECIMAL.parse::<BaseField>(),
            Err(Error::InvalidEncoding(EncodingError::NonCanonical))
        );
        assert!(R_DECIMAL.parse::<ScalarField>().is_err());
        for bad in ["", "0x", "-5", "+5", "12a", "0xzz", "1_000", " 1", "0X10"] {
            assert!(
                matches!(
                    bad.parse::<BaseField>(),
                    Err(Error::InvalidEncoding(EncodingError::MalformedNumber(_)))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_scalar_wraps_at_r() {
        let r_minus_one: ScalarField = "21888242871839275222246405745257275088548364400416034343698204186575808495616"
            .parse()
            .expect("r - 1");
        assert_eq!(r_minus_one + ScalarField::ONE, ScalarField::ZERO);
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let x = BaseField::from_u64(255);
        let json = serde_json::to_string(&x).expect("serialize");
        assert_eq!(
            json,
            "\"0x00000000000000000000000000000000000000000000000000000000000000ff\""
        );
        let back: BaseField = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, x);

        let too_big = format!("\"{P_DECIMAL}\"");
        assert!(serde_json::from_str::<BaseField>(&too_big).is_err());
    }

    fn base_field() -> impl Strategy<Value = BaseField> {
        any::<[u64; 4]>().prop_map(|mut limbs| {
            limbs[3] &= 0x0fff_ffff_ffff_ffff;
            BaseField::from_canonical_limbs(limbs)
        })
    }

    proptest! {
        #[test]
        fn add_then_sub(a in base_field(), b in base_field()) {
            prop_assert_eq!(a + b - a, b);
        }

        #[test]
        fn mul_distributes(a in base_field(), b in base_field(), c in base_field()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn inverse_roundtrip(a in base_field()) {
            prop_assume!(!a.is_zero());
            prop_assert_eq!(a * a.invert().unwrap(), BaseField::ONE);
        }

        #[test]
        fn bytes_roundtrip(a in base_field()) {
            prop_assert_eq!(BaseField::from_bytes_be(&a.to_bytes_be()), Ok(a));
            prop_assert_eq!(a.to_biguint().to_str_radix(10), a.to_decimal());
        }
    }
}
