//! BN254 (alt_bn128) arithmetic for key derivation.
//!
//! This crate provides the base and scalar prime fields, the quadratic
//! extension used by G2, affine G1 and G2 points, the fixed generators,
//! fixed-width point encodings and a small set of curve diagnostics.

mod affine;
mod basefield;
pub mod diagnostics;
pub mod encoding;
mod errors;
mod field;
mod fp2;
mod g1;
mod g2;
pub mod generators;
mod group;
mod random;
mod scalarfield;

pub use affine::{Affine, CurveConfig};
pub use basefield::{BaseField, BaseParams};
pub use diagnostics::{BasePointConvention, CurveDiagnostics, Diagnosis, RelationResult};
pub use encoding::{
    decode_g1, decode_g2, decode_g2_with, encode_g1, encode_g2, encode_g2_with, G2Layout,
    G1_ENCODED_LEN, G2_ENCODED_LEN,
};
pub use errors::{EncodingError, Error, Result};
pub use field::{parse_integer, CurveField, FieldParams, Fp, FIELD_BYTES};
pub use fp2::Fp2;
pub use g1::{G1Affine, G1Config};
pub use g2::{G2Affine, G2Config};
pub use generators::{g1_generator, g2_generator, verify_generators};
pub use group::{Group, ScalarBits};
pub use random::RandomField;
pub use scalarfield::{ScalarField, ScalarParams, GROUP_ORDER};
