//! BN254 key derivation.
//!
//! A private key is a scalar `sk` with `0 < sk < r`. Its public keys are
//! `sk * G1` and `sk * G2` for the fixed generators of `bn254_curve`,
//! encoded as 64 and 128 big-endian bytes.
//!
//! # Example
//!
//! ```
//! use bn254_curve::ScalarField;
//! use bn254_keygen::derive;
//!
//! let (g1, g2) = derive(&ScalarField::from_u64(1)).expect("nonzero scalar");
//! assert_eq!(g1[31], 1);
//! assert_eq!(g1[63], 2);
//! assert_eq!(g2.len(), 128);
//! ```
//!
//! The crate also renders the JSON key record and the text report printed by
//! the `bn254-keygen` binary. Handle private scalars like any other secret:
//! [`SigningKey`] derives `Debug` and `Serialize`.

mod constants;
mod errors;
mod keys;
mod record;
mod report;


pub use constants::{CURVE_NAME, G1_PUBLIC_KEY_SIZE, G2_PUBLIC_KEY_SIZE, SK_SIZE};
pub use errors::KeyError;
pub use keys::{
    derive, derive_batch, derive_with_layout, EncodedPublicKeys, KeyPair, PublicKeys, SigningKey,
};
pub use record::KeyRecord;
pub use report::KeyReport;
