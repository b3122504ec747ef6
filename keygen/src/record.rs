//! JSON key record consumed by operator tooling.

use serde::{Deserialize, Serialize};

use crate::constants::CURVE_NAME;
use crate::errors::KeyError;
use crate::keys::KeyPair;

/// `{"curve": "bn254", "priv_hex": "0x…", "pub_hex": "0x…"}`
///
/// `pub_hex` holds the 64-byte G1 encoding only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub curve: String,
    pub priv_hex: String,
    pub pub_hex: String,
}

impl KeyRecord {
    pub fn new(pair: &KeyPair) -> Self {
        KeyRecord {
            curve: CURVE_NAME.to_string(),
            priv_hex: pair.secret.to_hex(),
            pub_hex: format!("0x{}", hex::encode(pair.public.g1_bytes())),
        }
    }

    /// Pretty-printed JSON with a two-space indent.
    pub fn to_json_pretty(&self) -> Result<String, KeyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&KeyPair> for KeyRecord {
    fn from(pair: &KeyPair) -> Self {
        KeyRecord::new(pair)
    }
}
