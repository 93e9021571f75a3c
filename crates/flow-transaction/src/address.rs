//! Flow account addresses.

use core::fmt;
use core::str::FromStr;

use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TransactionError;

/// Byte length of a Flow account address.
pub const ADDRESS_LENGTH: usize = 8;

/// A Flow account address: exactly 8 bytes, rendered as `0x`-prefixed hex in
/// JSON-Cadence values.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Parses an address from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TransactionError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        let bytes: [u8; ADDRESS_LENGTH] =
            bytes
                .try_into()
                .map_err(|bytes: Vec<u8>| TransactionError::InvalidLength {
                    field: "address",
                    expected: ADDRESS_LENGTH,
                    actual: bytes.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Lowercase hex without the `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Encodable for Address {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.encoder().encode_value(&self.0);
    }
}

impl Decodable for Address {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        rlp.decoder().decode_value(|bytes| {
            if bytes.len() != ADDRESS_LENGTH {
                return Err(DecoderError::RlpInvalidLength);
            }
            let mut out = [0_u8; ADDRESS_LENGTH];
            out.copy_from_slice(bytes);
            Ok(Self(out))
        })
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() {
        let a = Address::from_hex("0xf8d6e0586b0a20c7").unwrap();
        let b = Address::from_hex("f8d6e0586b0a20c7").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "0xf8d6e0586b0a20c7");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Address::from_hex("f8d6e0586b0a20").is_err());
        assert!(Address::from_hex("f8d6e0586b0a20c7ff").is_err());
    }

    #[test]
    fn rlp_roundtrip() {
        let addr = Address::from_hex("f8d6e0586b0a20c7").unwrap();
        let encoded = rlp::encode(&addr);
        let decoded: Address = rlp::decode(&encoded).unwrap();
        assert_eq!(addr, decoded);
    }

    #[test]
    fn serde_uses_prefixed_hex() {
        let addr = Address::from_hex("f8d6e0586b0a20c7").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0xf8d6e0586b0a20c7\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}
