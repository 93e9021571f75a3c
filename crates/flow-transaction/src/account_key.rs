//! Flow account public keys.
//!
//! The create-account and add-new-key templates take account keys as
//! hex-encoded RLP blobs carried inside a JSON-Cadence `String`:
//! `[public_key, signature_algorithm, hash_algorithm, weight]`.

use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use sha2::Digest as _;

use crate::error::TransactionError;

/// Maximum key weight. A key with weight 1000 has full signing authority.
pub const WEIGHT_MAX: u64 = 1000;

/// Signature algorithm ids as they appear on chain. Out-of-range ids are
/// carried through rather than rejected so that a device can still display
/// what it was asked to approve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    Unknown,
    EcdsaP256,
    EcdsaSecp256k1,
    Other(u8),
}

impl SignatureAlgorithm {
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Unknown,
            2 => Self::EcdsaP256,
            3 => Self::EcdsaSecp256k1,
            other => Self::Other(other),
        }
    }

    pub const fn raw(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::EcdsaP256 => 2,
            Self::EcdsaSecp256k1 => 3,
            Self::Other(raw) => *raw,
        }
    }
}

/// Hash algorithm ids as they appear on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Unknown,
    Sha2_256,
    Sha3_256,
    Other(u8),
}

impl HashAlgorithm {
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Unknown,
            1 => Self::Sha2_256,
            3 => Self::Sha3_256,
            other => Self::Other(other),
        }
    }

    pub const fn raw(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Sha2_256 => 1,
            Self::Sha3_256 => 3,
            Self::Other(raw) => *raw,
        }
    }

    /// Digests `data` with the named algorithm, or `None` for ids that do
    /// not name one.
    pub fn digest(&self, data: &[u8]) -> Option<[u8; 32]> {
        match self {
            Self::Sha2_256 => Some(sha2::Sha256::digest(data).into()),
            Self::Sha3_256 => Some(sha3::Sha3_256::digest(data).into()),
            Self::Unknown | Self::Other(_) => None,
        }
    }
}

/// A public key to be registered on an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountKey {
    /// Raw public key bytes (uncompressed, without any prefix byte).
    pub public_key: Vec<u8>,
    pub signature_algorithm: SignatureAlgorithm,
    pub hash_algorithm: HashAlgorithm,
    /// Signing weight, 0..=1000.
    pub weight: u64,
}

impl AccountKey {
    /// Decodes the RLP blob form.
    pub fn from_rlp_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let key: Self = rlp::decode(bytes)?;
        Ok(key)
    }

    /// Decodes the hex-of-RLP form used in template arguments.
    pub fn from_hex(s: &str) -> Result<Self, TransactionError> {
        Self::from_rlp_bytes(&hex::decode(s)?)
    }

    pub fn to_rlp_bytes(&self) -> Vec<u8> {
        rlp::encode(self).to_vec()
    }

    /// Hex-of-RLP form used in template arguments.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_rlp_bytes())
    }

    /// Checks the weight range. Decoding already enforces this; encoding-side
    /// callers can use it before building an argument.
    pub fn check_weight(&self) -> Result<(), TransactionError> {
        if self.weight > WEIGHT_MAX {
            return Err(TransactionError::InvalidKeyWeight(self.weight));
        }
        Ok(())
    }
}

impl Encodable for AccountKey {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(4);
        s.append(&self.public_key);
        s.append(&self.signature_algorithm.raw());
        s.append(&self.hash_algorithm.raw());
        s.append(&self.weight);
    }
}

impl Decodable for AccountKey {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        if rlp.item_count()? != 4 {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        let weight: u64 = rlp.val_at(3)?;
        if weight > WEIGHT_MAX {
            return Err(DecoderError::Custom("account key weight out of range"));
        }
        Ok(Self {
            public_key: rlp.val_at(0)?,
            signature_algorithm: SignatureAlgorithm::from_raw(rlp.val_at::<u8>(1)?),
            hash_algorithm: HashAlgorithm::from_raw(rlp.val_at::<u8>(2)?),
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const PUBLIC_KEY: &str = "94488a795a07700c6fb83e066cf57dfd87f92ce70cbc81cb3bd3fea2df7b6707\
                              3b70e36b44f3578b43d64d3faa2e8e415ef6c2b5fe4390d5a78e238581c6e4bc";

    fn key(sig: u8, hash: u8, weight: u64) -> AccountKey {
        AccountKey {
            public_key: hex::decode(PUBLIC_KEY).unwrap(),
            signature_algorithm: SignatureAlgorithm::from_raw(sig),
            hash_algorithm: HashAlgorithm::from_raw(hash),
            weight,
        }
    }

    #[test]
    fn default_key_matches_known_encoding() {
        let encoded = key(2, 3, 1000).to_hex();
        assert_eq!(
            encoded,
            "f847b84094488a795a07700c6fb83e066cf57dfd87f92ce70cbc81cb3bd3fea2df7b6707\
             3b70e36b44f3578b43d64d3faa2e8e415ef6c2b5fe4390d5a78e238581c6e4bc02038203e8"
        );
    }

    #[test]
    fn boundary_keys_match_known_encodings() {
        assert_eq!(
            key(0, 0, 0).to_hex(),
            "f845b84094488a795a07700c6fb83e066cf57dfd87f92ce70cbc81cb3bd3fea2df7b6707\
             3b70e36b44f3578b43d64d3faa2e8e415ef6c2b5fe4390d5a78e238581c6e4bc808080"
        );
        assert_eq!(
            key(255, 255, 1000).to_hex(),
            "f849b84094488a795a07700c6fb83e066cf57dfd87f92ce70cbc81cb3bd3fea2df7b6707\
             3b70e36b44f3578b43d64d3faa2e8e415ef6c2b5fe4390d5a78e238581c6e4bc81ff81ff8203e8"
        );
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(2, 1, 500)]
    #[case(3, 3, 1000)]
    #[case(255, 255, 1000)]
    fn rlp_roundtrip(#[case] sig: u8, #[case] hash: u8, #[case] weight: u64) {
        let original = key(sig, hash, weight);
        let decoded = AccountKey::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn rejects_overweight_key() {
        let blob = key(2, 3, 1001).to_rlp_bytes();
        assert!(AccountKey::from_rlp_bytes(&blob).is_err());
        assert!(key(2, 3, 1001).check_weight().is_err());
        assert!(key(2, 3, 1000).check_weight().is_ok());
    }

    #[test]
    fn named_algorithms_digest() {
        assert!(HashAlgorithm::Sha2_256.digest(b"flow").is_some());
        assert!(HashAlgorithm::Sha3_256.digest(b"flow").is_some());
        assert!(HashAlgorithm::Unknown.digest(b"flow").is_none());
        assert_ne!(
            HashAlgorithm::Sha2_256.digest(b"flow"),
            HashAlgorithm::Sha3_256.digest(b"flow")
        );
    }
}
