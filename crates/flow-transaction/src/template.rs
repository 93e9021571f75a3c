//! Approved transaction templates.

use crate::script_hashes::{
    CONTRACT_HASH_ADD_NEW_KEY, CONTRACT_HASH_CREATE_ACCOUNT, CONTRACT_HASH_TOKEN_TRANSFER,
};

/// The operations a signing device is willing to approve. Each template is
/// identified by the SHA-256 digest of its Cadence source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionTemplate {
    TokenTransfer,
    CreateAccount,
    AddNewKey,
}

impl TransactionTemplate {
    pub const ALL: [Self; 3] = [Self::TokenTransfer, Self::CreateAccount, Self::AddNewKey];

    /// The approved script hash, lowercase hex.
    pub const fn script_hash(self) -> &'static str {
        match self {
            Self::TokenTransfer => CONTRACT_HASH_TOKEN_TRANSFER,
            Self::CreateAccount => CONTRACT_HASH_CREATE_ACCOUNT,
            Self::AddNewKey => CONTRACT_HASH_ADD_NEW_KEY,
        }
    }

    /// Human-readable operation label, as a device would render it.
    pub const fn operation_label(self) -> &'static str {
        match self {
            Self::TokenTransfer => "Token Transfer",
            Self::CreateAccount => "Create Account",
            Self::AddNewKey => "Add New Key",
        }
    }

    /// Looks up a template by its script digest (lowercase hex).
    pub fn from_script_hash(digest: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|template| template.script_hash() == digest)
    }

    /// Looks up a template by hashing the script source. Empty scripts never
    /// match.
    pub fn from_script(source: &str) -> Option<Self> {
        if source.is_empty() {
            return None;
        }
        Self::from_script_hash(&script_hash_utils::script_hash_hex(source))
    }
}
