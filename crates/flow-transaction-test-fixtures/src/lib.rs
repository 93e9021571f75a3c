//! Test fixtures for the approved Flow transaction templates.
//!
//! Everything here is derived from a fixed base transaction so that tests
//! across the workspace agree on the bytes they expect: one well-known
//! address plays proposer, payer and authorizer, and the account-key grid
//! covers the boundary signature/hash algorithm ids and weights.

use flow_transaction::account_key::{AccountKey, HashAlgorithm, SignatureAlgorithm};
use flow_transaction::address::Address;
use flow_transaction::arguments::{CadenceValue, UFix64};
use flow_transaction::transaction::{
    ProposalKey, TransactionEnvelope, TransactionPayload, TransactionSignature,
};

/// Cadence source of the token transfer template.
pub const TX_TOKEN_TRANSFER: &str = "import FungibleToken from 0xee82856bf20e2aa6
transaction(amount: UFix64, to: Address) {
let vault: @FungibleToken.Vault
prepare(signer: AuthAccount) {
self.vault <- signer
.borrow<&{FungibleToken.Provider}>(from: /storage/flowTokenVault)!
.withdraw(amount: amount)
}
execute {
getAccount(to)
.getCapability(/public/flowTokenReceiver)!
.borrow<&{FungibleToken.Receiver}>()!
.deposit(from: <-self.vault)
}
}";

/// Cadence source of the create account template.
pub const TX_CREATE_ACCOUNT: &str = "transaction(publicKeys: [String]) {
prepare(signer: AuthAccount) {
let acct = AuthAccount(payer: signer)
for key in publicKeys {
acct.addPublicKey(key.decodeHex())
}
}
}";

/// Cadence source of the add new key template. Note that the digest of this
/// revision differs from the approved `CONTRACT_HASH_ADD_NEW_KEY` constant,
/// which belongs to an earlier revision of the template.
pub const TX_ADD_NEW_KEY: &str = "transaction(publicKey: String) {
prepare(signer: AuthAccount) {
signer.addPublicKey(publicKey.decodeHex())
}
}";

/// A script that is valid Cadence but not an approved template.
pub const TX_HELLO_WORLD: &str = "transaction(msg: String) { execute { log(msg) } }";

/// Uncompressed test public key (raw, no prefix byte).
pub const TEST_PUBLIC_KEY: &str = "94488a795a07700c6fb83e066cf57dfd87f92ce70cbc81cb3bd3fea2df7b6707\
                                   3b70e36b44f3578b43d64d3faa2e8e415ef6c2b5fe4390d5a78e238581c6e4bc";

/// Address used as proposer, payer and authorizer in the base transaction.
pub const TEST_ADDRESS: &str = "f8d6e0586b0a20c7";

/// Reference block id of the base transaction.
pub const TEST_REFERENCE_BLOCK: &str =
    "f0e4c2f76c58916ec258f246851bea091d14d4247a2fc3e18694461b1816e13b";

/// Payload signature bytes used in the base envelope.
pub const TEST_SIGNATURE: &str =
    "f7225388c1d69d57e6251c9fda50cbbf9e05131e5adb81e5aa0422402f048162";

/// Signature algorithm ids covered by the account-key grid, including the
/// out-of-range boundary values.
pub const SIG_ALGO_IDS: [u8; 4] = [0, 2, 3, 255];

/// Hash algorithm ids covered by the account-key grid.
pub const HASH_ALGO_IDS: [u8; 4] = [0, 1, 3, 255];

/// Key weights covered by the account-key grid.
pub const WEIGHTS: [u64; 3] = [0, 500, 1000];

pub fn test_address() -> Address {
    Address::from_hex(TEST_ADDRESS).expect("valid test address")
}

pub fn test_public_key() -> Vec<u8> {
    hex::decode(TEST_PUBLIC_KEY).expect("valid test public key")
}

/// The key registered by the base transaction: ECDSA P-256, SHA3-256, full
/// weight.
pub fn default_account_key() -> AccountKey {
    AccountKey {
        public_key: test_public_key(),
        signature_algorithm: SignatureAlgorithm::EcdsaP256,
        hash_algorithm: HashAlgorithm::Sha3_256,
        weight: 1000,
    }
}

/// Every combination of the grid ids and weights, in grid order.
pub fn account_key_grid() -> Vec<AccountKey> {
    let mut keys = Vec::with_capacity(SIG_ALGO_IDS.len() * HASH_ALGO_IDS.len() * WEIGHTS.len());
    for sig in SIG_ALGO_IDS {
        for hash in HASH_ALGO_IDS {
            for weight in WEIGHTS {
                keys.push(AccountKey {
                    public_key: test_public_key(),
                    signature_algorithm: SignatureAlgorithm::from_raw(sig),
                    hash_algorithm: HashAlgorithm::from_raw(hash),
                    weight,
                });
            }
        }
    }
    keys
}

/// A payload with the base transaction's bookkeeping fields and the given
/// script and arguments.
pub fn payload_with_script(script: &str, arguments: Vec<CadenceValue>) -> TransactionPayload {
    let address = test_address();
    let mut reference_block_id = [0_u8; 32];
    reference_block_id.copy_from_slice(
        &hex::decode(TEST_REFERENCE_BLOCK).expect("valid test reference block"),
    );

    TransactionPayload {
        script: script.to_owned(),
        arguments: arguments
            .iter()
            .map(|argument| argument.to_bytes().expect("fixture arguments encode"))
            .collect(),
        reference_block_id,
        gas_limit: 42,
        proposal_key: ProposalKey {
            address,
            key_id: 4,
            sequence_number: 10,
        },
        payer: address,
        authorizers: vec![address],
    }
}

/// The base payload: the add-new-key script registering the default key.
pub fn base_payload() -> TransactionPayload {
    add_new_key_payload(&default_account_key())
}

/// The base envelope: the base payload with a single payload signature.
pub fn base_envelope() -> TransactionEnvelope {
    TransactionEnvelope {
        payload: base_payload(),
        payload_signatures: vec![TransactionSignature {
            signer_index: 0,
            key_id: 4,
            signature: hex::decode(TEST_SIGNATURE).expect("valid test signature"),
        }],
    }
}

pub fn token_transfer_payload(amount: UFix64, recipient: Address) -> TransactionPayload {
    payload_with_script(
        TX_TOKEN_TRANSFER,
        vec![
            CadenceValue::UFix64(amount),
            CadenceValue::Address(recipient),
        ],
    )
}

pub fn create_account_payload(keys: &[AccountKey]) -> TransactionPayload {
    payload_with_script(
        TX_CREATE_ACCOUNT,
        vec![CadenceValue::Array(
            keys.iter()
                .map(|key| CadenceValue::String(key.to_hex()))
                .collect(),
        )],
    )
}

pub fn add_new_key_payload(key: &AccountKey) -> TransactionPayload {
    payload_with_script(
        TX_ADD_NEW_KEY,
        vec![CadenceValue::String(key.to_hex())],
    )
}
