//! Recognition of approved Flow transaction templates.
//!
//! A signing device only signs transactions whose Cadence script it can
//! identify. Scripts are opaque byte strings: the SHA-256 digest of the
//! source is compared against a fixed table of approved template hashes,
//! and the template dictates which JSON-Cadence arguments the transaction
//! must carry.
//!
//! The crate covers the full path from wire bytes to a displayable
//! operation:
//!
//! - [`transaction`] decodes the RLP canonical payload/envelope form
//!   (prefixed by the `"FLOW-V0.0-transaction"` domain tag);
//! - [`template`] maps a script to one of the approved templates listed in
//!   [`script_hashes`];
//! - [`validation`] checks the argument shape for the matched template and
//!   yields a [`validation::RecognizedTransaction`] summary.

pub mod account_key;
pub mod address;
pub mod arguments;
pub mod error;
pub mod script_hashes;
pub mod template;
pub mod transaction;
pub mod validation;

pub use account_key::{AccountKey, HashAlgorithm, SignatureAlgorithm};
pub use address::Address;
pub use arguments::{CadenceValue, UFix64};
pub use error::TransactionError;
pub use template::TransactionTemplate;
pub use transaction::{
    decode_envelope_message, decode_payload_message, encode_envelope_message,
    encode_payload_message, ProposalKey, TransactionEnvelope, TransactionPayload,
    TransactionSignature, TRANSACTION_DOMAIN_TAG,
};
pub use validation::{check_envelope, check_payload, RecognizedTransaction};
