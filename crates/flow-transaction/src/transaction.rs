//! Flow transaction wire model.
//!
//! A payload message is the RLP canonical form of the transaction payload
//! prefixed by the 32-byte domain tag; an envelope message wraps the payload
//! together with the payload signatures. These are the exact bytes a signer
//! is asked to hash and sign, so decoding is strict: wrong list arity, wrong
//! fixed-width field length, or a missing tag is an error.

use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};

use crate::address::Address;
use crate::error::TransactionError;

/// Domain tag prepended to both payload and envelope messages:
/// `"FLOW-V0.0-transaction"` right-padded with zero bytes to 32 bytes.
pub const TRANSACTION_DOMAIN_TAG: [u8; 32] =
    *b"FLOW-V0.0-transaction\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00";

/// Byte length of a reference block id.
pub const REFERENCE_BLOCK_LENGTH: usize = 32;

const PAYLOAD_FIELD_COUNT: usize = 9;

/// Key slot authorizing a transaction proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalKey {
    pub address: Address,
    pub key_id: u64,
    pub sequence_number: u64,
}

/// The signable payload of a Flow transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPayload {
    /// Cadence source, kept opaque; identified by digest only.
    pub script: String,
    /// JSON-Cadence encodings, one byte string per argument.
    pub arguments: Vec<Vec<u8>>,
    pub reference_block_id: [u8; REFERENCE_BLOCK_LENGTH],
    pub gas_limit: u64,
    pub proposal_key: ProposalKey,
    pub payer: Address,
    pub authorizers: Vec<Address>,
}

/// A signature over the payload, identified by the signer's position in the
/// canonical signer list and the key id used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSignature {
    pub signer_index: u64,
    pub key_id: u64,
    pub signature: Vec<u8>,
}

/// The payload plus the payload signatures; what the payer ultimately signs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEnvelope {
    pub payload: TransactionPayload,
    pub payload_signatures: Vec<TransactionSignature>,
}

impl Encodable for TransactionPayload {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(PAYLOAD_FIELD_COUNT);
        s.append(&self.script.as_bytes().to_vec());
        s.begin_list(self.arguments.len());
        for argument in &self.arguments {
            s.append(argument);
        }
        s.append(&self.reference_block_id.to_vec());
        s.append(&self.gas_limit);
        s.append(&self.proposal_key.address);
        s.append(&self.proposal_key.key_id);
        s.append(&self.proposal_key.sequence_number);
        s.append(&self.payer);
        s.append_list(&self.authorizers);
    }
}

impl Decodable for TransactionPayload {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        if rlp.item_count()? != PAYLOAD_FIELD_COUNT {
            return Err(DecoderError::RlpIncorrectListLen);
        }

        let script = String::from_utf8(rlp.val_at(0)?)
            .map_err(|_| DecoderError::Custom("script is not valid utf-8"))?;
        let arguments = rlp.list_at(1)?;
        let reference_block_id: [u8; REFERENCE_BLOCK_LENGTH] = rlp
            .val_at::<Vec<u8>>(2)?
            .try_into()
            .map_err(|_| DecoderError::Custom("reference block id must be 32 bytes"))?;

        Ok(Self {
            script,
            arguments,
            reference_block_id,
            gas_limit: rlp.val_at(3)?,
            proposal_key: ProposalKey {
                address: rlp.val_at(4)?,
                key_id: rlp.val_at(5)?,
                sequence_number: rlp.val_at(6)?,
            },
            payer: rlp.val_at(7)?,
            authorizers: rlp.list_at(8)?,
        })
    }
}

impl Encodable for TransactionSignature {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3);
        s.append(&self.signer_index);
        s.append(&self.key_id);
        s.append(&self.signature);
    }
}

impl Decodable for TransactionSignature {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        if rlp.item_count()? != 3 {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        Ok(Self {
            signer_index: rlp.val_at(0)?,
            key_id: rlp.val_at(1)?,
            signature: rlp.val_at(2)?,
        })
    }
}

impl Encodable for TransactionEnvelope {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(2);
        s.append(&self.payload);
        s.append_list(&self.payload_signatures);
    }
}

impl Decodable for TransactionEnvelope {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        if rlp.item_count()? != 2 {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        Ok(Self {
            payload: rlp.val_at(0)?,
            payload_signatures: rlp.list_at(1)?,
        })
    }
}

/// Encodes a payload message: domain tag followed by the RLP payload.
pub fn encode_payload_message(payload: &TransactionPayload) -> Vec<u8> {
    prepend_domain_tag(&rlp::encode(payload))
}

/// Encodes an envelope message: domain tag followed by the RLP envelope.
pub fn encode_envelope_message(envelope: &TransactionEnvelope) -> Vec<u8> {
    prepend_domain_tag(&rlp::encode(envelope))
}

/// Decodes a payload message, verifying and stripping the domain tag.
pub fn decode_payload_message(message: &[u8]) -> Result<TransactionPayload, TransactionError> {
    Ok(rlp::decode(strip_domain_tag(message)?)?)
}

/// Decodes an envelope message, verifying and stripping the domain tag.
pub fn decode_envelope_message(message: &[u8]) -> Result<TransactionEnvelope, TransactionError> {
    Ok(rlp::decode(strip_domain_tag(message)?)?)
}

fn prepend_domain_tag(body: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(TRANSACTION_DOMAIN_TAG.len() + body.len());
    message.extend_from_slice(&TRANSACTION_DOMAIN_TAG);
    message.extend_from_slice(body);
    message
}

fn strip_domain_tag(message: &[u8]) -> Result<&[u8], TransactionError> {
    message
        .strip_prefix(TRANSACTION_DOMAIN_TAG.as_slice())
        .ok_or(TransactionError::MissingDomainTag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_tag_is_right_padded_to_32_bytes() {
        assert_eq!(TRANSACTION_DOMAIN_TAG.len(), 32);
        assert!(TRANSACTION_DOMAIN_TAG.starts_with(b"FLOW-V0.0-transaction"));
        assert!(TRANSACTION_DOMAIN_TAG[21..].iter().all(|&b| b == 0));
    }

    #[test]
    fn untagged_message_is_rejected() {
        let err = decode_payload_message(b"\xc0").unwrap_err();
        assert!(matches!(err, TransactionError::MissingDomainTag));
    }
}
