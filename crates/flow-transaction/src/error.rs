//! Common error type used within the transaction crate

/// Common error type used within the transaction crate.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The message does not start with the 32-byte transaction domain tag.
    #[error("Message is missing the Flow transaction domain tag")]
    MissingDomainTag,

    /// The RLP body of the message could not be decoded.
    #[error("RLP decoding failed: {0}")]
    Rlp(#[from] rlp::DecoderError),

    /// The transaction carries an empty script.
    #[error("Empty script")]
    EmptyScript,

    /// The script digest is not in the approved template table.
    #[error("Script hash does not match an approved template")]
    UnapprovedScript,

    /// An argument is not valid JSON-Cadence.
    #[error("Argument is not valid JSON-Cadence: {0}")]
    InvalidArgument(#[from] serde_json::Error),

    /// A UFix64 string could not be parsed or does not fit 64 bits.
    #[error("Invalid UFix64 value: {0}")]
    InvalidUFix64(String),

    /// The arguments do not have the shape the matched template expects.
    #[error("Arguments do not match the {template} template: {reason}")]
    ArgumentMismatch {
        /// Display label of the matched template.
        template: &'static str,
        /// What was wrong with the argument list.
        reason: &'static str,
    },

    /// A hex field (address, account key, signature) failed to decode.
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// An account key declared a weight above the allowed maximum.
    #[error("Account key weight {0} exceeds the maximum of 1000")]
    InvalidKeyWeight(u64),

    /// A fixed-width field had the wrong byte length.
    #[error("Expected {expected} bytes for {field}, got {actual}")]
    InvalidLength {
        /// Name of the offending field.
        field: &'static str,
        /// Required byte length.
        expected: usize,
        /// Byte length found in the input.
        actual: usize,
    },
}
