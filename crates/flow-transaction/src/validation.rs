//! Template-level transaction checking.
//!
//! Mirrors what a signing device does before showing a transaction to the
//! user: reject anything whose script is empty or unapproved, then check the
//! argument shape against the matched template and decode the values that
//! will be displayed.

use crate::account_key::AccountKey;
use crate::arguments::CadenceValue;
use crate::error::TransactionError;
use crate::template::TransactionTemplate;
use crate::transaction::{TransactionEnvelope, TransactionPayload};

/// A transaction that matched an approved template, with its arguments
/// decoded for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedTransaction {
    pub template: TransactionTemplate,
    pub arguments: Vec<CadenceValue>,
}

/// Checks a payload against the approved template table.
pub fn check_payload(
    payload: &TransactionPayload,
) -> Result<RecognizedTransaction, TransactionError> {
    if payload.script.is_empty() {
        return Err(TransactionError::EmptyScript);
    }
    let template = TransactionTemplate::from_script(&payload.script)
        .ok_or(TransactionError::UnapprovedScript)?;

    let arguments = payload
        .arguments
        .iter()
        .map(|raw| CadenceValue::from_bytes(raw))
        .collect::<Result<Vec<_>, _>>()?;
    check_arguments(template, &arguments)?;

    Ok(RecognizedTransaction {
        template,
        arguments,
    })
}

/// Checks an envelope; the signatures carry no display semantics, so this is
/// the payload check.
pub fn check_envelope(
    envelope: &TransactionEnvelope,
) -> Result<RecognizedTransaction, TransactionError> {
    check_payload(&envelope.payload)
}

fn check_arguments(
    template: TransactionTemplate,
    arguments: &[CadenceValue],
) -> Result<(), TransactionError> {
    let mismatch = |reason| TransactionError::ArgumentMismatch {
        template: template.operation_label(),
        reason,
    };

    match template {
        TransactionTemplate::TokenTransfer => match arguments {
            [CadenceValue::UFix64(_), CadenceValue::Address(_)] => Ok(()),
            _ => Err(mismatch("expected [UFix64 amount, Address recipient]")),
        },
        TransactionTemplate::CreateAccount => match arguments {
            [CadenceValue::Array(keys)] => {
                for key in keys {
                    let CadenceValue::String(encoded) = key else {
                        return Err(mismatch("account keys must be String values"));
                    };
                    AccountKey::from_hex(encoded)?;
                }
                Ok(())
            }
            _ => Err(mismatch("expected [Array of String account keys]")),
        },
        TransactionTemplate::AddNewKey => match arguments {
            [CadenceValue::String(encoded)] => {
                AccountKey::from_hex(encoded)?;
                Ok(())
            }
            _ => Err(mismatch("expected [String account key]")),
        },
    }
}
