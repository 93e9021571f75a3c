//! JSON-Cadence argument values.
//!
//! Transaction arguments travel as byte strings holding the compact
//! JSON-Cadence encoding, e.g. `{"type":"UFix64","value":"10.5"}`. Only the
//! types used by the approved templates are modelled here.

use core::fmt;
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::Address;
use crate::error::TransactionError;

/// Number of decimal places in a [`UFix64`].
pub const UFIX64_DECIMALS: u32 = 8;

const UFIX64_SCALE: u64 = 100_000_000;

/// Unsigned fixed-point amounts with up to 8 decimal places, the Cadence
/// type used for token amounts.
///
/// The decimal text is kept exactly as received so that a device can
/// display what it was asked to approve. Amounts inside the 64-bit scaled
/// range (up to `184467440737.09551615`) also expose the raw value; larger
/// well-formed amounts are carried through as text only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UFix64 {
    text: String,
    raw: Option<u64>,
}

impl UFix64 {
    /// Builds an amount from a raw scaled value (`1.0` is `100_000_000`),
    /// rendered canonically with trailing fraction zeros trimmed.
    pub fn from_raw(raw: u64) -> Self {
        let integer = raw / UFIX64_SCALE;
        let fraction = raw % UFIX64_SCALE;
        let digits = format!("{fraction:08}");
        let trimmed = digits.trim_end_matches('0');
        let fraction = if trimmed.is_empty() { "0" } else { trimmed };
        Self {
            text: format!("{integer}.{fraction}"),
            raw: Some(raw),
        }
    }

    /// The scaled value (`1.0` is `100_000_000`), or `None` when the amount
    /// exceeds the representable range.
    pub const fn raw(&self) -> Option<u64> {
        self.raw
    }

    /// The decimal text as received.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for UFix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for UFix64 {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TransactionError::InvalidUFix64(s.to_owned());

        let (integer, fraction) = s.split_once('.').ok_or_else(invalid)?;
        if integer.is_empty()
            || fraction.is_empty()
            || fraction.len() > UFIX64_DECIMALS as usize
            || !integer.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let missing_digits = UFIX64_DECIMALS as usize - fraction.len();
        let raw = integer.parse::<u64>().ok().and_then(|int| {
            let mut frac: u64 = fraction.parse().ok()?;
            for _ in 0..missing_digits {
                frac *= 10;
            }
            int.checked_mul(UFIX64_SCALE)?.checked_add(frac)
        });

        Ok(Self {
            text: s.to_owned(),
            raw,
        })
    }
}

impl Serialize for UFix64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UFix64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// The subset of JSON-Cadence values the approved templates use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CadenceValue {
    String(String),
    UFix64(UFix64),
    Address(Address),
    Array(Vec<CadenceValue>),
}

impl CadenceValue {
    /// Compact JSON encoding, the form carried inside transaction arguments.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0.0", 0)]
    #[case("1.0", 100_000_000)]
    #[case("10.5", 1_050_000_000)]
    #[case("0.00000001", 1)]
    #[case("184467440737.09551615", u64::MAX)]
    fn parses_valid_amounts(#[case] input: &str, #[case] raw: u64) {
        let amount: UFix64 = input.parse().unwrap();
        assert_eq!(amount.raw(), Some(raw));
        assert_eq!(amount.as_str(), input);
    }

    #[rstest]
    #[case("184467440737.9551615")]
    #[case("184467440738.0")]
    fn carries_unrepresentable_amounts_as_text(#[case] input: &str) {
        let amount: UFix64 = input.parse().unwrap();
        assert_eq!(amount.raw(), None);
        assert_eq!(amount.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("10")]
    #[case(".5")]
    #[case("10.")]
    #[case("-1.0")]
    #[case("1.000000001")]
    fn rejects_invalid_amounts(#[case] input: &str) {
        assert!(input.parse::<UFix64>().is_err());
    }

    #[rstest]
    #[case(0, "0.0")]
    #[case(100_000_000, "1.0")]
    #[case(1_050_000_000, "10.5")]
    #[case(1, "0.00000001")]
    #[case(u64::MAX, "184467440737.09551615")]
    fn formats_canonically(#[case] raw: u64, #[case] expected: &str) {
        assert_eq!(UFix64::from_raw(raw).to_string(), expected);
    }

    #[test]
    fn json_cadence_roundtrip() {
        let value = CadenceValue::Array(vec![
            CadenceValue::UFix64("10.5".parse().unwrap()),
            CadenceValue::Address(Address::from_hex("f8d6e0586b0a20c7").unwrap()),
        ]);
        let bytes = value.to_bytes().unwrap();
        assert_eq!(
            core::str::from_utf8(&bytes).unwrap(),
            r#"{"type":"Array","value":[{"type":"UFix64","value":"10.5"},{"type":"Address","value":"0xf8d6e0586b0a20c7"}]}"#
        );
        assert_eq!(CadenceValue::from_bytes(&bytes).unwrap(), value);
    }
}
