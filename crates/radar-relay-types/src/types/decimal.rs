/*
[INPUT]:  Decimal-typed fields of every wire shape
[OUTPUT]: serde `with` modules encoding decimals as JSON strings
[POS]:    Data layer - numeric precision contract
[UPDATE]: When the decimal wire convention changes
*/

//! Decimals are written as JSON strings. On read a plain numeral string
//! (`-?digits[.digits]`) or a JSON integer is accepted; a JSON float has
//! already lost precision in the parser and is rejected.
//!
//! Values are held in a 96-bit `Decimal`: at most 28 significant digits and
//! 28 fractional digits. Anything wider is rejected as precision loss, never
//! rounded.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Prefix of every decode error raised for a value that cannot be held exactly.
pub(crate) const PRECISION_LOSS: &str = "decimal precision loss";

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    from_value(&value).map_err(D::Error::custom)
}

pub(crate) fn from_value(value: &Value) -> Result<Decimal, String> {
    match value {
        Value::String(raw) => parse_exact(raw),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(Decimal::from(int))
            } else if let Some(int) = number.as_u64() {
                Ok(Decimal::from(int))
            } else {
                Err(format!(
                    "{PRECISION_LOSS}: {number} is a binary float, encode decimals as strings"
                ))
            }
        }
        other => Err(format!("invalid decimal value: {other}")),
    }
}

fn parse_exact(raw: &str) -> Result<Decimal, String> {
    if !is_plain_numeral(raw) {
        return Err(format!("invalid decimal value {raw:?}: expected -?digits[.digits]"));
    }
    Decimal::from_str_exact(raw).map_err(|err| match err {
        rust_decimal::Error::ExceedsMaximumPossibleValue
        | rust_decimal::Error::LessThanMinimumPossibleValue
        | rust_decimal::Error::Underflow
        | rust_decimal::Error::ScaleExceedsMaximumPrecision(_) => {
            format!("{PRECISION_LOSS}: {raw:?} does not fit a 96-bit decimal")
        }
        other if other.to_string().contains("overflow") => {
            format!("{PRECISION_LOSS}: {raw:?} does not fit a 96-bit decimal")
        }
        other => format!("invalid decimal value {raw:?}: {other}"),
    })
}

/// `^-?\d+(\.\d+)?$`, so the string re-encodes byte for byte.
fn is_plain_numeral(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit());
    digits(int) && frac.is_none_or(digits)
}

pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(value) => from_value(&value).map(Some).map_err(D::Error::custom),
        }
    }
}

pub mod vec {
    use super::*;
    use serde::Serialize;

    pub fn serialize<S>(values: &[Decimal], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let strings: Vec<String> = values.iter().map(Decimal::to_string).collect();
        strings.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values: Vec<Value> = Vec::deserialize(deserializer)?;
        values
            .iter()
            .map(|value| from_value(value).map_err(D::Error::custom))
            .collect()
    }
}
