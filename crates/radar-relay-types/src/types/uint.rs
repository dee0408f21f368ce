/*
[INPUT]:  256-bit integer fields of 0x orders (salt)
[OUTPUT]: serde `with` module encoding U256 as a base-10 JSON string
[POS]:    Data layer - on-chain integer contract
[UPDATE]: When more uint256 fields are carried
*/

use alloy_primitives::U256;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(raw) => U256::from_str_radix(raw.trim(), 10)
            .map_err(|err| D::Error::custom(format!("invalid uint256 {raw:?}: {err}"))),
        Value::Number(number) => number.as_u64().map(U256::from).ok_or_else(|| {
            D::Error::custom(format!(
                "{}: {number} is not an unsigned integer, encode uint256 as a string",
                super::decimal::PRECISION_LOSS
            ))
        }),
        other => Err(D::Error::custom(format!("invalid uint256 value: {other}"))),
    }
}
