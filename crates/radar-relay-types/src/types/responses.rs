/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - relay answers to order and fee queries
[UPDATE]: When API schema changes or new types added
*/

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::SignedOrder;
use super::sentinel::ServerAssigned;

/// Unsigned order priced by the relay. The `ServerAssigned` fields are filled
/// in by the relay when the order is posted back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedOrder {
    pub maker: ServerAssigned,
    pub taker: String,
    #[serde(with = "crate::types::uint")]
    pub maker_fee: U256,
    #[serde(with = "crate::types::uint")]
    pub taker_fee: U256,
    #[serde(with = "crate::types::uint")]
    pub maker_token_amount: U256,
    #[serde(with = "crate::types::uint")]
    pub taker_token_amount: U256,
    pub maker_token_address: String,
    pub taker_token_address: String,
    #[serde(with = "crate::types::uint")]
    pub salt: U256,
    pub exchange_contract_address: ServerAssigned,
    pub fee_recipient: String,
    pub expiration_unix_timestamp_sec: ServerAssigned,
}

/// Price information and fillable orders at the best price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarMarketOrderResponse {
    #[serde(with = "crate::types::decimal")]
    pub average_price: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub best_price: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub worst_price: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub spread: Decimal,
    pub orders: Vec<SignedOrder>,
}

/// Fee information for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarOrderFeeResponse {
    #[serde(with = "crate::types::decimal")]
    pub maker_fee: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub taker_fee: Decimal,
    pub fee_recipient: String,
    #[serde(
        default,
        with = "crate::types::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas_estimate: Option<Decimal>,
}
