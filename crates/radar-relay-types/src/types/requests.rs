/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - user-facing order intents posted to the relay
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::UserOrderType;

/// Request for an unsigned order at the given quantity and price, which the
/// caller then signs and posts back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarLimitOrder {
    #[serde(rename = "type")]
    pub order_type: UserOrderType,
    #[serde(with = "crate::types::decimal")]
    pub quantity: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub price: Decimal,
    #[serde(
        default,
        with = "crate::types::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration: Option<Decimal>,
}

/// Request for fillable orders, up to `quantity`, at the best price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarMarketOrder {
    #[serde(rename = "type")]
    pub order_type: UserOrderType,
    #[serde(with = "crate::types::decimal")]
    pub quantity: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn limit_order_expiration_is_optional() {
        let order: RadarLimitOrder = serde_json::from_value(json!({
            "type": "BUY",
            "quantity": "1.25",
            "price": "700.5"
        }))
        .expect("limit order should deserialize");

        assert_eq!(order.order_type, UserOrderType::Buy);
        assert_eq!(order.expiration, None);
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({ "type": "BUY", "quantity": "1.25", "price": "700.5" })
        );
    }

    #[test]
    fn market_order_rejects_book_side_vocabulary() {
        let result = serde_json::from_value::<RadarMarketOrder>(json!({
            "type": "BID",
            "quantity": "3"
        }));
        assert!(result.is_err());
    }
}
