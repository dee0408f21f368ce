/*
[INPUT]:  Error sources (decoding, model invariants, subscription policy, configuration)
[OUTPUT]: Structured error types with boundary classification hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::types::decimal::PRECISION_LOSS;
use crate::types::{RadarOrderState, RadarOrderType, WebsocketRequestTopic};

/// Main error type for Radar Relay contracts
#[derive(Error, Debug)]
pub enum ContractError {
    /// Payload does not match the expected shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// A numeric field cannot be represented exactly
    #[error("Precision loss on decode: {0}")]
    PrecisionLoss(#[source] serde_json::Error),

    /// Market id is well formed but not listed
    #[error("Unknown market: {0}")]
    UnknownMarket(String),

    /// Market id is not `BASE/QUOTE`
    #[error("Invalid market id {0:?}, expected BASE/QUOTE")]
    InvalidMarketId(String),

    /// Topic is not open to subscribers
    #[error("Subscription to {topic} on {market} is not permitted")]
    UnauthorizedSubscribe {
        topic: WebsocketRequestTopic,
        market: String,
    },

    /// Candle breaks low <= open/close <= high or its block range is inverted
    #[error("Invalid candle: {0}")]
    InvalidCandle(String),

    #[error("Order state cannot move from {from} to {to}")]
    InvalidTransition {
        from: RadarOrderState,
        to: RadarOrderState,
    },

    /// Order filed under the wrong side of a book
    #[error("Order {order_hash} is not a {expected:?} order")]
    SideMismatch {
        order_hash: String,
        expected: RadarOrderType,
    },

    /// Order token pair differs from its book's pair
    #[error("Order {order_hash} belongs to a different token pair")]
    PairMismatch { order_hash: String },

    /// Book sides are not best price first
    #[error("Book is not ranked best price first")]
    UnrankedBook,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContractError {
    /// Check if the error came from decoding a payload
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ContractError::MalformedPayload(_) | ContractError::PrecisionLoss(_)
        )
    }

    /// Check if the peer sent something it should not have
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ContractError::Config(_))
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() && err.to_string().contains(PRECISION_LOSS) {
            ContractError::PrecisionLoss(err)
        } else {
            ContractError::MalformedPayload(err)
        }
    }
}

impl From<config::ConfigError> for ContractError {
    fn from(err: config::ConfigError) -> Self {
        ContractError::Config(err.to_string())
    }
}

/// Result type alias for contract operations
pub type Result<T> = std::result::Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Price {
        #[serde(with = "crate::types::decimal")]
        price: Decimal,
    }

    #[test]
    fn test_float_decimal_is_precision_loss() {
        let err: ContractError = serde_json::from_str::<Price>(r#"{"price": 700.1}"#)
            .unwrap_err()
            .into();
        assert!(matches!(err, ContractError::PrecisionLoss(_)));
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_shape_mismatch_is_malformed() {
        let err: ContractError = serde_json::from_str::<Price>(r#"{"cost": "1"}"#)
            .unwrap_err()
            .into();
        assert!(matches!(err, ContractError::MalformedPayload(_)));

        let err: ContractError = serde_json::from_str::<Price>("{").unwrap_err().into();
        assert!(matches!(err, ContractError::MalformedPayload(_)));
    }

    #[test]
    fn test_error_classification() {
        assert!(ContractError::UnknownMarket("ZRX/DAI".to_string()).is_client_error());
        assert!(!ContractError::UnknownMarket("ZRX/DAI".to_string()).is_decode_error());
        assert!(!ContractError::Config("missing file".to_string()).is_client_error());
    }

    #[test]
    fn test_transition_error_message() {
        let err = ContractError::InvalidTransition {
            from: RadarOrderState::Filled,
            to: RadarOrderState::Open,
        };
        assert_eq!(err.to_string(), "Order state cannot move from FILLED to OPEN");
    }
}
