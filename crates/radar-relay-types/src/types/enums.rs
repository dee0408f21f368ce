/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - closed string vocabularies shared by REST and websocket shapes
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, Result};

/// User-facing order intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserOrderType {
    Buy,
    Sell,
}

/// Side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RadarOrderType {
    Bid,
    Ask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RadarOrderState {
    Open,
    Filled,
    Canceled,
    Expired,
    Unfunded,
}

impl RadarOrderState {
    /// The only state an order can be created in.
    pub const fn initial() -> Self {
        RadarOrderState::Open
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, RadarOrderState::Open)
    }

    /// OPEN may move to any terminal state; terminal states never move.
    pub fn can_transition_to(self, next: RadarOrderState) -> bool {
        self == RadarOrderState::Open && next.is_terminal()
    }

    pub fn transition(self, next: RadarOrderState) -> Result<RadarOrderState> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ContractError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for RadarOrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RadarOrderState::Open => "OPEN",
            RadarOrderState::Filled => "FILLED",
            RadarOrderState::Canceled => "CANCELED",
            RadarOrderState::Expired => "EXPIRED",
            RadarOrderState::Unfunded => "UNFUNDED",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsocketAction {
    Fill,
    New,
    Cancel,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsocketRequestTopic {
    Book,
    Ticker,
    Candle,
}

impl WebsocketRequestTopic {
    pub const ALL: [WebsocketRequestTopic; 3] = [
        WebsocketRequestTopic::Book,
        WebsocketRequestTopic::Ticker,
        WebsocketRequestTopic::Candle,
    ];
}

impl fmt::Display for WebsocketRequestTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WebsocketRequestTopic::Book => "BOOK",
            WebsocketRequestTopic::Ticker => "TICKER",
            WebsocketRequestTopic::Candle => "CANDLE",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsocketRequestType {
    Subscribe,
    Unsubscribe,
}

/// `type` of a websocket response: the echoed request type, or `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsocketResponseType {
    Subscribe,
    Unsubscribe,
    Error,
}

impl From<WebsocketRequestType> for WebsocketResponseType {
    fn from(value: WebsocketRequestType) -> Self {
        match value {
            WebsocketRequestType::Subscribe => WebsocketResponseType::Subscribe,
            WebsocketRequestType::Unsubscribe => WebsocketResponseType::Unsubscribe,
        }
    }
}
