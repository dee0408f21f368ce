/*
[INPUT]:  Raw websocket push frames
[OUTPUT]: WebsocketEvent tagged union and its four payload shapes
[POS]:    WebSocket layer - market events pushed to subscribers
[UPDATE]: When adding new event actions or payload fields
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{RadarOrderType, RadarSignedOrder, UserOrderType, WebsocketAction};

/// Fields carried by every event tied to a base/quote market.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEvent {
    pub base_token_address: String,
    pub quote_token_address: String,
}

/// Fields of an event that carries a full order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub order: RadarSignedOrder,
}

/// Fields of an event backed by an on-chain transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnChainEvent {
    pub transaction_hash: String,
}

/// Implemented by every event scoped to one market.
pub trait MarketScoped {
    fn market_event(&self) -> &MarketEvent;

    fn base_token_address(&self) -> &str {
        &self.market_event().base_token_address
    }

    fn quote_token_address(&self) -> &str {
        &self.market_event().quote_token_address
    }
}

/// Implemented by events that originate from a mined transaction.
pub trait OnChain {
    fn on_chain_event(&self) -> &OnChainEvent;

    fn transaction_hash(&self) -> &str {
        &self.on_chain_event().transaction_hash
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarNewOrder {
    #[serde(flatten)]
    pub market: MarketEvent,
    #[serde(flatten)]
    pub order: OrderEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarCancelOrder {
    #[serde(flatten)]
    pub market: MarketEvent,
    #[serde(flatten)]
    pub chain: OnChainEvent,
    pub order_type: RadarOrderType,
    pub order_hash: String,
}

/// Order dropped from the book without an on-chain cancel (e.g. unfunded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarRemoveOrder {
    #[serde(flatten)]
    pub market: MarketEvent,
    pub reason: String,
}

/// A taker order matched against a resting maker order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarFill {
    #[serde(flatten)]
    pub market: MarketEvent,
    #[serde(flatten)]
    pub chain: OnChainEvent,
    #[serde(rename = "type")]
    pub fill_type: UserOrderType,
    pub block_number: u64,
    pub maker: String,
    pub taker: String,
    pub fee_recipient: String,
    #[serde(with = "crate::types::decimal")]
    pub paid_maker_fee: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub paid_taker_fee: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub filled_base_token_amount: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub filled_quote_token_amount: Decimal,
    pub order_hash: String,
    pub timestamp: u64,
    pub outlier: bool,
}

macro_rules! impl_market_scoped {
    ($($event:ty),* $(,)?) => {
        $(
            impl MarketScoped for $event {
                fn market_event(&self) -> &MarketEvent {
                    &self.market
                }
            }
        )*
    };
}

impl_market_scoped!(RadarNewOrder, RadarCancelOrder, RadarRemoveOrder, RadarFill);

impl OnChain for RadarCancelOrder {
    fn on_chain_event(&self) -> &OnChainEvent {
        &self.chain
    }
}

impl OnChain for RadarFill {
    fn on_chain_event(&self) -> &OnChainEvent {
        &self.chain
    }
}

/// Push frame: `{"action": ..., "event": {...}}`. The payload shape is fixed
/// by the action, so a frame whose payload does not match its tag fails to
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "event", rename_all = "UPPERCASE")]
pub enum WebsocketEvent {
    Fill(RadarFill),
    New(RadarNewOrder),
    Cancel(RadarCancelOrder),
    Remove(RadarRemoveOrder),
}

impl WebsocketEvent {
    pub fn action(&self) -> WebsocketAction {
        match self {
            WebsocketEvent::Fill(_) => WebsocketAction::Fill,
            WebsocketEvent::New(_) => WebsocketAction::New,
            WebsocketEvent::Cancel(_) => WebsocketAction::Cancel,
            WebsocketEvent::Remove(_) => WebsocketAction::Remove,
        }
    }

    pub fn market(&self) -> &MarketEvent {
        self.market_event()
    }

    /// Transaction hash for on-chain actions (FILL, CANCEL).
    pub fn transaction_hash(&self) -> Option<&str> {
        match self {
            WebsocketEvent::Fill(fill) => Some(fill.transaction_hash()),
            WebsocketEvent::Cancel(cancel) => Some(cancel.transaction_hash()),
            WebsocketEvent::New(_) | WebsocketEvent::Remove(_) => None,
        }
    }
}

impl MarketScoped for WebsocketEvent {
    fn market_event(&self) -> &MarketEvent {
        match self {
            WebsocketEvent::Fill(event) => event.market_event(),
            WebsocketEvent::New(event) => event.market_event(),
            WebsocketEvent::Cancel(event) => event.market_event(),
            WebsocketEvent::Remove(event) => event.market_event(),
        }
    }
}
