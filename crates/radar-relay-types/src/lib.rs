/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Radar Relay contract crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Wire contracts for the Radar Relay order-book API and its websocket feed:
//! tokens, markets, signed orders, books, candles, fills and the subscription
//! protocol, plus a [`Boundary`] that decodes and checks them.

pub mod boundary;
pub mod config;
pub mod error;
pub mod types;
pub mod ws;

pub use boundary::Boundary;
pub use config::BoundaryConfig;
pub use error::{ContractError, Result};

// Re-export all types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{
    MarketEvent,
    MarketScoped,
    OnChain,
    OnChainEvent,
    OrderEvent,
    RadarCancelOrder,
    RadarFill,
    RadarNewOrder,
    RadarRemoveOrder,
    RadarSubscribeRequest,
    RadarUnsubscribeRequest,
    RadarWebsocketRequest,
    RadarWebsocketResponse,
    WebsocketEvent,
};
