/*
[INPUT]:  Streaming gateway frames (subscription control and market pushes)
[OUTPUT]: Typed websocket protocol messages and events
[POS]:    WebSocket layer - real-time protocol contracts
[UPDATE]: When adding new channels, actions or message fields
*/

pub mod event;
pub mod message;

pub use event::{
    MarketEvent, MarketScoped, OnChain, OnChainEvent, OrderEvent, RadarCancelOrder, RadarFill,
    RadarNewOrder, RadarRemoveOrder, WebsocketEvent,
};
pub use message::{
    RadarSubscribeRequest, RadarUnsubscribeRequest, RadarWebsocketRequest, RadarWebsocketResponse,
};
