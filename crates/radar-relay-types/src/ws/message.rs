/*
[INPUT]:  Subscription control frames exchanged with the streaming gateway
[OUTPUT]: Tagged request union and typed response
[POS]:    WebSocket layer - subscription protocol messages
[UPDATE]: When adding new request types, topics or response fields
*/

use serde::{Deserialize, Serialize};

use crate::types::{WebsocketRequestTopic, WebsocketRequestType, WebsocketResponseType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSubscribeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
    pub topic: WebsocketRequestTopic,
    pub market: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarUnsubscribeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
    pub topic: WebsocketRequestTopic,
    pub market: String,
}

/// Client control frame, keyed by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum RadarWebsocketRequest {
    Subscribe(RadarSubscribeRequest),
    Unsubscribe(RadarUnsubscribeRequest),
}

impl RadarWebsocketRequest {
    pub fn subscribe(
        topic: WebsocketRequestTopic,
        market: impl Into<String>,
        request_id: Option<u64>,
    ) -> Self {
        RadarWebsocketRequest::Subscribe(RadarSubscribeRequest {
            request_id,
            topic,
            market: market.into(),
        })
    }

    pub fn unsubscribe(
        topic: WebsocketRequestTopic,
        market: impl Into<String>,
        request_id: Option<u64>,
    ) -> Self {
        RadarWebsocketRequest::Unsubscribe(RadarUnsubscribeRequest {
            request_id,
            topic,
            market: market.into(),
        })
    }

    pub fn kind(&self) -> WebsocketRequestType {
        match self {
            RadarWebsocketRequest::Subscribe(_) => WebsocketRequestType::Subscribe,
            RadarWebsocketRequest::Unsubscribe(_) => WebsocketRequestType::Unsubscribe,
        }
    }

    pub fn topic(&self) -> WebsocketRequestTopic {
        match self {
            RadarWebsocketRequest::Subscribe(request) => request.topic,
            RadarWebsocketRequest::Unsubscribe(request) => request.topic,
        }
    }

    pub fn market(&self) -> &str {
        match self {
            RadarWebsocketRequest::Subscribe(request) => &request.market,
            RadarWebsocketRequest::Unsubscribe(request) => &request.market,
        }
    }

    pub fn request_id(&self) -> Option<u64> {
        match self {
            RadarWebsocketRequest::Subscribe(request) => request.request_id,
            RadarWebsocketRequest::Unsubscribe(request) => request.request_id,
        }
    }
}

/// Gateway reply to a control frame. Carries no detail beyond its type and
/// the echoed request id, even for `ERROR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarWebsocketResponse {
    #[serde(rename = "type")]
    pub response_type: WebsocketResponseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
}

impl RadarWebsocketResponse {
    /// Acknowledges `request` by echoing its type and id.
    pub fn ack(request: &RadarWebsocketRequest) -> Self {
        Self {
            response_type: request.kind().into(),
            request_id: request.request_id(),
        }
    }

    pub fn error(request_id: Option<u64>) -> Self {
        Self {
            response_type: WebsocketResponseType::Error,
            request_id,
        }
    }

    pub fn is_error(&self) -> bool {
        self.response_type == WebsocketResponseType::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subscribe_request_is_tagged_by_type() {
        let request = RadarWebsocketRequest::subscribe(WebsocketRequestTopic::Ticker, "ZRX/WETH", None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "type": "SUBSCRIBE", "topic": "TICKER", "market": "ZRX/WETH" })
        );
    }

    #[test]
    fn request_requires_topic_and_market() {
        let missing_topic = json!({ "type": "SUBSCRIBE", "market": "WETH/DAI", "requestId": 1 });
        let missing_market = json!({ "type": "UNSUBSCRIBE", "topic": "BOOK" });
        let missing_type = json!({ "topic": "BOOK", "market": "WETH/DAI" });

        assert!(serde_json::from_value::<RadarWebsocketRequest>(missing_topic).is_err());
        assert!(serde_json::from_value::<RadarWebsocketRequest>(missing_market).is_err());
        assert!(serde_json::from_value::<RadarWebsocketRequest>(missing_type).is_err());
    }

    #[test]
    fn error_type_is_not_a_request() {
        let frame = json!({ "type": "ERROR", "topic": "BOOK", "market": "WETH/DAI" });
        assert!(serde_json::from_value::<RadarWebsocketRequest>(frame).is_err());
    }

    #[test]
    fn ack_echoes_type_and_request_id() {
        let request = RadarWebsocketRequest::unsubscribe(WebsocketRequestTopic::Candle, "WETH/DAI", Some(9));
        let response = RadarWebsocketResponse::ack(&request);

        assert_eq!(response.response_type, WebsocketResponseType::Unsubscribe);
        assert_eq!(response.request_id, Some(9));
        assert!(!response.is_error());
    }

    #[test]
    fn error_response_needs_only_type() {
        let response: RadarWebsocketResponse =
            serde_json::from_value(json!({ "type": "ERROR" })).expect("error response");
        assert!(response.is_error());
        assert_eq!(response.request_id, None);
        assert_eq!(
            serde_json::to_value(RadarWebsocketResponse::error(Some(4))).unwrap(),
            json!({ "type": "ERROR", "requestId": 4 })
        );
    }
}
