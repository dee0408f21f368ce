/*
[INPUT]:  Raw payloads and boundary configurations
[OUTPUT]: Test results for boundary decoding and policy
[POS]:    Integration tests - boundary validation
[UPDATE]: When boundary policies or error taxonomy change
*/

mod common;

use common::{book, fill_event, radar_order};
use radar_relay_types::{
    Boundary, BoundaryConfig, ContractError, WebsocketAction, WebsocketRequestTopic,
};
use rstest::rstest;
use serde_json::json;
use tokio_test::assert_ok;

fn listed_boundary() -> Boundary {
    assert_ok!(Boundary::new(BoundaryConfig {
        markets: vec!["WETH/DAI".to_string(), "ZRX/WETH".to_string()],
        topics: vec![WebsocketRequestTopic::Book, WebsocketRequestTopic::Ticker],
        ..BoundaryConfig::default()
    }))
}

#[test]
fn test_boundary_rejects_invalid_config() {
    let config = BoundaryConfig {
        markets: vec!["not a market".to_string()],
        ..BoundaryConfig::default()
    };
    assert!(Boundary::new(config).is_err());
}

#[test]
fn test_event_decodes_through_boundary() {
    let boundary = listed_boundary();
    let raw = json!({ "action": "FILL", "event": fill_event() }).to_string();

    let event = assert_ok!(boundary.decode_event(&raw));
    assert_eq!(event.action(), WebsocketAction::Fill);
    assert_eq!(boundary.rejected_count(), 0);
}

#[test]
fn test_float_amount_is_precision_loss() {
    let boundary = listed_boundary();
    let mut fill = fill_event();
    fill["filledQuoteTokenAmount"] = json!(350.25);
    let raw = json!({ "action": "FILL", "event": fill }).to_string();

    let err = boundary.decode_event(&raw).unwrap_err();
    assert!(matches!(err, ContractError::PrecisionLoss(_)), "{err}");
    assert_eq!(boundary.rejected_count(), 1);
}

#[rstest]
#[case::listed(r#"{"type":"SUBSCRIBE","topic":"BOOK","market":"WETH/DAI","requestId":1}"#, true)]
#[case::unsubscribe_any_topic(r#"{"type":"UNSUBSCRIBE","topic":"CANDLE","market":"ZRX/WETH"}"#, true)]
#[case::unknown_market(r#"{"type":"SUBSCRIBE","topic":"BOOK","market":"MKR/DAI","requestId":2}"#, false)]
#[case::topic_not_allowed(r#"{"type":"SUBSCRIBE","topic":"CANDLE","market":"WETH/DAI","requestId":3}"#, false)]
#[case::missing_market(r#"{"type":"SUBSCRIBE","topic":"BOOK","requestId":4}"#, false)]
#[case::error_is_not_a_request(r#"{"type":"ERROR","topic":"BOOK","market":"WETH/DAI"}"#, false)]
fn test_handle_request(#[case] raw: &str, #[case] accepted: bool) {
    let boundary = listed_boundary();
    let (request, response) = boundary.handle_request(raw);

    assert_eq!(request.is_some(), accepted);
    assert_eq!(response.is_error(), !accepted);
    let echoed: Option<u64> = serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| value.get("requestId").and_then(|id| id.as_u64()));
    assert_eq!(response.request_id, echoed);
}

#[test]
fn test_book_ranking_policy() {
    let raw = book(
        vec![
            radar_order("0xb1", "BID", "699", "OPEN"),
            radar_order("0xb2", "BID", "700", "OPEN"),
        ],
        vec![],
    )
    .to_string();

    let strict = listed_boundary();
    assert!(matches!(strict.decode_book(&raw), Err(ContractError::UnrankedBook)));

    let lenient = assert_ok!(Boundary::new(BoundaryConfig {
        require_ranked_books: false,
        ..BoundaryConfig::default()
    }));
    let book = assert_ok!(lenient.decode_book(&raw));
    assert_eq!(book.bids.len(), 2);
}

#[test]
fn test_candle_invariant_enforced() {
    let boundary = listed_boundary();
    let candle = |high: &str| {
        json!({
            "open": "700",
            "high": high,
            "low": "690",
            "close": "705",
            "startBlock": 5600000,
            "startBlockTimestamp": 1526000000,
            "endBlock": 5600010,
            "endBlockTimestamp": 1526000150,
            "baseTokenVolume": "12.5",
            "quoteTokenVolume": "8750"
        })
        .to_string()
    };

    let accepted = assert_ok!(boundary.decode_candle(&candle("710")));
    assert_eq!(accepted.end_block - accepted.start_block, 10);
    assert!(matches!(
        boundary.decode_candle(&candle("704")),
        Err(ContractError::InvalidCandle(_))
    ));
}

#[test]
fn test_generic_decode_classifies_shape_errors() {
    let boundary = listed_boundary();
    let err = boundary
        .decode::<radar_relay_types::RadarToken>(r#"{"ID":"seven"}"#)
        .unwrap_err();
    assert!(matches!(err, ContractError::MalformedPayload(_)));
    assert!(err.is_decode_error());
}
