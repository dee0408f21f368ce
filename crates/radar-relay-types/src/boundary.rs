/*
[INPUT]:  Raw JSON payloads arriving at a REST or websocket boundary
[OUTPUT]: Decoded, invariant-checked contract values or classified errors
[POS]:    Validation layer - where the structural contracts are enforced
[UPDATE]: When adding new payload kinds or boundary policies
*/

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::BoundaryConfig;
use crate::error::{ContractError, Result};
use crate::types::{MarketId, RadarBook, RadarCandle, RadarMarket};
use crate::ws::{MarketScoped, RadarWebsocketRequest, RadarWebsocketResponse, WebsocketEvent};

const REJECT_PREVIEW_LIMIT: usize = 3;

/// Decodes payloads and applies the configured boundary policy.
#[derive(Debug)]
pub struct Boundary {
    config: BoundaryConfig,
    rejected: AtomicUsize,
}

impl Boundary {
    pub fn new(config: BoundaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rejected: AtomicUsize::new(0),
        })
    }

    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Number of payloads rejected so far.
    pub fn rejected_count(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Decode any contract type, classifying failures.
    pub fn decode<T: DeserializeOwned>(&self, raw: &str) -> Result<T> {
        serde_json::from_str(raw).map_err(|err| self.reject(ContractError::from(err), raw))
    }

    pub fn decode_event(&self, raw: &str) -> Result<WebsocketEvent> {
        let event: WebsocketEvent = self.decode(raw)?;
        debug!(
            action = ?event.action(),
            base_token = event.base_token_address(),
            quote_token = event.quote_token_address(),
            "ws event accepted"
        );
        Ok(event)
    }

    /// Decode a control frame and check it against the subscription policy.
    pub fn decode_request(&self, raw: &str) -> Result<RadarWebsocketRequest> {
        let request: RadarWebsocketRequest = self.decode(raw)?;
        self.authorize(&request).map_err(|err| self.reject(err, raw))?;
        debug!(
            kind = ?request.kind(),
            topic = %request.topic(),
            market = request.market(),
            request_id = ?request.request_id(),
            "ws request accepted"
        );
        Ok(request)
    }

    /// Market must be `BASE/QUOTE` and listed; subscribing also needs an
    /// allowed topic. Unsubscribing is always permitted for listed markets.
    pub fn authorize(&self, request: &RadarWebsocketRequest) -> Result<()> {
        let market = request.market();
        market.parse::<MarketId>()?;
        if !self.config.is_listed(market) {
            return Err(ContractError::UnknownMarket(market.to_string()));
        }
        if let RadarWebsocketRequest::Subscribe(subscribe) = request
            && !self.config.allows_topic(subscribe.topic)
        {
            return Err(ContractError::UnauthorizedSubscribe {
                topic: subscribe.topic,
                market: market.to_string(),
            });
        }
        Ok(())
    }

    /// Decode a control frame and build the gateway reply: an ack echoing the
    /// request, or `ERROR` with whatever request id could be recovered.
    pub fn handle_request(
        &self,
        raw: &str,
    ) -> (Option<RadarWebsocketRequest>, RadarWebsocketResponse) {
        match self.decode_request(raw) {
            Ok(request) => {
                let response = RadarWebsocketResponse::ack(&request);
                (Some(request), response)
            }
            Err(_) => (None, RadarWebsocketResponse::error(recover_request_id(raw))),
        }
    }

    /// Decode a book; orders must sit on their own side of the book's pair,
    /// and with `require_ranked_books` each side must be best price first.
    pub fn decode_book(&self, raw: &str) -> Result<RadarBook> {
        let book: RadarBook = self.decode(raw)?;
        book.validate().map_err(|err| self.reject(err, raw))?;
        if self.config.require_ranked_books && !book.is_ranked() {
            return Err(self.reject(ContractError::UnrankedBook, raw));
        }
        debug!(
            bids = book.bids.len(),
            asks = book.asks.len(),
            "book accepted"
        );
        Ok(book)
    }

    pub fn decode_candle(&self, raw: &str) -> Result<RadarCandle> {
        let candle: RadarCandle = self.decode(raw)?;
        candle.validate().map_err(|err| self.reject(err, raw))?;
        debug!(
            start_block = candle.start_block,
            end_block = candle.end_block,
            close = %candle.ohlc.close,
            "candle accepted"
        );
        Ok(candle)
    }

    pub fn decode_market(&self, raw: &str) -> Result<RadarMarket> {
        let market: RadarMarket = self.decode(raw)?;
        market.market_id().map_err(|err| self.reject(err, raw))?;
        if !self.config.is_listed(&market.id) {
            return Err(self.reject(ContractError::UnknownMarket(market.id.clone()), raw));
        }
        debug!(
            market = %market.id,
            has_ticker = market.ticker.is_some(),
            has_stats = market.stats.is_some(),
            "market accepted"
        );
        Ok(market)
    }

    fn reject(&self, err: ContractError, raw: &str) -> ContractError {
        let count = self.rejected.fetch_add(1, Ordering::Relaxed);
        warn!(error = %err, bytes = raw.len(), "payload rejected");
        if count < REJECT_PREVIEW_LIMIT {
            let preview = truncate_for_log(raw, self.config.max_log_bytes);
            debug!(
                sample_index = count + 1,
                sample_limit = REJECT_PREVIEW_LIMIT,
                message = %preview,
                "payload rejected"
            );
        }
        err
    }
}

fn recover_request_id(raw: &str) -> Option<u64> {
    serde_json::from_str::<Value>(raw)
        .ok()?
        .get("requestId")?
        .as_u64()
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + 3);
    out.push_str(&value[..end]);
    out.push_str("...");
    out
}
