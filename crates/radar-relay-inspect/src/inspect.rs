/*
[INPUT]:  JSON lines of one payload kind and a configured Boundary
[OUTPUT]: Per-line verdicts and an aggregate report
[POS]:    Inspection layer - runs captured payloads through the boundary
[UPDATE]: When adding new payload kinds
*/

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::ValueEnum;
use radar_relay_types::{Boundary, ContractError, RadarToken, RadarWebsocketResponse};
use tracing::info;

/// Which contract each input line is decoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    Event,
    Request,
    Book,
    Candle,
    Market,
    Token,
}

/// Outcome for one input line.
#[derive(Debug)]
pub struct Verdict {
    pub line: usize,
    pub summary: String,
    pub error: Option<ContractError>,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub verdicts: Vec<Verdict>,
}

impl Report {
    pub fn accepted(&self) -> usize {
        self.verdicts.iter().filter(|verdict| verdict.is_accepted()).count()
    }

    pub fn rejected(&self) -> usize {
        self.verdicts.len() - self.accepted()
    }
}

/// Decode one payload and describe what was accepted.
pub fn inspect_payload(boundary: &Boundary, kind: PayloadKind, raw: &str) -> Result<String, ContractError> {
    match kind {
        PayloadKind::Event => {
            let event = boundary.decode_event(raw)?;
            Ok(format!("{:?} event", event.action()))
        }
        PayloadKind::Request => {
            let request = boundary.decode_request(raw)?;
            let response = RadarWebsocketResponse::ack(&request);
            Ok(format!(
                "{:?} {} on {} -> {}",
                request.kind(),
                request.topic(),
                request.market(),
                serde_json::to_string(&response)?
            ))
        }
        PayloadKind::Book => {
            let book = boundary.decode_book(raw)?;
            let spread = book
                .spread()
                .map(|spread| spread.to_string())
                .unwrap_or_else(|| "-".to_string());
            Ok(format!(
                "book {} bids / {} asks, spread {spread}",
                book.bids.len(),
                book.asks.len()
            ))
        }
        PayloadKind::Candle => {
            let candle = boundary.decode_candle(raw)?;
            Ok(format!(
                "candle blocks {}..={} close {}",
                candle.start_block, candle.end_block, candle.ohlc.close
            ))
        }
        PayloadKind::Market => {
            let market = boundary.decode_market(raw)?;
            Ok(format!("market {}", market.id))
        }
        PayloadKind::Token => {
            let token: RadarToken = boundary.decode(raw)?;
            Ok(format!("token {} ({})", token.symbol, token.address))
        }
    }
}

/// Inspect every non-blank line of `reader`.
pub fn inspect_lines<R: BufRead>(boundary: &Boundary, kind: PayloadKind, reader: R) -> Result<Report> {
    let mut report = Report::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", index + 1))?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        let verdict = match inspect_payload(boundary, kind, raw) {
            Ok(summary) => Verdict {
                line: index + 1,
                summary,
                error: None,
            },
            Err(err) => Verdict {
                line: index + 1,
                summary: err.to_string(),
                error: Some(err),
            },
        };
        report.verdicts.push(verdict);
    }
    info!(
        kind = ?kind,
        accepted = report.accepted(),
        rejected = report.rejected(),
        "inspection complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_relay_types::BoundaryConfig;
    use std::io::Cursor;
    use tokio_test::assert_ok;

    fn boundary() -> Boundary {
        assert_ok!(Boundary::new(BoundaryConfig {
            markets: vec!["WETH/DAI".to_string()],
            ..BoundaryConfig::default()
        }))
    }

    #[test]
    fn test_request_lines_are_judged_individually() {
        let input = concat!(
            r#"{"type":"SUBSCRIBE","topic":"BOOK","market":"WETH/DAI","requestId":1}"#,
            "\n\n",
            r#"{"type":"SUBSCRIBE","topic":"BOOK","market":"ZRX/DAI","requestId":2}"#,
            "\n",
            "not json\n"
        );

        let report = assert_ok!(inspect_lines(&boundary(), PayloadKind::Request, Cursor::new(input)));

        assert_eq!(report.verdicts.len(), 3);
        assert_eq!(report.accepted(), 1);
        assert_eq!(report.rejected(), 2);
        assert_eq!(report.verdicts[1].line, 3);
        assert!(matches!(
            report.verdicts[1].error,
            Some(ContractError::UnknownMarket(_))
        ));
        assert!(matches!(
            report.verdicts[2].error,
            Some(ContractError::MalformedPayload(_))
        ));
        assert!(report.verdicts[0].summary.contains("\"type\":\"SUBSCRIBE\""));
    }

    #[test]
    fn test_market_and_token_lines() {
        let market = assert_ok!(inspect_payload(&boundary(), PayloadKind::Market, r#"{"id":"WETH/DAI"}"#));
        assert_eq!(market, "market WETH/DAI");

        let token = r#"{"ID":1,"address":"0xdai","symbol":"DAI","name":"Dai","decimals":18,"zeroex_official":true,"active":true,"createdDate":"2018-01-01","quote":true}"#;
        let summary = assert_ok!(inspect_payload(&boundary(), PayloadKind::Token, token));
        assert_eq!(summary, "token DAI (0xdai)");
    }

    #[test]
    fn test_remove_event_line() {
        let raw = r#"{"action":"REMOVE","event":{"baseTokenAddress":"0xweth","quoteTokenAddress":"0xdai","reason":"EXPIRED"}}"#;
        let summary = assert_ok!(inspect_payload(&boundary(), PayloadKind::Event, raw));
        assert_eq!(summary, "Remove event");
    }
}
