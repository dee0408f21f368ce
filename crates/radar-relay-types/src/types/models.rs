/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - tokens, markets, signed orders, books and candles
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{RadarOrderState, RadarOrderType};
use crate::error::{ContractError, Result};

/// Declares a record together with its all-fields-optional twin.
///
/// Fields tagged `#[codec(required, optional)]` get the given serde `with`
/// module in each variant.
macro_rules! partial_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $partial:ident {
            $( $(#[codec($req:literal, $opt:literal)])? $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[serde(with = $req)])?
                pub $field: $ty,
            )*
        }

        #[doc = concat!("[`", stringify!($name), "`] with every field optional.")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $partial {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none" $(, with = $opt)?)]
                pub $field: Option<$ty>,
            )*
        }

        impl $partial {
            /// Returns the full record when every field is present.
            pub fn complete(self) -> Option<$name> {
                Some($name {
                    $( $field: self.$field?, )*
                })
            }

            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }

        impl From<$name> for $partial {
            fn from(value: $name) -> Self {
                Self {
                    $( $field: Some(value.$field), )*
                }
            }
        }
    };
}

/// Information specific to a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarToken {
    #[serde(rename = "ID")]
    pub id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u32,
    /// Listed in the 0x official token registry.
    pub zeroex_official: bool,
    pub active: bool,
    #[serde(rename = "createdDate")]
    pub created_date: String,
    /// Usable as the quote side of a market.
    pub quote: bool,
}

/// Most recent trade and best bid/ask for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarTicker {
    pub transaction_hash: String,
    #[serde(with = "crate::types::decimal")]
    pub price: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub size: Decimal,
    pub timestamp: u64,
    #[serde(with = "crate::types::decimal")]
    pub best_bid: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub best_ask: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub spread_percentage: Decimal,
}

/// Book depth and 24 hour volume statistics for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarStats {
    pub num_bids_within_range: u64,
    pub num_asks_within_range: u64,
    #[serde(with = "crate::types::decimal")]
    pub base_token_available: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub quote_token_available: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub volume_24_hour: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub percent_change_24_hour: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarHistory {
    #[serde(with = "crate::types::decimal::vec")]
    pub price_24_hour: Vec<Decimal>,
}

partial_struct! {
    /// General market information.
    pub struct RadarMarketBase => PartialRadarMarketBase {
        display_name: String,
        base_token_address: String,
        quote_token_address: String,
        base_token_decimals: u32,
        quote_token_decimals: u32,
        quote_increment: u32,
        #[codec("crate::types::decimal", "crate::types::decimal::option")]
        min_order_size: Decimal,
        #[codec("crate::types::decimal", "crate::types::decimal::option")]
        max_order_size: Decimal,
        score: f64,
    }
}

/// Market information for a base/quote pair. Only `id` is guaranteed; the
/// rest depends on which views were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarMarket {
    pub id: String,
    #[serde(flatten)]
    pub base: PartialRadarMarketBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<RadarTicker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<RadarStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<RadarHistory>,
}

impl RadarMarket {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base: PartialRadarMarketBase::default(),
            ticker: None,
            stats: None,
            history: None,
        }
    }

    pub fn market_id(&self) -> Result<MarketId> {
        self.id.parse()
    }
}

/// `BASE/QUOTE` market identifier, e.g. `WETH/DAI`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketId {
    pub base: String,
    pub quote: String,
}

impl MarketId {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }
}

impl FromStr for MarketId {
    type Err = ContractError;

    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || ContractError::InvalidMarketId(raw.to_string());
        let (base, quote) = raw.split_once('/').ok_or_else(invalid)?;
        let well_formed = |part: &str| {
            !part.is_empty() && !part.contains('/') && !part.chars().any(char::is_whitespace)
        };
        if !well_formed(base) || !well_formed(quote) {
            return Err(invalid());
        }
        Ok(MarketId::new(base, quote))
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// Elliptic-curve signature attached by the order maker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcSignature {
    pub v: u8,
    pub r: String,
    pub s: String,
}

/// A maker-signed 0x order. Produced and verified outside this crate and
/// carried through unchanged; fees, amounts and expiry are uint256 base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    pub maker: String,
    pub taker: String,
    #[serde(with = "crate::types::uint")]
    pub maker_fee: U256,
    #[serde(with = "crate::types::uint")]
    pub taker_fee: U256,
    #[serde(with = "crate::types::uint")]
    pub maker_token_amount: U256,
    #[serde(with = "crate::types::uint")]
    pub taker_token_amount: U256,
    pub maker_token_address: String,
    pub taker_token_address: String,
    #[serde(with = "crate::types::uint")]
    pub salt: U256,
    pub exchange_contract_address: String,
    pub fee_recipient: String,
    #[serde(with = "crate::types::uint")]
    pub expiration_unix_timestamp_sec: U256,
    pub ec_signature: EcSignature,
}

/// Signed order together with its relay-side state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSignedOrder {
    pub order_hash: String,
    #[serde(rename = "type")]
    pub order_type: RadarOrderType,
    pub state: RadarOrderState,
    pub base_token_address: String,
    pub quote_token_address: String,
    #[serde(with = "crate::types::decimal")]
    pub remaining_base_token_amount: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub remaining_quote_token_amount: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub price: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub created_date: Decimal,
    pub signed_order: SignedOrder,
}

/// Order book for one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarBook {
    pub base_token_address: String,
    pub quote_token_address: String,
    pub bids: Vec<RadarSignedOrder>,
    pub asks: Vec<RadarSignedOrder>,
}

impl RadarBook {
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().map(|order| order.price).max()
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().map(|order| order.price).min()
    }

    /// `best_ask - best_bid`, when both sides have orders.
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Best price first on both sides: bids descending, asks ascending.
    pub fn is_ranked(&self) -> bool {
        self.bids.windows(2).all(|pair| pair[0].price >= pair[1].price)
            && self.asks.windows(2).all(|pair| pair[0].price <= pair[1].price)
    }

    /// Every order sits on its own side and belongs to the book's pair.
    pub fn validate(&self) -> Result<()> {
        let sides = [
            (RadarOrderType::Bid, &self.bids),
            (RadarOrderType::Ask, &self.asks),
        ];
        for (side, orders) in sides {
            for order in orders.iter() {
                if order.order_type != side {
                    return Err(ContractError::SideMismatch {
                        order_hash: order.order_hash.clone(),
                        expected: side,
                    });
                }
                if order.base_token_address != self.base_token_address
                    || order.quote_token_address != self.quote_token_address
                {
                    return Err(ContractError::PairMismatch {
                        order_hash: order.order_hash.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Open-high-low-close prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ohlc {
    #[serde(with = "crate::types::decimal")]
    pub open: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub high: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub low: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub close: Decimal,
}

impl Ohlc {
    pub fn validate(&self) -> Result<()> {
        if self.low > self.high {
            return Err(ContractError::InvalidCandle(format!(
                "low {} above high {}",
                self.low, self.high
            )));
        }
        for (label, price) in [("open", self.open), ("close", self.close)] {
            if price < self.low || price > self.high {
                return Err(ContractError::InvalidCandle(format!(
                    "{label} {price} outside [{}, {}]",
                    self.low, self.high
                )));
            }
        }
        Ok(())
    }
}

/// OHLC summary over a block range with per-side volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarCandle {
    #[serde(flatten)]
    pub ohlc: Ohlc,
    pub start_block: u64,
    pub start_block_timestamp: u64,
    pub end_block: u64,
    pub end_block_timestamp: u64,
    #[serde(with = "crate::types::decimal")]
    pub base_token_volume: Decimal,
    #[serde(with = "crate::types::decimal")]
    pub quote_token_volume: Decimal,
}

impl RadarCandle {
    pub fn validate(&self) -> Result<()> {
        self.ohlc.validate()?;
        if self.start_block > self.end_block {
            return Err(ContractError::InvalidCandle(format!(
                "start block {} after end block {}",
                self.start_block, self.end_block
            )));
        }
        if self.start_block_timestamp > self.end_block_timestamp {
            return Err(ContractError::InvalidCandle(format!(
                "start timestamp {} after end timestamp {}",
                self.start_block_timestamp, self.end_block_timestamp
            )));
        }
        Ok(())
    }
}
