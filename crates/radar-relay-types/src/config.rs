/*
[INPUT]:  YAML/TOML configuration file and RADAR_* environment overrides
[OUTPUT]: Parsed boundary validation configuration
[POS]:    Configuration layer - what the boundary accepts
[UPDATE]: When adding new configuration options
*/

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ContractError, Result};
use crate::types::{MarketId, WebsocketRequestTopic};

/// Settings for validating payloads at a service boundary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BoundaryConfig {
    /// Listed market ids (`BASE/QUOTE`). Empty accepts any well-formed id.
    #[serde(default)]
    pub markets: Vec<String>,
    /// Topics clients may subscribe to
    #[serde(default = "default_topics")]
    pub topics: Vec<WebsocketRequestTopic>,
    /// Reject books whose sides are not best price first
    #[serde(default = "default_require_ranked_books")]
    pub require_ranked_books: bool,
    /// Preview length for rejected payloads in logs
    #[serde(default = "default_max_log_bytes")]
    pub max_log_bytes: usize,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            markets: Vec::new(),
            topics: default_topics(),
            require_ranked_books: default_require_ranked_books(),
            max_log_bytes: default_max_log_bytes(),
        }
    }
}

fn default_topics() -> Vec<WebsocketRequestTopic> {
    WebsocketRequestTopic::ALL.to_vec()
}

fn default_require_ranked_books() -> bool {
    true
}

fn default_max_log_bytes() -> usize {
    1024
}

impl BoundaryConfig {
    /// Load configuration in layers: defaults, then the file at `path` (format
    /// picked from its extension), then `RADAR_*` environment variables
    /// (`RADAR_MARKETS=WETH/DAI,ZRX/WETH`, `RADAR_REQUIRE_RANKED_BOOKS=false`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("RADAR")
                .prefix_separator("_")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("markets")
                .with_list_parse_key("topics"),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for market in &self.markets {
            market.parse::<MarketId>()?;
        }
        if self.topics.is_empty() {
            return Err(ContractError::Config(
                "at least one subscription topic must be allowed".to_string(),
            ));
        }
        if self.max_log_bytes == 0 {
            return Err(ContractError::Config(
                "max_log_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// True when `market` is listed, or when no list is configured.
    pub fn is_listed(&self, market: &str) -> bool {
        self.markets.is_empty() || self.markets.iter().any(|listed| listed == market)
    }

    pub fn allows_topic(&self, topic: WebsocketRequestTopic) -> bool {
        self.topics.contains(&topic)
    }
}
