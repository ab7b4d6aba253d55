//! TOML-based configuration for the autocctp middleware.

use std::path::Path;

use serde::Deserialize;

use autocctp_cctp::{GenesisState, RoutingConfig};
use autocctp_core::AddressCodec;
use autocctp_core::constants::{DEFAULT_BECH32_PREFIX, MAX_MEMO_LENGTH};

use crate::error::MiddlewareError;

/// Top-level middleware configuration loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct MiddlewareConfig {
    #[serde(default)]
    pub chain: ChainSection,
    #[serde(default)]
    pub limits: LimitsSection,
    #[serde(default)]
    pub genesis: GenesisSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl MiddlewareConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, MiddlewareError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MiddlewareError::Config(format!("failed to read config file: {e}")))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, MiddlewareError> {
        let config: Self = toml::from_str(s)
            .map_err(|e| MiddlewareError::Config(format!("failed to parse config: {e}")))?;
        if config.limits.max_memo_length == 0 {
            return Err(MiddlewareError::Config(
                "limits.max_memo_length must be positive".into(),
            ));
        }
        Ok(config)
    }

    /// Codec for the configured account prefix.
    pub fn address_codec(&self) -> Result<AddressCodec, MiddlewareError> {
        AddressCodec::new(&self.chain.bech32_prefix).map_err(|e| {
            MiddlewareError::Config(format!(
                "invalid chain.bech32_prefix {:?}: {e}",
                self.chain.bech32_prefix
            ))
        })
    }

    /// Initial routing params.
    pub fn genesis_state(&self) -> GenesisState {
        GenesisState {
            params: RoutingConfig {
                cctp_active: self.genesis.cctp_active,
            },
        }
    }
}

/// The `[chain]` section.
#[derive(Debug, Deserialize)]
pub struct ChainSection {
    #[serde(default = "default_bech32_prefix")]
    pub bech32_prefix: String,
}

impl Default for ChainSection {
    fn default() -> Self {
        Self {
            bech32_prefix: default_bech32_prefix(),
        }
    }
}

fn default_bech32_prefix() -> String {
    DEFAULT_BECH32_PREFIX.to_string()
}

/// The `[limits]` section.
#[derive(Debug, Deserialize)]
pub struct LimitsSection {
    /// Longest memo or receiver accepted, in bytes.
    #[serde(default = "default_max_memo_length")]
    pub max_memo_length: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_memo_length: default_max_memo_length(),
        }
    }
}

fn default_max_memo_length() -> usize {
    MAX_MEMO_LENGTH
}

/// The `[genesis]` section.
#[derive(Debug, Default, Deserialize)]
pub struct GenesisSection {
    #[serde(default)]
    pub cctp_active: bool,
}

/// The `[logging]` section.
#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
