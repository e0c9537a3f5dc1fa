//! # Widget Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shopcart_core::{CartStore, CurrencyFormat, SequentialIds, UuidIds};
use tracing::warn;

/// How line item ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `1`, `2`, `3`, ... (easy to type in the terminal host)
    #[default]
    Sequential,

    /// Random UUID v4
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(format!("unknown id strategy '{}'", other)),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Shown as the storefront heading
    pub store_name: String,

    /// The one currency convention in use
    pub currency: CurrencyFormat,

    /// Line item id source
    pub id_strategy: IdStrategy,
}

impl Default for WidgetConfig {
    /// Development defaults: peso formatting, sequential ids.
    fn default() -> Self {
        WidgetConfig {
            store_name: "Threadline Apparel".to_string(),
            currency: CurrencyFormat::philippine_peso(),
            id_strategy: IdStrategy::Sequential,
        }
    }
}

impl WidgetConfig {
    /// Defaults overridden from the environment.
    ///
    /// ## Environment Variables
    /// - `SHOP_STORE_NAME`: Override store name
    /// - `SHOP_CURRENCY_SYMBOL`: Override the currency glyph (e.g. "PHP ")
    /// - `SHOP_ID_STRATEGY`: `sequential` or `uuid`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = WidgetConfig::default();

        if let Some(store_name) = lookup("SHOP_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("SHOP_CURRENCY_SYMBOL") {
            if symbol.is_empty() {
                warn!("SHOP_CURRENCY_SYMBOL is empty, keeping {}", config.currency.symbol);
            } else {
                config.currency = config.currency.with_symbol(symbol);
            }
        }

        if let Some(raw) = lookup("SHOP_ID_STRATEGY") {
            match raw.parse() {
                Ok(strategy) => config.id_strategy = strategy,
                Err(e) => warn!(value = %raw, "Ignoring SHOP_ID_STRATEGY: {}", e),
            }
        }

        config
    }

    /// A fresh, empty cart using the configured id strategy.
    pub fn new_cart(&self) -> CartStore {
        match self.id_strategy {
            IdStrategy::Sequential => CartStore::with_ids(Box::new(SequentialIds::new())),
            IdStrategy::Uuid => CartStore::with_ids(Box::new(UuidIds)),
        }
    }
}
