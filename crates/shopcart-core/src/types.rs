//! # Domain Types
//!
//! Core domain types used throughout the cart widget.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   SizePrices    │   │  CartLineItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  s, m, l, xl    │   │  id (token)     │       │
//! │  │  prices ────────┼──►│  (Money each)   │   │  name (frozen)  │       │
//! │  └─────────────────┘   └─────────────────┘   │  size           │       │
//! │                                              │  price (frozen) │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   └─────────────────┘       │
//! │  │   SizeLabel     │   │   LineItemId    │                             │
//! │  │  S | M | L | XL │   │  opaque string  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Size Label
// =============================================================================

/// One of the four sizes every product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SizeLabel {
    /// First option of every size selector.
    #[default]
    S,
    M,
    L,
    XL,
}

impl SizeLabel {
    /// All sizes in selector order.
    pub const ALL: [SizeLabel; 4] = [SizeLabel::S, SizeLabel::M, SizeLabel::L, SizeLabel::XL];

    /// The label as shown to shoppers.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership check against the closed size set.
///
/// ## Example
/// ```rust
/// use shopcart_core::SizeLabel;
///
/// assert_eq!(" xl ".parse::<SizeLabel>().unwrap(), SizeLabel::XL);
/// assert!("XXL".parse::<SizeLabel>().is_err());
/// ```
impl FromStr for SizeLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SizeLabel::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownSize(trimmed.to_string()))
    }
}

// =============================================================================
// Size Prices
// =============================================================================

/// Price table with exactly one entry per size.
///
/// A struct rather than a map, so a product without an XL price cannot be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SizePrices {
    pub s: Money,
    pub m: Money,
    pub l: Money,
    pub xl: Money,
}

impl SizePrices {
    /// Builds a table from whole-peso amounts in S, M, L, XL order.
    pub const fn from_pesos(s: i64, m: i64, l: i64, xl: i64) -> Self {
        SizePrices {
            s: Money::from_pesos(s),
            m: Money::from_pesos(m),
            l: Money::from_pesos(l),
            xl: Money::from_pesos(xl),
        }
    }

    /// Price for a size.
    #[inline]
    pub const fn get(&self, size: SizeLabel) -> Money {
        match size {
            SizeLabel::S => self.s,
            SizeLabel::M => self.m,
            SizeLabel::L => self.l,
            SizeLabel::XL => self.xl,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name. Not unique: the catalog is addressed by position.
    pub name: String,

    /// Per-size prices.
    pub prices: SizePrices,
}

impl Product {
    pub fn new(name: impl Into<String>, prices: SizePrices) -> Self {
        Product {
            name: name.into(),
            prices,
        }
    }

    /// Returns the price for a size.
    #[inline]
    pub fn price(&self, size: SizeLabel) -> Money {
        self.prices.get(size)
    }
}

// =============================================================================
// Line Item Id
// =============================================================================

/// Opaque token identifying a line item while it is in the cart.
///
/// Uniqueness is only guaranteed among items currently present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemId(String);

impl LineItemId {
    pub fn new(token: impl Into<String>) -> Self {
        LineItemId(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineItemId {
    fn from(token: &str) -> Self {
        LineItemId::new(token)
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One product+size+price entry in the cart.
///
/// Uses the snapshot pattern: name and price are copied from the product
/// when the item is added and never re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: LineItemId,
    /// Product name at time of adding (frozen).
    pub name: String,
    pub size: SizeLabel,
    /// Price at time of adding (frozen).
    pub price: Money,
}

impl CartLineItem {
    /// Snapshots a product at the chosen size.
    pub fn from_product(id: LineItemId, product: &Product, size: SizeLabel) -> Self {
        CartLineItem {
            id,
            name: product.name.clone(),
            size,
            price: product.price(size),
        }
    }

    /// `"{name} ({size})"`, the shared prefix of cart rows and summary lines.
    pub fn description(&self) -> String {
        format!("{} ({})", self.name, self.size)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parse() {
        assert_eq!("S".parse::<SizeLabel>().unwrap(), SizeLabel::S);
        assert_eq!("m".parse::<SizeLabel>().unwrap(), SizeLabel::M);
        assert_eq!(" L".parse::<SizeLabel>().unwrap(), SizeLabel::L);
        assert_eq!("Xl".parse::<SizeLabel>().unwrap(), SizeLabel::XL);
    }

    #[test]
    fn test_size_parse_rejects_outside_set() {
        assert_eq!(
            "XXL".parse::<SizeLabel>(),
            Err(CoreError::UnknownSize("XXL".to_string()))
        );
        assert!("".parse::<SizeLabel>().is_err());
    }

    #[test]
    fn test_size_default_is_first_option() {
        assert_eq!(SizeLabel::default(), SizeLabel::ALL[0]);
    }

    #[test]
    fn test_size_prices_lookup() {
        let prices = SizePrices::from_pesos(900, 950, 1000, 1050);
        let looked_up: Vec<i64> = SizeLabel::ALL.iter().map(|s| prices.get(*s).pesos()).collect();
        assert_eq!(looked_up, vec![900, 950, 1000, 1050]);
    }

    #[test]
    fn test_line_item_snapshots_product() {
        let product = Product::new("Urban Joggers", SizePrices::from_pesos(1500, 1550, 1600, 1700));
        let item = CartLineItem::from_product(LineItemId::new("1"), &product, SizeLabel::L);

        assert_eq!(item.name, "Urban Joggers");
        assert_eq!(item.price, Money::from_pesos(1600));
        assert_eq!(item.description(), "Urban Joggers (L)");
    }

    #[test]
    fn test_size_serializes_as_label() {
        assert_eq!(serde_json::to_string(&SizeLabel::XL).unwrap(), "\"XL\"");
        let size: SizeLabel = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(size, SizeLabel::M);
    }
}
