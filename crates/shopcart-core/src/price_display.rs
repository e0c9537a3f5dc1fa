//! # Price Display Binder
//!
//! Keeps each product card's price in step with its size selector.
//!
//! ```text
//!  ┌─────────────────────────┐
//!  │ Eco Denim Jacket        │
//!  │ Size: [ M ▾ ] ──────────┼──► select(1, M) ──► PriceTag { text: "₱2,300.00" }
//!  │ ₱2,300.00   ◄───────────┼──────────────────────────────┘
//!  │ [ Add to Cart ]         │
//!  └─────────────────────────┘
//! ```
//!
//! The binder also remembers the selection, which is what add-to-cart reads
//! as the "current selected size". It never touches the cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::format::CurrencyFormat;
use crate::types::SizeLabel;

/// Price text for one product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceTag {
    /// Catalog position of the card.
    pub product: usize,
    pub size: SizeLabel,
    pub text: String,
}

/// Selected size per catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBinder {
    selections: Vec<SizeLabel>,
}

impl PriceBinder {
    /// Every selector starts on its first option.
    pub fn new(catalog: &Catalog) -> Self {
        PriceBinder {
            selections: vec![SizeLabel::default(); catalog.len()],
        }
    }

    /// One tag per product for the current selections (all `S` on page load).
    pub fn current_tags(&self, catalog: &Catalog, format: &CurrencyFormat) -> Vec<PriceTag> {
        catalog
            .iter()
            .zip(&self.selections)
            .map(|((index, product), size)| PriceTag {
                product: index,
                size: *size,
                text: format.format_money(product.price(*size)),
            })
            .collect()
    }

    /// Records a size change and returns the new price text.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Catalog, CurrencyFormat, PriceBinder, SizeLabel};
    ///
    /// let catalog = Catalog::standard();
    /// let mut binder = PriceBinder::new(&catalog);
    ///
    /// let tag = binder
    ///     .select(&catalog, 1, SizeLabel::M, &CurrencyFormat::philippine_peso())
    ///     .unwrap();
    /// assert_eq!(tag.text, "₱2,300.00");
    /// assert_eq!(binder.selected(1).unwrap(), SizeLabel::M);
    /// ```
    pub fn select(
        &mut self,
        catalog: &Catalog,
        index: usize,
        size: SizeLabel,
        format: &CurrencyFormat,
    ) -> CoreResult<PriceTag> {
        let price = catalog.price_of(index, size)?;
        let slot = self
            .selections
            .get_mut(index)
            .ok_or(CoreError::ProductNotFound { index })?;
        *slot = size;

        Ok(PriceTag {
            product: index,
            size,
            text: format.format_money(price),
        })
    }

    /// Size currently showing on a card.
    pub fn selected(&self, index: usize) -> CoreResult<SizeLabel> {
        self.selections
            .get(index)
            .copied()
            .ok_or(CoreError::ProductNotFound { index })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
