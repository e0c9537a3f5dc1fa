//! # Cart Renderer
//!
//! Projects the cart into a structured view the host paints verbatim.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Classic White Tee (S) - ₱900.00        [✕]  │  ◄── CartRow::Item { id: "1", .. }
//! │  Urban Joggers (L) - ₱1,600.00          [✕]  │  ◄── CartRow::Item { id: "2", .. }
//! ├──────────────────────────────────────────────┤
//! │  Total                          ₱2,500.00    │  ◄── total_text
//! │  [ Checkout ]                                │  ◄── checkout_enabled
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Every render is a full replacement: the same cart gives an equal
//! `CartView`, and the host throws away whatever it showed before. The ✕
//! affordance carries the item id; the host reports clicks back as a
//! remove event for that id instead of binding a handler per row.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartStore;
use crate::format::CurrencyFormat;
use crate::types::{CartLineItem, LineItemId};

/// Text of the single row shown for an empty cart.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty.";

/// One row of the cart list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartRow {
    /// Shown alone when the cart has no items.
    Placeholder { text: String },

    /// A line item with its remove affordance.
    #[serde(rename_all = "camelCase")]
    Item {
        /// Key of the remove affordance.
        id: LineItemId,
        /// `"{name} ({size}) - {price}"`
        label: String,
        price_text: String,
    },
}

/// Everything the cart area of the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total_text: String,
    pub checkout_enabled: bool,
}

impl CartView {
    /// Renders the cart.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{CartStore, CartView, CurrencyFormat};
    ///
    /// let view = CartView::render(&CartStore::new(), &CurrencyFormat::philippine_peso());
    /// assert!(view.is_empty_placeholder());
    /// assert_eq!(view.total_text, "₱0.00");
    /// assert!(!view.checkout_enabled);
    /// ```
    pub fn render(cart: &CartStore, format: &CurrencyFormat) -> Self {
        if cart.is_empty() {
            return CartView {
                rows: vec![CartRow::Placeholder {
                    text: EMPTY_CART_TEXT.to_string(),
                }],
                total_text: format.format_money(cart.total()),
                checkout_enabled: false,
            };
        }

        CartView {
            rows: cart.items().iter().map(|item| item_row(item, format)).collect(),
            total_text: format.format_money(cart.total()),
            checkout_enabled: true,
        }
    }

    /// True when the only row is the empty-cart placeholder.
    pub fn is_empty_placeholder(&self) -> bool {
        matches!(self.rows.as_slice(), [CartRow::Placeholder { .. }])
    }

    /// Ids of the remove affordances, in display order.
    pub fn item_ids(&self) -> Vec<&LineItemId> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                CartRow::Item { id, .. } => Some(id),
                CartRow::Placeholder { .. } => None,
            })
            .collect()
    }
}

/// `"{name} ({size}) - {price}"`, shared with the order summary.
pub fn line_label(item: &CartLineItem, format: &CurrencyFormat) -> String {
    format!("{} - {}", item.description(), format.format_money(item.price))
}

fn item_row(item: &CartLineItem, format: &CurrencyFormat) -> CartRow {
    CartRow::Item {
        id: item.id.clone(),
        label: line_label(item, format),
        price_text: format.format_money(item.price),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
