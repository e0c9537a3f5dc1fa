//! # Checkout Modal
//!
//! The overlay that walks the shopper from "Checkout" to "Thank you".
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                 checkout (cart empty)                                   │
//! │        ┌───────────────────────────────────► Open(EmptyNotice)          │
//! │        │                                            │ close / backdrop  │
//! │        │ ◄──────────────────────────────────────────┘                   │
//! │        │                                                                │
//! │     Closed ─── checkout (cart has items) ──► Open(OrderSummary)         │
//! │        ▲  ▲                                     │          │            │
//! │        │  └──────── close / backdrop ───────────┘          │            │
//! │        │                                          place order           │
//! │        │                                     (cart cleared)             │
//! │        │                                                   ▼            │
//! │        └──────────── close / backdrop ─────── Open(Confirmation)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every open path starts from `Closed`. A second checkout while the overlay
//! is up is refused with [`CoreError::ModalAlreadyOpen`] rather than stacking
//! a second overlay.
//!
//! The order summary is a snapshot taken when the modal opens. Nothing can
//! mutate the cart while it is up (events are dispatched one at a time), and
//! the summary would not follow if something did.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartStore;
use crate::error::{CoreError, CoreResult};
use crate::format::CurrencyFormat;
use crate::money::Money;
use crate::render::line_label;
use crate::types::CartLineItem;

// =============================================================================
// Host-facing inputs
// =============================================================================

/// Buttons inside the modal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ModalAction {
    Close,
    PlaceOrder,
}

impl ModalAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModalAction::Close => "close",
            ModalAction::PlaceOrder => "place_order",
        }
    }
}

/// Where a click on the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OverlayClick {
    /// The dimmed area around the modal body.
    Backdrop,
    /// Anywhere inside the modal body.
    Content,
}

// =============================================================================
// States
// =============================================================================

/// Items and total frozen when the summary opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub items: Vec<CartLineItem>,
    pub total: Money,
}

impl OrderSummary {
    pub fn snapshot(cart: &CartStore) -> Self {
        OrderSummary {
            items: cart.items().to_vec(),
            total: cart.total(),
        }
    }
}

/// What the shopper ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub items: Vec<CartLineItem>,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

/// Which template the open modal shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    EmptyNotice,
    OrderSummary(OrderSummary),
    Confirmation(PlacedOrder),
}

impl ModalContent {
    pub const fn kind(&self) -> ModalKind {
        match self {
            ModalContent::EmptyNotice => ModalKind::EmptyNotice,
            ModalContent::OrderSummary(_) => ModalKind::OrderSummary,
            ModalContent::Confirmation(_) => ModalKind::Confirmation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalContent),
}

impl ModalState {
    /// Name used in error messages and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            ModalState::Closed => "closed",
            ModalState::Open(content) => content.kind().as_str(),
        }
    }
}

/// Result of a modal button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    /// The overlay went away.
    Closed,
    /// The order went through and the confirmation is showing.
    OrderPlaced(PlacedOrder),
}

// =============================================================================
// Machine
// =============================================================================

/// The single checkout overlay.
#[derive(Debug, Clone, Default)]
pub struct CheckoutModal {
    state: ModalState,
}

impl CheckoutModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn content(&self) -> Option<&ModalContent> {
        match &self.state {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }

    /// Checkout button: opens the empty notice or the order summary.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{CartStore, CheckoutModal, ModalKind};
    ///
    /// let mut modal = CheckoutModal::new();
    /// let kind = modal.open_checkout(&CartStore::new()).unwrap();
    /// assert_eq!(kind, ModalKind::EmptyNotice);
    ///
    /// // A second checkout while open is refused
    /// assert!(modal.open_checkout(&CartStore::new()).is_err());
    /// ```
    pub fn open_checkout(&mut self, cart: &CartStore) -> CoreResult<ModalKind> {
        if self.is_open() {
            return Err(CoreError::ModalAlreadyOpen);
        }

        let content = if cart.is_empty() {
            ModalContent::EmptyNotice
        } else {
            ModalContent::OrderSummary(OrderSummary::snapshot(cart))
        };
        let kind = content.kind();
        self.state = ModalState::Open(content);
        Ok(kind)
    }

    /// Closes whatever is showing. Returns false if nothing was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = ModalState::Closed;
        was_open
    }

    /// Place Order button: summary → closed → confirmation, clearing the cart.
    ///
    /// Only valid while the order summary is showing; anywhere else the state
    /// and the cart are left untouched.
    pub fn place_order(&mut self, cart: &mut CartStore, placed_at: DateTime<Utc>) -> CoreResult<PlacedOrder> {
        let summary = match &self.state {
            ModalState::Open(ModalContent::OrderSummary(summary)) => summary.clone(),
            other => {
                return Err(CoreError::InvalidModalAction {
                    action: ModalAction::PlaceOrder.as_str(),
                    state: other.name(),
                })
            }
        };

        self.close();
        cart.clear();

        let order = PlacedOrder {
            items: summary.items,
            total: summary.total,
            placed_at,
        };
        self.state = ModalState::Open(ModalContent::Confirmation(order.clone()));
        Ok(order)
    }

    /// Click on the overlay. Only the backdrop dismisses.
    pub fn click_overlay(&mut self, target: OverlayClick) -> bool {
        match target {
            OverlayClick::Backdrop => self.close(),
            OverlayClick::Content => false,
        }
    }

    /// Routes a modal button.
    pub fn dispatch(
        &mut self,
        action: ModalAction,
        cart: &mut CartStore,
        now: DateTime<Utc>,
    ) -> CoreResult<ModalOutcome> {
        match action {
            ModalAction::Close => {
                if !self.close() {
                    return Err(CoreError::InvalidModalAction {
                        action: action.as_str(),
                        state: ModalState::Closed.name(),
                    });
                }
                Ok(ModalOutcome::Closed)
            }
            ModalAction::PlaceOrder => self.place_order(cart, now).map(ModalOutcome::OrderPlaced),
        }
    }

    /// The template for the current state, if open.
    pub fn view(&self, format: &CurrencyFormat) -> Option<ModalView> {
        self.content().map(|content| ModalView::for_content(content, format))
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Template discriminator for hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    EmptyNotice,
    OrderSummary,
    Confirmation,
}

impl ModalKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModalKind::EmptyNotice => "empty_notice",
            ModalKind::OrderSummary => "order_summary",
            ModalKind::Confirmation => "confirmation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModalButton {
    pub action: ModalAction,
    pub label: String,
}

impl ModalButton {
    fn close() -> Self {
        ModalButton {
            action: ModalAction::Close,
            label: "Close".to_string(),
        }
    }

    fn place_order() -> Self {
        ModalButton {
            action: ModalAction::PlaceOrder,
            label: "Place Order".to_string(),
        }
    }
}

/// Structured content of the overlay body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub kind: ModalKind,
    pub title: String,
    /// Paragraphs (notices) or item lines (summary).
    pub lines: Vec<String>,
    /// `"Total: ₱…"`, summary only.
    pub total_text: Option<String>,
    pub buttons: Vec<ModalButton>,
}

impl ModalView {
    pub fn for_content(content: &ModalContent, format: &CurrencyFormat) -> Self {
        match content {
            ModalContent::EmptyNotice => ModalView {
                kind: ModalKind::EmptyNotice,
                title: "Cart is Empty".to_string(),
                lines: vec!["Please add items to your cart before checking out.".to_string()],
                total_text: None,
                buttons: vec![ModalButton::close()],
            },
            ModalContent::OrderSummary(summary) => ModalView {
                kind: ModalKind::OrderSummary,
                title: "Order Summary".to_string(),
                lines: summary.items.iter().map(|item| line_label(item, format)).collect(),
                total_text: Some(format!("Total: {}", format.format_money(summary.total))),
                buttons: vec![ModalButton::close(), ModalButton::place_order()],
            },
            ModalContent::Confirmation(_) => ModalView {
                kind: ModalKind::Confirmation,
                title: "Thank you for your order!".to_string(),
                lines: vec![
                    "Your order has been placed successfully. We appreciate your purchase!".to_string(),
                ],
                total_text: None,
                buttons: vec![ModalButton::close()],
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::SizeLabel;

    fn php() -> CurrencyFormat {
        CurrencyFormat::philippine_peso()
    }

    fn tee_and_joggers() -> CartStore {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();
        cart.add(catalog.get(0).unwrap(), SizeLabel::S);
        cart.add(catalog.get(2).unwrap(), SizeLabel::L);
        cart
    }

    #[test]
    fn test_empty_cart_opens_notice() {
        let mut modal = CheckoutModal::new();
        let kind = modal.open_checkout(&CartStore::new()).unwrap();
        assert_eq!(kind, ModalKind::EmptyNotice);
        assert_eq!(modal.content(), Some(&ModalContent::EmptyNotice));

        let view = modal.view(&php()).unwrap();
        assert_eq!(view.title, "Cart is Empty");
        assert_eq!(view.buttons, vec![ModalButton::close()]);
    }

    #[test]
    fn test_non_empty_cart_opens_summary_snapshot() {
        let cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();
        modal.open_checkout(&cart).unwrap();

        let view = modal.view(&php()).unwrap();
        assert_eq!(view.kind, ModalKind::OrderSummary);
        assert_eq!(
            view.lines,
            vec![
                "Classic White Tee (S) - ₱900.00".to_string(),
                "Urban Joggers (L) - ₱1,600.00".to_string(),
            ]
        );
        assert_eq!(view.total_text.as_deref(), Some("Total: ₱2,500.00"));
        assert_eq!(
            view.buttons.iter().map(|b| b.action).collect::<Vec<_>>(),
            vec![ModalAction::Close, ModalAction::PlaceOrder]
        );
    }

    #[test]
    fn test_summary_does_not_follow_later_cart_changes() {
        let mut cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();
        modal.open_checkout(&cart).unwrap();

        cart.clear();
        let view = modal.view(&php()).unwrap();
        assert_eq!(view.lines.len(), 2);
    }

    #[test]
    fn test_open_while_open_is_refused() {
        let cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();
        modal.open_checkout(&cart).unwrap();

        assert_eq!(modal.open_checkout(&CartStore::new()), Err(CoreError::ModalAlreadyOpen));
        assert_eq!(modal.content().map(ModalContent::kind), Some(ModalKind::OrderSummary));
    }

    #[test]
    fn test_close_from_every_variant() {
        let mut cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();

        modal.open_checkout(&CartStore::new()).unwrap();
        assert!(modal.close());

        modal.open_checkout(&cart).unwrap();
        assert!(modal.close());
        assert_eq!(cart.len(), 2);

        modal.open_checkout(&cart).unwrap();
        modal.place_order(&mut cart, Utc::now()).unwrap();
        assert!(modal.close());

        assert_eq!(modal.state(), &ModalState::Closed);
        assert!(!modal.close());
        assert!(modal.view(&php()).is_none());
    }

    #[test]
    fn test_place_order_clears_cart_and_confirms() {
        let mut cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();
        modal.open_checkout(&cart).unwrap();

        let order = modal.place_order(&mut cart, Utc::now()).unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total, Money::from_pesos(2500));
        assert_eq!(modal.content().map(ModalContent::kind), Some(ModalKind::Confirmation));

        let view = modal.view(&php()).unwrap();
        assert_eq!(view.title, "Thank you for your order!");
        assert_eq!(view.buttons, vec![ModalButton::close()]);
    }

    #[test]
    fn test_place_order_outside_summary_is_refused() {
        let mut cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();

        let err = modal.place_order(&mut cart, Utc::now()).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidModalAction {
                action: "place_order",
                state: "closed"
            }
        );

        modal.open_checkout(&CartStore::new()).unwrap();
        assert!(modal.place_order(&mut cart, Utc::now()).is_err());
        assert_eq!(cart.len(), 2);
        assert_eq!(modal.content(), Some(&ModalContent::EmptyNotice));
    }

    #[test]
    fn test_backdrop_closes_content_does_not() {
        let cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();
        modal.open_checkout(&cart).unwrap();

        assert!(!modal.click_overlay(OverlayClick::Content));
        assert!(modal.is_open());

        assert!(modal.click_overlay(OverlayClick::Backdrop));
        assert!(!modal.is_open());
        assert!(!modal.click_overlay(OverlayClick::Backdrop));
    }

    #[test]
    fn test_dispatch_routes_buttons() {
        let mut cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();
        modal.open_checkout(&cart).unwrap();

        let outcome = modal.dispatch(ModalAction::PlaceOrder, &mut cart, Utc::now()).unwrap();
        assert!(matches!(outcome, ModalOutcome::OrderPlaced(ref order) if order.items.len() == 2));

        let outcome = modal.dispatch(ModalAction::Close, &mut cart, Utc::now()).unwrap();
        assert_eq!(outcome, ModalOutcome::Closed);

        assert!(modal.dispatch(ModalAction::Close, &mut cart, Utc::now()).is_err());
    }

    #[test]
    fn test_checkout_after_order_shows_empty_notice() {
        let mut cart = tee_and_joggers();
        let mut modal = CheckoutModal::new();
        modal.open_checkout(&cart).unwrap();
        modal.place_order(&mut cart, Utc::now()).unwrap();
        modal.close();

        assert_eq!(modal.open_checkout(&cart), Ok(ModalKind::EmptyNotice));
    }
}
