//! # Host Surface
//!
//! The boundary between the widget and whatever paints it.
//!
//! ```text
//! ┌──────────────────────────┐   UiEvent (JSON / parsed line)   ┌───────────────┐
//! │  Host UI                 │ ───────────────────────────────► │  Storefront   │
//! │  (browser page,          │                                  │  (this crate) │
//! │   terminal)              │ ◄─────────────────────────────── │               │
//! └──────────────────────────┘   HostSurface calls              └───────────────┘
//!                                 set_price_text / render_cart /
//!                                 show_overlay / remove_overlay
//! ```
//!
//! Remove clicks come back as `UiEvent::RemoveItem { id }`: the host
//! delegates every ✕ to one handler keyed by the row id, so nothing is
//! re-bound when the cart re-renders.

use std::io;

use serde::{Deserialize, Serialize};
use shopcart_core::{CartView, LineItemId, ModalAction, ModalView, OverlayClick, PriceTag, SizeLabel};

/// Write side of the host UI.
pub trait HostSurface {
    /// Replace the price shown on one product card.
    fn set_price_text(&mut self, tag: &PriceTag) -> io::Result<()>;

    /// Replace the cart list, total and checkout flag.
    fn render_cart(&mut self, view: &CartView) -> io::Result<()>;

    /// Insert the full-screen overlay with this content.
    fn show_overlay(&mut self, view: &ModalView) -> io::Result<()>;

    /// Take the overlay down.
    fn remove_overlay(&mut self) -> io::Result<()>;
}

/// Read side of the host UI.
///
/// ## JSON Shape
/// ```json
/// { "type": "size_changed", "product": 1, "size": "M" }
/// { "type": "add_to_cart", "product": 1 }
/// { "type": "remove_item", "id": "3" }
/// { "type": "checkout_clicked" }
/// { "type": "modal_button", "action": "place_order" }
/// { "type": "overlay_clicked", "target": "backdrop" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    SizeChanged { product: usize, size: SizeLabel },
    AddToCart { product: usize },
    RemoveItem { id: LineItemId },
    CheckoutClicked,
    ModalButton { action: ModalAction },
    OverlayClicked { target: OverlayClick },
}

impl UiEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::SizeChanged { .. } => "size_changed",
            UiEvent::AddToCart { .. } => "add_to_cart",
            UiEvent::RemoveItem { .. } => "remove_item",
            UiEvent::CheckoutClicked => "checkout_clicked",
            UiEvent::ModalButton { .. } => "modal_button",
            UiEvent::OverlayClicked { .. } => "overlay_clicked",
        }
    }
}
