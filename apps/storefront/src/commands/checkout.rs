//! # Checkout Commands
//!
//! The checkout button and everything that happens inside the overlay.
//!
//! ## User Workflow
//! ```text
//! Click "Checkout"
//!      │
//!      ├── cart empty ──► overlay: "Cart is Empty"            [Close]
//!      │
//!      └── cart has items ──► overlay: "Order Summary"        [Close] [Place Order]
//!                                   │
//!                          click "Place Order"
//!                                   │
//!                                   ▼
//!                  overlay removed, cart cleared + re-rendered
//!                                   │
//!                                   ▼
//!                  overlay: "Thank you for your order!"       [Close]
//!
//! Click on the dimmed backdrop at any point ──► overlay removed
//! ```

use chrono::Utc;
use shopcart_core::{ModalAction, ModalOutcome, OverlayClick};
use tracing::{debug, info};

use crate::error::WidgetResult;
use crate::surface::HostSurface;
use crate::widget::Storefront;

impl<S: HostSurface> Storefront<S> {
    /// Opens the empty-cart notice or the order summary.
    pub fn checkout(&mut self) -> WidgetResult<()> {
        let kind = self.modal.open_checkout(&self.cart)?;
        debug!(modal = kind.as_str(), items = self.cart.len(), "checkout command");

        self.show_modal()
    }

    /// Close / Place Order buttons.
    pub fn modal_button(&mut self, action: ModalAction) -> WidgetResult<()> {
        let outcome = self.modal.dispatch(action, &mut self.cart, Utc::now())?;

        match outcome {
            ModalOutcome::Closed => {
                debug!("modal closed");
                self.surface.remove_overlay()?;
                Ok(())
            }
            ModalOutcome::OrderPlaced(order) => {
                info!(
                    items = order.items.len(),
                    total = %self.config.currency.format_money(order.total),
                    placed_at = %order.placed_at,
                    "Order placed"
                );
                self.surface.remove_overlay()?;
                self.render_cart()?;
                self.show_modal()
            }
        }
    }

    /// A click on the overlay; only the backdrop dismisses it.
    pub fn overlay_click(&mut self, target: OverlayClick) -> WidgetResult<()> {
        if self.modal.click_overlay(target) {
            debug!("modal dismissed from backdrop");
            self.surface.remove_overlay()?;
        }
        Ok(())
    }

    fn show_modal(&mut self) -> WidgetResult<()> {
        if let Some(view) = self.modal.view(&self.config.currency) {
            self.surface.show_overlay(&view)?;
        }
        Ok(())
    }
}
