//! # Cart Commands
//!
//! Add and remove line items.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart  ┌──────────┐  checkout   ┌──────────────┐   │
//! │  │  Empty   │──────────────►│ In Cart  │────────────►│ Order Summary│   │
//! │  │  Cart    │◄──────────────│          │             │    Modal     │   │
//! │  └──────────┘  remove_item  └──────────┘             └──────┬───────┘   │
//! │       ▲        (last item)                                  │           │
//! │       │                                          place order│           │
//! │       └─────────────────────────────────────────────────────┘           │
//! │                         (checkout.rs, cart cleared)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopcart_core::LineItemId;
use tracing::{debug, warn};

use crate::error::WidgetResult;
use crate::surface::HostSurface;
use crate::widget::Storefront;

impl<S: HostSurface> Storefront<S> {
    /// Adds the product in its currently selected size, then re-renders.
    ///
    /// The price is frozen at this moment; later size changes on the card
    /// don't affect the line item.
    pub fn add_to_cart(&mut self, product: usize) -> WidgetResult<()> {
        let size = self.prices.selected(product)?;
        let item = self.cart.add(self.catalog.get(product)?, size);
        debug!(
            product,
            id = %item.id,
            name = %item.name,
            size = %item.size,
            price = item.price.centavos(),
            "add_to_cart command"
        );

        self.render_cart()
    }

    /// Removes a line item by its row id, then re-renders.
    ///
    /// An id that isn't in the cart (already removed, stale row) is ignored.
    pub fn remove_item(&mut self, id: &LineItemId) -> WidgetResult<()> {
        if !self.cart.remove(id) {
            warn!(id = %id, "remove_item: id not in cart, ignoring");
            return Ok(());
        }

        debug!(id = %id, remaining = self.cart.len(), "remove_item command");
        self.render_cart()
    }
}
