//! # Product Commands
//!
//! Size selector changes on a product card.

use shopcart_core::SizeLabel;
use tracing::debug;

use crate::error::WidgetResult;
use crate::surface::HostSurface;
use crate::widget::Storefront;

impl<S: HostSurface> Storefront<S> {
    /// Records the new size and rewrites that card's price.
    ///
    /// Never touches the cart: items already added keep their price.
    pub fn change_size(&mut self, product: usize, size: SizeLabel) -> WidgetResult<()> {
        let tag = self
            .prices
            .select(&self.catalog, product, size, &self.config.currency)?;
        debug!(product, size = %size, price = %tag.text, "change_size command");

        self.surface.set_price_text(&tag)?;
        Ok(())
    }
}
