//! # Storefront Controller
//!
//! Owns the widget's state and applies host events to it.
//!
//! ## Event Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UiEvent                      Handler (commands/)        Surface calls  │
//! │  ───────                      ───────────────────        ─────────────  │
//! │  SizeChanged { product, size } ► change_size ──────────► set_price_text │
//! │  AddToCart { product }        ► add_to_cart ───────────► render_cart    │
//! │  RemoveItem { id }            ► remove_item ───────────► render_cart    │
//! │  CheckoutClicked              ► checkout ──────────────► show_overlay   │
//! │  ModalButton { action }       ► modal_button ──────────► remove_overlay │
//! │                                                          (+ render_cart,│
//! │                                                           show_overlay) │
//! │  OverlayClicked { target }    ► overlay_click ─────────► remove_overlay │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every handler runs to completion on the caller's thread before the next
//! event is looked at.

use shopcart_core::{CartStore, CartView, Catalog, CheckoutModal, PriceBinder};
use tracing::debug;

use crate::error::WidgetResult;
use crate::state::WidgetConfig;
use crate::surface::{HostSurface, UiEvent};

/// The cart widget bound to one host surface.
#[derive(Debug)]
pub struct Storefront<S: HostSurface> {
    pub(crate) config: WidgetConfig,
    pub(crate) catalog: Catalog,
    pub(crate) cart: CartStore,
    pub(crate) modal: CheckoutModal,
    pub(crate) prices: PriceBinder,
    pub(crate) surface: S,
}

impl<S: HostSurface> Storefront<S> {
    /// A widget with an empty cart and a closed modal.
    ///
    /// Nothing is drawn until [`mount`](Self::mount).
    pub fn new(config: WidgetConfig, catalog: Catalog, surface: S) -> Self {
        Storefront {
            cart: config.new_cart(),
            modal: CheckoutModal::new(),
            prices: PriceBinder::new(&catalog),
            config,
            catalog,
            surface,
        }
    }

    /// Initial page load: every price slot plus the (empty) cart.
    pub fn mount(&mut self) -> WidgetResult<()> {
        debug!(products = self.catalog.len(), "Mounting storefront");
        self.show_prices()?;
        self.render_cart()
    }

    /// Re-sends every product's price for its selected size.
    pub fn show_prices(&mut self) -> WidgetResult<()> {
        for tag in self.prices.current_tags(&self.catalog, &self.config.currency) {
            self.surface.set_price_text(&tag)?;
        }
        Ok(())
    }

    /// Applies one host event.
    pub fn handle(&mut self, event: UiEvent) -> WidgetResult<()> {
        debug!(event = event.name(), "Handling UI event");

        match event {
            UiEvent::SizeChanged { product, size } => self.change_size(product, size),
            UiEvent::AddToCart { product } => self.add_to_cart(product),
            UiEvent::RemoveItem { id } => self.remove_item(&id),
            UiEvent::CheckoutClicked => self.checkout(),
            UiEvent::ModalButton { action } => self.modal_button(action),
            UiEvent::OverlayClicked { target } => self.overlay_click(target),
        }
    }

    /// Full re-render of the cart area.
    pub(crate) fn render_cart(&mut self) -> WidgetResult<()> {
        let view = CartView::render(&self.cart, &self.config.currency);
        self.surface.render_cart(&view)?;
        Ok(())
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn modal(&self) -> &CheckoutModal {
        &self.modal
    }

    pub fn prices(&self) -> &PriceBinder {
        &self.prices
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
