//! # shopcart-core: Pure Business Logic for the Shop Cart Widget
//!
//! This crate is the **heart** of the widget. It contains all cart,
//! pricing and checkout logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shop Cart Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Host UI (browser page, terminal)                   │   │
//! │  │   Size select ──► Add to Cart ──► Cart list ──► Checkout modal  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ UiEvent / HostSurface                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront (app crate)                       │   │
//! │  │        owns CartStore + CheckoutModal + PriceBinder             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopcart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │  money  │ │  cart   │ │ render  │ │  modal  │  │   │
//! │  │   │ format  │ │  types  │ │   ids   │ │ prices  │ │         │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • STRUCTURED VIEWS                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SizeLabel, CartLineItem)
//! - [`money`] - Money type with integer centavos
//! - [`format`] - Currency formatting (`₱1,000.00`)
//! - [`catalog`] - The product list, addressed by position
//! - [`ids`] - Injectable line item id generators
//! - [`cart`] - The cart store
//! - [`render`] - Cart → `CartView`
//! - [`modal`] - Checkout modal state machine and templates
//! - [`price_display`] - Size selection → price text
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{CartStore, CartView, Catalog, CheckoutModal, CurrencyFormat, SizeLabel};
//!
//! let catalog = Catalog::standard();
//! let php = CurrencyFormat::philippine_peso();
//! let mut cart = CartStore::new();
//!
//! cart.add(catalog.get(0)?, SizeLabel::S);
//! cart.add(catalog.get(2)?, SizeLabel::L);
//! assert_eq!(CartView::render(&cart, &php).total_text, "₱2,500.00");
//!
//! let mut modal = CheckoutModal::new();
//! modal.open_checkout(&cart)?;
//! modal.place_order(&mut cart, chrono::Utc::now())?;
//! assert!(cart.is_empty());
//! # Ok::<(), shopcart_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod format;
pub mod ids;
pub mod modal;
pub mod money;
pub mod price_display;
pub mod render;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartStore;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use format::{format_php, CurrencyFormat};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use modal::{
    CheckoutModal, ModalAction, ModalButton, ModalContent, ModalKind, ModalOutcome, ModalState,
    ModalView, OrderSummary, OverlayClick, PlacedOrder,
};
pub use money::Money;
pub use price_display::{PriceBinder, PriceTag};
pub use render::{CartRow, CartView};
pub use types::*;
