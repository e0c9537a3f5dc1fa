//! # Commands Module
//!
//! Event handlers behind [`Storefront::handle`](crate::widget::Storefront::handle).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here
//! ├── product.rs   ◄─── Size selector changes (price display)
//! ├── cart.rs      ◄─── Add to cart, remove from cart
//! └── checkout.rs  ◄─── Checkout button, modal buttons, backdrop clicks
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host                                                                   │
//! │  ────                                                                   │
//! │  { "type": "add_to_cart", "product": 2 }                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Storefront::handle(UiEvent::AddToCart { product: 2 })                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  impl Storefront { fn add_to_cart(&mut self, product) }  ◄── cart.rs    │
//! │    1. read selected size (PriceBinder)                                  │
//! │    2. CartStore::add (shopcart-core)                                    │
//! │    3. re-render ──► HostSurface::render_cart                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each file adds an `impl<S: HostSurface> Storefront<S>` block; handlers
//! only touch the state they need.

pub mod cart;
pub mod checkout;
pub mod product;
