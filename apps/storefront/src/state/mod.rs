//! # State Module
//!
//! Process-level settings for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  WidgetConfig::from_env()  (read-only after startup)                    │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  Storefront::new(config, catalog)                                       │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐                  │
//! │  │  CartStore   │  │ CheckoutModal│  │ PriceBinder  │                  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘                  │
//! │                                                                         │
//! │  Single-threaded: every event handler takes `&mut Storefront`.          │
//! │  No Mutex, no Arc, no global cart.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{IdStrategy, WidgetConfig};
