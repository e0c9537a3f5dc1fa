//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  └── CoreError        - Guarded edges of the cart/modal machines       │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── WidgetError      - What the host sees (core + I/O + bad events)   │
//! │                                                                         │
//! │  Flow: CoreError → WidgetError → Host                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! The cart itself never fails. Removing an id that is not in the cart is a
//! no-op, and checking out an empty cart opens the empty-cart notice. The
//! variants below only cover inputs the host should never produce.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product at this catalog position.
    ///
    /// ## When This Occurs
    /// - The host sends an event for a product slot the catalog doesn't have
    #[error("Product not found at catalog index {index}")]
    ProductNotFound { index: usize },

    /// A size label outside {S, M, L, XL}.
    #[error("Unknown size '{0}': expected one of S, M, L, XL")]
    UnknownSize(String),

    /// Checkout was clicked while an overlay is already showing.
    ///
    /// Every open path starts from `Closed`; stacking overlays is refused.
    #[error("Checkout modal is already open")]
    ModalAlreadyOpen,

    /// A modal button was used in a state that doesn't offer it.
    ///
    /// ## Example
    /// ```text
    /// Open(Confirmation) ── PlaceOrder ──► InvalidModalAction
    /// ```
    #[error("Modal action {action} is not available while the modal is {state}")]
    InvalidModalAction {
        action: &'static str,
        state: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
