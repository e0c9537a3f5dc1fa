//! # Widget Error Type
//!
//! Unified error type for event handlers and the terminal host.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Host event ──► parse ──► InvalidEvent("remove needs an item id")       │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │              command ──► CoreError::ProductNotFound { index: 9 }        │
//! │                   │              │                                      │
//! │                   │              └──► WidgetError::Core(..)             │
//! │                   ▼                                                     │
//! │              surface ──► io::Error ──► WidgetError::Io(..)              │
//! │                                                                         │
//! │  Every variant carries a machine-readable `code()` for the host.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopcart_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// Guarded edge of the cart or modal machines.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The host surface could not be written.
    #[error("Host surface I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Host input that doesn't describe an event.
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

impl WidgetError {
    pub fn invalid_event(message: impl Into<String>) -> Self {
        WidgetError::InvalidEvent(message.into())
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            WidgetError::Core(CoreError::ProductNotFound { .. }) => "NOT_FOUND",
            WidgetError::Core(CoreError::UnknownSize(_)) => "VALIDATION_ERROR",
            WidgetError::Core(CoreError::ModalAlreadyOpen)
            | WidgetError::Core(CoreError::InvalidModalAction { .. }) => "MODAL_STATE",
            WidgetError::Io(_) => "SURFACE_ERROR",
            WidgetError::InvalidEvent(_) => "INVALID_EVENT",
        }
    }
}

pub type WidgetResult<T> = Result<T, WidgetError>;
