//! # Storefront
//!
//! The shopping-cart widget wired to a host, plus a terminal host to drive it.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (logging setup & run loop)
//! ├── widget.rs       ◄─── Storefront: owns state, dispatches UiEvents
//! ├── surface.rs      ◄─── HostSurface trait + UiEvent
//! ├── terminal.rs     ◄─── Text host: stdout painter + stdin command parser
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── WidgetConfig (SHOP_* env vars)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Size selector
//! │   ├── cart.rs     ◄─── Add / remove
//! │   └── checkout.rs ◄─── Checkout modal
//! └── error.rs        ◄─── WidgetError for handlers
//! ```
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host (terminal, tests, anything implementing HostSurface)              │
//! │        │ UiEvent                              ▲ PriceTag / CartView /   │
//! │        ▼                                      │ ModalView               │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │  Storefront (this crate)                                         │   │
//! │  │  • logs every event                                              │   │
//! │  │  • maps core errors to WidgetError codes                         │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  shopcart-core: Catalog, CartStore, CheckoutModal, PriceBinder (no I/O) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod surface;
pub mod terminal;
pub mod widget;

use std::io::{self, BufRead};

use shopcart_core::Catalog;
use tracing::{info, warn, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use error::{WidgetError, WidgetResult};
pub use state::{IdStrategy, WidgetConfig};
pub use surface::{HostSurface, UiEvent};
pub use terminal::{parse_line, Command, TerminalSurface};
pub use widget::Storefront;

/// Runs the storefront in the terminal until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ───► stderr, RUST_LOG overrides the default      │
/// │  2. Load Configuration ───► WidgetConfig::from_env (SHOP_*)             │
/// │  3. Build Widget ─────────► standard catalog, stdout surface            │
/// │  4. Mount ────────────────► all prices + empty cart                     │
/// │  5. Event Loop ───────────► one command per stdin line                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// A bad command is reported and the loop continues; only I/O failures on
/// stdin or stdout end the run with an error.
pub fn run() -> WidgetResult<()> {
    init_tracing();

    let config = WidgetConfig::from_env();
    info!(
        store = %config.store_name,
        id_strategy = ?config.id_strategy,
        "Starting storefront"
    );

    let catalog = Catalog::standard();
    let surface = TerminalSurface::new(io::stdout(), &catalog);
    let mut widget = Storefront::new(config, catalog, surface);

    let banner = format!("=== {} ===", widget.config().store_name);
    widget.surface_mut().notice(&banner)?;
    widget.mount()?;
    widget.surface_mut().notice(terminal::HELP)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;

        let outcome = match parse_line(&line) {
            Ok(Command::Event(event)) => widget.handle(event),
            Ok(Command::Catalog) => widget.show_prices(),
            Ok(Command::Help) => widget.surface_mut().notice(terminal::HELP).map_err(WidgetError::from),
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => Ok(()),
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            if let WidgetError::Io(_) = e {
                return Err(e);
            }
            warn!(code = e.code(), error = %e, "Command rejected");
            widget
                .surface_mut()
                .notice(&format!("error [{}]: {}", e.code(), e))?;
        }
    }

    info!(items_in_cart = widget.cart().len(), "Storefront closed");
    Ok(())
}

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug,shopcart_core=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the painted widget.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Trace this crate only
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    log_subscriber(filter).init();
}

/// The stderr subscriber, gated only by `filter`.
fn log_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_filter_directives_are_honored() {
        let subscriber = log_subscriber(EnvFilter::new("error"));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::ERROR));
            assert!(!tracing::enabled!(Level::WARN));
            assert!(!tracing::enabled!(Level::DEBUG));
        });
    }

    #[test]
    fn test_default_filter_levels() {
        let subscriber = log_subscriber(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "storefront::commands::cart", Level::DEBUG));
            assert!(!tracing::enabled!(target: "storefront", Level::TRACE));
            assert!(tracing::enabled!(target: "some_dependency", Level::INFO));
            assert!(!tracing::enabled!(target: "some_dependency", Level::DEBUG));
        });
    }
}
