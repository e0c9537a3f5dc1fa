//! # Storefront Entry Point
//!
//! Runs the cart widget against the terminal host.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr)
//! 2. Load configuration from `SHOP_*` environment variables
//! 3. Mount the widget on stdout
//! 4. Read one command per line from stdin
//!
//! See [`storefront::run`].

fn main() {
    // The actual setup is in lib.rs for testability
    if let Err(e) = storefront::run() {
        eprintln!("storefront: {} [{}]", e, e.code());
        std::process::exit(1);
    }
}
