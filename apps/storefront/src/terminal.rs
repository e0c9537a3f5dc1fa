//! # Terminal Host
//!
//! A [`HostSurface`] that paints onto any `io::Write`, plus the line parser
//! that turns typed commands into [`UiEvent`]s.
//!
//! ## Commands
//! ```text
//! size <n> <S|M|L|XL>   change the size selector of product n
//! add <n>               add product n in its selected size
//! remove <id>           click ✕ on the cart row with this id
//! checkout              click the checkout button
//! place                 click "Place Order" in the modal
//! close                 click "Close" in the modal
//! backdrop              click outside the modal body
//! inside                click inside the modal body
//! catalog               show products and current prices
//! help                  show this list
//! quit                  leave
//! {"type": ...}         any UiEvent as JSON
//! ```

use std::io::{self, Write};

use shopcart_core::{CartRow, CartView, Catalog, LineItemId, ModalAction, ModalView, OverlayClick, PriceTag, SizeLabel};

use crate::error::{WidgetError, WidgetResult};
use crate::surface::{HostSurface, UiEvent};

pub const HELP: &str = "\
Commands:
  size <n> <S|M|L|XL>   change the size of product n
  add <n>               add product n to the cart
  remove <id>           remove a cart item
  checkout              open checkout
  place                 place the order (in the summary)
  close                 close the modal
  backdrop              click outside the modal
  inside                click inside the modal
  catalog               list products and prices
  help                  show this help
  quit                  exit
  {\"type\": ...}         send a raw JSON event";

// =============================================================================
// Input
// =============================================================================

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Catalog,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

/// Parses one input line.
///
/// ## Example
/// ```rust
/// use shopcart_core::SizeLabel;
/// use storefront::surface::UiEvent;
/// use storefront::terminal::{parse_line, Command};
///
/// assert_eq!(
///     parse_line("size 1 m").unwrap(),
///     Command::Event(UiEvent::SizeChanged { product: 1, size: SizeLabel::M })
/// );
/// ```
pub fn parse_line(line: &str) -> WidgetResult<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }
    if line.starts_with('{') {
        let event = serde_json::from_str(line).map_err(|e| WidgetError::invalid_event(e.to_string()))?;
        return Ok(Command::Event(event));
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let event = match (verb.as_str(), args.as_slice()) {
        ("size", [product, size]) => UiEvent::SizeChanged {
            product: parse_index(product)?,
            size: size.parse::<SizeLabel>()?,
        },
        ("add", [product]) => UiEvent::AddToCart {
            product: parse_index(product)?,
        },
        ("remove", [id]) => UiEvent::RemoveItem {
            id: LineItemId::new(*id),
        },
        ("checkout", []) => UiEvent::CheckoutClicked,
        ("place", []) => UiEvent::ModalButton {
            action: ModalAction::PlaceOrder,
        },
        ("close", []) => UiEvent::ModalButton {
            action: ModalAction::Close,
        },
        ("backdrop", []) => UiEvent::OverlayClicked {
            target: OverlayClick::Backdrop,
        },
        ("inside", []) => UiEvent::OverlayClicked {
            target: OverlayClick::Content,
        },
        ("catalog", []) => return Ok(Command::Catalog),
        ("help", []) => return Ok(Command::Help),
        ("quit", []) | ("exit", []) => return Ok(Command::Quit),
        _ => {
            return Err(WidgetError::invalid_event(format!(
                "unrecognized command '{}' (type 'help')",
                line
            )))
        }
    };
    Ok(Command::Event(event))
}

fn parse_index(raw: &str) -> WidgetResult<usize> {
    raw.parse()
        .map_err(|_| WidgetError::invalid_event(format!("'{}' is not a product number", raw)))
}

fn button_command(action: ModalAction) -> &'static str {
    match action {
        ModalAction::Close => "close",
        ModalAction::PlaceOrder => "place",
    }
}

// =============================================================================
// Output
// =============================================================================

/// Paints the widget as plain text.
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    names: Vec<String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, catalog: &Catalog) -> Self {
        TerminalSurface {
            out,
            names: catalog.iter().map(|(_, p)| p.name.clone()).collect(),
        }
    }

    /// A line outside the widget (help, errors, banners).
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HostSurface for TerminalSurface<W> {
    fn set_price_text(&mut self, tag: &PriceTag) -> io::Result<()> {
        let name = self.names.get(tag.product).map_or("?", String::as_str);
        writeln!(self.out, "  [{}] {} ({}): {}", tag.product, name, tag.size, tag.text)?;
        self.out.flush()
    }

    fn render_cart(&mut self, view: &CartView) -> io::Result<()> {
        writeln!(self.out, "── Cart ──")?;
        for row in &view.rows {
            match row {
                CartRow::Placeholder { text } => writeln!(self.out, "  {}", text)?,
                CartRow::Item { id, label, .. } => writeln!(self.out, "  {}   (remove {})", label, id)?,
            }
        }
        writeln!(self.out, "  Total: {}", view.total_text)?;
        writeln!(
            self.out,
            "  Checkout: {}",
            if view.checkout_enabled { "available" } else { "disabled" }
        )?;
        self.out.flush()
    }

    fn show_overlay(&mut self, view: &ModalView) -> io::Result<()> {
        writeln!(self.out, "╔══ {} ══", view.title)?;
        for line in &view.lines {
            writeln!(self.out, "║ {}", line)?;
        }
        if let Some(total) = &view.total_text {
            writeln!(self.out, "║ {}", total)?;
        }
        let buttons: Vec<String> = view
            .buttons
            .iter()
            .map(|b| format!("[{}: {}]", b.label, button_command(b.action)))
            .collect();
        writeln!(self.out, "║ {}", buttons.join(" "))?;
        writeln!(self.out, "╚══")?;
        self.out.flush()
    }

    fn remove_overlay(&mut self) -> io::Result<()> {
        writeln!(self.out, "(modal closed)")?;
        self.out.flush()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
