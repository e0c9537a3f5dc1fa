//! End-to-end widget flows against a recording host.

use std::io;

use shopcart_core::{
    CartRow, CartView, Catalog, CoreError, LineItemId, ModalAction, ModalKind, ModalView,
    OverlayClick, PriceTag, SizeLabel,
};
use storefront::{HostSurface, Storefront, UiEvent, WidgetConfig, WidgetError};

/// Every call the widget made, in order.
#[derive(Debug, Clone, PartialEq)]
enum Paint {
    Price(PriceTag),
    Cart(CartView),
    Overlay(ModalView),
    RemoveOverlay,
}

#[derive(Debug, Default)]
struct RecordingSurface {
    calls: Vec<Paint>,
}

impl RecordingSurface {
    fn last_cart(&self) -> Option<&CartView> {
        self.calls.iter().rev().find_map(|c| match c {
            Paint::Cart(view) => Some(view),
            _ => None,
        })
    }

    fn last_overlay(&self) -> Option<&ModalView> {
        self.calls.iter().rev().find_map(|c| match c {
            Paint::Overlay(view) => Some(view),
            _ => None,
        })
    }
}

impl HostSurface for RecordingSurface {
    fn set_price_text(&mut self, tag: &PriceTag) -> io::Result<()> {
        self.calls.push(Paint::Price(tag.clone()));
        Ok(())
    }

    fn render_cart(&mut self, view: &CartView) -> io::Result<()> {
        self.calls.push(Paint::Cart(view.clone()));
        Ok(())
    }

    fn show_overlay(&mut self, view: &ModalView) -> io::Result<()> {
        self.calls.push(Paint::Overlay(view.clone()));
        Ok(())
    }

    fn remove_overlay(&mut self) -> io::Result<()> {
        self.calls.push(Paint::RemoveOverlay);
        Ok(())
    }
}

fn mounted() -> Storefront<RecordingSurface> {
    let mut widget = Storefront::new(
        WidgetConfig::default(),
        Catalog::standard(),
        RecordingSurface::default(),
    );
    widget.mount().unwrap();
    widget.surface_mut().calls.clear();
    widget
}

fn item_ids(widget: &Storefront<RecordingSurface>) -> Vec<LineItemId> {
    widget
        .surface()
        .last_cart()
        .map(|view| view.item_ids().into_iter().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn test_mount_paints_every_price_then_empty_cart() {
    let mut widget = Storefront::new(
        WidgetConfig::default(),
        Catalog::standard(),
        RecordingSurface::default(),
    );
    widget.mount().unwrap();

    let calls = &widget.surface().calls;
    assert_eq!(calls.len(), 9);
    assert_eq!(
        calls[0],
        Paint::Price(PriceTag {
            product: 0,
            size: SizeLabel::S,
            text: "₱900.00".to_string(),
        })
    );

    let cart = widget.surface().last_cart().unwrap();
    assert!(cart.is_empty_placeholder());
    assert_eq!(cart.total_text, "₱0.00");
    assert!(!cart.checkout_enabled);
}

#[test]
fn test_full_checkout_flow() {
    let mut widget = mounted();

    widget.handle(UiEvent::AddToCart { product: 0 }).unwrap();
    widget
        .handle(UiEvent::SizeChanged { product: 2, size: SizeLabel::L })
        .unwrap();
    widget.handle(UiEvent::AddToCart { product: 2 }).unwrap();

    let cart = widget.surface().last_cart().unwrap();
    assert_eq!(cart.total_text, "₱2,500.00");
    assert!(cart.checkout_enabled);
    assert_eq!(
        cart.rows[1],
        CartRow::Item {
            id: LineItemId::new("2"),
            label: "Urban Joggers (L) - ₱1,600.00".to_string(),
            price_text: "₱1,600.00".to_string(),
        }
    );

    widget.handle(UiEvent::CheckoutClicked).unwrap();
    let summary = widget.surface().last_overlay().unwrap();
    assert_eq!(summary.kind, ModalKind::OrderSummary);
    assert_eq!(
        summary.lines,
        vec![
            "Classic White Tee (S) - ₱900.00".to_string(),
            "Urban Joggers (L) - ₱1,600.00".to_string(),
        ]
    );
    assert_eq!(summary.total_text.as_deref(), Some("Total: ₱2,500.00"));

    widget.surface_mut().calls.clear();
    widget
        .handle(UiEvent::ModalButton { action: ModalAction::PlaceOrder })
        .unwrap();

    let calls = &widget.surface().calls;
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], Paint::RemoveOverlay);
    match &calls[1] {
        Paint::Cart(view) => {
            assert!(view.is_empty_placeholder());
            assert_eq!(view.total_text, "₱0.00");
        }
        other => panic!("expected cart render, got {:?}", other),
    }
    match &calls[2] {
        Paint::Overlay(view) => {
            assert_eq!(view.kind, ModalKind::Confirmation);
            assert_eq!(view.title, "Thank you for your order!");
        }
        other => panic!("expected confirmation, got {:?}", other),
    }
    assert!(widget.cart().is_empty());

    widget
        .handle(UiEvent::ModalButton { action: ModalAction::Close })
        .unwrap();
    assert!(!widget.modal().is_open());
    assert_eq!(widget.surface().calls.last(), Some(&Paint::RemoveOverlay));
}

#[test]
fn test_empty_checkout_shows_notice() {
    let mut widget = mounted();

    widget.handle(UiEvent::CheckoutClicked).unwrap();

    let notice = widget.surface().last_overlay().unwrap();
    assert_eq!(notice.kind, ModalKind::EmptyNotice);
    assert_eq!(notice.title, "Cart is Empty");
    assert_eq!(notice.buttons.len(), 1);

    let err = widget
        .handle(UiEvent::ModalButton { action: ModalAction::PlaceOrder })
        .unwrap_err();
    assert_eq!(err.code(), "MODAL_STATE");
}

#[test]
fn test_backdrop_closes_content_does_not() {
    let mut widget = mounted();
    widget.handle(UiEvent::AddToCart { product: 1 }).unwrap();
    widget.handle(UiEvent::CheckoutClicked).unwrap();
    widget.surface_mut().calls.clear();

    widget
        .handle(UiEvent::OverlayClicked { target: OverlayClick::Content })
        .unwrap();
    assert!(widget.modal().is_open());
    assert!(widget.surface().calls.is_empty());

    widget
        .handle(UiEvent::OverlayClicked { target: OverlayClick::Backdrop })
        .unwrap();
    assert!(!widget.modal().is_open());
    assert_eq!(widget.surface().calls, vec![Paint::RemoveOverlay]);

    // Cart survives a dismissed summary
    assert_eq!(widget.cart().len(), 1);
}

#[test]
fn test_second_checkout_while_open_is_rejected() {
    let mut widget = mounted();
    widget.handle(UiEvent::CheckoutClicked).unwrap();

    let err = widget.handle(UiEvent::CheckoutClicked).unwrap_err();
    assert!(matches!(err, WidgetError::Core(CoreError::ModalAlreadyOpen)));
}

#[test]
fn test_remove_item_rerenders_and_ignores_stale_ids() {
    let mut widget = mounted();
    widget.handle(UiEvent::AddToCart { product: 0 }).unwrap();
    widget.handle(UiEvent::AddToCart { product: 0 }).unwrap();

    let ids = item_ids(&widget);
    assert_eq!(ids.len(), 2);

    widget
        .handle(UiEvent::RemoveItem { id: ids[0].clone() })
        .unwrap();
    let cart = widget.surface().last_cart().unwrap();
    assert_eq!(cart.item_ids(), vec![&ids[1]]);
    assert_eq!(cart.total_text, "₱900.00");

    widget.surface_mut().calls.clear();
    widget
        .handle(UiEvent::RemoveItem { id: ids[0].clone() })
        .unwrap();
    assert!(widget.surface().calls.is_empty());
    assert_eq!(widget.cart().len(), 1);
}

#[test]
fn test_size_change_rewrites_price_but_not_cart() {
    let mut widget = mounted();
    widget.handle(UiEvent::AddToCart { product: 1 }).unwrap();

    widget
        .handle(UiEvent::SizeChanged { product: 1, size: SizeLabel::XL })
        .unwrap();

    assert_eq!(
        widget.surface().calls.last(),
        Some(&Paint::Price(PriceTag {
            product: 1,
            size: SizeLabel::XL,
            text: "₱2,500.00".to_string(),
        }))
    );
    assert_eq!(widget.cart().total().pesos(), 2200);
}

#[test]
fn test_duplicate_products_keep_separate_selections() {
    let mut widget = mounted();

    widget
        .handle(UiEvent::SizeChanged { product: 3, size: SizeLabel::M })
        .unwrap();
    widget.handle(UiEvent::AddToCart { product: 3 }).unwrap();
    widget.handle(UiEvent::AddToCart { product: 4 }).unwrap();

    let totals: Vec<i64> = widget.cart().items().iter().map(|i| i.price.pesos()).collect();
    assert_eq!(totals, vec![1450, 1400]);
}

#[test]
fn test_unknown_product_is_not_found() {
    let mut widget = mounted();

    let err = widget.handle(UiEvent::AddToCart { product: 42 }).unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert!(widget.surface().calls.is_empty());
}

#[test]
fn test_json_events_drive_the_widget() {
    let mut widget = mounted();

    for line in [
        r#"{"type":"size_changed","product":0,"size":"XL"}"#,
        r#"{"type":"add_to_cart","product":0}"#,
        r#"{"type":"checkout_clicked"}"#,
    ] {
        let event: UiEvent = serde_json::from_str(line).unwrap();
        widget.handle(event).unwrap();
    }

    let summary = widget.surface().last_overlay().unwrap();
    assert_eq!(summary.total_text.as_deref(), Some("Total: ₱1,050.00"));
}
