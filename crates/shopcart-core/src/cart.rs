//! # Cart Store
//!
//! The ordered list of line items the shopper has picked.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action              Store Call              State Change            │
//! │  ─────────              ──────────              ────────────            │
//! │                                                                         │
//! │  Add to Cart ─────────► add(product, size) ───► items.push(snapshot)    │
//! │                                                                         │
//! │  Click ✕ ─────────────► remove(id) ───────────► items.remove(i) / no-op │
//! │                                                                         │
//! │  Place Order ─────────► clear() ──────────────► items.clear()           │
//! │                                                                         │
//! │  Render ──────────────► items(), total() ─────► (read only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every present id is unique among present items
//! - `total()` is the sum of present prices, nothing else
//! - Insertion order is display order
//!
//! The store is a plain owned value. The widget controller holds it and
//! passes it where needed; there is no global cart.

use crate::ids::{IdGenerator, SequentialIds};
use crate::money::Money;
use crate::types::{CartLineItem, LineItemId, Product, SizeLabel};

/// Fresh draws from the generator before falling back to suffixed ids.
const MAX_ID_DRAWS: usize = 8;

/// In-memory cart.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    ids: Box<dyn IdGenerator>,
}

impl CartStore {
    /// Empty cart with sequential ids.
    pub fn new() -> Self {
        Self::with_ids(Box::new(SequentialIds::new()))
    }

    /// Empty cart with an injected id source.
    pub fn with_ids(ids: Box<dyn IdGenerator>) -> Self {
        CartStore {
            items: Vec::new(),
            ids,
        }
    }

    /// Appends a snapshot of `product` at `size` and returns it.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{CartStore, Catalog, Money, SizeLabel};
    ///
    /// let catalog = Catalog::standard();
    /// let mut cart = CartStore::new();
    ///
    /// let item = cart.add(catalog.get(0).unwrap(), SizeLabel::S);
    /// assert_eq!(item.price, Money::from_pesos(900));
    /// assert_eq!(cart.len(), 1);
    /// ```
    pub fn add(&mut self, product: &Product, size: SizeLabel) -> &CartLineItem {
        let item = CartLineItem::from_product(self.fresh_id(), product, size);
        let slot = self.items.len();
        self.items.push(item);

        // `slot` is the index the push above just filled
        &self.items[slot]
    }

    /// Removes the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &LineItemId) -> bool {
        match self.items.iter().position(|item| &item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of present prices; zero when empty.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Items in display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: &LineItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &LineItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn fresh_id(&mut self) -> LineItemId {
        let mut candidate = self.ids.next_id();
        for _ in 1..MAX_ID_DRAWS {
            if !self.contains(&candidate) {
                return candidate;
            }
            candidate = self.ids.next_id();
        }

        // Generator keeps colliding: disambiguate locally. Terminates because
        // the cart holds finitely many ids.
        let base = candidate;
        let mut suffix = 1u64;
        loop {
            let suffixed = LineItemId::new(format!("{}-{}", base, suffix));
            if !self.contains(&suffixed) {
                return suffixed;
            }
            suffix += 1;
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::UuidIds;
    use std::collections::HashSet;

    /// Always hands out the same id.
    #[derive(Debug)]
    struct StuckIds;

    impl IdGenerator for StuckIds {
        fn next_id(&mut self) -> LineItemId {
            LineItemId::new("same")
        }
    }

    fn ids_of(cart: &CartStore) -> Vec<LineItemId> {
        cart.items().iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_total_follows_adds_and_removes() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();

        let tee = cart.add(catalog.get(0).unwrap(), SizeLabel::S).id.clone();
        cart.add(catalog.get(1).unwrap(), SizeLabel::M);
        assert_eq!(cart.total(), Money::from_pesos(3200));

        assert!(cart.remove(&tee));
        assert_eq!(cart.total(), Money::from_pesos(2300));
    }

    #[test]
    fn test_total_tracks_mixed_add_remove_sequence() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();

        let adds = [
            (0, SizeLabel::S),
            (1, SizeLabel::XL),
            (2, SizeLabel::M),
            (3, SizeLabel::L),
            (4, SizeLabel::L),
            (0, SizeLabel::XL),
            (7, SizeLabel::S),
            (1, SizeLabel::M),
        ];

        let assert_consistent = |cart: &CartStore| {
            let summed: Money = cart.items().iter().map(|i| i.price).sum();
            assert_eq!(cart.total(), summed);

            let unique: HashSet<LineItemId> = ids_of(cart).into_iter().collect();
            assert_eq!(unique.len(), cart.len());
        };

        for (step, (index, size)) in adds.iter().enumerate() {
            cart.add(catalog.get(*index).unwrap(), *size);
            assert_consistent(&cart);

            // Every third step drops the oldest item, every fourth the newest
            if step % 3 == 2 {
                let oldest = cart.items()[0].id.clone();
                assert!(cart.remove(&oldest));
                assert_consistent(&cart);
            }
            if step % 4 == 3 {
                let newest = cart.items()[cart.len() - 1].id.clone();
                assert!(cart.remove(&newest));
                assert!(!cart.remove(&newest));
                assert_consistent(&cart);
            }
        }

        // 8 adds, 4 removes (after steps 2, 3, 5 and 7)
        assert_eq!(cart.len(), 4);
        let expected: Money = cart.items().iter().map(|i| i.price).sum();
        assert_eq!(cart.total(), expected);

        while let Some(item) = cart.items().first() {
            let id = item.id.clone();
            assert!(cart.remove(&id));
            assert_consistent(&cart);
        }
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_returns_the_appended_item() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();
        cart.add(catalog.get(0).unwrap(), SizeLabel::S);

        let returned = cart.add(catalog.get(2).unwrap(), SizeLabel::XL).clone();
        assert_eq!(cart.items().last(), Some(&returned));
        assert_eq!(returned.price, Money::from_pesos(1700));
    }

    #[test]
    fn test_add_appends_exactly_one_with_fresh_id() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();

        for (index, size) in [(0, SizeLabel::S), (0, SizeLabel::S), (3, SizeLabel::XL), (4, SizeLabel::XL)] {
            let before = ids_of(&cart);
            let new_id = cart.add(catalog.get(index).unwrap(), size).id.clone();

            assert_eq!(cart.len(), before.len() + 1);
            assert!(!before.contains(&new_id));
        }
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();

        cart.add(catalog.get(2).unwrap(), SizeLabel::L);
        cart.add(catalog.get(0).unwrap(), SizeLabel::S);

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Urban Joggers", "Classic White Tee"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();
        cart.add(catalog.get(0).unwrap(), SizeLabel::M);

        let before = cart.items().to_vec();
        assert!(!cart.remove(&LineItemId::new("does-not-exist")));
        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_clear_resets_total_and_len() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();
        cart.add(catalog.get(1).unwrap(), SizeLabel::XL);
        cart.add(catalog.get(2).unwrap(), SizeLabel::S);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_price_is_a_snapshot() {
        let mut product = Catalog::standard().get(0).unwrap().clone();
        let mut cart = CartStore::new();
        cart.add(&product, SizeLabel::S);

        product.prices.s = Money::from_pesos(1);
        assert_eq!(cart.total(), Money::from_pesos(900));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::new();

        let first = cart.add(catalog.get(0).unwrap(), SizeLabel::S).id.clone();
        cart.remove(&first);
        let second = cart.add(catalog.get(0).unwrap(), SizeLabel::S).id.clone();

        assert_ne!(first, second);
    }

    #[test]
    fn test_colliding_generator_still_yields_unique_ids() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::with_ids(Box::new(StuckIds));

        for _ in 0..4 {
            cart.add(catalog.get(0).unwrap(), SizeLabel::S);
        }

        let unique: HashSet<LineItemId> = ids_of(&cart).into_iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(cart.contains(&LineItemId::new("same")));
        assert!(cart.contains(&LineItemId::new("same-1")));
    }

    #[test]
    fn test_uuid_strategy() {
        let catalog = Catalog::standard();
        let mut cart = CartStore::with_ids(Box::new(UuidIds));

        let a = cart.add(catalog.get(0).unwrap(), SizeLabel::S).id.clone();
        let b = cart.add(catalog.get(0).unwrap(), SizeLabel::S).id.clone();
        assert_ne!(a, b);

        assert!(cart.remove(&a));
        assert_eq!(ids_of(&cart), vec![b]);
    }
}
