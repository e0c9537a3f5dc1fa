//! # Catalog
//!
//! The static, read-only list of products the widget sells.
//!
//! Products are addressed by their position: the host page lays out one
//! product card per catalog entry, in order, and every event names a card
//! by index. Names are NOT unique (the stock catalog lists the Minimalist
//! Hoodie five times) and are never used for lookup.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, SizeLabel, SizePrices};

/// Ordered, immutable product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The stock apparel catalog.
    ///
    /// ```rust
    /// use shopcart_core::{Catalog, SizeLabel};
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.len(), 8);
    /// assert_eq!(catalog.price_of(0, SizeLabel::S).unwrap().pesos(), 900);
    /// ```
    pub fn standard() -> Self {
        let hoodie = || Product::new("Minimalist Hoodie", SizePrices::from_pesos(1400, 1450, 1500, 1550));

        Catalog::new(vec![
            Product::new("Classic White Tee", SizePrices::from_pesos(900, 950, 1000, 1050)),
            Product::new("Eco Denim Jacket", SizePrices::from_pesos(2200, 2300, 2400, 2500)),
            Product::new("Urban Joggers", SizePrices::from_pesos(1500, 1550, 1600, 1700)),
            hoodie(),
            hoodie(),
            hoodie(),
            hoodie(),
            hoodie(),
        ])
    }

    /// Product at a catalog position.
    pub fn get(&self, index: usize) -> CoreResult<&Product> {
        self.products
            .get(index)
            .ok_or(CoreError::ProductNotFound { index })
    }

    /// Price of the product at `index` in `size`.
    pub fn price_of(&self, index: usize, size: SizeLabel) -> CoreResult<Money> {
        Ok(self.get(index)?.price(size))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Product)> {
        self.products.iter().enumerate()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
