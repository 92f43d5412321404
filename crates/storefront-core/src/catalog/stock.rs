//! Demo stock status. Every fourth product (by position in the raw catalog,
//! starting with the first) is shown as out of stock.

use std::collections::HashMap;

use crate::products::Product;

/// A product paired with its derived stock flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockedProduct<'a> {
    pub product: &'a Product,
    pub out_of_stock: bool,
}

/// Annotates `products` in order: index `i` is out of stock iff `i % 4 == 0`.
#[must_use]
pub fn annotate_stock(products: &[Product]) -> Vec<StockedProduct<'_>> {
    products
        .iter()
        .enumerate()
        .map(|(index, product)| StockedProduct {
            product,
            out_of_stock: index % 4 == 0,
        })
        .collect()
}

/// Stock flags keyed by product id, built once per raw catalog so filtered or
/// reordered views can look flags up without rescanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockIndex {
    out_of_stock: HashMap<i64, bool>,
}

impl StockIndex {
    #[must_use]
    pub fn build(products: &[Product]) -> Self {
        let out_of_stock = annotate_stock(products)
            .into_iter()
            .map(|s| (s.product.id, s.out_of_stock))
            .collect();
        Self { out_of_stock }
    }

    /// Unknown ids are treated as in stock.
    #[must_use]
    pub fn is_out_of_stock(&self, id: i64) -> bool {
        self.out_of_stock.get(&id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.out_of_stock.contains_key(&id)
    }

    /// Number of products in `view` that are in stock.
    #[must_use]
    pub fn in_stock_count(&self, view: &[&Product]) -> usize {
        view.iter().filter(|p| !self.is_out_of_stock(p.id)).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.out_of_stock.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.out_of_stock.is_empty()
    }
}
