//! Catalog state and its reducer.
//!
//! All shopper-driven state (criteria, sort, wishlist) lives in one
//! [`CatalogState`] and changes only through [`CatalogState::apply`]. Views
//! are derived on demand and never cached.

use std::collections::BTreeSet;

use serde::Serialize;

use super::criteria::{FilterCriteria, PriceRange};
use super::groups::AttributeGroup;
use super::pipeline::apply_criteria;
use super::sort::SortKey;
use super::stock::StockIndex;
use crate::products::Product;

/// A discrete shopper interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    SetSearch(String),
    ToggleCategory(String),
    SetPriceRange(PriceRange),
    ToggleOption {
        group: AttributeGroup,
        option: &'static str,
        included: bool,
    },
    SelectAllOptions(AttributeGroup),
    ClearGroup(AttributeGroup),
    SetSort(SortKey),
    ToggleWishlist(i64),
    /// Restores default criteria and sort. The wishlist is kept.
    ResetFilters,
}

/// One product in a derived view, joined with its stock and wishlist flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewItem {
    #[serde(flatten)]
    pub product: Product,
    pub out_of_stock: bool,
    pub wishlisted: bool,
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub items: Vec<ViewItem>,
    /// Size of the loaded catalog before filtering.
    pub total_count: usize,
    /// Number of in-stock products among `items`.
    pub in_stock_count: usize,
    pub sort: SortKey,
}

impl CatalogView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    categories: Vec<String>,
    stock: StockIndex,
    criteria: FilterCriteria,
    sort: SortKey,
    wishlist: BTreeSet<i64>,
}

impl CatalogState {
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        let stock = StockIndex::build(&products);
        Self {
            products,
            categories,
            stock,
            ..Self::default()
        }
    }

    /// Swaps in a new raw catalog and rebuilds the stock index. Wishlist
    /// entries for ids no longer present are dropped.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.stock = StockIndex::build(&products);
        let stock = &self.stock;
        self.wishlist.retain(|id| stock.contains(*id));
        self.products = products;
    }

    pub fn apply(&mut self, action: CatalogAction) {
        match action {
            CatalogAction::SetSearch(search) => self.criteria.search = search,
            CatalogAction::ToggleCategory(category) => self.criteria.toggle_category(&category),
            CatalogAction::SetPriceRange(range) => self.criteria.price = range,
            CatalogAction::ToggleOption {
                group,
                option,
                included,
            } => self.criteria.attributes.toggle(group, option, included),
            CatalogAction::SelectAllOptions(group) => self.criteria.attributes.select_all(group),
            CatalogAction::ClearGroup(group) => self.criteria.attributes.clear_group(group),
            CatalogAction::SetSort(sort) => self.sort = sort,
            CatalogAction::ToggleWishlist(id) => {
                if !self.wishlist.remove(&id) && self.contains_product(id) {
                    self.wishlist.insert(id);
                }
            }
            CatalogAction::ResetFilters => {
                self.criteria = FilterCriteria::default();
                self.sort = SortKey::default();
            }
        }
    }

    /// View for the state's own criteria and sort.
    #[must_use]
    pub fn view(&self) -> CatalogView {
        self.view_with(&self.criteria, self.sort)
    }

    /// View for caller-supplied criteria, leaving the stored criteria alone.
    /// The stock index and wishlist still come from this state.
    #[must_use]
    pub fn view_with(&self, criteria: &FilterCriteria, sort: SortKey) -> CatalogView {
        let filtered = apply_criteria(&self.products, criteria, sort);
        let in_stock_count = self.stock.in_stock_count(&filtered);
        let items = filtered
            .into_iter()
            .map(|product| ViewItem {
                out_of_stock: self.stock.is_out_of_stock(product.id),
                wishlisted: self.wishlist.contains(&product.id),
                product: product.clone(),
            })
            .collect();

        CatalogView {
            items,
            total_count: self.products.len(),
            in_stock_count,
            sort,
        }
    }

    #[must_use]
    pub fn contains_product(&self, id: i64) -> bool {
        self.stock.contains(id)
    }

    #[must_use]
    pub fn is_wishlisted(&self, id: i64) -> bool {
        self.wishlist.contains(&id)
    }

    /// Wishlisted ids in ascending order.
    #[must_use]
    pub fn wishlist(&self) -> Vec<i64> {
        self.wishlist.iter().copied().collect()
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    #[must_use]
    pub fn stock(&self) -> &StockIndex {
        &self.stock
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
